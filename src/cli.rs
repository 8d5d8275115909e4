use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "bbsterm", about = "Terminal front-end for BBS sessions")]
pub struct Cli {
    /// Path to config file (default: ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Where outbound chunks go
    #[arg(short, long, global = true, value_enum, default_value_t = TransportKind::Log)]
    pub transport: TransportKind,

    /// Keep settings in memory for this run only
    #[arg(long, global = true)]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TransportKind {
    /// Log each chunk as a tracing event
    Log,
    /// Write raw chunks to stdout
    Stdout,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Send a chat line (prefixed in mud mode)
    Send {
        /// Text to send
        line: String,
    },
    /// Send only the liveness sequence
    Liveness,
    /// Send the username, optionally remembering it
    Username {
        /// Username to send; falls back to the remembered one
        name: Option<String>,
        #[command(flatten)]
        remember: RememberArgs,
    },
    /// Prompt for the password and send it
    Password {
        #[command(flatten)]
        remember: RememberArgs,
    },
    /// Join the teleconference
    Teleconference,
    /// Show or set mud mode
    MudMode {
        #[arg(value_enum)]
        state: Option<Toggle>,
    },
    /// Show, set or toggle the graphics mode
    Graphics {
        #[arg(value_enum)]
        action: Option<GraphicsAction>,
    },
    /// Manage favorite host addresses
    Favorites {
        #[command(subcommand)]
        action: Option<FavoritesAction>,
    },
    /// Show, set or clear the Google Places API key
    ApiKey {
        #[command(subcommand)]
        action: Option<ApiKeyAction>,
    },
}

#[derive(Debug, Clone, Copy, Default, clap::Args)]
pub struct RememberArgs {
    /// Remember the value for later runs
    #[arg(long, conflicts_with = "forget")]
    pub remember: bool,
    /// Stop remembering and clear the stored value
    #[arg(long)]
    pub forget: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GraphicsAction {
    Ansi,
    Ripscript,
    Toggle,
}

#[derive(Debug, Clone, Subcommand)]
pub enum FavoritesAction {
    /// List saved addresses with their index
    List,
    /// Add an address
    Add { address: String },
    /// Remove the address at INDEX
    Remove { index: usize },
    /// Print the address at INDEX
    Select { index: usize },
}

#[derive(Debug, Clone, Subcommand)]
pub enum ApiKeyAction {
    /// Store a new key
    Set { key: String },
    /// Remove the stored key
    Clear,
}
