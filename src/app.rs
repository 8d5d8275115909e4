use std::io;

use anyhow::{Context, Result};

use crate::{
    cli::{
        ApiKeyAction, Cli, Command, FavoritesAction, GraphicsAction, RememberArgs, Toggle,
        TransportKind,
    },
    domain::{self, graphics_mode::GraphicsMode},
    infra,
    transport::{self, log::LogTransport, writer::WriterTransport, Transport},
    ui::{
        self,
        prompt::{password_prompt, SecretPrompt, StdPrompt},
        render,
    },
    usecases::{
        self,
        bootstrap::{self, SettingsBackend},
        context::AppContext,
        dispatch::DispatchReport,
        favorites, preferences,
        session::{self, RememberChoice},
    },
};

pub fn run(cli: Cli) -> Result<()> {
    let backend = if cli.ephemeral {
        SettingsBackend::Ephemeral
    } else {
        SettingsBackend::File
    };
    let mut context = bootstrap::bootstrap(cli.config.as_deref(), backend)?;

    tracing::debug!(
        ui = ui::module_name(),
        domain = domain::module_name(),
        transport = transport::module_name(),
        usecases = usecases::module_name(),
        infra = infra::module_name(),
        "module boundaries loaded"
    );

    let mut transport = build_transport(cli.transport);
    let mut prompt = StdPrompt;

    let output = execute(&mut context, transport.as_mut(), &mut prompt, cli.command)?;
    for line in output.lines {
        println!("{line}");
    }
    for warning in output.warnings {
        eprintln!("{warning}");
    }

    Ok(())
}

fn build_transport(kind: TransportKind) -> Box<dyn Transport> {
    match kind {
        TransportKind::Log => Box::new(LogTransport::default()),
        TransportKind::Stdout => Box::new(WriterTransport::new(io::stdout())),
    }
}

/// What a command has to tell the user. Warnings go to stderr so they never
/// mix with chunks written by the stdout transport.
#[derive(Debug, Default, PartialEq, Eq)]
struct CommandOutput {
    lines: Vec<String>,
    warnings: Vec<String>,
}

impl CommandOutput {
    fn lines(lines: Vec<String>) -> Self {
        Self {
            lines,
            warnings: Vec::new(),
        }
    }

    fn delivery(report: &DispatchReport) -> Self {
        Self {
            lines: Vec::new(),
            warnings: render::delivery_warning(report).into_iter().collect(),
        }
    }
}

/// Runs one command and returns what to show the user.
fn execute(
    context: &mut AppContext,
    transport: &mut dyn Transport,
    prompt: &mut dyn SecretPrompt,
    command: Command,
) -> Result<CommandOutput> {
    let settings = context.settings.as_mut();
    let dispatcher = &context.dispatcher;

    let output = match command {
        Command::Send { line } => {
            let report = session::send_line(settings, dispatcher, transport, &line)?;
            CommandOutput::delivery(&report)
        }
        Command::Liveness => {
            let outcomes = dispatcher.send_liveness(transport);
            CommandOutput::delivery(&DispatchReport {
                liveness: outcomes,
                payload: Vec::new(),
            })
        }
        Command::Username { name, remember } => {
            let report = session::send_username(
                settings,
                dispatcher,
                transport,
                name.as_deref(),
                remember_choice(remember),
            )?;
            CommandOutput::delivery(&report)
        }
        Command::Password { remember } => {
            let has_remembered = session::remembered_password(settings)?.is_some();
            let password = prompt
                .prompt_secret(password_prompt(has_remembered))
                .context("failed to read password")?;
            let report = session::send_password(
                settings,
                dispatcher,
                transport,
                password.as_deref(),
                remember_choice(remember),
            )?;
            CommandOutput::delivery(&report)
        }
        Command::Teleconference => {
            let report = session::join_teleconference(settings, dispatcher, transport)?;
            CommandOutput::delivery(&report)
        }
        Command::MudMode { state } => {
            if let Some(state) = state {
                preferences::set_mud_mode(settings, state == Toggle::On)?;
            }
            CommandOutput::lines(vec![render::toggle_line(
                "Mud mode",
                preferences::mud_mode(settings)?,
            )])
        }
        Command::Graphics { action } => {
            let mode = match action {
                None => preferences::graphics_mode(settings)?,
                Some(GraphicsAction::Toggle) => preferences::toggle_graphics_mode(settings)?,
                Some(GraphicsAction::Ansi) => {
                    preferences::set_graphics_mode(settings, GraphicsMode::Ansi)?
                }
                Some(GraphicsAction::Ripscript) => {
                    preferences::set_graphics_mode(settings, GraphicsMode::RipScript)?
                }
            };
            CommandOutput::lines(vec![format!("Graphics: {}", mode.description())])
        }
        Command::Favorites { action } => CommandOutput::lines(favorites_command(settings, action)?),
        Command::ApiKey { action } => {
            match action {
                None => {}
                Some(ApiKeyAction::Set { key }) => preferences::set_api_key(settings, &key)?,
                Some(ApiKeyAction::Clear) => preferences::clear_api_key(settings)?,
            }
            CommandOutput::lines(vec![render::api_key_line(
                preferences::api_key(settings)?.as_deref(),
            )])
        }
    };

    Ok(output)
}

fn favorites_command(
    settings: &mut dyn infra::contracts::SettingsStore,
    action: Option<FavoritesAction>,
) -> Result<Vec<String>> {
    let lines = match action.unwrap_or(FavoritesAction::List) {
        FavoritesAction::List => render::favorites_lines(&favorites::load_favorites(settings)?),
        FavoritesAction::Add { address } => {
            if favorites::add_favorite(settings, &address)? {
                render::favorites_lines(&favorites::load_favorites(settings)?)
            } else {
                vec!["Address is empty; nothing added.".to_owned()]
            }
        }
        FavoritesAction::Remove { index } => match favorites::remove_favorite(settings, index)? {
            Some(address) => vec![format!("Removed {address}")],
            None => vec![format!("No favorite at index {index}")],
        },
        FavoritesAction::Select { index } => match favorites::select_favorite(settings, index)? {
            Some(address) => vec![address],
            None => vec![format!("No favorite at index {index}")],
        },
    };

    Ok(lines)
}

fn remember_choice(args: RememberArgs) -> RememberChoice {
    match (args.remember, args.forget) {
        (true, _) => RememberChoice::Remember,
        (false, true) => RememberChoice::Forget,
        (false, false) => RememberChoice::Keep,
    }
}
