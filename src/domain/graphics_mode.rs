/// Terminal graphics mode shown to the user. Purely cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GraphicsMode {
    #[default]
    Ansi,
    RipScript,
}

impl GraphicsMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ansi => Self::RipScript,
            Self::RipScript => Self::Ansi,
        }
    }

    pub fn as_label(self) -> &'static str {
        match self {
            Self::Ansi => "ansi",
            Self::RipScript => "ripscript",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Ansi => "ANSI terminal emulation mode",
            Self::RipScript => "RIPscript graphics mode",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "ansi" => Some(Self::Ansi),
            "ripscript" => Some(Self::RipScript),
            _ => None,
        }
    }
}
