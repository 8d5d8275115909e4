use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("transport write failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("transport is closed")]
    Closed,
}

impl TransportError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io(_) => "TRANSPORT_IO",
            Self::Closed => "TRANSPORT_CLOSED",
        }
    }
}
