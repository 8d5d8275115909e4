use crate::{
    infra::secrets::{redact_text, REDACTED},
    transport::{contracts::Transport, error::TransportError},
};

/// Placeholder transport that records each chunk as a tracing event.
#[derive(Debug, Clone, Default)]
pub struct LogTransport {
    sent: usize,
    concealed: bool,
}

impl LogTransport {
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn sent(&self) -> usize {
        self.sent
    }

    fn loggable(&self, chunk: &str) -> String {
        if self.concealed {
            REDACTED.to_owned()
        } else {
            redact_text(chunk)
        }
    }
}

impl Transport for LogTransport {
    fn send(&mut self, chunk: &str) -> Result<(), TransportError> {
        self.sent += 1;
        let content = self.loggable(chunk);

        tracing::info!(
            seq = self.sent,
            chars = chunk.chars().count(),
            content = ?content,
            "message sent"
        );
        Ok(())
    }

    fn conceal(&mut self, concealed: bool) {
        self.concealed = concealed;
    }
}
