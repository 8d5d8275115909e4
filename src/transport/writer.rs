use std::io::Write;

use crate::transport::{contracts::Transport, error::TransportError};

/// Writes raw chunk bytes to any `io::Write`, flushing after each chunk.
#[derive(Debug)]
pub struct WriterTransport<W: Write> {
    writer: Option<W>,
}

impl<W: Write> WriterTransport<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Some(writer),
        }
    }

    /// Flushes and releases the writer. Later sends fail with `Closed`.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn close(&mut self) -> Result<Option<W>, TransportError> {
        match self.writer.take() {
            Some(mut writer) => {
                writer.flush()?;
                Ok(Some(writer))
            }
            None => Ok(None),
        }
    }
}

impl<W: Write> Transport for WriterTransport<W> {
    fn send(&mut self, chunk: &str) -> Result<(), TransportError> {
        let writer = self.writer.as_mut().ok_or(TransportError::Closed)?;
        writer.write_all(chunk.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}
