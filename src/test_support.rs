use std::{
    collections::HashSet,
    sync::{Mutex, MutexGuard},
};

use crate::transport::{Transport, TransportError};

static ENV_LOCK: Mutex<()> = Mutex::new(());

pub fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().expect("env lock should not be poisoned")
}

/// Captures every chunk handed to it, optionally failing selected sends.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    pub sent: Vec<String>,
    pub concealed_sends: Vec<bool>,
    fail_at: HashSet<usize>,
    concealed: bool,
}

impl RecordingTransport {
    /// Fails the sends with these zero-based positions. The chunk is still
    /// recorded, so ordering can be asserted.
    pub fn failing_at(positions: &[usize]) -> Self {
        Self {
            fail_at: positions.iter().copied().collect(),
            ..Self::default()
        }
    }

    pub fn joined(&self) -> String {
        self.sent.concat()
    }
}

impl Transport for RecordingTransport {
    fn send(&mut self, chunk: &str) -> Result<(), TransportError> {
        let position = self.sent.len();
        self.sent.push(chunk.to_owned());
        self.concealed_sends.push(self.concealed);

        if self.fail_at.contains(&position) {
            return Err(TransportError::Closed);
        }

        Ok(())
    }

    fn conceal(&mut self, concealed: bool) {
        self.concealed = concealed;
    }
}
