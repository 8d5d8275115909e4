use crate::transport::error::TransportError;

/// Size-constrained sink for outbound chunks.
pub trait Transport {
    /// Sends one chunk. Delivery guarantees are up to the implementation.
    fn send(&mut self, chunk: &str) -> Result<(), TransportError>;

    /// Marks subsequent chunks as secret until called again with `false`.
    /// Transports that record or log contents must not expose them while set.
    fn conceal(&mut self, _concealed: bool) {}
}
