//! Use case for dispatching an outbound line to a transport.
//!
//! A dispatch is two independent cycles run back to back: the liveness
//! sequence on its own, then the prepared payload. Each cycle chunks its text
//! to the configured bound and hands every chunk to the transport exactly
//! once, in order. Transport failures never stop later chunks.

use crate::{
    domain::outbound::{chunk_line, prepare_line, LineMode, LIVENESS_SEQUENCE},
    infra::config::DispatchConfig,
    transport::{Transport, TransportError},
};

const DISPATCH_CHUNK_FAILED: &str = "DISPATCH_CHUNK_FAILED";

/// Result of handing a single chunk to the transport.
#[cfg_attr(not(test), allow(dead_code))]
#[derive(Debug)]
pub struct ChunkOutcome {
    /// Zero-based position of the chunk within its cycle.
    pub index: usize,
    /// Length of the chunk in characters.
    pub chars: usize,
    pub result: Result<(), TransportError>,
}

impl ChunkOutcome {
    pub fn is_delivered(&self) -> bool {
        self.result.is_ok()
    }
}

/// Per-chunk transport results of one `dispatch` call.
///
/// Callers that treat sending as fire-and-forget can drop it.
#[derive(Debug, Default)]
pub struct DispatchReport {
    pub liveness: Vec<ChunkOutcome>,
    pub payload: Vec<ChunkOutcome>,
}

impl DispatchReport {
    pub fn all_delivered(&self) -> bool {
        self.outcomes().all(ChunkOutcome::is_delivered)
    }

    pub fn failed_chunks(&self) -> usize {
        self.outcomes().filter(|outcome| !outcome.is_delivered()).count()
    }

    pub fn payload_chunks(&self) -> usize {
        self.payload.len()
    }

    fn outcomes(&self) -> impl Iterator<Item = &ChunkOutcome> {
        self.liveness.iter().chain(self.payload.iter())
    }
}

/// Prepares, chunks and emits outbound lines.
#[derive(Debug, Clone)]
pub struct OutboundDispatcher {
    config: DispatchConfig,
}

impl OutboundDispatcher {
    pub fn new(config: DispatchConfig) -> Self {
        Self { config }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Returns the line exactly as it will be chunked.
    pub fn prepare(&self, raw: &str, mode: LineMode) -> String {
        prepare_line(
            raw,
            mode,
            &self.config.mode_prefix,
            self.config.terminator_policy,
        )
    }

    /// Sends the liveness sequence alone: no prefix, no extra terminator.
    /// The sequence always goes out as one chunk, whatever the bound.
    pub fn send_liveness(&self, transport: &mut dyn Transport) -> Vec<ChunkOutcome> {
        self.emit(transport, vec![LIVENESS_SEQUENCE], "liveness")
    }

    /// Prepares `raw` and sends its chunks without a liveness cycle.
    pub fn send_payload(
        &self,
        transport: &mut dyn Transport,
        raw: &str,
        mode: LineMode,
    ) -> Vec<ChunkOutcome> {
        let prepared = self.prepare(raw, mode);
        let chunks = chunk_line(&prepared, self.config.chunk_bound);
        self.emit(transport, chunks, "payload")
    }

    /// Sends the liveness sequence, then the prepared payload.
    pub fn dispatch(
        &self,
        transport: &mut dyn Transport,
        raw: &str,
        mode: LineMode,
    ) -> DispatchReport {
        let liveness = self.send_liveness(transport);
        let payload = self.send_payload(transport, raw, mode);

        let report = DispatchReport { liveness, payload };
        tracing::debug!(
            mode = mode.as_label(),
            payload_chunks = report.payload_chunks(),
            failed_chunks = report.failed_chunks(),
            "outbound line dispatched"
        );

        report
    }

    fn emit(
        &self,
        transport: &mut dyn Transport,
        chunks: Vec<&str>,
        cycle: &'static str,
    ) -> Vec<ChunkOutcome> {
        chunks
            .into_iter()
            .enumerate()
            .map(|(index, chunk)| {
                let result = transport.send(chunk);
                if let Err(error) = &result {
                    tracing::warn!(
                        code = DISPATCH_CHUNK_FAILED,
                        transport_code = error.code(),
                        cycle,
                        index,
                        error = %error,
                        "transport rejected chunk"
                    );
                }

                ChunkOutcome {
                    index,
                    chars: chunk.chars().count(),
                    result,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use super::*;
    use crate::{domain::outbound::TerminatorPolicy, test_support::RecordingTransport};

    fn dispatcher(bound: usize) -> OutboundDispatcher {
        OutboundDispatcher::new(DispatchConfig {
            chunk_bound: NonZeroUsize::new(bound).expect("bound should be non-zero"),
            ..DispatchConfig::default()
        })
    }

    #[test]
    fn short_plain_line_is_one_chunk_after_liveness() {
        let mut transport = RecordingTransport::default();

        let report = dispatcher(250).dispatch(&mut transport, "hello", LineMode::Plain);

        assert_eq!(transport.sent, vec!["\r\n", "hello\r\n"]);
        assert_eq!(report.liveness.len(), 1);
        assert_eq!(report.payload_chunks(), 1);
        assert!(report.all_delivered());
    }

    #[test]
    fn payload_split_keeps_order_and_content() {
        let mut transport = RecordingTransport::default();

        let report = dispatcher(5).dispatch(&mut transport, "abcdefgh", LineMode::Plain);

        assert_eq!(transport.sent[0], "\r\n");
        assert_eq!(transport.sent[1..].concat(), "abcdefgh\r\n");
        assert_eq!(transport.sent[1..], ["abcde", "fgh\r\n"]);
        assert_eq!(
            report
                .payload
                .iter()
                .map(|outcome| outcome.chars)
                .collect::<Vec<_>>(),
            vec![5, 5]
        );
    }

    #[test]
    fn mud_mode_prefixes_payload_only() {
        let mut transport = RecordingTransport::default();

        dispatcher(250).dispatch(&mut transport, "look", LineMode::Mud);

        assert_eq!(transport.sent, vec!["\r\n", "Gos look\r\n"]);
    }

    #[test]
    fn every_dispatch_sends_exactly_one_liveness_cycle() {
        let mut transport = RecordingTransport::default();
        let dispatcher = dispatcher(250);

        dispatcher.dispatch(&mut transport, "one", LineMode::Plain);
        dispatcher.dispatch(&mut transport, "two", LineMode::Plain);

        assert_eq!(transport.sent, vec!["\r\n", "one\r\n", "\r\n", "two\r\n"]);
    }

    #[test]
    fn send_liveness_alone_emits_single_sequence() {
        let mut transport = RecordingTransport::default();

        let outcomes = dispatcher(250).send_liveness(&mut transport);

        assert_eq!(outcomes.len(), 1);
        assert_eq!(transport.sent, vec!["\r\n"]);
    }

    #[test]
    fn liveness_is_never_split_by_a_tiny_bound() {
        let mut transport = RecordingTransport::default();

        let report = dispatcher(1).dispatch(&mut transport, "a", LineMode::Plain);

        assert_eq!(report.liveness.len(), 1);
        assert_eq!(report.liveness[0].chars, 2);
        assert_eq!(transport.sent, vec!["\r\n", "a", "\r", "\n"]);
    }

    #[test]
    fn send_payload_skips_liveness() {
        let mut transport = RecordingTransport::default();

        dispatcher(250).send_payload(&mut transport, "who", LineMode::Plain);

        assert_eq!(transport.sent, vec!["who\r\n"]);
    }

    #[test]
    fn empty_line_still_sends_terminator() {
        let mut transport = RecordingTransport::default();

        let report = dispatcher(250).dispatch(&mut transport, "", LineMode::Plain);

        assert_eq!(transport.sent, vec!["\r\n", "\r\n"]);
        assert_eq!(report.payload_chunks(), 1);
    }

    #[test]
    fn pre_terminated_line_is_not_doubled_by_default() {
        let mut transport = RecordingTransport::default();

        dispatcher(250).dispatch(&mut transport, "sysop\r\n", LineMode::Plain);

        assert_eq!(transport.sent, vec!["\r\n", "sysop\r\n"]);
    }

    #[test]
    fn always_policy_double_terminates() {
        let mut transport = RecordingTransport::default();
        let dispatcher = OutboundDispatcher::new(DispatchConfig {
            terminator_policy: TerminatorPolicy::Always,
            ..DispatchConfig::default()
        });

        dispatcher.dispatch(&mut transport, "sysop\r\n", LineMode::Plain);

        assert_eq!(transport.sent, vec!["\r\n", "sysop\r\n\r\n"]);
    }

    #[test]
    fn failed_chunk_does_not_stop_later_chunks() {
        let mut transport = RecordingTransport::failing_at(&[1]);

        let report = dispatcher(3).dispatch(&mut transport, "abcdef", LineMode::Plain);

        assert_eq!(transport.sent, vec!["\r\n", "abc", "def", "\r\n"]);
        assert_eq!(report.failed_chunks(), 1);
        assert!(!report.payload[0].is_delivered());
        assert!(report.payload[1].is_delivered());
        assert!(!report.all_delivered());
    }

    #[test]
    fn custom_prefix_is_used_in_mud_mode() {
        let dispatcher = OutboundDispatcher::new(DispatchConfig {
            mode_prefix: "Say".to_owned(),
            ..DispatchConfig::default()
        });

        assert_eq!(dispatcher.prepare("hi", LineMode::Mud), "Say hi\r\n");
    }
}
