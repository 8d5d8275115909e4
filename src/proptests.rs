//! Property-based tests for outbound chunking and dispatch.

use std::num::NonZeroUsize;

use proptest::prelude::*;

use crate::{
    domain::outbound::{chunk_line, prepare_line, LineMode, TerminatorPolicy, LINE_TERMINATOR},
    infra::config::DispatchConfig,
    test_support::RecordingTransport,
    usecases::dispatch::OutboundDispatcher,
};

fn bound(value: usize) -> NonZeroUsize {
    NonZeroUsize::new(value).expect("strategy yields non-zero bounds")
}

proptest! {
    /// Chunks concatenate back to the input.
    #[test]
    fn chunks_reassemble_to_input(line in ".{0,600}", n in 1usize..300) {
        let chunks = chunk_line(&line, bound(n));
        prop_assert_eq!(chunks.concat(), line);
    }

    /// Only the last chunk may be shorter than the bound.
    #[test]
    fn only_last_chunk_is_short(line in ".{1,600}", n in 1usize..300) {
        let chunks = chunk_line(&line, bound(n));
        let (last, full) = chunks.split_last().expect("non-empty input yields chunks");

        prop_assert!(full.iter().all(|chunk| chunk.chars().count() == n));
        prop_assert!((1..=n).contains(&last.chars().count()));
    }

    /// Lines of exactly k * n characters split into k full chunks.
    #[test]
    fn exact_multiples_split_evenly(c in any::<char>(), n in 1usize..100, k in 1usize..6) {
        let line: String = std::iter::repeat_n(c, n * k).collect();
        let chunks = chunk_line(&line, bound(n));

        prop_assert_eq!(chunks.len(), k);
        prop_assert!(chunks.iter().all(|chunk| chunk.chars().count() == n));
    }

    /// Mud mode adds exactly the prefix and one space; plain mode adds none.
    #[test]
    fn prefix_appears_only_in_mud_mode(raw in "[a-z ]{0,80}") {
        let mud = prepare_line(&raw, LineMode::Mud, "Gos", TerminatorPolicy::Idempotent);
        let plain = prepare_line(&raw, LineMode::Plain, "Gos", TerminatorPolicy::Idempotent);

        prop_assert_eq!(&mud[.."Gos ".len()], "Gos ");
        prop_assert_eq!(&mud["Gos ".len()..], plain.as_str());
        prop_assert!(plain.ends_with(LINE_TERMINATOR));
    }

    /// A dispatch emits one liveness sequence first, then the prepared line.
    #[test]
    fn dispatch_emits_liveness_then_prepared_line(raw in ".{0,400}", n in 1usize..260, mud in any::<bool>()) {
        let dispatcher = OutboundDispatcher::new(DispatchConfig {
            chunk_bound: bound(n),
            ..DispatchConfig::default()
        });
        let mode = LineMode::from_flag(mud);
        let mut transport = RecordingTransport::default();

        let report = dispatcher.dispatch(&mut transport, &raw, mode);

        prop_assert_eq!(report.liveness.len(), 1);
        prop_assert_eq!(transport.sent[0].as_str(), "\r\n");
        prop_assert_eq!(transport.sent[1..].concat(), dispatcher.prepare(&raw, mode));
        prop_assert_eq!(transport.sent.len(), 1 + report.payload_chunks());
    }
}
