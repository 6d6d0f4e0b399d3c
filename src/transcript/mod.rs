//! Run transcript: what happened on every turn

pub mod event;
pub mod sink;

pub use event::{CombatOutcome, Event, FactionStatus, Recovery, SkipReason};
pub use sink::{
    open_sink, JsonTranscript, MemoryTranscript, TextTranscript, TranscriptFormat, TranscriptSink,
};
