//! chat_timeline - message ordering for the workflow chat view
//!
//! The strategy-analysis workflow emits chat events asynchronously, so
//! network arrival order rarely matches logical order. This crate owns
//! the reconciliation logic:
//! - `message` / `step` - the wire model for workflow events
//! - `phase` - coarse lifecycle classification used for ordering
//! - `markers` - legacy text-marker adapter feeding the classifier
//! - `ordering` - the layered message comparator
//! - `timeline` - full-set accumulator for streaming consumers
//! - `ingest` - parse boundary for captured event dumps
//!
//! Everything here is synchronous, pure, and absent-safe: sorting a
//! snapshot never mutates it, and partially populated events degrade
//! to timestamp order instead of failing.

pub mod ingest;
pub mod markers;
pub mod message;
pub mod ordering;
pub mod phase;
pub mod step;
pub mod timeline;

pub use ingest::{parse_events, read_events, IngestError};
pub use markers::LifecycleHint;
pub use message::{Message, MessageData, MessageKind, MessageStatus, StepRef};
pub use ordering::{compare_messages, sort_messages};
pub use phase::{phase_of, Phase};
pub use step::{compare_steps, sort_steps, Step};
pub use timeline::Timeline;
