//! Phase - coarse lifecycle bucket used for ordering
//!
//! Replaces the old numeric weight table (0, 1, 1.5, 2, 3, 4, 5) with
//! an ordered enum; declaration order is sort order and preserves the
//! old relative weights exactly, including the 1.5 slot between an
//! active task and a step body.

use serde::{Deserialize, Serialize};

use crate::markers::{lifecycle_hint, LifecycleHint};
use crate::message::{Message, MessageKind, MessageStatus};

/// Coarse lifecycle bucket of a message; earlier variants sort first.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// User/system messages with no workflow role.
    Ambient,
    /// A task currently pending or running.
    TaskActive,
    /// A task in some other, unrecognized state.
    TaskOther,
    /// The primary record of a workflow step.
    StepBody,
    /// A resource/result derived from a step.
    StepResource,
    /// Completed tasks and result messages.
    Settled,
    /// Free-form assistant commentary, shown last.
    Assistant,
}

/// Classify a message into its ordering phase.
///
/// A `phase` populated by the producer is authoritative; the heuristic
/// rules below exist for legacy events that carry only type/status and
/// free text. Total over every message shape, never fails.
pub fn phase_of(message: &Message) -> Phase {
    if let Some(phase) = message.declared_phase() {
        return phase;
    }
    classify(message)
}

fn classify(message: &Message) -> Phase {
    if message.is_step_body() {
        return Phase::StepBody;
    }

    let hint = message.content.as_deref().and_then(lifecycle_hint);

    // Task typing is checked ahead of relatedStepId so a running task
    // and its completed counterpart stay distinguishable even when
    // both point at the same step.
    if message.kind == MessageKind::Task {
        return match (message.status, hint) {
            (Some(MessageStatus::Running) | Some(MessageStatus::Pending), _) => Phase::TaskActive,
            (_, Some(LifecycleHint::InProgress)) => Phase::TaskActive,
            (Some(MessageStatus::Completed), _) => Phase::Settled,
            (_, Some(LifecycleHint::Completed)) => Phase::Settled,
            _ => Phase::TaskOther,
        };
    }

    if message.related_step_id().is_some() {
        return Phase::StepResource;
    }

    if message.kind == MessageKind::Result
        || message.status == Some(MessageStatus::Completed)
        || hint == Some(LifecycleHint::Completed)
    {
        return Phase::Settled;
    }

    if message.kind == MessageKind::Assistant {
        return Phase::Assistant;
    }

    Phase::Ambient
}
