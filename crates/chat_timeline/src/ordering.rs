//! Message comparator - reconciles arrival order into logical order
//!
//! Events reach the client in network order, which rarely matches
//! workflow order. The comparator layers three independent signals:
//! backend sequence numbers (authoritative when both sides carry one),
//! step/resource grouping (causal relation), and phase classification
//! (fallback when structured metadata is absent). Pure and total;
//! malformed metadata degrades to timestamp order instead of failing.

use std::cmp::Ordering;

use crate::message::Message;
use crate::phase::phase_of;

/// Total-order comparator over workflow chat messages.
///
/// Precedence, first decisive layer wins:
/// 1. numeric `sequence` on both sides
/// 2. same step group: step body first, then phase, step number,
///    timestamp
/// 3. a step body precedes messages related to it
/// 4. phase
/// 5. step number, when both are step bodies
/// 6. timestamp (ties keep input order under a stable sort)
pub fn compare_messages(a: &Message, b: &Message) -> Ordering {
    if let (Some(seq_a), Some(seq_b)) = (a.sequence(), b.sequence()) {
        if seq_a != seq_b {
            return seq_a.cmp(&seq_b);
        }
    }

    if let (Some(group_a), Some(group_b)) = (a.step_group(), b.step_group()) {
        if group_a == group_b {
            return compare_within_group(a, b);
        }
    }

    if a.is_step_body() && a.step_id().is_some() && a.step_id() == b.related_step_id() {
        return Ordering::Less;
    }
    if b.is_step_body() && b.step_id().is_some() && b.step_id() == a.related_step_id() {
        return Ordering::Greater;
    }

    let by_phase = phase_of(a).cmp(&phase_of(b));
    if by_phase != Ordering::Equal {
        return by_phase;
    }

    if a.is_step_body() && b.is_step_body() {
        let by_number = a.step_number().cmp(&b.step_number());
        if by_number != Ordering::Equal {
            return by_number;
        }
    }

    a.timestamp.cmp(&b.timestamp)
}

/// Ordering among messages of one step group: the step's primary
/// record leads, its dependents follow by phase, then step number,
/// then timestamp.
fn compare_within_group(a: &Message, b: &Message) -> Ordering {
    if a.is_step_body() != b.is_step_body() {
        return if a.is_step_body() {
            Ordering::Less
        } else {
            Ordering::Greater
        };
    }
    phase_of(a)
        .cmp(&phase_of(b))
        .then_with(|| a.step_number().cmp(&b.step_number()))
        .then_with(|| a.timestamp.cmp(&b.timestamp))
}

/// Sort a snapshot of messages into workflow order.
///
/// Returns a new vector; the input is never mutated. The sort is
/// stable, so messages with fully equal keys keep their relative
/// order. There is no incremental mode: on every partial update the
/// caller re-sorts the full accumulated set.
///
/// Sequence numbers bind only pairwise, so over a stream mixing
/// sequenced and unsequenced events the comparator is not a total
/// order and `slice::sort_by` would reject it at runtime. A stable
/// linear insertion makes no transitivity assumption: it never
/// panics, and because the comparator is antisymmetric the output
/// carries no adjacent inversions, which makes re-sorting it a no-op.
pub fn sort_messages(messages: &[Message]) -> Vec<Message> {
    let mut sorted: Vec<Message> = Vec::with_capacity(messages.len());
    for message in messages {
        let mut at = sorted.len();
        while at > 0 && compare_messages(message, &sorted[at - 1]) == Ordering::Less {
            at -= 1;
        }
        sorted.insert(at, message.clone());
    }
    sorted
}
