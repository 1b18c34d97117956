//! Legacy text-marker adapter
//!
//! Older producers encoded lifecycle state only in the message text,
//! as a localized prefix ("正在…", "已完成…", emoji markers). This
//! module is the single place that knows those spellings; the
//! classifier consumes the [`LifecycleHint`] it yields and never
//! inspects raw content itself.

use once_cell::sync::Lazy;
use regex::Regex;

/// Lifecycle state recovered from legacy message text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleHint {
    /// Text starts with a "currently in progress" marker.
    InProgress,
    /// Text starts with a "completed" / "step completed" marker.
    Completed,
}

static IN_PROGRESS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?:⏳|▶|正在|进行中|(?i:in progress|running))")
        .expect("in-progress marker pattern")
});

static COMPLETED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?:✅|✔|已完成|步骤完成|(?i:step completed|completed))")
        .expect("completed marker pattern")
});

/// Detect a lifecycle marker at the start of legacy message text.
///
/// Returns `None` for text carrying no recognized prefix; the
/// in-progress marker wins if a pathological string matches both.
pub fn lifecycle_hint(content: &str) -> Option<LifecycleHint> {
    if IN_PROGRESS.is_match(content) {
        Some(LifecycleHint::InProgress)
    } else if COMPLETED.is_match(content) {
        Some(LifecycleHint::Completed)
    } else {
        None
    }
}
