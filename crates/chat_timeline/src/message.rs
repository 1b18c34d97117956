//! Message - workflow chat event model
//!
//! The shapes here mirror the JSON payloads emitted by the workflow
//! service: camelCase field names, everything beyond `timestamp` and
//! `type` optional. Accessors default missing fields instead of
//! failing, so the comparators stay total over partially populated
//! events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::phase::Phase;

/// A single event in the workflow chat stream.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Message {
    /// When the event was produced. The only field the producer must
    /// always supply.
    pub timestamp: DateTime<Utc>,

    /// Who/what this message is from.
    #[serde(rename = "type")]
    pub kind: MessageKind,

    /// Lifecycle status, if the producer tracked one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<MessageStatus>,

    /// Free-text body shown in the chat.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Structured workflow metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<MessageData>,
}

/// Message origin/category.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    User,
    System,
    Task,
    Result,
    Assistant,
}

/// Lifecycle status attached to task-like messages.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MessageStatus {
    Pending,
    Running,
    Completed,
    Failed,
}

/// Structured metadata the workflow service attaches to an event.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MessageData {
    /// Marks this message as the primary record of a step.
    #[serde(default)]
    pub is_step: bool,

    /// The step this message represents, when `is_step` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<StepRef>,

    /// Task this message belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,

    /// Links a resource/result message to the step that produced it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_step_id: Option<String>,

    /// Backend-assigned order. Authoritative whenever two messages
    /// both carry one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence: Option<i64>,

    /// Structured lifecycle phase populated by newer producers. When
    /// present it overrides the heuristic classifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<Phase>,
}

/// Reference to a workflow step carried inside a message.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StepRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_number: Option<u32>,
}

impl Message {
    /// Backend-assigned sequence number, if any.
    pub fn sequence(&self) -> Option<i64> {
        self.data.as_ref().and_then(|d| d.sequence)
    }

    /// True if this message is the primary record of a step.
    pub fn is_step_body(&self) -> bool {
        self.data.as_ref().is_some_and(|d| d.is_step)
    }

    /// Id of the step this message represents (step bodies only).
    pub fn step_id(&self) -> Option<&str> {
        self.data
            .as_ref()
            .and_then(|d| d.step.as_ref())
            .and_then(|s| s.id.as_deref())
    }

    /// Id of the step this message is derived from.
    pub fn related_step_id(&self) -> Option<&str> {
        self.data.as_ref().and_then(|d| d.related_step_id.as_deref())
    }

    /// The step group this message belongs to: its own step id for
    /// step bodies, otherwise the step it is related to.
    pub fn step_group(&self) -> Option<&str> {
        self.step_id().or_else(|| self.related_step_id())
    }

    /// Step number with the absent-safe default of 0.
    pub fn step_number(&self) -> u32 {
        self.data
            .as_ref()
            .and_then(|d| d.step.as_ref())
            .and_then(|s| s.step_number)
            .unwrap_or(0)
    }

    /// Producer-populated structured phase, if any.
    pub fn declared_phase(&self) -> Option<Phase> {
        self.data.as_ref().and_then(|d| d.phase)
    }
}
