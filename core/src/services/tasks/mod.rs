//! Task mutation pipeline
//!
//! Couples the primary task write to two best-effort follow-ups: persisting
//! a notification for the interested identity and pushing a real-time event.
//! Only the primary write can fail the operation; the follow-ups are
//! absorbed and reported as [`SideEffect`] outcomes.

mod service;

#[cfg(test)]
mod tests;

pub use service::{SideEffect, TaskCreated, TaskService, TaskUpdated};

/// Event published to the assignee's channel when a task is created
pub const TASK_ASSIGNED_EVENT: &str = "taskAssigned";

/// Event broadcast to all connected clients when a task is updated
pub const TASK_UPDATED_EVENT: &str = "taskUpdated";
