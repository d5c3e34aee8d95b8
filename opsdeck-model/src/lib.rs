//! Shared data model for Opsdeck entities.
//!
//! Defines the [`Task`](task::Task) and [`User`](user::User) record types,
//! their enum facets, and the fixed seed data. All serde representations
//! match the persisted JSON layout: camelCase field names and lowercase
//! (kebab-case for task status) enum values.

pub mod task;
pub mod user;

pub use task::{NewTask, Priority, Task, TaskStatus};
pub use user::{NewUser, User, UserRole, UserStatus, seed_users};

use thiserror::Error;

/// Error returned when parsing an enum facet from its wire string.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown {kind} value: {value}")]
pub struct ParseEnumError {
    /// Which enum was being parsed (e.g. "task status").
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}
