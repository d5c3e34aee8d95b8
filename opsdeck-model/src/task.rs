//! Task record type and its facet enums.
//!
//! A [`Task`] is persisted as a camelCase JSON object; the status enum uses
//! kebab-case values (`in-progress`) to stay byte-compatible with the
//! existing data files.

use serde::{Deserialize, Serialize};

use crate::ParseEnumError;

/// Workflow status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Not started yet.
    Todo,
    /// Actively being worked on.
    InProgress,
    /// Finished.
    Completed,
    /// Cannot proceed until something else is resolved.
    Blocked,
}

impl Default for TaskStatus {
    fn default() -> Self {
        Self::Todo
    }
}

impl TaskStatus {
    /// The wire string for this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Blocked => "blocked",
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "todo" => Ok(Self::Todo),
            "in-progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "blocked" => Ok(Self::Blocked),
            other => Err(ParseEnumError {
                kind: "task status",
                value: other.to_string(),
            }),
        }
    }
}

/// Priority of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Low urgency.
    Low,
    /// Normal urgency.
    Medium,
    /// High urgency.
    High,
}

impl Default for Priority {
    fn default() -> Self {
        Self::Medium
    }
}

impl Priority {
    /// The wire string for this priority.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Priority {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(ParseEnumError {
                kind: "priority",
                value: other.to_string(),
            }),
        }
    }
}

/// A stored task record.
///
/// `id` is a decimal-string counter when assigned by the server store, or an
/// epoch-millis string when created client-side. The two id spaces are not
/// unified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier within the task store.
    pub id: String,
    /// Short title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Workflow status.
    pub status: TaskStatus,
    /// Priority.
    pub priority: Priority,
    /// Due date as a `YYYY-MM-DD` string.
    pub due_date: String,
    /// Display name of the assignee.
    pub assigned_to: String,
    /// Display-only labels; order is preserved but not significant.
    pub tags: Vec<String>,
}

/// Body of a task creation request: a [`Task`] without its id.
///
/// Every field except `title` falls back to a default so that a minimal
/// payload like `{"title": "A"}` is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    /// Short title (required).
    pub title: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Workflow status; defaults to `todo`.
    #[serde(default)]
    pub status: TaskStatus,
    /// Priority; defaults to `medium`, matching the creation form.
    #[serde(default)]
    pub priority: Priority,
    /// Due date as a `YYYY-MM-DD` string.
    #[serde(default)]
    pub due_date: String,
    /// Display name of the assignee.
    #[serde(default)]
    pub assigned_to: String,
    /// Display-only labels.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl NewTask {
    /// Builds the full record with the given id attached.
    #[must_use]
    pub fn into_task(self, id: String) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            status: self.status,
            priority: self.priority,
            due_date: self.due_date,
            assigned_to: self.assigned_to,
            tags: self.tags,
        }
    }
}
