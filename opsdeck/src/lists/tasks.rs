//! The tasks list board: local records, filter state, and mutations.

use opsdeck_model::{NewTask, Task, TaskStatus};
use tracing::debug;

use super::client_id;
use super::filter::{TaskFilter, filter_tasks};
use crate::notify::{Notification, NotifyKind};
use crate::sample::sample_tasks;

/// Inverse of a task board mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskUndo {
    /// Remove the task that was just added.
    RemoveAdded {
        /// Id assigned to the added task.
        id: String,
    },
    /// Put a task's status back to its previous value.
    RevertStatus {
        /// Id of the task whose status changed.
        id: String,
        /// The status it had before.
        status: TaskStatus,
    },
    /// Re-append a deleted task.
    Restore {
        /// The record as it was at deletion time.
        task: Box<Task>,
    },
}

/// State container for the tasks page.
///
/// Mutations apply synchronously to the owned records, so a derivation run
/// immediately after a mutation always sees it.
#[derive(Debug)]
pub struct TaskListBoard {
    tasks: Vec<Task>,
    /// Current filter configuration.
    pub filter: TaskFilter,
}

impl Default for TaskListBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskListBoard {
    /// Creates a board seeded with the sample rows.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tasks: sample_tasks(),
            filter: TaskFilter::default(),
        }
    }

    /// Creates a board over the given records.
    #[must_use]
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            filter: TaskFilter::default(),
        }
    }

    /// All records, unfiltered, in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The rows visible under the current filter.
    #[must_use]
    pub fn visible(&self) -> Vec<&Task> {
        filter_tasks(&self.tasks, &self.filter)
    }

    /// Appends a new task with a client-assigned id.
    ///
    /// A draft whose title is empty or whitespace-only is dropped silently
    /// and `None` is returned; the board is unchanged.
    pub fn add(&mut self, draft: NewTask) -> Option<Notification<TaskUndo>> {
        if draft.title.trim().is_empty() {
            return None;
        }
        let task = draft.into_task(client_id());
        let id = task.id.clone();
        let title = task.title.clone();
        debug!(%id, "task added");
        self.tasks.push(task);
        Some(
            Notification::new(
                NotifyKind::Success,
                "Task Added",
                format!("{title} has been added."),
            )
            .with_undo(TaskUndo::RemoveAdded { id }),
        )
    }

    /// Sets the status of the task with the given id.
    ///
    /// Returns `None` when no task has that id; the board is unchanged.
    pub fn update_status(
        &mut self,
        id: &str,
        new_status: TaskStatus,
    ) -> Option<Notification<TaskUndo>> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        let old_status = task.status;
        task.status = new_status;
        debug!(%id, from = %old_status, to = %new_status, "task status updated");
        Some(
            Notification::new(
                NotifyKind::Success,
                "Status Updated",
                format!("{} moved from {old_status} to {new_status}.", task.title),
            )
            .with_undo(TaskUndo::RevertStatus {
                id: id.to_string(),
                status: old_status,
            }),
        )
    }

    /// Removes the task with the given id.
    ///
    /// Returns `None` when no task has that id.
    pub fn delete(&mut self, id: &str) -> Option<Notification<TaskUndo>> {
        let index = self.tasks.iter().position(|t| t.id == id)?;
        let task = self.tasks.remove(index);
        debug!(%id, "task deleted");
        Some(
            Notification::new(
                NotifyKind::Success,
                "Task Deleted",
                format!("{} has been removed.", task.title),
            )
            .with_undo(TaskUndo::Restore {
                task: Box::new(task),
            }),
        )
    }

    /// Applies an inverse operation taken from a notification.
    ///
    /// The resulting notification never carries an undo of its own, so a
    /// revert cannot be reverted.
    pub fn undo(&mut self, op: TaskUndo) -> Notification<TaskUndo> {
        match op {
            TaskUndo::RemoveAdded { id } => {
                self.tasks.retain(|t| t.id != id);
                Notification::new(
                    NotifyKind::Success,
                    "Action Reverted",
                    "The task was not added.",
                )
            }
            TaskUndo::RevertStatus { id, status } => {
                let name = self
                    .tasks
                    .iter_mut()
                    .find(|t| t.id == id)
                    .map(|t| {
                        t.status = status;
                        t.title.clone()
                    })
                    .unwrap_or_default();
                Notification::new(
                    NotifyKind::Info,
                    "Action Reverted",
                    format!("Reverted {name}'s status back to {status}."),
                )
            }
            TaskUndo::Restore { task } => {
                let title = task.title.clone();
                self.tasks.push(*task);
                Notification::new(
                    NotifyKind::Success,
                    "Task Restored",
                    format!("{title} has been restored."),
                )
            }
        }
    }
}
