//! The users list board: local records, filter/sort state, and mutations.

use chrono::{SecondsFormat, Utc};
use opsdeck_model::{NewUser, User, UserStatus};
use tracing::debug;

use super::client_id;
use super::filter::{SortConfig, SortDirection, UserFilter, UserSortKey, filter_users, sort_users};
use crate::notify::{Notification, NotifyKind};
use crate::sample::sample_users;

/// Inverse of a user board mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserUndo {
    /// Remove the user that was just added.
    RemoveAdded {
        /// Id assigned to the added user.
        id: String,
    },
    /// Put a user's status back to its previous value.
    RevertStatus {
        /// Id of the user whose status changed.
        id: String,
        /// The status it had before.
        status: UserStatus,
    },
    /// Re-append a deleted user.
    Restore {
        /// The record as it was at deletion time.
        user: Box<User>,
    },
}

/// State container for the users page.
#[derive(Debug)]
pub struct UserListBoard {
    users: Vec<User>,
    /// Current filter configuration.
    pub filter: UserFilter,
    /// Current sort configuration, or `None` for insertion order.
    pub sort: Option<SortConfig>,
}

impl Default for UserListBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl UserListBoard {
    /// Creates a board seeded with the sample rows, unsorted.
    #[must_use]
    pub fn new() -> Self {
        Self {
            users: sample_users(),
            filter: UserFilter::default(),
            sort: None,
        }
    }

    /// Creates a board over the given records.
    #[must_use]
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users,
            filter: UserFilter::default(),
            sort: None,
        }
    }

    /// All records, unfiltered, in insertion order.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// The rows visible under the current filter and sort.
    #[must_use]
    pub fn visible(&self) -> Vec<&User> {
        let mut rows = filter_users(&self.users, &self.filter);
        if let Some(config) = self.sort {
            sort_users(&mut rows, config);
        }
        rows
    }

    /// Selects a sort column.
    ///
    /// Selecting the already-active ascending column flips it to descending;
    /// anything else selects the column ascending.
    pub fn request_sort(&mut self, key: UserSortKey) {
        let direction = match self.sort {
            Some(config) if config.key == key && config.direction == SortDirection::Ascending => {
                SortDirection::Descending
            }
            _ => SortDirection::Ascending,
        };
        self.sort = Some(SortConfig { key, direction });
    }

    /// Appends a new user with a client-assigned id and backfilled fields.
    ///
    /// A draft missing a name or email produces an error notification (with
    /// no undo) and leaves the board unchanged.
    pub fn add(&mut self, draft: NewUser) -> Notification<UserUndo> {
        if draft.name.is_empty() || draft.email.is_empty() {
            return Notification::new(
                NotifyKind::Error,
                "Validation Error",
                "Name and email are required fields.",
            );
        }
        let now = Utc::now();
        let user = User {
            id: client_id(),
            name: draft.name,
            email: draft.email,
            role: draft.role,
            status: draft.status,
            avatar: String::new(),
            last_active: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            join_date: now.format("%Y-%m-%d").to_string(),
            phone: draft.phone,
            department: draft.department,
        };
        let id = user.id.clone();
        let name = user.name.clone();
        debug!(%id, "user added");
        self.users.push(user);
        Notification::new(
            NotifyKind::Success,
            "User Added",
            format!("{name} has been added successfully."),
        )
        .with_undo(UserUndo::RemoveAdded { id })
    }

    /// Sets the status of the user with the given id.
    ///
    /// Returns `None` when no user has that id; the board is unchanged.
    pub fn update_status(
        &mut self,
        id: &str,
        new_status: UserStatus,
    ) -> Option<Notification<UserUndo>> {
        let user = self.users.iter_mut().find(|u| u.id == id)?;
        let old_status = user.status;
        user.status = new_status;
        debug!(%id, from = %old_status, to = %new_status, "user status updated");
        Some(
            Notification::new(
                NotifyKind::Success,
                "Status Updated",
                format!(
                    "{}'s status changed from {old_status} to {new_status}.",
                    user.name
                ),
            )
            .with_undo(UserUndo::RevertStatus {
                id: id.to_string(),
                status: old_status,
            }),
        )
    }

    /// Removes the user with the given id.
    ///
    /// Returns `None` when no user has that id.
    pub fn delete(&mut self, id: &str) -> Option<Notification<UserUndo>> {
        let index = self.users.iter().position(|u| u.id == id)?;
        let user = self.users.remove(index);
        debug!(%id, "user deleted");
        Some(
            Notification::new(
                NotifyKind::Success,
                "User Deleted",
                format!("{} has been removed from the system.", user.name),
            )
            .with_undo(UserUndo::Restore {
                user: Box::new(user),
            }),
        )
    }

    /// Applies an inverse operation taken from a notification.
    ///
    /// The resulting notification never carries an undo of its own.
    pub fn undo(&mut self, op: UserUndo) -> Notification<UserUndo> {
        match op {
            UserUndo::RemoveAdded { id } => {
                self.users.retain(|u| u.id != id);
                Notification::new(
                    NotifyKind::Success,
                    "Action Reverted",
                    "The user was not added.",
                )
            }
            UserUndo::RevertStatus { id, status } => {
                let name = self
                    .users
                    .iter_mut()
                    .find(|u| u.id == id)
                    .map(|u| {
                        u.status = status;
                        u.name.clone()
                    })
                    .unwrap_or_default();
                Notification::new(
                    NotifyKind::Info,
                    "Action Reverted",
                    format!("Reverted {name}'s status back to {status}."),
                )
            }
            UserUndo::Restore { user } => {
                let name = user.name.clone();
                self.users.push(*user);
                Notification::new(
                    NotifyKind::Success,
                    "User Restored",
                    format!("{name} has been restored."),
                )
            }
        }
    }
}
