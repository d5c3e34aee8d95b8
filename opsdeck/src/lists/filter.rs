//! Pure filter and sort derivation over record sequences.
//!
//! These functions take the raw sequence plus the current facet/sort
//! configuration and return the derived view, so they are testable without
//! any board or rendering in the picture.
//!
//! Sorting compares the wire strings of enum facets, and any record whose
//! sort key is missing or empty compares equal to everything, preserving
//! relative order (the sort is stable).

use std::cmp::Ordering;

use opsdeck_model::{ParseEnumError, Priority, Task, TaskStatus, User, UserRole, UserStatus};

/// Filter configuration for the tasks list.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    /// Case-insensitive substring matched against title and description.
    pub search: String,
    /// Exact status facet; `None` means "all".
    pub status: Option<TaskStatus>,
    /// Exact priority facet; `None` means "all".
    pub priority: Option<Priority>,
}

/// Filter configuration for the users list.
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    /// Case-insensitive substring matched against name and email.
    pub search: String,
    /// Exact role facet; `None` means "all".
    pub role: Option<UserRole>,
    /// Exact status facet; `None` means "all".
    pub status: Option<UserStatus>,
}

/// Case-insensitive substring match; an empty term matches everything.
fn matches_search(fields: &[&str], term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    fields.iter().any(|f| f.to_lowercase().contains(&term))
}

/// Derives the visible tasks for the given filter, preserving order.
#[must_use]
pub fn filter_tasks<'a>(tasks: &'a [Task], filter: &TaskFilter) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|t| {
            matches_search(&[&t.title, &t.description], &filter.search)
                && filter.status.is_none_or(|s| t.status == s)
                && filter.priority.is_none_or(|p| t.priority == p)
        })
        .collect()
}

/// Derives the visible users for the given filter, preserving order.
#[must_use]
pub fn filter_users<'a>(users: &'a [User], filter: &UserFilter) -> Vec<&'a User> {
    users
        .iter()
        .filter(|u| {
            matches_search(&[&u.name, &u.email], &filter.search)
                && filter.role.is_none_or(|r| u.role == r)
                && filter.status.is_none_or(|s| u.status == s)
        })
        .collect()
}

/// Sortable columns of the users list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserSortKey {
    /// Full display name.
    Name,
    /// Email address.
    Email,
    /// Role wire string.
    Role,
    /// Status wire string.
    Status,
    /// Last-active ISO datetime string.
    LastActive,
    /// Join date string.
    JoinDate,
}

impl std::fmt::Display for UserSortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Role => "role",
            Self::Status => "status",
            Self::LastActive => "last-active",
            Self::JoinDate => "join-date",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for UserSortKey {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "role" => Ok(Self::Role),
            "status" => Ok(Self::Status),
            "last-active" => Ok(Self::LastActive),
            "join-date" => Ok(Self::JoinDate),
            other => Err(ParseEnumError {
                kind: "sort key",
                value: other.to_string(),
            }),
        }
    }
}

/// Sort direction; ascending is the default for a freshly selected key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest key first.
    Ascending,
    /// Largest key first.
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Single-valued sort configuration: one key, one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig {
    /// Which column to sort by.
    pub key: UserSortKey,
    /// Current direction.
    pub direction: SortDirection,
}

/// The sort key of a user, or `None` when the value is missing or empty.
///
/// Empty strings are treated the same as absent values: both bypass the
/// comparison, so such records stay where the stable sort found them.
fn sort_field(user: &User, key: UserSortKey) -> Option<&str> {
    let value = match key {
        UserSortKey::Name => user.name.as_str(),
        UserSortKey::Email => user.email.as_str(),
        UserSortKey::Role => user.role.as_str(),
        UserSortKey::Status => user.status.as_str(),
        UserSortKey::LastActive => user.last_active.as_str(),
        UserSortKey::JoinDate => user.join_date.as_str(),
    };
    if value.is_empty() { None } else { Some(value) }
}

/// Stable-sorts the derived rows in place per the sort configuration.
pub fn sort_users(rows: &mut [&User], config: SortConfig) {
    rows.sort_by(|a, b| {
        let (Some(a_val), Some(b_val)) = (sort_field(a, config.key), sort_field(b, config.key))
        else {
            return Ordering::Equal;
        };
        match config.direction {
            SortDirection::Ascending => a_val.cmp(b_val),
            SortDirection::Descending => b_val.cmp(a_val),
        }
    });
}
