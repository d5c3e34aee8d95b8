//! List boards: per-page state containers over in-memory record sequences.
//!
//! Each board owns its records, the current filter/sort configuration, and
//! the optimistic mutation handlers. Derivation (filtering, sorting) is done
//! by the pure functions in [`filter`]; the boards only hold state and apply
//! mutations synchronously, so a read never observes a half-applied change.

pub mod filter;
pub mod tasks;
pub mod users;

pub use filter::{
    SortConfig, SortDirection, TaskFilter, UserFilter, UserSortKey, filter_tasks, filter_users,
    sort_users,
};
pub use tasks::{TaskListBoard, TaskUndo};
pub use users::{UserListBoard, UserUndo};

use std::time::{SystemTime, UNIX_EPOCH};

/// Client-assigned record id: current epoch millis as a decimal string.
///
/// This id space is distinct from the server store's counter ids and the
/// two are never unified.
pub(crate) fn client_id() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
        .to_string()
}
