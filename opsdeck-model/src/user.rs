//! User record type, facet enums, and the fixed seed list.
//!
//! Users carry two optional contact fields (`phone`, `department`) that are
//! omitted from JSON entirely when absent, matching the persisted files.

use serde::{Deserialize, Serialize};

use crate::ParseEnumError;

/// Permission role of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Full access to all features and settings.
    Admin,
    /// Can create and edit content.
    Editor,
    /// Read-only access.
    Viewer,
    /// Basic access with limited permissions.
    User,
}

impl Default for UserRole {
    fn default() -> Self {
        Self::User
    }
}

impl UserRole {
    /// The wire string for this role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Editor => "editor",
            Self::Viewer => "viewer",
            Self::User => "user",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UserRole {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "editor" => Ok(Self::Editor),
            "viewer" => Ok(Self::Viewer),
            "user" => Ok(Self::User),
            other => Err(ParseEnumError {
                kind: "user role",
                value: other.to_string(),
            }),
        }
    }
}

/// Account status of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    /// Active account.
    Active,
    /// Dormant account.
    Inactive,
    /// Access revoked.
    Suspended,
    /// Awaiting activation.
    Pending,
}

impl Default for UserStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl UserStatus {
    /// The wire string for this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Suspended => "suspended",
            Self::Pending => "pending",
        }
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UserStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            "suspended" => Ok(Self::Suspended),
            "pending" => Ok(Self::Pending),
            other => Err(ParseEnumError {
                kind: "user status",
                value: other.to_string(),
            }),
        }
    }
}

/// A stored user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier within the user store.
    pub id: String,
    /// Full display name.
    pub name: String,
    /// Unique email address (compared case-sensitively).
    pub email: String,
    /// Permission role.
    pub role: UserRole,
    /// Account status.
    pub status: UserStatus,
    /// Avatar URI, or empty when none is set.
    pub avatar: String,
    /// Last activity as an ISO datetime string.
    pub last_active: String,
    /// Join date as a `YYYY-MM-DD` string.
    pub join_date: String,
    /// Optional phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Optional department name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

/// Body of a user creation request.
///
/// `id`, `avatar`, `joinDate`, and `lastActive` are backfilled server-side;
/// role and status default to the creation form's values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    /// Full display name (required).
    pub name: String,
    /// Email address (required, must be unique).
    pub email: String,
    /// Permission role; defaults to `user`.
    #[serde(default)]
    pub role: UserRole,
    /// Account status; defaults to `pending`.
    #[serde(default)]
    pub status: UserStatus,
    /// Optional phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Optional department name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

/// The fixed default user list persisted when the users file is missing.
#[must_use]
pub fn seed_users() -> Vec<User> {
    vec![
        User {
            id: "1".to_string(),
            name: "Alex Johnson".to_string(),
            email: "alex.johnson@example.com".to_string(),
            role: UserRole::Admin,
            status: UserStatus::Active,
            avatar: String::new(),
            last_active: "2023-12-08T14:30:00".to_string(),
            join_date: "2022-01-15".to_string(),
            phone: Some("+1 (555) 123-4567".to_string()),
            department: Some("Engineering".to_string()),
        },
        User {
            id: "2".to_string(),
            name: "Sarah Williams".to_string(),
            email: "sarah.w@example.com".to_string(),
            role: UserRole::Editor,
            status: UserStatus::Active,
            avatar: String::new(),
            last_active: "2023-12-09T09:15:00".to_string(),
            join_date: "2022-03-22".to_string(),
            phone: Some("+1 (555) 234-5678".to_string()),
            department: Some("Marketing".to_string()),
        },
        User {
            id: "3".to_string(),
            name: "Michael Chen".to_string(),
            email: "michael.chen@example.com".to_string(),
            role: UserRole::Viewer,
            status: UserStatus::Inactive,
            avatar: String::new(),
            last_active: "2023-11-28T16:45:00".to_string(),
            join_date: "2023-05-10".to_string(),
            phone: None,
            department: Some("Sales".to_string()),
        },
    ]
}
