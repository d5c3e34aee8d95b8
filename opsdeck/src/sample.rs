//! Static sample data seeding the list boards.
//!
//! The boards are intentionally self-contained and never fetch from the API
//! server, so each one starts from these fixed rows.

use opsdeck_model::{Priority, Task, TaskStatus, User, UserRole, UserStatus};

/// The five tasks the tasks board starts with.
#[must_use]
pub fn sample_tasks() -> Vec<Task> {
    vec![
        Task {
            id: "1".to_string(),
            title: "Implement user authentication".to_string(),
            description: "Set up JWT authentication for the application".to_string(),
            status: TaskStatus::Completed,
            priority: Priority::High,
            due_date: "2023-12-15".to_string(),
            assigned_to: "Raja Zubair".to_string(),
            tags: vec!["backend".to_string(), "security".to_string()],
        },
        Task {
            id: "2".to_string(),
            title: "Design dashboard layout".to_string(),
            description: "Create responsive dashboard layout with sidebar".to_string(),
            status: TaskStatus::InProgress,
            priority: Priority::High,
            due_date: "2023-12-20".to_string(),
            assigned_to: "Haider Zubair".to_string(),
            tags: vec!["frontend".to_string(), "design".to_string()],
        },
        Task {
            id: "3".to_string(),
            title: "Write API documentation".to_string(),
            description: "Document all API endpoints with examples".to_string(),
            status: TaskStatus::Todo,
            priority: Priority::Medium,
            due_date: "2023-12-25".to_string(),
            assigned_to: "Sharoon Zubair".to_string(),
            tags: vec!["documentation".to_string()],
        },
        Task {
            id: "4".to_string(),
            title: "Fix login page styling".to_string(),
            description: "Adjust padding and margins on mobile view".to_string(),
            status: TaskStatus::Todo,
            priority: Priority::Low,
            due_date: "2023-12-18".to_string(),
            assigned_to: "Raja Zubair".to_string(),
            tags: vec!["frontend".to_string(), "responsive".to_string()],
        },
        Task {
            id: "5".to_string(),
            title: "Database optimization".to_string(),
            description: "Optimize slow queries and add indexes".to_string(),
            status: TaskStatus::Blocked,
            priority: Priority::High,
            due_date: "2024-01-05".to_string(),
            assigned_to: "Sharoon Zubair".to_string(),
            tags: vec!["backend".to_string(), "database".to_string()],
        },
    ]
}

/// The five users the users board starts with.
///
/// The first three match the server store's seed list; the last two exist
/// only here and exercise the `pending` and `suspended` facets.
#[must_use]
pub fn sample_users() -> Vec<User> {
    let mut users = opsdeck_model::seed_users();
    users.push(User {
        id: "4".to_string(),
        name: "Emily Rodriguez".to_string(),
        email: "emily.r@example.com".to_string(),
        role: UserRole::User,
        status: UserStatus::Pending,
        avatar: String::new(),
        last_active: "2023-12-05T11:20:00".to_string(),
        join_date: "2023-10-15".to_string(),
        phone: Some("+1 (555) 345-6789".to_string()),
        department: Some("Support".to_string()),
    });
    users.push(User {
        id: "5".to_string(),
        name: "David Kim".to_string(),
        email: "david.kim@example.com".to_string(),
        role: UserRole::Editor,
        status: UserStatus::Suspended,
        avatar: String::new(),
        last_active: "2023-11-15T13:10:00".to_string(),
        join_date: "2021-11-30".to_string(),
        phone: Some("+1 (555) 456-7890".to_string()),
        department: Some("Product".to_string()),
    });
    users
}
