//! Integration tests for the `/api/tasks` routes.
//!
//! Each test boots the API server on a random port over a fresh temporary
//! data directory and drives it with a real HTTP client.
//!
//! Verification command: `cargo test --test task_routes`

use std::sync::Arc;

use tempfile::TempDir;

use opsdeck_model::{Priority, Task, TaskStatus};
use opsdeck_server::routes::{AppState, start_server_with_state};

// =============================================================================
// Helpers
// =============================================================================

/// Starts an API server over a fresh data directory.
///
/// The `TempDir` must be held for the duration of the test.
async fn start_api() -> (TempDir, String, tokio::task::JoinHandle<()>) {
    let dir = TempDir::new().unwrap();
    let state = Arc::new(AppState::new(dir.path()));
    let (addr, handle) = start_server_with_state("127.0.0.1:0", state)
        .await
        .expect("failed to start test server");
    (dir, format!("http://{addr}/api/tasks"), handle)
}

async fn list(client: &reqwest::Client, url: &str) -> Vec<Task> {
    client
        .get(url)
        .send()
        .await
        .unwrap()
        .json::<Vec<Task>>()
        .await
        .unwrap()
}

// =============================================================================
// Route tests
// =============================================================================

#[tokio::test]
async fn list_starts_empty_and_creates_the_file() {
    let (dir, url, _handle) = start_api().await;
    let client = reqwest::Client::new();

    let tasks = list(&client, &url).await;
    assert!(tasks.is_empty());

    // The first read persists the (empty) seed list.
    assert!(dir.path().join("tasks.json").exists());
}

#[tokio::test]
async fn create_assigns_counter_ids_and_fills_defaults() {
    let (_dir, url, _handle) = start_api().await;
    let client = reqwest::Client::new();

    let response = client
        .post(&url)
        .json(&serde_json::json!({"title": "Write release notes"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::CREATED);
    let first: Task = response.json().await.unwrap();
    assert_eq!(first.id, "1");
    assert_eq!(first.status, TaskStatus::Todo);
    assert_eq!(first.priority, Priority::Medium);
    assert!(first.description.is_empty());
    assert!(first.tags.is_empty());

    let second: Task = client
        .post(&url)
        .json(&serde_json::json!({"title": "Tag the release", "priority": "high"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(second.id, "2");
    assert_eq!(second.priority, Priority::High);

    let tasks = list(&client, &url).await;
    assert_eq!(tasks.len(), 2);
}

#[tokio::test]
async fn create_without_title_is_rejected() {
    let (_dir, url, _handle) = start_api().await;
    let client = reqwest::Client::new();

    let response = client
        .post(&url)
        .json(&serde_json::json!({"description": "no title"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::UNPROCESSABLE_ENTITY);

    assert!(list(&client, &url).await.is_empty());
}

#[tokio::test]
async fn ids_continue_from_the_maximum_after_a_delete() {
    let (_dir, url, _handle) = start_api().await;
    let client = reqwest::Client::new();

    for title in ["a", "b", "c"] {
        client
            .post(&url)
            .json(&serde_json::json!({"title": title}))
            .send()
            .await
            .unwrap();
    }

    // Delete the middle record; the max id (3) still rules the counter.
    client
        .delete(&url)
        .json(&serde_json::json!({"id": "2"}))
        .send()
        .await
        .unwrap();

    let next: Task = client
        .post(&url)
        .json(&serde_json::json!({"title": "d"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(next.id, "4");
}

#[tokio::test]
async fn update_replaces_the_matching_record() {
    let (_dir, url, _handle) = start_api().await;
    let client = reqwest::Client::new();

    let mut task: Task = client
        .post(&url)
        .json(&serde_json::json!({"title": "Draft"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    task.status = TaskStatus::InProgress;
    task.title = "Draft v2".to_string();
    let echoed: Task = client
        .put(&url)
        .json(&task)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(echoed, task);

    let tasks = list(&client, &url).await;
    assert_eq!(tasks[0].title, "Draft v2");
    assert_eq!(tasks[0].status, TaskStatus::InProgress);
}

#[tokio::test]
async fn update_with_unknown_id_is_a_silent_no_op() {
    let (_dir, url, _handle) = start_api().await;
    let client = reqwest::Client::new();

    client
        .post(&url)
        .json(&serde_json::json!({"title": "Only task"}))
        .send()
        .await
        .unwrap();

    let ghost = serde_json::json!({
        "id": "99",
        "title": "Ghost",
        "description": "",
        "status": "todo",
        "priority": "low",
        "dueDate": "",
        "assignedTo": "",
        "tags": []
    });
    let response = client.put(&url).json(&ghost).send().await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let tasks = list(&client, &url).await;
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].title, "Only task");
}

#[tokio::test]
async fn delete_is_idempotent() {
    let (_dir, url, _handle) = start_api().await;
    let client = reqwest::Client::new();

    client
        .post(&url)
        .json(&serde_json::json!({"title": "Ephemeral"}))
        .send()
        .await
        .unwrap();

    for _ in 0..2 {
        let response = client
            .delete(&url)
            .json(&serde_json::json!({"id": "1"}))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["success"], true);
    }

    assert!(list(&client, &url).await.is_empty());
}

#[tokio::test]
async fn corrupt_file_yields_a_generic_500() {
    let (dir, url, _handle) = start_api().await;
    let client = reqwest::Client::new();

    std::fs::write(dir.path().join("tasks.json"), "{not json").unwrap();

    let response = client.get(&url).send().await.unwrap();
    assert_eq!(
        response.status(),
        reqwest::StatusCode::INTERNAL_SERVER_ERROR
    );
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Failed to fetch tasks");

    // The corrupt file is left in place, never reseeded.
    let raw = std::fs::read_to_string(dir.path().join("tasks.json")).unwrap();
    assert_eq!(raw, "{not json");
}
