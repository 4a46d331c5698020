//! Task endpoints: list, create, and update action items.

use chrono::NaiveDateTime;
use echo_types::ClientError;
use serde::{Deserialize, Serialize};

use crate::client::EchoClient;

/// A tracked action item.
///
/// Timestamps are UTC; the backend sends them without an offset suffix.
#[derive(Debug, Clone, Deserialize)]
pub struct Task {
    /// Backend-assigned identifier.
    pub id: String,
    /// Short description of the work.
    pub title: String,
    /// Workflow state: `pending`, `in_progress`, or `completed`.
    pub status: String,
    /// Priority label. New tasks default to `medium`.
    pub priority: String,
    /// When the task is due, if scheduled.
    pub due_date: Option<NaiveDateTime>,
    /// When the task was created.
    pub created_at: NaiveDateTime,
}

/// Fields for creating a task.
#[derive(Debug, Clone, Serialize)]
pub struct NewTask {
    /// Short description of the work.
    pub title: String,
    /// Priority label. Omit to take the backend default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    /// Optional due date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDateTime>,
}

impl NewTask {
    /// A task with the given title and backend defaults for everything else.
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            priority: None,
            due_date: None,
        }
    }
}

/// Partial update for a task. Omitted fields stay as they are.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TaskUpdate {
    /// New workflow state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// New priority label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}

impl EchoClient {
    /// List the user's tasks, most recently created first.
    pub async fn tasks(&self) -> Result<Vec<Task>, ClientError> {
        self.get_json("/api/tasks/").await
    }

    /// Create a task. New tasks start in the `pending` state.
    pub async fn create_task(&self, task: &NewTask) -> Result<Task, ClientError> {
        self.post_json("/api/tasks/", task).await
    }

    /// Apply a partial update to the task with the given id.
    pub async fn update_task(&self, id: &str, update: &TaskUpdate) -> Result<Task, ClientError> {
        self.put_json(&format!("/api/tasks/{id}"), update).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_parses_backend_row() {
        let task: Task = serde_json::from_str(
            r#"{
                "id": "t-1",
                "user_id": "u-1",
                "title": "Write report",
                "status": "pending",
                "priority": "medium",
                "due_date": null,
                "created_at": "2024-05-01T09:30:00"
            }"#,
        )
        .expect("parses");
        assert_eq!(task.id, "t-1");
        assert_eq!(task.title, "Write report");
        assert_eq!(task.status, "pending");
        assert!(task.due_date.is_none());
    }

    #[test]
    fn task_parses_naive_due_date() {
        let task: Task = serde_json::from_str(
            r#"{
                "id": "t-2",
                "title": "Ship release",
                "status": "in_progress",
                "priority": "high",
                "due_date": "2024-06-15T17:00:00",
                "created_at": "2024-05-01T09:30:00.123456"
            }"#,
        )
        .expect("parses");
        let due = task.due_date.expect("due date set");
        assert_eq!(due.to_string(), "2024-06-15 17:00:00");
    }

    #[test]
    fn titled_task_omits_optional_fields() {
        let json = serde_json::to_value(NewTask::titled("Review PR")).expect("serializes");
        assert_eq!(json, serde_json::json!({"title": "Review PR"}));
    }

    #[test]
    fn new_task_serializes_priority_when_set() {
        let task = NewTask {
            title: "Review PR".into(),
            priority: Some("high".into()),
            due_date: None,
        };
        let json = serde_json::to_value(&task).expect("serializes");
        assert_eq!(
            json,
            serde_json::json!({"title": "Review PR", "priority": "high"})
        );
    }

    #[test]
    fn empty_update_serializes_to_empty_object() {
        let json = serde_json::to_value(TaskUpdate::default()).expect("serializes");
        assert_eq!(json, serde_json::json!({}));
    }

    #[test]
    fn update_carries_only_set_fields() {
        let update = TaskUpdate {
            status: Some("completed".into()),
            priority: None,
        };
        let json = serde_json::to_value(&update).expect("serializes");
        assert_eq!(json, serde_json::json!({"status": "completed"}));
    }
}
