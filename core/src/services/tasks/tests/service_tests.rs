//! Tests pinning the pipeline's partial-failure contract

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;

use crate::domain::entities::task::{NewTask, TaskPatch, TaskPriority, TaskStatus};
use crate::repositories::notification::MockNotificationRepository;
use crate::repositories::task::MockTaskRepository;
use crate::services::broadcast::mock::{MockBroadcaster, Published};
use crate::services::tasks::{SideEffect, TaskService, TASK_ASSIGNED_EVENT, TASK_UPDATED_EVENT};

struct Fixture {
    tasks: Arc<MockTaskRepository>,
    notifications: Arc<MockNotificationRepository>,
    broadcaster: Arc<MockBroadcaster>,
    service: TaskService<MockTaskRepository, MockNotificationRepository, MockBroadcaster>,
}

fn fixture() -> Fixture {
    let tasks = Arc::new(MockTaskRepository::new());
    let notifications = Arc::new(MockNotificationRepository::new());
    let broadcaster = Arc::new(MockBroadcaster::new());
    let service = TaskService::new(tasks.clone(), notifications.clone(), broadcaster.clone());
    Fixture {
        tasks,
        notifications,
        broadcaster,
        service,
    }
}

fn new_task(assigned_to_id: Option<&str>) -> NewTask {
    NewTask {
        title: "Write report".to_string(),
        description: "Quarterly numbers".to_string(),
        due_date: Utc::now(),
        priority: TaskPriority::High,
        assigned_to_id: assigned_to_id.map(str::to_string),
    }
}

#[tokio::test]
async fn test_create_notifies_and_publishes_to_assignee() {
    let f = fixture();

    let created = f
        .service
        .create_task(new_task(Some("bob")), "alice")
        .await
        .unwrap();

    assert_eq!(created.task.assigned_to_id.as_deref(), Some("bob"));
    assert!(created.notification.is_completed());
    assert!(created.broadcast.is_completed());

    // Durable notification for bob, referencing the task
    let stored = f.notifications.stored().await;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].user_id, "bob");
    assert_eq!(stored[0].kind, TASK_ASSIGNED_EVENT);
    assert_eq!(stored[0].actor_id.as_deref(), Some("alice"));
    assert_eq!(
        stored[0].payload,
        json!({ "taskId": created.task.id, "title": "Write report" })
    );

    // Targeted publish to bob's channel with the full task payload
    let published = f.broadcaster.published().await;
    assert_eq!(
        published,
        vec![Published::To {
            user_id: "bob".to_string(),
            event: TASK_ASSIGNED_EVENT.to_string(),
            payload: serde_json::to_value(&created.task).unwrap(),
        }]
    );
}

#[tokio::test]
async fn test_create_defaults_assignee_to_creator() {
    let f = fixture();

    let created = f
        .service
        .create_task(new_task(None), "alice")
        .await
        .unwrap();

    // The creator self-assigns, self-notifies, and gets the targeted publish
    assert_eq!(created.task.assigned_to_id.as_deref(), Some("alice"));

    let stored = f.notifications.stored().await;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].user_id, "alice");

    match &f.broadcaster.published().await[..] {
        [Published::To { user_id, event, .. }] => {
            assert_eq!(user_id, "alice");
            assert_eq!(event, TASK_ASSIGNED_EVENT);
        }
        other => panic!("expected one targeted publish, got {:?}", other),
    }
}

#[tokio::test]
async fn test_notification_failure_does_not_fail_create() {
    let f = fixture();
    f.notifications.fail_writes(true);

    let created = f
        .service
        .create_task(new_task(Some("bob")), "alice")
        .await
        .unwrap();

    assert_eq!(created.notification, SideEffect::Failed);
    // The broadcast still went out, independent of the notification's fate
    assert_eq!(created.broadcast, SideEffect::Completed);
    assert_eq!(f.broadcaster.published().await.len(), 1);
}

#[tokio::test]
async fn test_broadcast_failure_does_not_fail_create() {
    let f = fixture();
    f.broadcaster.fail_publishes(true);

    let created = f
        .service
        .create_task(new_task(Some("bob")), "alice")
        .await
        .unwrap();

    assert_eq!(created.broadcast, SideEffect::Failed);
    assert_eq!(created.notification, SideEffect::Completed);
    assert_eq!(f.notifications.stored().await.len(), 1);
}

#[tokio::test]
async fn test_failed_write_aborts_without_side_effects() {
    let f = fixture();
    f.tasks.fail_writes(true);

    let result = f.service.create_task(new_task(Some("bob")), "alice").await;

    assert!(result.is_err());
    assert!(f.notifications.stored().await.is_empty());
    assert!(f.broadcaster.published().await.is_empty());
}

#[tokio::test]
async fn test_update_broadcasts_globally() {
    let f = fixture();

    let created = f
        .service
        .create_task(new_task(Some("bob")), "alice")
        .await
        .unwrap();

    let updated = f
        .service
        .update_task(
            &created.task.id,
            TaskPatch {
                status: Some(TaskStatus::InProgress),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.task.status, TaskStatus::InProgress);
    assert!(updated.broadcast.is_completed());

    // Update goes to everyone, not to the assignee's channel
    let published = f.broadcaster.published().await;
    match published.last() {
        Some(Published::All { event, payload }) => {
            assert_eq!(event, TASK_UPDATED_EVENT);
            assert_eq!(*payload, serde_json::to_value(&updated.task).unwrap());
        }
        other => panic!("expected a global publish, got {:?}", other),
    }
}

#[tokio::test]
async fn test_update_broadcast_failure_is_absorbed() {
    let f = fixture();

    let created = f
        .service
        .create_task(new_task(Some("bob")), "alice")
        .await
        .unwrap();

    f.broadcaster.fail_publishes(true);
    let updated = f
        .service
        .update_task(
            &created.task.id,
            TaskPatch {
                status: Some(TaskStatus::Completed),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.broadcast, SideEffect::Failed);
    assert_eq!(updated.task.status, TaskStatus::Completed);
}

#[tokio::test]
async fn test_update_missing_task_surfaces_error() {
    let f = fixture();

    let result = f
        .service
        .update_task(
            "no-such-task",
            TaskPatch {
                status: Some(TaskStatus::Review),
                ..Default::default()
            },
        )
        .await;

    assert!(result.is_err());
    assert!(f.broadcaster.published().await.is_empty());
}

#[tokio::test]
async fn test_list_covers_created_and_assigned() {
    let f = fixture();

    f.service
        .create_task(new_task(Some("bob")), "alice")
        .await
        .unwrap();
    f.service
        .create_task(new_task(None), "carol")
        .await
        .unwrap();

    let for_bob = f.service.list_tasks("bob").await.unwrap();
    assert_eq!(for_bob.len(), 1);

    let for_alice = f.service.list_tasks("alice").await.unwrap();
    assert_eq!(for_alice.len(), 1);

    let for_dave = f.service.list_tasks("dave").await.unwrap();
    assert!(for_dave.is_empty());
}
