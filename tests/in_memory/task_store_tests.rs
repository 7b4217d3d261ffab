//! In-memory integration tests for task create, edit and delete.

use super::helpers::{Harness, harness};
use crate::test_helpers::{at, utc};
use daybook::task::{
    domain::{TaskDomainError, TaskId},
    services::{CreateTaskRequest, TaskLifecycleError, UpdateTaskRequest},
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_task_is_listed_with_its_duration(harness: Harness) {
    let created = harness
        .service
        .create(CreateTaskRequest::new(
            "Write report",
            "2024-03-15T09:00",
            "2024-03-15T10:30",
        ))
        .await
        .expect("task should be created");

    assert_eq!(created.name().as_str(), "Write report");
    assert_eq!(created.start(), at(2024, 3, 15, 9, 0));
    assert_eq!(created.end(), at(2024, 3, 15, 10, 30));
    assert!((created.duration() - 90.0).abs() < f64::EPSILON);
    assert_eq!(created.created_at(), utc(2024, 3, 15, 2, 0));

    let listed = harness.service.list_all().await.expect("list should succeed");
    assert_eq!(listed, vec![created]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_follows_creation_order_not_start_time(harness: Harness) {
    let evening = harness
        .service
        .create(CreateTaskRequest::new(
            "Evening run",
            "2024-03-15T18:00",
            "2024-03-15T18:45",
        ))
        .await
        .expect("first task should be created");
    harness.clock.set(utc(2024, 3, 15, 3, 0));
    let morning = harness
        .service
        .create(CreateTaskRequest::new(
            "Morning standup",
            "2024-03-15T09:00",
            "2024-03-15T09:15",
        ))
        .await
        .expect("second task should be created");

    let ids: Vec<TaskId> = harness
        .service
        .list_all()
        .await
        .expect("list should succeed")
        .iter()
        .map(|task| task.id())
        .collect();
    assert_eq!(ids, vec![evening.id(), morning.id()]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn invalid_input_is_rejected_without_storing_anything(harness: Harness) {
    let blank = harness
        .service
        .create(CreateTaskRequest::new("   ", "2024-03-15T09:00", "2024-03-15T10:00"))
        .await
        .expect_err("blank names should be rejected");
    assert!(matches!(
        blank,
        TaskLifecycleError::Validation(TaskDomainError::EmptyTaskName)
    ));

    let malformed = harness
        .service
        .create(CreateTaskRequest::new("Review", "15/03/2024 09:00", "2024-03-15T10:00"))
        .await
        .expect_err("malformed timestamps should be rejected");
    assert_eq!(malformed.kind(), "validation");

    assert!(
        harness
            .service
            .list_all()
            .await
            .expect("list should succeed")
            .is_empty()
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn editing_replaces_fields_and_keeps_identity(harness: Harness) {
    let created = harness
        .service
        .create(CreateTaskRequest::new(
            "Draft",
            "2024-03-15T09:00",
            "2024-03-15T09:30",
        ))
        .await
        .expect("task should be created");
    harness.clock.set(utc(2024, 3, 15, 6, 0));

    let updated = harness
        .service
        .update(UpdateTaskRequest::new(
            created.id(),
            "Final draft",
            "2024-03-15T13:00",
            "2024-03-15T15:15",
        ))
        .await
        .expect("task should be updated");

    assert_eq!(updated.id(), created.id());
    assert_eq!(updated.created_at(), created.created_at());
    assert_eq!(updated.name().as_str(), "Final draft");
    assert!((updated.duration() - 135.0).abs() < f64::EPSILON);

    let fetched = harness
        .service
        .get(created.id())
        .await
        .expect("task should still exist");
    assert_eq!(fetched, updated);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn end_before_start_is_stored_with_negative_duration(harness: Harness) {
    let created = harness
        .service
        .create(CreateTaskRequest::new(
            "Backwards",
            "2024-03-15T11:00",
            "2024-03-15T10:00",
        ))
        .await
        .expect("reversed intervals are accepted");

    assert!((created.duration() + 60.0).abs() < f64::EPSILON);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_twice_reports_not_found(harness: Harness) {
    let created = harness
        .service
        .create(CreateTaskRequest::new(
            "Temporary",
            "2024-03-15T09:00",
            "2024-03-15T09:10",
        ))
        .await
        .expect("task should be created");

    harness
        .service
        .delete(created.id())
        .await
        .expect("first delete should succeed");
    let second = harness
        .service
        .delete(created.id())
        .await
        .expect_err("second delete should fail");

    assert!(matches!(second, TaskLifecycleError::NotFound(id) if id == created.id()));
    assert!(matches!(
        harness.service.get(created.id()).await,
        Err(TaskLifecycleError::NotFound(_))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_ids_are_not_handed_out_again(harness: Harness) {
    let first = harness
        .service
        .create(CreateTaskRequest::new("One", "2024-03-15T09:00", "2024-03-15T09:10"))
        .await
        .expect("first task should be created");
    harness
        .service
        .delete(first.id())
        .await
        .expect("delete should succeed");

    let second = harness
        .service
        .create(CreateTaskRequest::new("Two", "2024-03-15T09:00", "2024-03-15T09:10"))
        .await
        .expect("second task should be created");

    assert!(second.id() > first.id());
}
