//! In-memory integration tests for today's half-hour grid.

use super::helpers::{Harness, harness};
use crate::test_helpers::{at, day, utc};
use chrono::FixedOffset;
use daybook::task::{domain::SLOTS_PER_DAY, services::CreateTaskRequest};
use rstest::rstest;

async fn add(harness: &Harness, name: &str, start: &str, end: &str) {
    harness
        .service
        .create(CreateTaskRequest::new(name, start, end))
        .await
        .expect("task should be created");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn today_shows_only_tasks_starting_today(harness: Harness) {
    add(&harness, "Yesterday", "2024-03-14T09:00", "2024-03-14T10:00").await;
    add(&harness, "Standup", "2024-03-15T09:10", "2024-03-15T09:25").await;
    add(&harness, "Tomorrow", "2024-03-16T09:00", "2024-03-16T10:00").await;

    let schedule = harness
        .service
        .today_schedule()
        .await
        .expect("schedule should build");

    assert_eq!(schedule.date(), day(2024, 3, 15));
    assert_eq!(schedule.rows().len(), SLOTS_PER_DAY);
    let occupied: Vec<_> = schedule.occupied().collect();
    assert_eq!(occupied.len(), 1);
    let row = occupied.first().expect("one occupied row");
    assert_eq!(row.slot.start(), at(2024, 3, 15, 9, 0));
    assert_eq!(
        row.entry.as_ref().map(|entry| entry.task_name.as_str()),
        Some("Standup")
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn later_task_wins_a_shared_slot(harness: Harness) {
    add(&harness, "First", "2024-03-15T10:05", "2024-03-15T10:20").await;
    add(&harness, "Second", "2024-03-15T10:10", "2024-03-15T10:25").await;

    let schedule = harness
        .service
        .today_schedule()
        .await
        .expect("schedule should build");

    let names: Vec<&str> = schedule
        .occupied()
        .filter_map(|row| row.entry.as_ref())
        .map(|entry| entry.task_name.as_str())
        .collect();
    assert_eq!(names, vec!["Second"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn today_follows_the_configured_offset(harness: Harness) {
    harness.clock.set(utc(2024, 3, 15, 20, 0));
    add(&harness, "Late", "2024-03-15T21:00", "2024-03-15T22:00").await;
    add(&harness, "Early", "2024-03-16T07:00", "2024-03-16T08:00").await;

    let utc_offset = FixedOffset::east_opt(0).expect("zero offset");
    let utc_service = harness.service.clone().with_today_offset(utc_offset);

    let at_plus_eight = harness
        .service
        .today_schedule()
        .await
        .expect("schedule should build");
    let at_utc = utc_service
        .today_schedule()
        .await
        .expect("schedule should build");

    assert_eq!(at_plus_eight.date(), day(2024, 3, 16));
    assert_eq!(at_utc.date(), day(2024, 3, 15));
    let first_name = |schedule: &daybook::task::domain::DaySchedule| {
        schedule
            .occupied()
            .find_map(|row| row.entry.as_ref())
            .map(|entry| entry.task_name.clone())
    };
    assert_eq!(first_name(&at_plus_eight).as_deref(), Some("Early"));
    assert_eq!(first_name(&at_utc).as_deref(), Some("Late"));
}
