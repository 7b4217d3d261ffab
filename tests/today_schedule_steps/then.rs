//! Then steps for today's schedule BDD scenarios.

use super::world::TodayScheduleWorld;
use daybook::task::domain::{DaySchedule, ScheduleRow};
use rstest_bdd_macros::then;

fn schedule(world: &TodayScheduleWorld) -> Result<&DaySchedule, eyre::Report> {
    world
        .schedule
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing schedule in scenario world"))
}

fn row<'a>(schedule: &'a DaySchedule, label: &str) -> Result<&'a ScheduleRow, eyre::Report> {
    schedule
        .rows()
        .iter()
        .find(|row| row.slot.label() == label)
        .ok_or_else(|| eyre::eyre!("no slot labelled {label}"))
}

#[then("the schedule has {count:usize} slots")]
fn schedule_has_slots(world: &TodayScheduleWorld, count: usize) -> Result<(), eyre::Report> {
    let found = schedule(world)?.rows().len();
    eyre::ensure!(found == count, "expected {count} slots, found {found}");
    Ok(())
}

#[then(r#"slot "{label}" shows "{name}""#)]
fn slot_shows(world: &TodayScheduleWorld, label: String, name: String) -> Result<(), eyre::Report> {
    let found = row(schedule(world)?, &label)?
        .entry
        .as_ref()
        .map(|entry| entry.task_name.as_str());
    eyre::ensure!(
        found == Some(name.as_str()),
        "expected slot {label} to show {name}, found {found:?}"
    );
    Ok(())
}

#[then(r#"slot "{label}" is empty"#)]
fn slot_is_empty(world: &TodayScheduleWorld, label: String) -> Result<(), eyre::Report> {
    let entry = &row(schedule(world)?, &label)?.entry;
    eyre::ensure!(entry.is_none(), "expected slot {label} to be empty, found {entry:?}");
    Ok(())
}

#[then("{count:usize} slot is occupied")]
fn occupied_slots(world: &TodayScheduleWorld, count: usize) -> Result<(), eyre::Report> {
    let found = schedule(world)?.occupied().count();
    eyre::ensure!(found == count, "expected {count} occupied slots, found {found}");
    Ok(())
}
