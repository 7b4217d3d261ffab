//! Half-hour day grid and the bucketing of tasks into it.
//!
//! A calendar day is split into [`SLOTS_PER_DAY`] contiguous slots of
//! [`SLOT_MINUTES`] minutes. Tasks starting on that day are keyed by the
//! start of the slot enclosing their start time. When two tasks share a slot
//! the one processed last wins; overlapping tasks are not shown side by side.

use super::{Task, TaskId};
use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeDelta, Timelike, Utc};
use mockable::Clock;
use serde::Serialize;
use std::collections::BTreeMap;

/// Width of one slot in minutes.
pub const SLOT_MINUTES: i64 = 30;

/// Number of slots covering a calendar day.
pub const SLOTS_PER_DAY: usize = 48;

fn slot_width() -> TimeDelta {
    TimeDelta::minutes(SLOT_MINUTES)
}

/// One half-open `[start, start + 30min)` bucket of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeSlot {
    index: usize,
    start: NaiveDateTime,
}

impl TimeSlot {
    /// Returns the zero-based position within the day.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the inclusive slot start.
    #[must_use]
    pub const fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Returns the exclusive slot end.
    #[must_use]
    pub fn end(&self) -> NaiveDateTime {
        self.start + slot_width()
    }

    /// Returns the zero-padded 24-hour `HH:MM` label.
    #[must_use]
    pub fn label(&self) -> String {
        self.start.format("%H:%M").to_string()
    }

    /// Reports whether `timestamp` falls inside this slot.
    #[must_use]
    pub fn contains(&self, timestamp: NaiveDateTime) -> bool {
        self.start <= timestamp && timestamp < self.end()
    }
}

/// Builds the full grid for `date`, always [`SLOTS_PER_DAY`] slots long.
#[must_use]
pub fn build_grid(date: NaiveDate) -> Vec<TimeSlot> {
    let midnight = date.and_time(NaiveTime::MIN);
    std::iter::successors(Some(midnight), |start| {
        start.checked_add_signed(slot_width())
    })
    .take(SLOTS_PER_DAY)
    .enumerate()
    .map(|(index, start)| TimeSlot { index, start })
    .collect()
}

/// Truncates a timestamp to the start of its enclosing slot.
#[must_use]
pub fn slot_start_for(timestamp: NaiveDateTime) -> NaiveDateTime {
    let half_hour = if timestamp.minute() < 30 { 0 } else { 30 };
    let minutes_into_day = timestamp.hour() * 60 + half_hour;
    timestamp.date().and_time(NaiveTime::MIN) + TimeDelta::minutes(i64::from(minutes_into_day))
}

/// What the day view shows for an occupied slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotEntry {
    /// Identifier of the task occupying the slot.
    pub task_id: TaskId,
    /// Task name.
    pub task_name: String,
    /// Task end timestamp.
    pub end_time: NaiveDateTime,
    /// Task duration in minutes.
    pub duration: f64,
}

impl From<&Task> for SlotEntry {
    fn from(task: &Task) -> Self {
        Self {
            task_id: task.id(),
            task_name: task.name().as_str().to_owned(),
            end_time: task.end(),
            duration: task.duration(),
        }
    }
}

/// Maps each task starting on `date` to its slot start.
///
/// Tasks starting on other days are ignored. Slots without a task are
/// absent from the result. Tasks are applied in iteration order, so a later
/// task replaces an earlier one in the same slot.
#[must_use]
pub fn assign<'a, I>(tasks: I, date: NaiveDate) -> BTreeMap<NaiveDateTime, SlotEntry>
where
    I: IntoIterator<Item = &'a Task>,
{
    let mut entries = BTreeMap::new();
    for task in tasks {
        if task.start().date() != date {
            continue;
        }
        entries.insert(slot_start_for(task.start()), SlotEntry::from(task));
    }
    entries
}

/// One grid row paired with the task occupying it, if any.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleRow {
    /// Slot covered by the row.
    pub slot: TimeSlot,
    /// Task shown in the slot.
    pub entry: Option<SlotEntry>,
}

/// Full day view: every slot of the grid with its optional entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySchedule {
    date: NaiveDate,
    rows: Vec<ScheduleRow>,
}

impl DaySchedule {
    /// Lays `tasks` out against the grid for `date`.
    #[must_use]
    pub fn build<'a, I>(date: NaiveDate, tasks: I) -> Self
    where
        I: IntoIterator<Item = &'a Task>,
    {
        let mut entries = assign(tasks, date);
        let rows = build_grid(date)
            .into_iter()
            .map(|slot| ScheduleRow {
                entry: entries.remove(&slot.start()),
                slot,
            })
            .collect();
        Self { date, rows }
    }

    /// Returns the scheduled date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns all rows in slot order.
    #[must_use]
    pub fn rows(&self) -> &[ScheduleRow] {
        &self.rows
    }

    /// Returns the rows that carry a task.
    pub fn occupied(&self) -> impl Iterator<Item = &ScheduleRow> {
        self.rows.iter().filter(|row| row.entry.is_some())
    }
}

/// Seconds east of UTC used for "today" unless configured otherwise.
pub const DEFAULT_TODAY_OFFSET_SECS: i32 = 8 * 60 * 60;

/// Returns the default "today" offset, UTC+08:00.
#[must_use]
pub fn default_today_offset() -> FixedOffset {
    FixedOffset::east_opt(DEFAULT_TODAY_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// Returns the calendar date of the clock's current instant at `offset`.
#[must_use]
pub fn today_in(clock: &impl Clock, offset: FixedOffset) -> NaiveDate {
    clock.utc().with_timezone(&offset).date_naive()
}
