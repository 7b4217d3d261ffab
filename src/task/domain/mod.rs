//! Domain model for task tracking.
//!
//! Holds the task record, its validated values, duration derivation and the
//! half-hour day grid. Infrastructure concerns stay outside this module.

mod duration;
mod error;
mod ids;
mod slot;
mod task;
mod timestamp;

pub use duration::compute_duration;
pub use error::TaskDomainError;
pub use ids::{TaskId, TaskName};
pub use slot::{
    DEFAULT_TODAY_OFFSET_SECS, DaySchedule, SLOT_MINUTES, SLOTS_PER_DAY, ScheduleRow, SlotEntry,
    TimeSlot, assign, build_grid, default_today_offset, slot_start_for, today_in,
};
pub use task::{NewTask, PersistedTaskData, Task, TaskDetails};
pub use timestamp::{FORM_TIMESTAMP_FORMAT, format_form_timestamp, parse_form_timestamp};
