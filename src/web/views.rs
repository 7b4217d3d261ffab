//! Server-side HTML rendering.
//!
//! Templates are compiled into the binary and rendered with `minijinja`;
//! `.html` templates are auto-escaped. Handlers never pass domain types to
//! templates directly: they go through the view models below, which carry
//! pre-formatted strings.

use crate::task::domain::{DaySchedule, ScheduleRow, Task, TaskName, format_form_timestamp};
use chrono::NaiveDateTime;
use minijinja::Environment;
use serde::Serialize;

const TEMPLATES: [(&str, &str); 4] = [
    ("base.html", include_str!("../../templates/base.html")),
    ("list.html", include_str!("../../templates/list.html")),
    ("form.html", include_str!("../../templates/form.html")),
    ("today.html", include_str!("../../templates/today.html")),
];

/// Compiled template set.
#[derive(Debug)]
pub struct Views {
    env: Environment<'static>,
}

impl Views {
    /// Compiles the embedded templates.
    ///
    /// # Errors
    ///
    /// Returns [`minijinja::Error`] when a template fails to parse.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        for (name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    /// Renders the task list.
    ///
    /// # Errors
    ///
    /// Returns [`minijinja::Error`] when rendering fails.
    pub fn task_list(&self, tasks: &[Task]) -> Result<String, minijinja::Error> {
        let rows: Vec<TaskView> = tasks.iter().map(TaskView::from).collect();
        self.render("list.html", minijinja::context! { tasks => rows })
    }

    /// Renders the empty creation form.
    ///
    /// # Errors
    ///
    /// Returns [`minijinja::Error`] when rendering fails.
    pub fn add_form(&self) -> Result<String, minijinja::Error> {
        self.render(
            "form.html",
            minijinja::context! {
                is_edit => false,
                values => FormValues::default(),
                max_name_chars => TaskName::MAX_CHARS,
            },
        )
    }

    /// Renders the edit form pre-filled with `task`.
    ///
    /// # Errors
    ///
    /// Returns [`minijinja::Error`] when rendering fails.
    pub fn edit_form(&self, task: &Task) -> Result<String, minijinja::Error> {
        self.render(
            "form.html",
            minijinja::context! {
                is_edit => true,
                task_id => task.id().value(),
                values => FormValues::from(task),
                max_name_chars => TaskName::MAX_CHARS,
            },
        )
    }

    /// Renders the half-hour grid for a day.
    ///
    /// # Errors
    ///
    /// Returns [`minijinja::Error`] when rendering fails.
    pub fn day_schedule(&self, schedule: &DaySchedule) -> Result<String, minijinja::Error> {
        let rows: Vec<SlotView> = schedule.rows().iter().map(SlotView::from).collect();
        self.render(
            "today.html",
            minijinja::context! {
                date => schedule.date().format("%Y-%m-%d").to_string(),
                rows => rows,
            },
        )
    }

    fn render(&self, name: &str, ctx: minijinja::Value) -> Result<String, minijinja::Error> {
        self.env.get_template(name)?.render(ctx)
    }
}

/// Formats a duration in minutes for display, e.g. `15 min` or `-0.5 min`.
///
/// Values are rounded to two decimals and trailing zeroes are dropped.
#[must_use]
pub fn duration_label(minutes: f64) -> String {
    let rounded = format!("{minutes:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    let shown = if trimmed == "-0" { "0" } else { trimmed };
    format!("{shown} min")
}

fn display_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.format("%Y-%m-%d %H:%M").to_string()
}

#[derive(Debug, Serialize)]
struct TaskView {
    id: i32,
    name: String,
    start: String,
    end: String,
    duration: f64,
    duration_label: String,
}

impl From<&Task> for TaskView {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().value(),
            name: task.name().as_str().to_owned(),
            start: display_timestamp(task.start()),
            end: display_timestamp(task.end()),
            duration: task.duration(),
            duration_label: duration_label(task.duration()),
        }
    }
}

#[derive(Debug, Default, Serialize)]
struct FormValues {
    name: String,
    start: String,
    end: String,
}

impl From<&Task> for FormValues {
    fn from(task: &Task) -> Self {
        Self {
            name: task.name().as_str().to_owned(),
            start: format_form_timestamp(task.start()),
            end: format_form_timestamp(task.end()),
        }
    }
}

#[derive(Debug, Serialize)]
struct SlotView {
    label: String,
    entry: Option<SlotEntryView>,
}

#[derive(Debug, Serialize)]
struct SlotEntryView {
    task_id: i32,
    task_name: String,
    end_time: String,
    duration_label: String,
}

impl From<&ScheduleRow> for SlotView {
    fn from(row: &ScheduleRow) -> Self {
        Self {
            label: row.slot.label(),
            entry: row.entry.as_ref().map(|entry| SlotEntryView {
                task_id: entry.task_id.value(),
                task_name: entry.task_name.clone(),
                end_time: entry.end_time.format("%H:%M").to_string(),
                duration_label: duration_label(entry.duration),
            }),
        }
    }
}
