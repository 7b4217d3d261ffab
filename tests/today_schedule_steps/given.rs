//! Given steps for today's schedule BDD scenarios.

use super::world::{TodayScheduleWorld, run_async};
use chrono::{NaiveDate, NaiveTime};
use daybook::task::services::CreateTaskRequest;
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"today is "{date}""#)]
fn today_is(world: &mut TodayScheduleWorld, date: String) -> Result<(), eyre::Report> {
    let parsed = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
        .wrap_err_with(|| format!("invalid scenario date {date}"))?;
    let noon = parsed
        .and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap_or(NaiveTime::MIN))
        .and_local_timezone(world.service.today_offset())
        .single()
        .ok_or_else(|| eyre::eyre!("ambiguous local noon for {date}"))?;
    world.clock.set(noon.to_utc());
    Ok(())
}

#[given(r#"a task "{name}" from "{start}" to "{end}""#)]
fn a_task(
    world: &mut TodayScheduleWorld,
    name: String,
    start: String,
    end: String,
) -> Result<(), eyre::Report> {
    run_async(
        world
            .service
            .create(CreateTaskRequest::new(name, start, end)),
    )
    .wrap_err("create task for schedule scenario")?;
    Ok(())
}
