//! When steps for today's schedule BDD scenarios.

use super::world::{TodayScheduleWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when("today's schedule is built")]
fn build_schedule(world: &mut TodayScheduleWorld) -> Result<(), eyre::Report> {
    let schedule =
        run_async(world.service.today_schedule()).wrap_err("build today's schedule")?;
    world.schedule = Some(schedule);
    Ok(())
}
