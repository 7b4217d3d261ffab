//! Fixtures shared by the in-memory integration tests.

use crate::test_helpers::{ManualClock, utc};
use daybook::task::{adapters::memory::InMemoryTaskRepository, services::TaskLifecycleService};
use rstest::fixture;
use std::sync::Arc;

/// Service type used by the in-memory tests.
pub type TestService = TaskLifecycleService<InMemoryTaskRepository, ManualClock>;

/// Service and clock pair so tests can advance time between writes.
pub struct Harness {
    /// Service under test.
    pub service: TestService,
    /// Clock injected into the service.
    pub clock: Arc<ManualClock>,
}

/// Harness whose clock reads 2024-03-15 02:00 UTC (10:00 at +08:00).
#[fixture]
pub fn harness() -> Harness {
    let clock = Arc::new(ManualClock::new(utc(2024, 3, 15, 2, 0)));
    let service = TaskLifecycleService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::clone(&clock),
    );
    Harness { service, clock }
}
