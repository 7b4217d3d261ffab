//! Step definitions for today's schedule scenarios.

pub mod given;
pub mod then;
pub mod when;
