//! Task tracking: records, durations and the half-hour day view.
//!
//! The module follows hexagonal architecture:
//!
//! - Domain types, duration derivation and slot bucketing in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
