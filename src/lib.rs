//! Daybook: a small personal task tracker.
//!
//! Tasks carry a name, a start and an end; their duration is derived on
//! every write. Today's tasks are shown on a grid of 48 half-hour slots.
//!
//! # Architecture
//!
//! Daybook follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (`SQLite`, in-memory)
//!
//! # Modules
//!
//! - [`task`]: Task records, durations, the slot grid and the task service
//! - [`web`]: Routing, form handling and HTML rendering
//! - [`config`]: Server configuration from flags and the environment

pub mod config;
pub mod task;
pub mod web;
