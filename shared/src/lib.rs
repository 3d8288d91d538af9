//! # Taskboard Shared
//!
//! Configuration and response types shared across the Taskboard backend
//! crates. This crate is dependency-light on purpose: it must be usable
//! from the domain layer without dragging web or database crates along.

pub mod config;
pub mod types;
