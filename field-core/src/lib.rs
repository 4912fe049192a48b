//! Core 2-D particle field simulation library.
//!
//! Main components:
//! - [`body`] — individual simulated bodies.
//! - [`field`] — a bounded collection of bodies and its build rules.
//! - [`config`] — per-field simulation parameters and presets.
//! - [`step`] — per-tick update logic (integration, reflection, pointer influence).
//! - [`links`] — proximity edge computation between body pairs.
//! - [`typewriter`] — tick-based typewriter text effect.
//! - [`types`] — shared type aliases and IDs.

pub mod body;
pub mod config;
pub mod field;
pub mod links;
pub mod step;
pub mod typewriter;
pub mod types;
