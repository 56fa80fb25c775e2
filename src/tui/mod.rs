//! Terminal front end: one console per dashboard page.
//!
//! ## Architecture (TEA)
//!
//! Model (`TuiApp`) + Update (`input::handle_key`) + View (`layout::draw`).
//! Immediate mode: every frame renders from fresh console snapshots, the
//! consoles themselves run on their own timer tasks.

pub mod app;
pub mod event;
pub mod input;
pub mod layout;
pub mod runner;
