// VisitDesk - core/mod.rs
//
// Core business logic layer.
// Must NOT depend on: ui, platform, app, or any I/O crate directly.

pub mod model;
pub mod time_input;
pub mod visit;
