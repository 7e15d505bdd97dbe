// VisitDesk - app/mod.rs
//
// Application layer: state management and visit recording.
// Dependencies: core layer, validated config.
// Must NOT depend on: ui.

pub mod state;
