// VisitDesk - platform/mod.rs
//
// Platform abstraction layer: config directory resolution and config.toml.

pub mod config;
