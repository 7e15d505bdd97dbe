// VisitDesk - ui/widgets/mod.rs
//
// Reusable form widgets.

pub mod time_input;
