// VisitDesk - ui/panels/mod.rs

pub mod about;
pub mod summary;
pub mod visit_form;
pub mod visit_list;
