// LogLens - core/mod.rs
//
// Core business logic layer.
// Must NOT depend on: ui, app, or any I/O crate directly.

pub mod export;
pub mod model;
pub mod parser;
pub mod report;
