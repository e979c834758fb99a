// LogLens - ui/mod.rs
//
// Presentation layer: console rendering only, no aggregation logic.

pub mod console;
