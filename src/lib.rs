// LogLens - lib.rs
//
// Library entry point, exposing all modules for integration testing
// and potential programmatic use.

pub mod app;
pub mod core;
pub mod ui;
pub mod util;
