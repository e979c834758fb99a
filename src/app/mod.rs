// LogLens - app/mod.rs
//
// Application orchestration layer: file I/O around the pure core.

pub mod analyze;
