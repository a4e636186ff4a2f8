//! File input/output for the CLI front-end.

pub mod loader;
pub mod saver;
