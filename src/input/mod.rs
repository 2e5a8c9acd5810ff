//! Sequence acquisition
//!
//! Parsing CLI value lists and loading sequences from files.

pub mod loader;

pub use loader::{LoadError, load_from_file, parse_values};
