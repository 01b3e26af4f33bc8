//! Filesystem primitives for flagpatch
//!
//! Provides normalized path handling, text reads, atomic in-place writes
//! and format-agnostic configuration loading.

pub mod config;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use path::NormalizedPath;
