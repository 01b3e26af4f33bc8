//! Shared test fixtures for the flagpatch workspace.
//!
//! Dev-dependency only; never published.
//!
//! - [`header`]: [`header::TestHeader`], a project layout with a header file
//!   in a temporary directory

pub mod header;

pub use header::{TESTER_HEADER, TESTER_HEADER_ENABLED, TestHeader};
