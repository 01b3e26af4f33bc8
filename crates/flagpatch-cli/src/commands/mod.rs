//! Command implementations for flagpatch-cli

pub mod status;
pub mod toggle;

pub use status::run_status;
pub use toggle::run_toggle;
