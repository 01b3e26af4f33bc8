//! Feature-flag marker toggling for C/C++ headers.
//!
//! A header such as `include/tester.h` carries commented-out defines that
//! gate test-only code paths:
//!
//! ```text
//! // #define TESTENABLE
//! // #define TESTS
//! ```
//!
//! Enabling rewrites those lines to their active form in place; every other
//! byte of the file is left untouched.
//!
//! ```
//! use flagpatch_core::{Direction, MarkerSet, patch_text};
//!
//! let plan = patch_text("// #define TESTS\n#define OTHER 1\n", &MarkerSet::default(), Direction::Enable);
//! assert_eq!(plan.patched(), "#define TESTS\n#define OTHER 1\n");
//! ```

pub mod error;
pub mod header;
pub mod marker;
pub mod patch;
pub mod settings;

pub use error::{Error, Result};
pub use header::{HeaderPatcher, PatchReport};
pub use marker::{Direction, Marker, MarkerSet};
pub use patch::{LineChange, MarkerState, MarkerStatus, PatchPlan, inspect, patch_text};
pub use settings::Settings;
