//! In-place patching of a header file on disk.

use serde::Serialize;

use flagpatch_fs::{NormalizedPath, io};

use crate::error::{Error, Result};
use crate::marker::{Direction, MarkerSet};
use crate::patch::{MarkerState, MarkerStatus, PatchPlan, inspect, patch_text};

/// Outcome of [`HeaderPatcher::apply`].
#[derive(Debug, Clone, Serialize)]
pub struct PatchReport {
    pub path: String,
    pub dry_run: bool,
    /// Whether the file on disk was rewritten
    pub written: bool,
    #[serde(flatten)]
    pub plan: PatchPlan,
}

/// Reads a header, rewrites its markers and writes it back.
///
/// The existence check runs before anything else, so a missing header is
/// reported without creating or touching any file.
#[derive(Debug, Clone, Default)]
pub struct HeaderPatcher {
    markers: MarkerSet,
    direction: Direction,
    dry_run: bool,
}

impl HeaderPatcher {
    pub fn new(markers: MarkerSet) -> Self {
        Self {
            markers,
            ..Self::default()
        }
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Compute and report, but never write.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Compute the rewrite for `path` without writing it.
    pub fn plan(&self, path: &NormalizedPath) -> Result<PatchPlan> {
        let text = read_header(path)?;
        Ok(patch_text(&text, &self.markers, self.direction))
    }

    /// Rewrite `path` in place.
    ///
    /// The file is only written when at least one line changed, so repeated
    /// runs leave the file's modification time alone once it is patched.
    pub fn apply(&self, path: &NormalizedPath) -> Result<PatchReport> {
        let plan = self.plan(path)?;

        if plan.is_noop() {
            tracing::warn!(path = %path, direction = %self.direction, "no marker lines to rewrite");
        } else {
            for change in &plan.changes {
                tracing::debug!(line = change.line_number, "{} -> {}", change.before, change.after);
            }
        }

        let written = !self.dry_run && !plan.is_noop();
        if written {
            io::write_text(path, plan.patched())?;
            tracing::info!(
                path = %path,
                direction = %self.direction,
                lines = plan.changes.len(),
                "patched header"
            );
        }

        Ok(PatchReport {
            path: path.to_string(),
            dry_run: self.dry_run,
            written,
            plan,
        })
    }

    /// State of each marker in `path`.
    pub fn status(&self, path: &NormalizedPath) -> Result<Vec<MarkerStatus>> {
        let text = read_header(path)?;
        let statuses = inspect(&text, &self.markers);
        for status in statuses.iter().filter(|s| s.state == MarkerState::Missing) {
            tracing::warn!(path = %path, marker = %status.name, "marker not present in header");
        }
        Ok(statuses)
    }
}

fn read_header(path: &NormalizedPath) -> Result<String> {
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_native(),
        });
    }
    if !path.is_file() {
        return Err(Error::NotAFile {
            path: path.to_native(),
        });
    }
    // The header may vanish between the check and the read.
    io::read_text(path).map_err(|e| {
        if e.is_not_found() {
            Error::FileNotFound {
                path: path.to_native(),
            }
        } else {
            Error::Fs(e)
        }
    })
}
