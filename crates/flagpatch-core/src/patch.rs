//! Line-oriented marker rewriting.
//!
//! Text is split into lines inclusive of their terminators, so `\r\n`
//! endings and a missing final newline survive a pass unchanged. Only the
//! body of a line is matched against markers.

use std::borrow::Cow;

use serde::Serialize;
use similar::TextDiff;

use crate::marker::{Direction, Marker, MarkerSet};

/// One rewritten line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineChange {
    /// 1-based line number
    pub line_number: usize,
    pub before: String,
    pub after: String,
}

/// Result of running a pass over some text, before anything is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatchPlan {
    pub direction: Direction,
    pub changes: Vec<LineChange>,
    #[serde(skip)]
    original: String,
    #[serde(skip)]
    patched: String,
}

impl PatchPlan {
    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn patched(&self) -> &str {
        &self.patched
    }

    /// True when the pass left every line untouched.
    pub fn is_noop(&self) -> bool {
        self.changes.is_empty()
    }

    /// Unified diff of the pass, labelled with `label` on both sides.
    pub fn diff(&self, label: &str) -> String {
        if self.is_noop() {
            return String::new();
        }
        let label = label.trim_start_matches('/');
        TextDiff::from_lines(self.original.as_str(), self.patched.as_str())
            .unified_diff()
            .context_radius(2)
            .header(&format!("a/{label}"), &format!("b/{label}"))
            .to_string()
    }
}

/// Rewrite every marker in `text` in the given direction.
///
/// Enabling replaces each occurrence of a marker's disabled form on a line
/// with its enabled form. Disabling comments out a line whose content, after
/// leading whitespace, starts with an enabled form, unless the line already
/// carries the disabled form.
pub fn patch_text(text: &str, markers: &MarkerSet, direction: Direction) -> PatchPlan {
    let mut patched = String::with_capacity(text.len() + markers.len() * 4);
    let mut changes = Vec::new();

    for (idx, line) in text.split_inclusive('\n').enumerate() {
        let (body, ending) = split_line_ending(line);

        let rewritten = markers.iter().fold(Cow::Borrowed(body), |current, marker| {
            match rewrite_line(&current, marker, direction) {
                Some(next) => Cow::Owned(next),
                None => current,
            }
        });

        if let Cow::Owned(after) = &rewritten {
            tracing::debug!(line = idx + 1, before = body, after = %after, "rewrote marker line");
            changes.push(LineChange {
                line_number: idx + 1,
                before: body.to_string(),
                after: after.clone(),
            });
        }

        patched.push_str(&rewritten);
        patched.push_str(ending);
    }

    PatchPlan {
        direction,
        changes,
        original: text.to_string(),
        patched,
    }
}

fn rewrite_line(line: &str, marker: &Marker, direction: Direction) -> Option<String> {
    match direction {
        Direction::Enable => line
            .contains(marker.disabled())
            .then(|| line.replace(marker.disabled(), marker.enabled())),
        Direction::Disable => {
            let active = is_active(line, marker) && !contains_bounded(line, marker.disabled());
            active.then(|| line.replacen(marker.enabled(), marker.disabled(), 1))
        }
    }
}

/// Line content, after indentation, opens with the marker's enabled form.
fn is_active(line: &str, marker: &Marker) -> bool {
    line.trim_start()
        .strip_prefix(marker.enabled())
        .is_some_and(ends_identifier)
}

/// `needle` occurs in `line` not followed by further identifier characters,
/// so `#define TESTS` does not match `#define TESTS_COUNT`.
fn contains_bounded(line: &str, needle: &str) -> bool {
    line.match_indices(needle)
        .any(|(idx, _)| ends_identifier(&line[idx + needle.len()..]))
}

fn ends_identifier(rest: &str) -> bool {
    !rest.starts_with(|c: char| c.is_ascii_alphanumeric() || c == '_')
}

fn split_line_ending(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}

/// How a marker currently appears in a header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerState {
    Enabled,
    Disabled,
    /// Both forms appear on different lines
    Mixed,
    Missing,
}

impl std::fmt::Display for MarkerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Enabled => "enabled",
            Self::Disabled => "disabled",
            Self::Mixed => "mixed",
            Self::Missing => "missing",
        };
        f.write_str(s)
    }
}

/// Per-marker line counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkerStatus {
    pub name: String,
    pub state: MarkerState,
    pub enabled_lines: usize,
    pub disabled_lines: usize,
}

/// Report each marker's state without changing anything.
///
/// A line counts as disabled when it contains the disabled form, otherwise
/// as enabled when it opens with the enabled form. Both checks stop at the
/// end of the flag name, so longer identifiers sharing a prefix are ignored.
pub fn inspect(text: &str, markers: &MarkerSet) -> Vec<MarkerStatus> {
    markers
        .iter()
        .map(|marker| {
            let (mut enabled_lines, mut disabled_lines) = (0, 0);
            for line in text.lines() {
                if contains_bounded(line, marker.disabled()) {
                    disabled_lines += 1;
                } else if is_active(line, marker) {
                    enabled_lines += 1;
                }
            }
            let state = match (enabled_lines, disabled_lines) {
                (0, 0) => MarkerState::Missing,
                (_, 0) => MarkerState::Enabled,
                (0, _) => MarkerState::Disabled,
                _ => MarkerState::Mixed,
            };
            MarkerStatus {
                name: marker.name().to_string(),
                state,
                enabled_lines,
                disabled_lines,
            }
        })
        .collect()
}
