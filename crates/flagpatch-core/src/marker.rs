//! Marker definitions.
//!
//! A marker is a pair of forms for the same directive: the disabled
//! (commented-out) form and the enabled form. Toggling swaps one for the
//! other.

use serde::Serialize;

use crate::error::{Error, Result};

/// Comment prefix used by the canonical header.
pub const DEFAULT_COMMENT_PREFIX: &str = "// ";

/// Flags toggled when nothing else is configured.
pub const DEFAULT_MARKERS: [&str; 2] = ["TESTENABLE", "TESTS"];

/// Which way a pass rewrites markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Disabled form -> enabled form
    #[default]
    Enable,
    /// Enabled form -> disabled form
    Disable,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Enable => write!(f, "enable"),
            Self::Disable => write!(f, "disable"),
        }
    }
}

/// A single toggleable `#define`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    name: String,
    disabled: String,
    enabled: String,
}

impl Marker {
    /// Marker for `#define NAME` commented out with `// `.
    ///
    /// ```
    /// use flagpatch_core::Marker;
    ///
    /// let marker = Marker::define("TESTS").unwrap();
    /// assert_eq!(marker.disabled(), "// #define TESTS");
    /// assert_eq!(marker.enabled(), "#define TESTS");
    /// ```
    pub fn define(name: &str) -> Result<Self> {
        Self::with_prefix(name, DEFAULT_COMMENT_PREFIX)
    }

    /// Marker for `#define NAME` commented out with an arbitrary prefix.
    pub fn with_prefix(name: &str, prefix: &str) -> Result<Self> {
        validate_name(name)?;
        if prefix.is_empty() {
            return Err(Error::InvalidMarker {
                name: name.to_string(),
                reason: "comment prefix is empty".into(),
            });
        }
        if prefix.contains('\n') || prefix.contains('\r') {
            return Err(Error::InvalidMarker {
                name: name.to_string(),
                reason: "comment prefix spans lines".into(),
            });
        }
        let enabled = format!("#define {name}");
        Ok(Self {
            name: name.to_string(),
            disabled: format!("{prefix}{enabled}"),
            enabled,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The commented-out form, e.g. `// #define TESTS`.
    pub fn disabled(&self) -> &str {
        &self.disabled
    }

    /// The active form, e.g. `#define TESTS`.
    pub fn enabled(&self) -> &str {
        &self.enabled
    }
}

fn validate_name(name: &str) -> Result<()> {
    let reason = if name.is_empty() {
        "name is empty"
    } else if name.starts_with(|c: char| c.is_ascii_digit()) {
        "name starts with a digit"
    } else if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        "name must be an identifier"
    } else {
        return Ok(());
    };
    Err(Error::InvalidMarker {
        name: name.to_string(),
        reason: reason.into(),
    })
}

/// Ordered set of markers. Order matters: each line is checked against the
/// markers in sequence, and later markers see earlier rewrites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerSet {
    markers: Vec<Marker>,
}

impl MarkerSet {
    /// Build `#define` markers for each name, skipping duplicates.
    pub fn from_names<S: AsRef<str>>(names: &[S], prefix: &str) -> Result<Self> {
        let mut markers: Vec<Marker> = Vec::with_capacity(names.len());
        for name in names {
            let marker = Marker::with_prefix(name.as_ref(), prefix)?;
            if !markers.iter().any(|m| m.name == marker.name) {
                markers.push(marker);
            }
        }
        Ok(Self { markers })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Marker> {
        self.markers.iter()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

impl Default for MarkerSet {
    fn default() -> Self {
        Self {
            markers: DEFAULT_MARKERS
                .iter()
                .map(|name| {
                    let enabled = format!("#define {name}");
                    Marker {
                        name: (*name).to_string(),
                        disabled: format!("{DEFAULT_COMMENT_PREFIX}{enabled}"),
                        enabled,
                    }
                })
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a MarkerSet {
    type Item = &'a Marker;
    type IntoIter = std::slice::Iter<'a, Marker>;

    fn into_iter(self) -> Self::IntoIter {
        self.markers.iter()
    }
}
