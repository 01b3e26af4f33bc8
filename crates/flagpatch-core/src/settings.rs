//! Patcher settings loaded from an optional config file.

use serde::{Deserialize, Serialize};

use flagpatch_fs::{ConfigStore, NormalizedPath};

use crate::error::Result;
use crate::marker::{DEFAULT_COMMENT_PREFIX, DEFAULT_MARKERS, MarkerSet};

/// Header location used when nothing is configured, relative to the
/// directory the tool runs from.
pub const DEFAULT_HEADER: &str = "../include/tester.h";

/// Which header to patch and which flags to toggle.
///
/// ```toml
/// header = "include/tester.h"
/// markers = ["TESTENABLE", "TESTS"]
/// comment_prefix = "// "
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub header: String,
    pub markers: Vec<String>,
    pub comment_prefix: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            header: DEFAULT_HEADER.to_string(),
            markers: DEFAULT_MARKERS.iter().map(|m| (*m).to_string()).collect(),
            comment_prefix: DEFAULT_COMMENT_PREFIX.to_string(),
        }
    }
}

impl Settings {
    /// File looked up in the working directory when `--config` is not given.
    pub const FILE_NAME: &'static str = "flagpatch.toml";

    /// Load settings from `path`.
    ///
    /// A relative `header` is resolved against the config file's directory.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        let mut settings: Self = ConfigStore::new().load(path)?;
        if let Some(dir) = path.parent() {
            settings.header = NormalizedPath::new(&settings.header)
                .resolve_against(&dir)
                .to_string();
        }
        tracing::debug!(config = %path, header = %settings.header, "loaded settings");
        Ok(settings)
    }

    /// Load `dir/flagpatch.toml` if present, otherwise fall back to defaults.
    pub fn discover(dir: &NormalizedPath) -> Result<Self> {
        let candidate = dir.join(Self::FILE_NAME);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            tracing::debug!(dir = %dir, "no config file, using defaults");
            Ok(Self::default())
        }
    }

    pub fn header_path(&self) -> NormalizedPath {
        NormalizedPath::new(&self.header)
    }

    pub fn marker_set(&self) -> Result<MarkerSet> {
        MarkerSet::from_names(self.markers.as_slice(), &self.comment_prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_match_tester_header() {
        let settings = Settings::default();
        assert_eq!(settings.header, "../include/tester.h");
        assert_eq!(settings.marker_set().unwrap(), MarkerSet::default());
    }

    #[test]
    fn test_load_resolves_header_against_config_dir() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("flagpatch.toml");
        fs::write(&config, "header = \"include/tester.h\"\n").unwrap();

        let settings = Settings::load(&NormalizedPath::new(&config)).unwrap();
        let expected = NormalizedPath::new(temp.path()).join("include/tester.h");
        assert_eq!(settings.header_path(), expected);
        assert_eq!(settings.markers, vec!["TESTENABLE", "TESTS"]);
    }

    #[test]
    fn test_load_keeps_absolute_header() {
        let temp = TempDir::new().unwrap();
        let header = NormalizedPath::new(temp.path().join("abs.h"));
        let config = temp.path().join("flagpatch.json");
        fs::write(&config, format!("{{\"header\": \"{}\"}}", header.as_str())).unwrap();

        let settings = Settings::load(&NormalizedPath::new(&config)).unwrap();
        assert_eq!(settings.header_path(), header);
    }

    #[test]
    fn test_yaml_comment_prefix() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("flagpatch.yaml");
        fs::write(&config, "markers: [TRACE]\ncomment_prefix: \"//\"\n").unwrap();

        let settings = Settings::load(&NormalizedPath::new(&config)).unwrap();
        let markers = settings.marker_set().unwrap();
        let trace = markers.iter().next().unwrap();
        assert_eq!(trace.disabled(), "//#define TRACE");
    }

    #[test]
    fn test_unknown_field_rejected() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("flagpatch.toml");
        fs::write(&config, "headr = \"typo.h\"\n").unwrap();

        assert!(Settings::load(&NormalizedPath::new(&config)).is_err());
    }

    #[test]
    fn test_discover_without_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let settings = Settings::discover(&NormalizedPath::new(temp.path())).unwrap();
        assert_eq!(settings, Settings::default());
    }
}
