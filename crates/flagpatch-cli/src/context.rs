//! Resolution of settings from the working directory, config file and flags.

use std::path::{Path, PathBuf};

use flagpatch_core::{HeaderPatcher, Settings};
use flagpatch_fs::NormalizedPath;

use crate::error::{CliError, Result};

/// Command-line overrides applied on top of the loaded settings.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub config: Option<PathBuf>,
    pub header: Option<PathBuf>,
    pub flags: Vec<String>,
}

/// Everything a command needs: where the header is and how to patch it.
#[derive(Debug, Clone)]
pub struct PatchContext {
    pub header: NormalizedPath,
    pub settings: Settings,
}

impl PatchContext {
    /// Resolve settings for a run from `cwd`.
    ///
    /// Precedence: command-line flags, then the config file (explicit or
    /// `flagpatch.toml` in `cwd`), then built-in defaults. Relative paths
    /// given on the command line resolve against `cwd`.
    pub fn resolve(cwd: &Path, overrides: &Overrides) -> Result<Self> {
        let cwd = NormalizedPath::new(cwd);

        let mut settings = match &overrides.config {
            Some(config) => {
                let config = NormalizedPath::new(config).resolve_against(&cwd);
                if !config.is_file() {
                    return Err(CliError::user(format!("Config file not found: {config}")));
                }
                Settings::load(&config)?
            }
            None => Settings::discover(&cwd)?,
        };

        if let Some(header) = &overrides.header {
            settings.header = NormalizedPath::new(header).to_string();
        }
        if !overrides.flags.is_empty() {
            settings.markers = overrides.flags.clone();
        }

        let mut header = settings.header_path().resolve_against(&cwd);
        if header.is_file() {
            header = header.canonicalize()?;
        }
        tracing::debug!(header = %header, markers = ?settings.markers, "resolved context");

        Ok(Self { header, settings })
    }

    pub fn patcher(&self) -> Result<HeaderPatcher> {
        Ok(HeaderPatcher::new(self.settings.marker_set()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flagpatch_test_utils::TestHeader;

    #[test]
    fn test_defaults_from_test_dir() {
        let fixture = TestHeader::new();
        let ctx = PatchContext::resolve(&fixture.test_dir(), &Overrides::default()).unwrap();

        assert!(ctx.header.as_str().ends_with("include/tester.h"));
        assert!(!ctx.header.as_str().contains(".."));
        assert!(ctx.header.is_file());
    }

    #[test]
    fn test_header_override_relative_to_cwd() {
        let fixture = TestHeader::new();
        let overrides = Overrides {
            header: Some(PathBuf::from("include/tester.h")),
            ..Overrides::default()
        };

        let ctx = PatchContext::resolve(fixture.root(), &overrides).unwrap();
        let expected = NormalizedPath::new(fixture.path()).canonicalize().unwrap();
        assert_eq!(ctx.header, expected);
    }

    #[test]
    fn test_flags_override_config() {
        let fixture = TestHeader::new();
        fixture.write_file(
            "flagpatch.toml",
            "header = \"include/tester.h\"\nmarkers = [\"FROM_CONFIG\"]\n",
        );
        let overrides = Overrides {
            flags: vec!["FROM_CLI".into()],
            ..Overrides::default()
        };

        let ctx = PatchContext::resolve(fixture.root(), &overrides).unwrap();
        assert_eq!(ctx.settings.markers, vec!["FROM_CLI"]);
        assert!(ctx.header.is_file());
    }

    #[test]
    fn test_missing_header_keeps_unresolved_path() {
        let fixture = TestHeader::without_header();
        let ctx = PatchContext::resolve(&fixture.test_dir(), &Overrides::default()).unwrap();

        assert!(ctx.header.as_str().ends_with("test/../include/tester.h"));
    }

    #[test]
    fn test_missing_explicit_config() {
        let fixture = TestHeader::new();
        let overrides = Overrides {
            config: Some(PathBuf::from("nope.toml")),
            ..Overrides::default()
        };

        let err = PatchContext::resolve(fixture.root(), &overrides).unwrap_err();
        assert!(matches!(err, CliError::User { .. }));
    }

    #[test]
    fn test_invalid_flag_is_reported() {
        let fixture = TestHeader::new();
        let overrides = Overrides {
            flags: vec!["NOT VALID".into()],
            ..Overrides::default()
        };

        let ctx = PatchContext::resolve(fixture.root(), &overrides).unwrap();
        assert!(ctx.patcher().is_err());
    }
}
