//! [`TestHeader`] fixture.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A `tester.h` as checked in, with both test flags commented out.
pub const TESTER_HEADER: &str = "\
#ifndef TESTER_H
#define TESTER_H

// Uncomment to build the test binary instead of the emulator
// #define TESTENABLE
// #define TESTS

#define MEMORY_SIZE 0x10000

#endif
";

/// [`TESTER_HEADER`] after both flags are enabled.
pub const TESTER_HEADER_ENABLED: &str = "\
#ifndef TESTER_H
#define TESTER_H

// Uncomment to build the test binary instead of the emulator
#define TESTENABLE
#define TESTS

#define MEMORY_SIZE 0x10000

#endif
";

/// Temporary project with the layout the patcher expects by default:
///
/// ```text
/// <root>/include/tester.h
/// <root>/test/            (working directory for the default relative path)
/// ```
pub struct TestHeader {
    temp_dir: TempDir,
}

impl Default for TestHeader {
    fn default() -> Self {
        Self::new()
    }
}

impl TestHeader {
    /// Project containing the stock [`TESTER_HEADER`].
    pub fn new() -> Self {
        Self::with_content(TESTER_HEADER)
    }

    /// Project whose header holds `content`.
    pub fn with_content(content: &str) -> Self {
        let fixture = Self::without_header();
        fixture.write(content);
        fixture
    }

    /// Project layout with no header file, for missing-file scenarios.
    pub fn without_header() -> Self {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("include")).unwrap();
        fs::create_dir_all(temp_dir.path().join("test")).unwrap();
        Self { temp_dir }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// `<root>/test`, where `../include/tester.h` resolves to the header.
    pub fn test_dir(&self) -> PathBuf {
        self.root().join("test")
    }

    pub fn path(&self) -> PathBuf {
        self.root().join("include").join("tester.h")
    }

    pub fn write(&self, content: &str) {
        fs::write(self.path(), content).unwrap();
    }

    pub fn read(&self) -> String {
        fs::read_to_string(self.path()).unwrap()
    }

    pub fn exists(&self) -> bool {
        self.path().exists()
    }

    /// Write a file relative to the project root.
    pub fn write_file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.root().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Names of entries under `include/`, sorted.
    pub fn include_entries(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.root().join("include"))
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Panics unless the header equals `expected` byte for byte.
    pub fn assert_content(&self, expected: &str) {
        let actual = self.read();
        assert!(
            actual == expected,
            "header content mismatch\n--- expected ---\n{}\n--- actual ---\n{}",
            expected,
            actual
        );
    }
}
