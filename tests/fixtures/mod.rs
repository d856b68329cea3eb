//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test file uses every fixture

use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the iconshelf binary
pub fn iconshelf_bin() -> &'static str {
    env!("CARGO_BIN_EXE_iconshelf")
}

/// Metadata for a small package at version 2.0.0.
///
/// Groups into `Check` (fill variant new in 2.0) and `ArrowUpCircle`
/// (modified in 2.0.1), plus one deprecated and one unexported entry.
pub fn sample_metadata() -> Value {
    json!([
        {
            "componentName": "Check",
            "name": "check",
            "weight": "regular",
            "duotone": false,
            "tags": ["done", "confirm"],
            "versionAdded": "1.0",
            "fileName": "Check.tsx"
        },
        {
            "componentName": "CheckBold",
            "name": "check",
            "weight": "bold",
            "duotone": false,
            "tags": ["done"],
            "versionAdded": "1.0"
        },
        {
            "componentName": "CheckFilled",
            "name": "check",
            "weight": "fill",
            "duotone": false,
            "tags": ["done"],
            "versionAdded": "2.0",
            "variantComponentName": "CheckFilled"
        },
        {
            "componentName": "ArrowUpCircle",
            "name": "arrow-up-circle",
            "weight": "regular",
            "duotone": false,
            "tags": ["navigation"],
            "versionAdded": "1.0",
            "versionLastModified": "2.0.1"
        },
        {
            "componentName": "ArrowUpCircleBoldDuotone",
            "name": "arrow-up-circle",
            "weight": "bold",
            "duotone": true,
            "tags": ["navigation"],
            "versionAdded": "1.5"
        },
        {
            "componentName": "Checkmark",
            "weight": "regular",
            "versionAdded": "0.9"
        },
        {
            "componentName": "Ghost",
            "weight": "regular",
            "versionAdded": "1.0"
        }
    ])
}

/// Symbols exported by the sample package (everything but `Ghost`).
pub const SAMPLE_EXPORTS: &[&str] = &[
    "Check",
    "CheckBold",
    "CheckFilled",
    "ArrowUpCircle",
    "ArrowUpCircleBoldDuotone",
    "Checkmark",
];

/// A throwaway project directory.
pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    /// Creates an empty project.
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Creates a project with the sample package installed at 2.0.0.
    pub fn with_sample_package() -> Self {
        let project = Self::empty();
        project.install_package("2.0.0", &sample_metadata(), SAMPLE_EXPORTS);
        project
    }

    /// Project root.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of a project-relative file.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Writes a project-relative file, creating parent directories.
    pub fn write(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        fs::create_dir_all(path.parent().expect("file has a parent"))
            .expect("Failed to create parent dir");
        fs::write(path, content).expect("Failed to write file");
    }

    /// Reads a project-relative file.
    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative)).expect("Failed to read file")
    }

    /// Installs `stera-icons` under `node_modules`.
    pub fn install_package(&self, version: &str, metadata: &Value, exports: &[&str]) {
        let pkg = "node_modules/stera-icons";
        self.write(
            &format!("{pkg}/package.json"),
            &json!({"name": "stera-icons", "version": version}).to_string(),
        );
        self.write(
            &format!("{pkg}/dist/icons.meta.json"),
            &serde_json::to_string_pretty(metadata).expect("metadata serializes"),
        );
        self.write(
            &format!("{pkg}/dist/exports.json"),
            &json!(exports).to_string(),
        );
    }

    /// Runs iconshelf with `args` followed by `--root <project>`.
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(iconshelf_bin())
            .args(args)
            .arg("--root")
            .arg(self.root())
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to execute command")
    }

    /// Runs the build and asserts it succeeded.
    pub fn build(&self) {
        let output = self.run(&["build"]);
        assert_eq!(
            output.status.code(),
            Some(0),
            "build should succeed. stderr: {}",
            stderr(&output)
        );
    }
}

/// Parses stdout as JSON.
pub fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap_or_else(|e| {
        panic!(
            "stdout should be JSON ({e}): {}",
            String::from_utf8_lossy(&output.stdout)
        )
    })
}

/// Stdout as text.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Stderr as text.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Looks up a record by name in a parsed catalog.
pub fn find_icon<'a>(catalog: &'a Value, name: &str) -> &'a Value {
    catalog
        .as_array()
        .expect("catalog is an array")
        .iter()
        .find(|icon| icon["name"] == name)
        .unwrap_or_else(|| panic!("icon {name} should be in the catalog"))
}
