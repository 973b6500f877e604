//! A stand-in Python interpreter for end-to-end tests.
//!
//! The script answers the pip and pipdeptree invocations the CLI makes
//! and appends every argument list to `calls.log` next to itself.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

const PIP_LIST_VERBOSE: &str = r#"[{"name": "requests", "version": "2.31.0", "location": "/Users/dev/.venv/lib/python3.12/site-packages", "installer": "pip"}, {"name": "urllib3", "version": "2.2.1", "location": "/Users/dev/.venv/lib/python3.12/site-packages", "installer": "pip"}, {"name": "black", "version": "24.1.0", "location": "/Users/dev/.venv/lib/python3.12/site-packages", "installer": "pip"}, {"name": "six", "version": "1.16.0", "location": "/Library/Python/3.9/site-packages", "installer": "pip"}, {"name": "pip", "version": "24.0", "location": "/Users/dev/.venv/lib/python3.12/site-packages", "installer": "pip"}]"#;

const PIP_LIST: &str = r#"[{"name": "requests", "version": "2.31.0"}, {"name": "urllib3", "version": "2.2.1"}, {"name": "black", "version": "24.1.0"}, {"name": "six", "version": "1.16.0"}, {"name": "pip", "version": "24.0"}]"#;

const PIPDEPTREE_JSON: &str = r#"[{"package": {"key": "requests", "package_name": "requests", "installed_version": "2.31.0"}, "dependencies": [{"key": "urllib3", "package_name": "urllib3", "installed_version": "2.2.1", "required_version": ">=1.21.1,<3"}]}, {"package": {"key": "urllib3", "package_name": "urllib3", "installed_version": "2.2.1"}, "dependencies": []}]"#;

const PROBE_MISSING: &str = "echo 'No module named pipdeptree' >&2; exit 1";
const INSTALL_REFUSED: &str = "echo 'install disabled' >&2; exit 1";

/// Fake interpreter inside a test directory
pub struct FakePython {
    path: PathBuf,
    log: PathBuf,
}

#[allow(dead_code)]
impl FakePython {
    /// Interpreter with pipdeptree already installed
    pub fn install(dir: &Path) -> Self {
        Self::write(dir, "echo 2.16.0", INSTALL_REFUSED)
    }

    /// Interpreter whose pipdeptree probe always fails
    pub fn without_pipdeptree(dir: &Path) -> Self {
        Self::write(dir, PROBE_MISSING, INSTALL_REFUSED)
    }

    /// Interpreter that lacks pipdeptree until `pip install` provides it;
    /// the install chats on stdout like pip does
    pub fn installable_pipdeptree(dir: &Path) -> Self {
        Self::write(
            dir,
            r#"if [ -f "$(dirname "$0")/pipdeptree.installed" ]; then echo 2.16.0; else exit 1; fi"#,
            r#"echo "Collecting $4"; echo "Successfully installed $4-2.16.0"; touch "$(dirname "$0")/$4.installed""#,
        )
    }

    fn write(dir: &Path, probe: &str, install: &str) -> Self {
        let path = dir.join("python");
        let log = dir.join("calls.log");
        let script = format!(
            r#"#!/bin/sh
echo "$*" >> "$(dirname "$0")/calls.log"
case "$*" in
  "-m pip list --format=json --verbose") echo '{verbose}' ;;
  "-m pip list --format=json") echo '{plain}' ;;
  "-m pipdeptree --version") {probe} ;;
  "-m pipdeptree --json") echo '{tree}' ;;
  "-m pip uninstall "*) echo "Successfully uninstalled $4" ;;
  "-m pip install "*) {install} ;;
  *) echo "unexpected: $*" >&2; exit 2 ;;
esac
"#,
            verbose = PIP_LIST_VERBOSE,
            plain = PIP_LIST,
            probe = probe,
            install = install,
            tree = PIPDEPTREE_JSON,
        );
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        Self { path, log }
    }

    pub fn path(&self) -> &str {
        self.path.to_str().unwrap()
    }

    /// Argument lists the script was called with, in order
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(&self.log)
            .unwrap_or_default()
            .lines()
            .map(|l| l.to_string())
            .collect()
    }

    pub fn uninstalled(&self) -> Vec<String> {
        self.calls()
            .iter()
            .filter_map(|c| c.strip_prefix("-m pip uninstall "))
            .map(|rest| rest.trim_end_matches(" -y").to_string())
            .collect()
    }
}
