use super::command_runner::{run_step, spawn_error, CommandRunner, SystemCommandRunner};
use crate::cleanup::domain::{DependencyTree, DependencyTreeEntry};
use crate::ports::outbound::DependencyTreeReader;
use crate::shared::error::PruneError;
use crate::shared::Result;
use serde::Deserialize;

const TREE_STEP: &str = "read dependency tree";
const PROBE_STEP: &str = "check for pipdeptree";
const PROBE_ARGS: [&str; 3] = ["-m", "pipdeptree", "--version"];
const PIPDEPTREE_PACKAGE: &str = "pipdeptree";

#[derive(Debug, Deserialize)]
struct RawTreeEntry {
    #[serde(default)]
    package: Option<RawPackageRef>,
    #[serde(default)]
    package_name: Option<String>,
    #[serde(default)]
    dependencies: Option<Vec<RawPackageRef>>,
}

#[derive(Debug, Deserialize)]
struct RawPackageRef {
    package_name: String,
}

/// PipdeptreeReader adapter running `<python> -m pipdeptree`
pub struct PipdeptreeReader<R = SystemCommandRunner> {
    python: String,
    runner: R,
}

impl PipdeptreeReader<SystemCommandRunner> {
    pub fn new(python: impl Into<String>) -> Self {
        Self::with_runner(python, SystemCommandRunner::new())
    }
}

impl<R: CommandRunner> PipdeptreeReader<R> {
    pub fn with_runner(python: impl Into<String>, runner: R) -> Self {
        Self {
            python: python.into(),
            runner,
        }
    }
}

impl<R: CommandRunner> DependencyTreeReader for PipdeptreeReader<R> {
    fn tool_package(&self) -> &str {
        PIPDEPTREE_PACKAGE
    }

    fn is_available(&self) -> Result<bool> {
        let output = self
            .runner
            .run_captured(&self.python, &PROBE_ARGS)
            .map_err(|e| spawn_error(&self.python, &PROBE_ARGS, PROBE_STEP, e))?;
        Ok(output.success)
    }

    fn read_tree(&self) -> Result<DependencyTree> {
        let stdout = run_step(
            &self.runner,
            &self.python,
            &["-m", "pipdeptree", "--json"],
            TREE_STEP,
        )?;
        parse_pipdeptree_json(&stdout)
    }
}

/// Parses the JSON emitted by `pipdeptree --json`
///
/// Accepts pipdeptree's nested `package` object as well as a flat
/// `package_name`; a missing or null `dependencies` list counts as empty.
pub fn parse_pipdeptree_json(stdout: &[u8]) -> Result<DependencyTree> {
    let raw: Vec<RawTreeEntry> =
        serde_json::from_slice(stdout).map_err(|e| PruneError::MalformedToolOutput {
            step: TREE_STEP.to_string(),
            details: e.to_string(),
        })?;

    Ok(raw
        .into_iter()
        .map(|entry| {
            let name = entry
                .package
                .map(|p| p.package_name)
                .or(entry.package_name);
            let dependencies = entry
                .dependencies
                .unwrap_or_default()
                .into_iter()
                .map(|d| d.package_name)
                .collect();
            DependencyTreeEntry::new(name, dependencies)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::super::command_runner::test_support::{failed, ok_stdout, RecordingRunner};
    use super::super::command_runner::CommandOutput;
    use super::*;

    const PIPDEPTREE_OUTPUT: &str = r#"[
        {
            "package": {"key": "requests", "package_name": "requests", "installed_version": "2.31.0"},
            "dependencies": [
                {"key": "certifi", "package_name": "certifi", "installed_version": "2024.2.2", "required_version": ">=2017.4.17"},
                {"key": "urllib3", "package_name": "urllib3", "installed_version": "2.2.1", "required_version": ">=1.21.1,<3"}
            ]
        },
        {
            "package": {"key": "certifi", "package_name": "certifi", "installed_version": "2024.2.2"},
            "dependencies": []
        }
    ]"#;

    #[test]
    fn test_parse_nested_layout() {
        let tree = parse_pipdeptree_json(PIPDEPTREE_OUTPUT.as_bytes()).unwrap();
        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].package_name(), Some("requests"));
        assert_eq!(tree[0].dependencies(), &["certifi", "urllib3"]);
        assert!(tree[1].dependencies().is_empty());
    }

    #[test]
    fn test_parse_flat_layout_and_missing_dependencies() {
        let json = br#"[{"package_name": "a", "dependencies": [{"package_name": "b"}]}, {"package_name": "b"}, {"dependencies": null}]"#;
        let tree = parse_pipdeptree_json(json).unwrap();
        assert_eq!(tree[0].package_name(), Some("a"));
        assert_eq!(tree[0].dependencies(), &["b"]);
        assert!(tree[1].dependencies().is_empty());
        assert_eq!(tree[2].package_name(), None);
    }

    #[test]
    fn test_parse_malformed() {
        let err = parse_pipdeptree_json(b"{not a list}").unwrap_err().to_string();
        assert!(err.contains(TREE_STEP));
    }

    #[test]
    fn test_parse_dependency_without_name() {
        assert!(parse_pipdeptree_json(br#"[{"dependencies": [{"key": "b"}]}]"#).is_err());
    }

    #[test]
    fn test_is_available_probes_version() {
        let reader = PipdeptreeReader::with_runner("python3", RecordingRunner::default());
        assert!(reader.is_available().unwrap());
        let calls = reader.runner.calls.borrow();
        assert_eq!(calls[0].1, vec!["-m", "pipdeptree", "--version"]);
    }

    #[test]
    fn test_is_available_false_on_failure() {
        let runner = RecordingRunner::responding(vec![failed(1, "No module named pipdeptree")]);
        let reader = PipdeptreeReader::with_runner("python3", runner);
        assert!(!reader.is_available().unwrap());
    }

    struct MissingInterpreter;

    impl CommandRunner for MissingInterpreter {
        fn run_captured(&self, _program: &str, _args: &[&str]) -> std::io::Result<CommandOutput> {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"))
        }

        fn run_inherited(&self, program: &str, args: &[&str]) -> std::io::Result<CommandOutput> {
            self.run_captured(program, args)
        }

        fn run_to_stderr(&self, program: &str, args: &[&str]) -> std::io::Result<CommandOutput> {
            self.run_captured(program, args)
        }
    }

    #[test]
    fn test_is_available_propagates_spawn_failure() {
        let reader = PipdeptreeReader::with_runner("/nonexistent/python3", MissingInterpreter);
        let err = reader.is_available().unwrap_err().to_string();
        assert!(err.contains("check for pipdeptree"));
        assert!(err.contains("/nonexistent/python3 -m pipdeptree --version"));
        assert!(err.contains("failed to start process"));
    }

    #[test]
    fn test_read_tree_runs_json_query() {
        let runner = RecordingRunner::responding(vec![ok_stdout(PIPDEPTREE_OUTPUT)]);
        let reader = PipdeptreeReader::with_runner("python3", runner);
        let tree = reader.read_tree().unwrap();
        assert_eq!(tree.len(), 2);
        let calls = reader.runner.calls.borrow();
        assert_eq!(calls[0].1, vec!["-m", "pipdeptree", "--json"]);
    }

    #[test]
    fn test_read_tree_non_zero_exit() {
        let runner = RecordingRunner::responding(vec![failed(1, "")]);
        let reader = PipdeptreeReader::with_runner("python3", runner);
        let err = reader.read_tree().unwrap_err().to_string();
        assert!(err.contains("read dependency tree"));
    }

    #[test]
    fn test_tool_package() {
        let reader = PipdeptreeReader::new("python3");
        assert_eq!(reader.tool_package(), "pipdeptree");
    }
}
