use super::command_runner::{
    run_background_step, run_interactive_step, run_step, CommandRunner, SystemCommandRunner,
};
use crate::cleanup::domain::{InstalledPackage, InstalledPackages};
use crate::ports::outbound::PackageManager;
use crate::shared::error::PruneError;
use crate::shared::Result;
use serde::Deserialize;

const LIST_STEP: &str = "list installed packages";

/// One element of `pip list --format=json [--verbose]`
#[derive(Debug, Deserialize)]
struct PipListEntry {
    name: String,
    version: String,
    #[serde(default, alias = "Location")]
    location: Option<String>,
}

/// PipPackageManager adapter running `<python> -m pip`
///
/// This adapter implements the PackageManager port against the pip module
/// of one specific interpreter.
pub struct PipPackageManager<R = SystemCommandRunner> {
    python: String,
    runner: R,
}

impl PipPackageManager<SystemCommandRunner> {
    pub fn new(python: impl Into<String>) -> Self {
        Self::with_runner(python, SystemCommandRunner::new())
    }
}

impl<R: CommandRunner> PipPackageManager<R> {
    pub fn with_runner(python: impl Into<String>, runner: R) -> Self {
        Self {
            python: python.into(),
            runner,
        }
    }

    fn list_args(include_location: bool) -> Vec<&'static str> {
        let mut args = vec!["-m", "pip", "list", "--format=json"];
        if include_location {
            args.push("--verbose");
        }
        args
    }
}

impl<R: CommandRunner> PackageManager for PipPackageManager<R> {
    fn list_installed(&self, include_location: bool) -> Result<InstalledPackages> {
        let args = Self::list_args(include_location);
        let stdout = run_step(&self.runner, &self.python, &args, LIST_STEP)?;
        parse_pip_list(&stdout)
    }

    fn uninstall(&self, name: &str) -> Result<()> {
        run_interactive_step(
            &self.runner,
            &self.python,
            &["-m", "pip", "uninstall", name, "-y"],
            &format!("uninstall {}", name),
        )
    }

    fn install(&self, name: &str) -> Result<()> {
        run_background_step(
            &self.runner,
            &self.python,
            &["-m", "pip", "install", name],
            &format!("install {}", name),
        )
    }
}

/// Parses the JSON emitted by `pip list --format=json`
///
/// # Errors
/// Returns an error if the output is not a JSON array of package objects or
/// contains an invalid package name
pub fn parse_pip_list(stdout: &[u8]) -> Result<InstalledPackages> {
    let entries: Vec<PipListEntry> =
        serde_json::from_slice(stdout).map_err(|e| PruneError::MalformedToolOutput {
            step: LIST_STEP.to_string(),
            details: e.to_string(),
        })?;

    let mut packages = InstalledPackages::new();
    for entry in entries {
        let package = InstalledPackage::new(entry.name, entry.version, entry.location).map_err(
            |e| PruneError::MalformedToolOutput {
                step: LIST_STEP.to_string(),
                details: e.to_string(),
            },
        )?;
        packages.push(package);
    }
    Ok(packages)
}
