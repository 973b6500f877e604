use crate::application::dto::{ScanRequest, ScanResponse};
use crate::cleanup::domain::{Category, DependencyTree, InstalledPackages};
use crate::cleanup::services::{PackageClassifier, RequiredSetCalculator};
use crate::ports::outbound::{DependencyTreeReader, PackageManager, ProgressReporter};
use crate::shared::error::PruneError;
use crate::shared::Result;
use anyhow::Context;

const SCAN_STEPS: usize = 2;

/// ScanEnvironmentUseCase - Lists, analyzes and classifies installed packages
///
/// Each external tool is queried exactly once; a failure of either query
/// aborts the scan before anything is classified.
///
/// # Type Parameters
/// * `PM` - PackageManager implementation
/// * `DT` - DependencyTreeReader implementation
/// * `PR` - ProgressReporter implementation
pub struct ScanEnvironmentUseCase<PM, DT, PR> {
    package_manager: PM,
    tree_reader: DT,
    progress_reporter: PR,
}

impl<PM, DT, PR> ScanEnvironmentUseCase<PM, DT, PR>
where
    PM: PackageManager,
    DT: DependencyTreeReader,
    PR: ProgressReporter,
{
    /// Creates a new ScanEnvironmentUseCase with injected dependencies
    pub fn new(package_manager: PM, tree_reader: DT, progress_reporter: PR) -> Self {
        Self {
            package_manager,
            tree_reader,
            progress_reporter,
        }
    }

    /// Executes the scan
    ///
    /// # Errors
    /// Returns an error if the dependency-tree tool is unavailable and cannot
    /// be installed, or if listing packages or reading the tree fails
    pub fn execute(&self, request: &ScanRequest) -> Result<ScanResponse> {
        // Step 1: Make sure the dependency-tree tool can be run
        self.ensure_tool_available(request)?;

        // Step 2: Query both external tools
        self.progress_reporter.report("🔍 Scanning installed packages...");
        let installed = self.list_installed(request)?;
        let tree = self.read_tree()?;

        // Step 3: Classify
        let required = RequiredSetCalculator::compute(&tree);
        let classification = PackageClassifier::classify(&installed, &required, &request.policy);

        self.progress_reporter.report_completion(&format!(
            "✅ Scanned {} package(s): {} orphaned, {} required by another package, {} protected",
            classification.len(),
            classification.count(Category::Application),
            classification.count(Category::RequiredByOther),
            classification.count(Category::System),
        ));

        Ok(ScanResponse::new(classification, required))
    }

    /// Probes the dependency-tree tool and installs it when missing
    fn ensure_tool_available(&self, request: &ScanRequest) -> Result<()> {
        let tool = self.tree_reader.tool_package().to_string();
        let available = self
            .tree_reader
            .is_available()
            .with_context(|| format!("Could not check whether {} is installed", tool))?;
        if available {
            return Ok(());
        }

        if !request.auto_install_tool {
            return Err(PruneError::ToolUnavailable { tool }.into());
        }

        self.progress_reporter
            .report(&format!("{} not found. Installing...", tool));
        self.package_manager
            .install(&tool)
            .with_context(|| format!("{} is not available and could not be installed", tool))?;
        self.progress_reporter
            .report(&format!("{} installed successfully.", tool));

        Ok(())
    }

    fn list_installed(&self, request: &ScanRequest) -> Result<InstalledPackages> {
        self.progress_reporter
            .report_progress(0, SCAN_STEPS, Some("Listing installed packages"));
        let installed = self
            .package_manager
            .list_installed(request.include_location())
            .inspect_err(|_| {
                self.progress_reporter
                    .report_error("❌ Failed to list installed packages")
            })?;
        self.progress_reporter
            .report_progress(1, SCAN_STEPS, Some("Reading dependency tree"));
        Ok(installed)
    }

    fn read_tree(&self) -> Result<DependencyTree> {
        let tree = self.tree_reader.read_tree().inspect_err(|_| {
            self.progress_reporter
                .report_error("❌ Failed to read the dependency tree")
        })?;
        self.progress_reporter
            .report_progress(SCAN_STEPS, SCAN_STEPS, Some("Classifying"));
        Ok(tree)
    }
}
