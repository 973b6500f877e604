//! pyprune - Orphaned package cleanup for Python environments
//!
//! This library inspects the packages installed for a Python interpreter,
//! classifies each one as a protected system package, a dependency of
//! another package, or a top-level application, and offers the
//! applications for interactive removal.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`cleanup`): Classification rules and domain models
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): pip/pipdeptree clients, terminal and formatters
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use pyprune::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let use_case = ScanEnvironmentUseCase::new(
//!     PipPackageManager::new("python3"),
//!     PipdeptreeReader::new("python3"),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = ScanRequest::new(ProtectionPolicy::default(), true);
//! let response = use_case.execute(&request)?;
//!
//! let formatter = ClassificationTableFormatter::new(false);
//! println!("{}", formatter.format(&response.classification)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cleanup;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{StderrProgressReporter, TerminalConsole};
    pub use crate::adapters::outbound::formatters::{
        ClassificationJsonFormatter, ClassificationTableFormatter,
    };
    pub use crate::adapters::outbound::process::{
        CommandRunner, PipPackageManager, PipdeptreeReader, SystemCommandRunner,
    };
    pub use crate::application::dto::{OutputFormat, ScanRequest, ScanResponse, UninstallSummary};
    pub use crate::application::factories::FormatterFactory;
    pub use crate::application::use_cases::{InteractiveUninstallUseCase, ScanEnvironmentUseCase};
    pub use crate::cleanup::domain::{
        Category, Classification, ClassificationEntry, DependencyTree, DependencyTreeEntry,
        InstalledPackage, InstalledPackages, PackageName, ProtectionPolicy,
    };
    pub use crate::cleanup::services::{PackageClassifier, RequiredSetCalculator};
    pub use crate::ports::outbound::{
        ClassificationFormatter, Console, DependencyTreeReader, PackageManager, ProgressReporter,
    };
    pub use crate::shared::Result;
}
