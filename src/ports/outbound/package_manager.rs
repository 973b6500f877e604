use crate::cleanup::domain::InstalledPackages;
use crate::shared::Result;

/// PackageManager port for querying and mutating the target environment
///
/// This port abstracts the package manager (pip) so the use cases can be
/// driven by mocks in tests.
pub trait PackageManager {
    /// Lists the installed packages
    ///
    /// # Arguments
    /// * `include_location` - Whether to request each package's install location
    ///
    /// # Errors
    /// Returns an error if the package manager exits non-zero or its output
    /// cannot be parsed
    fn list_installed(&self, include_location: bool) -> Result<InstalledPackages>;

    /// Uninstalls exactly one package without asking for confirmation
    ///
    /// Callers treat a failure as a reported, non-fatal outcome.
    fn uninstall(&self, name: &str) -> Result<()>;

    /// Installs exactly one package
    ///
    /// # Errors
    /// Returns an error if the installation fails
    fn install(&self, name: &str) -> Result<()>;
}
