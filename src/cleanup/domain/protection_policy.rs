use std::collections::BTreeSet;

/// Install-location prefixes treated as system locations by default
pub const DEFAULT_SYSTEM_DIRS: [&str; 3] = ["/Library/", "/System/", "/Applications/Xcode.app/"];

/// Packages never offered for removal: the package manager, its
/// bootstrap packages and the dependency-tree tool
pub const DEFAULT_PROTECTED_PACKAGES: [&str; 4] = ["pip", "setuptools", "wheel", "pipdeptree"];

/// Rules deciding which installed packages are System packages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtectionPolicy {
    include_location: bool,
    system_dirs: Vec<String>,
    protected_names: BTreeSet<String>,
}

impl ProtectionPolicy {
    pub fn new(
        include_location: bool,
        system_dirs: Vec<String>,
        protected_names: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            include_location,
            system_dirs,
            protected_names: protected_names.into_iter().collect(),
        }
    }

    /// Built-in policy; `include_location` toggles location-based protection
    pub fn with_defaults(include_location: bool) -> Self {
        Self::new(
            include_location,
            DEFAULT_SYSTEM_DIRS.iter().map(|d| d.to_string()).collect(),
            DEFAULT_PROTECTED_PACKAGES.iter().map(|n| n.to_string()),
        )
    }

    pub fn include_location(&self) -> bool {
        self.include_location
    }

    pub fn system_dirs(&self) -> &[String] {
        &self.system_dirs
    }

    pub fn protected_names(&self) -> &BTreeSet<String> {
        &self.protected_names
    }

    /// Whether a package with this name and location must never be removed
    ///
    /// Location prefixes are only consulted when `include_location` is set.
    pub fn is_protected(&self, name: &str, location: Option<&str>) -> bool {
        if self.protected_names.contains(name) {
            return true;
        }
        if !self.include_location {
            return false;
        }
        location
            .map(|loc| self.system_dirs.iter().any(|dir| loc.starts_with(dir.as_str())))
            .unwrap_or(false)
    }
}

impl Default for ProtectionPolicy {
    fn default() -> Self {
        Self::with_defaults(true)
    }
}
