use crate::shared::error::PruneError;
use crate::shared::Result;

/// Maximum length for package names (security limit)
const MAX_PACKAGE_NAME_LENGTH: usize = 255;

/// NewType wrapper for package name with validation
///
/// Any spelling pip reports is accepted, except a leading `-`, so a name
/// can never be read as a pip flag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: String) -> Result<Self> {
        if name.is_empty() {
            return Err(PruneError::Validation {
                message: "Package name cannot be empty".to_string(),
            }
            .into());
        }

        if name.len() > MAX_PACKAGE_NAME_LENGTH {
            return Err(PruneError::Validation {
                message: format!(
                    "Package name is too long ({} bytes). Maximum allowed: {} bytes",
                    name.len(),
                    MAX_PACKAGE_NAME_LENGTH
                ),
            }
            .into());
        }

        if name.starts_with('-') {
            return Err(PruneError::Validation {
                message: format!("Package name '{}' must not start with '-'", name),
            }
            .into());
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A package installed in the target environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledPackage {
    name: PackageName,
    version: String,
    location: Option<String>,
}

impl InstalledPackage {
    pub fn new(name: String, version: String, location: Option<String>) -> Result<Self> {
        Ok(Self {
            name: PackageName::new(name)?,
            version,
            location: location.filter(|l| !l.is_empty()),
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}

/// Installed packages in the order the package manager reported them
///
/// Names are unique: pushing a name that is already present keeps the
/// first entry and drops the new one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstalledPackages {
    packages: Vec<InstalledPackage>,
}

impl InstalledPackages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a package, returning false if its name was already present
    pub fn push(&mut self, package: InstalledPackage) -> bool {
        if self.get(package.name()).is_some() {
            return false;
        }
        self.packages.push(package);
        true
    }

    pub fn get(&self, name: &str) -> Option<&InstalledPackage> {
        self.packages.iter().find(|p| p.name() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &InstalledPackage> {
        self.packages.iter()
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl FromIterator<InstalledPackage> for InstalledPackages {
    fn from_iter<I: IntoIterator<Item = InstalledPackage>>(iter: I) -> Self {
        let mut packages = Self::new();
        for package in iter {
            packages.push(package);
        }
        packages
    }
}
