/// One node of the dependency tree: a package and the names it directly requires
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DependencyTreeEntry {
    package_name: Option<String>,
    dependencies: Vec<String>,
}

impl DependencyTreeEntry {
    pub fn new(package_name: Option<String>, dependencies: Vec<String>) -> Self {
        Self {
            package_name,
            dependencies,
        }
    }

    /// Name of the requiring package, when the tool reported one
    pub fn package_name(&self) -> Option<&str> {
        self.package_name.as_deref()
    }

    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }
}

/// Dependency tree as reported by the dependency-tree tool
pub type DependencyTree = Vec<DependencyTreeEntry>;
