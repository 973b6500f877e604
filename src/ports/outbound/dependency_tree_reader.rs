use crate::cleanup::domain::DependencyTree;
use crate::shared::Result;

/// DependencyTreeReader port for the dependency-tree tool (pipdeptree)
pub trait DependencyTreeReader {
    /// Name of the package that provides the tool, used to install it
    fn tool_package(&self) -> &str;

    /// Checks whether the tool responds to a version query
    ///
    /// # Errors
    /// Returns an error if the interpreter itself cannot be started
    fn is_available(&self) -> Result<bool>;

    /// Reads the dependency tree of the environment
    ///
    /// # Errors
    /// Returns an error if the tool exits non-zero or emits malformed JSON
    fn read_tree(&self) -> Result<DependencyTree>;
}
