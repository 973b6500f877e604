pub mod classification;
pub mod dependency_tree;
pub mod package;
pub mod protection_policy;

pub use classification::{Category, Classification, ClassificationEntry};
pub use dependency_tree::{DependencyTree, DependencyTreeEntry};
pub use package::{InstalledPackage, InstalledPackages, PackageName};
pub use protection_policy::{ProtectionPolicy, DEFAULT_PROTECTED_PACKAGES, DEFAULT_SYSTEM_DIRS};
