use crate::cleanup::domain::{
    Category, Classification, ClassificationEntry, InstalledPackage, InstalledPackages,
    ProtectionPolicy,
};
use std::collections::BTreeSet;

/// PackageClassifier assigns every installed package exactly one category
///
/// Rules are evaluated in order and the first match wins:
/// System (protected) -> RequiredByOther -> Application.
pub struct PackageClassifier;

impl PackageClassifier {
    /// Classifies all installed packages
    ///
    /// # Arguments
    /// * `installed` - Packages reported by the package manager
    /// * `required` - Names some other installed package depends on
    /// * `policy` - Protection rules for system packages
    ///
    /// # Returns
    /// A Classification with one entry per installed package, in installed order
    pub fn classify(
        installed: &InstalledPackages,
        required: &BTreeSet<String>,
        policy: &ProtectionPolicy,
    ) -> Classification {
        let entries = installed
            .iter()
            .map(|package| {
                ClassificationEntry::new(
                    package.name().to_string(),
                    package.version().to_string(),
                    Self::category_of(package, required, policy),
                )
            })
            .collect();
        Classification::new(entries)
    }

    fn category_of(
        package: &InstalledPackage,
        required: &BTreeSet<String>,
        policy: &ProtectionPolicy,
    ) -> Category {
        if policy.is_protected(package.name(), package.location()) {
            Category::System
        } else if required.contains(package.name()) {
            Category::RequiredByOther
        } else {
            Category::Application
        }
    }
}
