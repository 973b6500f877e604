mod package_classifier;
mod required_set;

pub use package_classifier::PackageClassifier;
pub use required_set::RequiredSetCalculator;
