use crate::cleanup::domain::Classification;
use crate::shared::Result;

/// ClassificationFormatter port for rendering the classified packages
pub trait ClassificationFormatter {
    /// Formats the classification into printable output
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, classification: &Classification) -> Result<String>;
}
