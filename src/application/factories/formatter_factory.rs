use crate::adapters::outbound::formatters::{
    ClassificationJsonFormatter, ClassificationTableFormatter,
};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ClassificationFormatter;

/// Factory for creating classification formatters
///
/// This factory encapsulates the creation logic for different formatter implementations,
/// following the Factory Pattern. It belongs in the application layer as it orchestrates
/// the selection of infrastructure adapters based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Arguments
    /// * `format` - The output format to create a formatter for
    /// * `colored` - Whether the text table may use ANSI colours
    ///
    /// # Examples
    /// ```
    /// use pyprune::application::dto::OutputFormat;
    /// use pyprune::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json, false);
    /// ```
    pub fn create(format: OutputFormat, colored: bool) -> Box<dyn ClassificationFormatter> {
        match format {
            OutputFormat::Text => Box::new(ClassificationTableFormatter::new(colored)),
            OutputFormat::Json => Box::new(ClassificationJsonFormatter::new()),
        }
    }
}
