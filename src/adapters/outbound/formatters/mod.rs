/// Formatter adapters for the classification report
mod json_formatter;
mod table_formatter;

pub use json_formatter::ClassificationJsonFormatter;
pub use table_formatter::ClassificationTableFormatter;
