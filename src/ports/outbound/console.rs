use crate::shared::Result;

/// Console port for the interactive session
///
/// Plain lines go to the user and answers come back one line at a time.
pub trait Console {
    /// Prints one line of session output
    fn print_line(&self, line: &str);

    /// Shows a prompt and reads one line of input
    ///
    /// # Returns
    /// The line without its trailing newline, or `None` at end of input
    ///
    /// # Errors
    /// Returns an error if reading from the input fails
    fn prompt(&self, message: &str) -> Result<Option<String>>;
}
