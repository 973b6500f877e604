/// Console adapters - progress on stderr, session I/O on the terminal
mod progress_reporter;
mod terminal_console;

pub use progress_reporter::StderrProgressReporter;
pub use terminal_console::TerminalConsole;
