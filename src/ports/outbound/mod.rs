/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (package manager, console, etc.).
pub mod console;
pub mod dependency_tree_reader;
pub mod formatter;
pub mod package_manager;
pub mod progress_reporter;

pub use console::Console;
pub use dependency_tree_reader::DependencyTreeReader;
pub use formatter::ClassificationFormatter;
pub use package_manager::PackageManager;
pub use progress_reporter::ProgressReporter;
