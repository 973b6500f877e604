/// Mock implementations for testing
mod mock_console;
mod mock_dependency_tree_reader;
mod mock_package_manager;
mod mock_progress_reporter;

#[allow(unused_imports)]
pub use mock_console::MockConsole;
#[allow(unused_imports)]
pub use mock_dependency_tree_reader::MockDependencyTreeReader;
#[allow(unused_imports)]
pub use mock_package_manager::MockPackageManager;
#[allow(unused_imports)]
pub use mock_progress_reporter::MockProgressReporter;
