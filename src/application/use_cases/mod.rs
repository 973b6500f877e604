/// Use cases module containing application business logic orchestration
mod interactive_uninstall;
mod scan_environment;

pub use interactive_uninstall::{is_affirmative, select_orphans, InteractiveUninstallUseCase};
pub use scan_environment::ScanEnvironmentUseCase;
