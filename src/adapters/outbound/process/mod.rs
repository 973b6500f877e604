/// Subprocess adapters for pip and pipdeptree
mod command_runner;
mod pip_client;
mod pipdeptree_reader;

pub use command_runner::{CommandOutput, CommandRunner, SystemCommandRunner};
pub use pip_client::{parse_pip_list, PipPackageManager};
pub use pipdeptree_reader::{parse_pipdeptree_json, PipdeptreeReader};
