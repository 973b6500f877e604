/// Cleanup domain - package classification rules with no I/O
pub mod domain;
pub mod services;
