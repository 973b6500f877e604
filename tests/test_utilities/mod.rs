/// Shared helpers for integration and end-to-end tests
#[cfg(unix)]
#[allow(dead_code)]
pub mod fake_python;
#[allow(dead_code)]
pub mod mocks;
