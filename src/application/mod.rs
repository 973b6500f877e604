/// Application layer - Use cases and DTOs
///
/// Orchestrates the cleanup domain services and talks to pip, pipdeptree
/// and the terminal only through the outbound ports.
pub mod dto;
pub mod factories;
pub mod use_cases;
