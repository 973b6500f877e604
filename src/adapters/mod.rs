/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the ports,
/// providing the actual integration with pip, pipdeptree and the terminal.
pub mod outbound;
