/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the outbound ports:
/// the dataset scanner, simulated risk checks, console progress and
/// certificate formatters.
pub mod outbound;
