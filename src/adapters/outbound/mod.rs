/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod checks;
pub mod console;
pub mod filesystem;
pub mod formatters;
