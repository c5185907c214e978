/// Ports layer (hexagonal architecture)
///
/// Traits the application core depends on; adapters implement them.
pub mod outbound;
