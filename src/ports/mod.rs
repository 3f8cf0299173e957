/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound (driven) ports describe everything the application core needs
/// from the outside world.
pub mod outbound;
