/// Ports module defining interfaces for hexagonal architecture
///
/// The application core only talks to the outside world (npm, stdout,
/// the filesystem, the terminal) through the outbound ports defined here.
pub mod outbound;
