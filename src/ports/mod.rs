/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports (driven ports) are the collaborators the license resolution
/// pipeline depends on: SBOM reading and parsing, fetching, caching, delivery
/// and user-facing logging.
pub mod outbound;
