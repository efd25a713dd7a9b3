/// Application layer - Use cases and their wiring
///
/// This layer contains the application logic that orchestrates
/// domain services and coordinates with infrastructure through ports.
pub mod factories;
pub mod use_cases;
