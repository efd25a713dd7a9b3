pub mod component;
pub mod license;
pub mod resolution_outcome;

pub use component::Component;
pub use license::License;
pub use resolution_outcome::{ResolutionOutcome, ResolutionSummary};
