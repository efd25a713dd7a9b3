/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, console, etc.).
pub mod component_lister;
pub mod file_fetcher;
pub mod license_cache;
pub mod sbom_reader;
pub mod target_handler;
pub mod user_logger;

pub use component_lister::ComponentLister;
pub use file_fetcher::{DownloadHandler, FileFetcher};
pub use license_cache::{CachedLicense, LicenseCache};
pub use sbom_reader::SbomReader;
pub use target_handler::TargetHandler;
pub use user_logger::UserLogger;
