/// Mock implementations for testing
mod mock_component_lister;
mod mock_file_fetcher;
mod mock_target_handler;
mod mock_user_logger;

pub use mock_component_lister::MockComponentLister;
pub use mock_file_fetcher::MockFileFetcher;
pub use mock_target_handler::MockTargetHandler;
pub use mock_user_logger::MockUserLogger;
