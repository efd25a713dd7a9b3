/// Console adapters for user-facing output on stderr
mod user_logger;

pub use user_logger::StderrUserLogger;
