/// Filesystem adapters for file I/O operations
mod directory_target;
mod file_reader;

pub use directory_target::DirectoryTargetHandler;
pub use file_reader::FileSystemReader;
