/// License cache adapters: a disabled cache and a filesystem-backed one
mod disabled_cache;
mod filesystem_cache;

pub use disabled_cache::DisabledCache;
pub use filesystem_cache::FilesystemCache;
