//! Content loaders for reading battlefield data from files.
//!
//! Each loader converts one RON or TOML file into `tohit-core` types.

pub mod factory;
pub mod options;
pub mod orders;
pub mod scenario;

pub use factory::ContentFactory;
pub use options::OptionsLoader;
pub use orders::OrdersLoader;
pub use scenario::ScenarioLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
