//! Content loaders for reading effect tables from files.
//!
//! Loaders parse RON into intermediate spec rows, then build the validated
//! content types through their constructors so file data gets the same
//! clamping and validation as code-defined content.

pub mod consumables;
pub mod debuffs;
pub mod factory;

pub use consumables::{ConsumableLoader, ConsumableSpec, EffectSpec};
pub use debuffs::{DebuffAbilitySpec, DebuffProfileLoader};
pub use factory::{ContentFactory, EffectContent};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
