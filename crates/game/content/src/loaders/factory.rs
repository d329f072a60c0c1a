//! Content factory for loading effect tables from a data directory.

use std::path::PathBuf;

use crate::catalog::ConsumableCatalog;
use crate::debuffs::DebuffProfiles;
use crate::loaders::{ConsumableLoader, DebuffProfileLoader, LoadResult};

/// Every table the item/ability layer needs.
#[derive(Clone, Debug)]
pub struct EffectContent {
    pub consumables: ConsumableCatalog,
    pub debuff_profiles: DebuffProfiles,
}

/// Content factory that loads effect content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── consumables.ron
/// └── debuffs.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load the consumable catalog from `consumables.ron`.
    pub fn load_consumables(&self) -> LoadResult<ConsumableCatalog> {
        ConsumableLoader::load(&self.data_dir.join("consumables.ron"))
    }

    /// Load enemy debuff profiles from `debuffs.ron`.
    pub fn load_debuff_profiles(&self) -> LoadResult<DebuffProfiles> {
        DebuffProfileLoader::load(&self.data_dir.join("debuffs.ron"))
    }

    /// Load every table.
    pub fn load_all(&self) -> LoadResult<EffectContent> {
        Ok(EffectContent {
            consumables: self.load_consumables()?,
            debuff_profiles: self.load_debuff_profiles()?,
        })
    }
}
