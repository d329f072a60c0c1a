//! Enemy debuff profile loader.

use std::collections::HashMap;
use std::path::Path;

use effect_core::EffectKind;
use serde::{Deserialize, Serialize};

use crate::debuffs::{DebuffAbility, DebuffProfiles};
use crate::loaders::{LoadResult, read_file};

/// One ability row as written in the RON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebuffAbilitySpec {
    pub kind: EffectKind,
    #[serde(default)]
    pub magnitude: i32,
    pub duration: i32,
    pub chance: f32,
}

/// Loader for enemy debuff profiles from RON files.
pub struct DebuffProfileLoader;

impl DebuffProfileLoader {
    /// Load debuff profiles from a RON file.
    ///
    /// File format: HashMap<String, Vec<DebuffAbilitySpec>>
    ///
    /// Example:
    /// ```ron
    /// {
    ///     "goblin": [(kind: "poison", magnitude: 5, duration: 3, chance: 0.20)],
    ///     "dark_mage": [(kind: "stun", duration: 1, chance: 0.15)],
    /// }
    /// ```
    pub fn load(path: &Path) -> LoadResult<DebuffProfiles> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid debuff profiles at {}: {}", path.display(), e))
    }

    /// Parse debuff profiles from RON text.
    pub fn parse(content: &str) -> LoadResult<DebuffProfiles> {
        let raw: HashMap<String, Vec<DebuffAbilitySpec>> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse debuff profile RON: {}", e))?;

        let mut profiles = DebuffProfiles::new();
        for (enemy_type, specs) in raw {
            let mut abilities = Vec::with_capacity(specs.len());
            for spec in specs {
                let ability =
                    DebuffAbility::new(spec.kind, spec.magnitude, spec.duration, spec.chance)
                        .map_err(|e| anyhow::anyhow!("{} {}: {}", enemy_type, spec.kind, e))?;
                abilities.push(ability);
            }
            profiles.insert(&enemy_type, abilities);
        }

        tracing::debug!("Loaded debuff profiles for {} enemy types", profiles.len());
        Ok(profiles)
    }
}
