//! Consumable catalog loader.

use std::path::Path;

use effect_core::EffectKind;
use serde::{Deserialize, Serialize};

use crate::catalog::{ConsumableCatalog, ConsumableDefinition, DEFAULT_MAX_STACK};
use crate::consumables::{ConsumableEffect, EffectTarget};
use crate::loaders::{LoadResult, read_file};

/// Consumable effect as written in the RON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EffectSpec {
    Heal {
        amount: i32,
    },
    Status {
        kind: EffectKind,
        label: String,
        #[serde(default)]
        magnitude: i32,
        turns: i32,
        #[serde(default)]
        target: EffectTarget,
    },
    Cure {
        label: String,
        kinds: Vec<EffectKind>,
    },
}

impl From<EffectSpec> for ConsumableEffect {
    fn from(spec: EffectSpec) -> Self {
        match spec {
            EffectSpec::Heal { amount } => ConsumableEffect::heal(amount),
            EffectSpec::Status {
                kind,
                label,
                magnitude,
                turns,
                target,
            } => ConsumableEffect::targeted(kind, label, magnitude, turns, target),
            EffectSpec::Cure { label, kinds } => ConsumableEffect::cure(label, kinds),
        }
    }
}

fn default_max_stack() -> u32 {
    DEFAULT_MAX_STACK
}

/// One consumable as written in the RON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsumableSpec {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    pub value: u32,
    #[serde(default = "default_max_stack")]
    pub max_stack: u32,
    pub effect: EffectSpec,
}

/// Consumable catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogFile {
    items: Vec<ConsumableSpec>,
}

/// Loader for consumable catalogs from RON files.
pub struct ConsumableLoader;

impl ConsumableLoader {
    /// Load a consumable catalog from a RON file.
    ///
    /// Example:
    /// ```ron
    /// (
    ///     items: [
    ///         (id: "health_potion", display_name: "Health Potion", value: 30,
    ///          effect: Heal(amount: 50)),
    ///         (id: "poison_vial", display_name: "Poison Vial", value: 60, max_stack: 10,
    ///          effect: Status(kind: "poison", label: "Poison", magnitude: 8, turns: 4,
    ///                         target: Opponent)),
    ///     ],
    /// )
    /// ```
    pub fn load(path: &Path) -> LoadResult<ConsumableCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid consumable catalog at {}: {}", path.display(), e))
    }

    /// Parse a consumable catalog from RON text. Later entries replace earlier
    /// entries with the same id.
    pub fn parse(content: &str) -> LoadResult<ConsumableCatalog> {
        let file: CatalogFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse consumable catalog RON: {}", e))?;

        let mut catalog = ConsumableCatalog::new();
        for spec in file.items {
            let definition = ConsumableDefinition::new(
                spec.id,
                spec.display_name,
                spec.description,
                spec.value,
                spec.effect.into(),
            )
            .with_max_stack(spec.max_stack);

            if let Some(previous) = catalog.insert(definition) {
                tracing::warn!("Duplicate consumable id '{}' replaced", previous.id);
            }
        }

        tracing::debug!("Loaded {} consumables", catalog.len());
        Ok(catalog)
    }
}
