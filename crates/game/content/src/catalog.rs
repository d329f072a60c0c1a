//! Consumable item catalog.

use std::collections::BTreeMap;

use effect_core::EffectKind;

use crate::consumables::ConsumableEffect;

/// Default stack size for consumables without an override.
pub const DEFAULT_MAX_STACK: u32 = 99;

/// Static definition of a consumable item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsumableDefinition {
    pub id: String,
    pub display_name: String,
    pub description: String,
    /// Shop value in gold.
    pub value: u32,
    pub max_stack: u32,
    pub effect: ConsumableEffect,
}

impl ConsumableDefinition {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        description: impl Into<String>,
        value: u32,
        effect: ConsumableEffect,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            description: description.into(),
            value,
            max_stack: DEFAULT_MAX_STACK,
            effect,
        }
    }

    /// Overrides the stack size. Values below 1 are raised to 1.
    #[must_use]
    pub fn with_max_stack(mut self, max_stack: u32) -> Self {
        self.max_stack = max_stack.max(1);
        self
    }

    /// Tooltip summary of the effect.
    pub fn effect_description(&self) -> String {
        self.effect.description()
    }
}

/// Consumables keyed by id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConsumableCatalog {
    items: BTreeMap<String, ConsumableDefinition>,
}

impl ConsumableCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The shipped consumables.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        let items = [
            ConsumableDefinition::new(
                "health_potion",
                "Health Potion",
                "Restores 50 HP instantly.",
                30,
                ConsumableEffect::heal(50),
            ),
            ConsumableDefinition::new(
                "greater_health_potion",
                "Greater Health Potion",
                "Restores 150 HP instantly.",
                80,
                ConsumableEffect::heal(150),
            ),
            ConsumableDefinition::new(
                "strength_tonic",
                "Strength Tonic",
                "Raises Attack by 15 for 3 turns.",
                50,
                ConsumableEffect::status(EffectKind::Strength, "ATK", 15, 3),
            )
            .with_max_stack(20),
            ConsumableDefinition::new(
                "iron_skin",
                "Iron Skin",
                "Raises Defense by 10 for 4 turns.",
                50,
                ConsumableEffect::status(EffectKind::Fortify, "DEF", 10, 4),
            )
            .with_max_stack(20),
            ConsumableDefinition::new(
                "swiftness_draught",
                "Swiftness Draught",
                "Raises Speed by 8 for 3 turns.",
                40,
                ConsumableEffect::status(EffectKind::Haste, "SPD", 8, 3),
            )
            .with_max_stack(20),
            ConsumableDefinition::new(
                "antidote",
                "Antidote",
                "Cures Poison and Burn.",
                35,
                ConsumableEffect::cure("Poison & Burn", [EffectKind::Poison, EffectKind::Burn]),
            ),
            ConsumableDefinition::new(
                "regen_potion",
                "Regen Potion",
                "Restores 15 HP per turn for 3 turns.",
                65,
                ConsumableEffect::status(EffectKind::Regen, "HP/turn", 15, 3),
            )
            .with_max_stack(20),
            ConsumableDefinition::new(
                "poison_vial",
                "Poison Vial",
                "Inflicts Poison on the enemy for 4 turns (8 dmg/turn).",
                60,
                ConsumableEffect::inflict(EffectKind::Poison, 8, 4),
            )
            .with_max_stack(10),
            ConsumableDefinition::new(
                "flash_powder",
                "Flash Powder",
                "Blinds the enemy for 2 turns (reduces accuracy to 55%).",
                55,
                ConsumableEffect::inflict(EffectKind::Blind, 0, 2),
            )
            .with_max_stack(10),
        ];

        for item in items {
            catalog.insert(item);
        }
        catalog
    }

    /// Inserts a definition, returning the one it replaced (same id), if any.
    pub fn insert(&mut self, definition: ConsumableDefinition) -> Option<ConsumableDefinition> {
        self.items.insert(definition.id.clone(), definition)
    }

    pub fn get(&self, id: &str) -> Option<&ConsumableDefinition> {
        self.items.get(id)
    }

    /// Returns an iterator over definitions, ordered by id.
    pub fn iter(&self) -> impl Iterator<Item = &ConsumableDefinition> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
