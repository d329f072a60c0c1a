//! Item and ability layer for the status effect engine.
//!
//! This crate builds effect instances and routes them to the right combatant:
//! - Consumable effects (heal, timed status, cure) with user/opponent targeting
//! - The built-in consumable catalog
//! - Enemy debuff abilities and per-enemy profiles
//! - RON loaders for both tables
//!
//! Content is consumed by the combat resolver and never owns combat state.

pub mod catalog;
pub mod consumables;
pub mod debuffs;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{ConsumableCatalog, ConsumableDefinition, DEFAULT_MAX_STACK};
pub use consumables::{ApplyError, ApplyOutcome, ConsumableEffect, EffectTarget, StatusApplication};
pub use debuffs::{DebuffAbility, DebuffAbilityError, DebuffProfiles};

#[cfg(feature = "loaders")]
pub use loaders::{
    ConsumableLoader, ContentFactory, DebuffProfileLoader, EffectContent, LoadResult,
};
