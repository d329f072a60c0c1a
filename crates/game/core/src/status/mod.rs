//! Status effect system for combatants.
//!
//! Status effects are timed modifiers (buffs, debuffs, damage-over-time,
//! heal-over-time) applied to a combatant.
//!
//! # Turn-based Duration
//!
//! Effects store `turns_remaining`, counted in the owning combatant's actions.
//! One [`EffectCollection::tick`] per action decrements every duration by one.

pub mod collection;
pub mod effect;
pub mod kind;
pub mod tick;

pub use collection::EffectCollection;
pub use effect::ActiveEffect;
pub use kind::{EffectCategory, EffectKind};
pub use tick::TickOutcome;
