//! Deterministic status effect rules for turn-based combat.
//!
//! `effect-core` tracks timed combat modifiers on a combatant, merges duplicate
//! applications, advances durations once per action and reports the derived
//! stat modifiers a combat resolver needs. All mutation of a combatant's
//! effects flows through [`status::EffectCollection`]; the resolver decides
//! when to tick and applies HP changes itself.
pub mod config;
pub mod error;
pub mod stats;
pub mod status;
pub mod traits;

pub use config::EffectConfig;
pub use error::{CombatError, EffectError, ErrorSeverity};
pub use stats::StatusModifiers;
pub use status::{ActiveEffect, EffectCategory, EffectCollection, EffectKind, TickOutcome};
pub use traits::Combatant;
