//! Modifiers - status-derived stat adjustments for one action.
//!
//! The resolver combines these with base and equipment stats it owns:
//! `effective = (base + flat) × multiplier`. The formula itself lives with the
//! resolver; this layer only reports the status contribution.

use crate::status::EffectCollection;

/// Every status-derived modifier, captured at once so an action reads one
/// consistent set of values.
///
/// Neutral values (no effects): flat bonuses 0, multipliers 1.0, no control flags.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusModifiers {
    pub attack_flat: i32,
    pub defense_flat: i32,
    pub speed_flat: i32,
    pub attack_multiplier: f32,
    pub speed_multiplier: f32,
    pub accuracy_multiplier: f32,
    pub stunned: bool,
    pub blind: bool,
}

impl StatusModifiers {
    /// Modifiers of a combatant with no active effects.
    pub const NEUTRAL: Self = Self {
        attack_flat: 0,
        defense_flat: 0,
        speed_flat: 0,
        attack_multiplier: 1.0,
        speed_multiplier: 1.0,
        accuracy_multiplier: 1.0,
        stunned: false,
        blind: false,
    };

    pub fn from_collection(effects: &EffectCollection) -> Self {
        Self {
            attack_flat: effects.attack_flat_bonus(),
            defense_flat: effects.defense_flat_bonus(),
            speed_flat: effects.speed_flat_bonus(),
            attack_multiplier: effects.attack_multiplier(),
            speed_multiplier: effects.speed_multiplier(),
            accuracy_multiplier: effects.accuracy_multiplier(),
            stunned: effects.is_stunned(),
            blind: effects.is_blind(),
        }
    }

    /// Returns true if no effect changes any stat or gates any action.
    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }
}

impl Default for StatusModifiers {
    fn default() -> Self {
        Self::NEUTRAL
    }
}
