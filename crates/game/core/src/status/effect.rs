//! A single active effect instance.

use super::kind::{EffectCategory, EffectKind};
use crate::error::EffectError;

/// One active effect on a combatant: kind, magnitude and remaining duration.
///
/// Immutable value. Advancing produces a new value rather than mutating in place.
///
/// `turns_remaining` is deliberately not validated. Advancing an effect on its
/// final turn yields `turns_remaining == 0`, and that value must be representable;
/// check [`ActiveEffect::is_expired`] after advancing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawEffect")
)]
pub struct ActiveEffect {
    kind: EffectKind,
    magnitude: i32,
    turns_remaining: i32,
}

impl ActiveEffect {
    /// Creates an effect.
    ///
    /// # Errors
    ///
    /// Returns [`EffectError::NegativeMagnitude`] if `magnitude < 0`. The value is
    /// rejected, not clamped. Zero is valid (Stun and Blind always carry 0).
    pub fn new(kind: EffectKind, magnitude: i32, turns_remaining: i32) -> Result<Self, EffectError> {
        if magnitude < 0 {
            return Err(EffectError::NegativeMagnitude { kind, magnitude });
        }

        Ok(Self {
            kind,
            magnitude,
            turns_remaining,
        })
    }

    pub const fn kind(&self) -> EffectKind {
        self.kind
    }

    pub const fn magnitude(&self) -> i32 {
        self.magnitude
    }

    pub const fn turns_remaining(&self) -> i32 {
        self.turns_remaining
    }

    pub const fn category(&self) -> EffectCategory {
        self.kind.category()
    }

    /// Returns a copy with one fewer turn remaining. Kind and magnitude are unchanged.
    #[must_use]
    pub const fn advance(self) -> Self {
        Self {
            turns_remaining: self.turns_remaining.saturating_sub(1),
            ..self
        }
    }

    pub const fn is_expired(&self) -> bool {
        self.turns_remaining <= 0
    }

    pub const fn is_damage_over_time(&self) -> bool {
        matches!(self.kind, EffectKind::Poison | EffectKind::Burn)
    }

    pub const fn is_heal_over_time(&self) -> bool {
        matches!(self.kind, EffectKind::Regen)
    }

    /// Combines two effects of the same kind, maximizing magnitude and duration
    /// independently.
    pub(crate) fn merged_with(self, other: Self) -> Self {
        debug_assert_eq!(self.kind, other.kind);
        Self {
            kind: self.kind,
            magnitude: self.magnitude.max(other.magnitude),
            turns_remaining: self.turns_remaining.max(other.turns_remaining),
        }
    }
}

/// Unvalidated wire form. Deserialization funnels through [`ActiveEffect::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawEffect {
    kind: EffectKind,
    magnitude: i32,
    turns_remaining: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawEffect> for ActiveEffect {
    type Error = EffectError;

    fn try_from(raw: RawEffect) -> Result<Self, Self::Error> {
        Self::new(raw.kind, raw.magnitude, raw.turns_remaining)
    }
}
