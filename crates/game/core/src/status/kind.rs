//! Effect kinds and their categories.
//!
//! Kind ids are a persisted wire format: ids are never renumbered or reused.
//! Debuffs occupy 0-5, buffs 10-14. Ids 6-9 and 11 are reserved.

use crate::error::EffectError;

/// Every status effect a combatant can carry.
///
/// Magnitude semantics are fixed per [`EffectCategory`]:
/// - DoT (Poison, Burn): flat HP lost per turn, bypasses defense
/// - HoT (Regen): flat HP gained per turn
/// - Percent debuffs (Weaken, Slow): percent reduction, e.g. 25 = -25%
/// - Flat buffs (Haste, Strength, Fortify): flat stat addition
/// - Control (Stun, Blind): magnitude unused, presence alone matters
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[repr(u8)]
pub enum EffectKind {
    // ========================================================================
    // Debuffs
    // ========================================================================
    /// Damage per turn, bypasses defense.
    Poison = 0,

    /// Fire damage per turn, bypasses defense.
    Burn = 1,

    /// Skips the combatant's next action.
    Stun = 2,

    /// Reduces attack by magnitude percent.
    Weaken = 3,

    /// Reduces speed by magnitude percent.
    Slow = 4,

    /// Forces a fixed accuracy multiplier.
    Blind = 5,

    // ========================================================================
    // Buffs
    // ========================================================================
    /// Heal per turn.
    Regen = 10,

    /// Flat speed bonus.
    Haste = 12,

    /// Flat attack bonus.
    Strength = 13,

    /// Flat defense bonus.
    Fortify = 14,
}

/// Category of an effect kind. Determines magnitude semantics and whether the
/// kind contributes to per-turn HP accumulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum EffectCategory {
    DamageOverTime,
    HealOverTime,
    Control,
    PercentDebuff,
    FlatBuff,
}

impl EffectKind {
    /// Stable wire id of this kind.
    pub const fn id(self) -> u8 {
        self as u8
    }

    pub const fn category(self) -> EffectCategory {
        match self {
            Self::Poison | Self::Burn => EffectCategory::DamageOverTime,
            Self::Regen => EffectCategory::HealOverTime,
            Self::Stun | Self::Blind => EffectCategory::Control,
            Self::Weaken | Self::Slow => EffectCategory::PercentDebuff,
            Self::Haste | Self::Strength | Self::Fortify => EffectCategory::FlatBuff,
        }
    }

    /// Returns true for kinds that hurt the combatant carrying them.
    pub const fn is_debuff(self) -> bool {
        matches!(
            self.category(),
            EffectCategory::DamageOverTime | EffectCategory::Control | EffectCategory::PercentDebuff
        )
    }
}

impl TryFrom<u8> for EffectKind {
    type Error = EffectError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Ok(match id {
            0 => Self::Poison,
            1 => Self::Burn,
            2 => Self::Stun,
            3 => Self::Weaken,
            4 => Self::Slow,
            5 => Self::Blind,
            10 => Self::Regen,
            12 => Self::Haste,
            13 => Self::Strength,
            14 => Self::Fortify,
            other => return Err(EffectError::UnknownKind(other)),
        })
    }
}

impl From<EffectKind> for u8 {
    fn from(kind: EffectKind) -> Self {
        kind.id()
    }
}

// Human-readable formats (RON, JSON) carry the snake_case name so content files
// stay editable; binary formats carry the stable id.
#[cfg(feature = "serde")]
impl serde::Serialize for EffectKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        if serializer.is_human_readable() {
            serializer.serialize_str(self.as_ref())
        } else {
            serializer.serialize_u8(self.id())
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for EffectKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        if deserializer.is_human_readable() {
            let name = <String as serde::Deserialize>::deserialize(deserializer)?;
            name.parse::<EffectKind>()
                .map_err(|_| D::Error::custom(EffectError::UnknownKindName(name)))
        } else {
            let id = <u8 as serde::Deserialize>::deserialize(deserializer)?;
            EffectKind::try_from(id).map_err(D::Error::custom)
        }
    }
}
