//! Enemy debuff abilities.
//!
//! Each time an enemy attacks, the resolver rolls every ability in the enemy's
//! profile. A successful roll adds the ability's effect to the player's own
//! collection. Enemies without a profile make normal attacks only.

use std::collections::HashMap;

use effect_core::{ActiveEffect, CombatError, Combatant, EffectError, EffectKind, ErrorSeverity};

/// Validation errors for [`DebuffAbility`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DebuffAbilityError {
    #[error("chance must be in [0.0, 1.0], got {0}")]
    ChanceOutOfRange(f32),

    #[error("duration must be at least 1 turn, got {0}")]
    DurationTooShort(i32),

    #[error("magnitude must be non-negative, got {0}")]
    NegativeMagnitude(i32),

    #[error(transparent)]
    Effect(#[from] EffectError),
}

impl CombatError for DebuffAbilityError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Effect(e) => e.severity(),
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ChanceOutOfRange(_) => "DEBUFF_CHANCE_OUT_OF_RANGE",
            Self::DurationTooShort(_) => "DEBUFF_DURATION_TOO_SHORT",
            Self::NegativeMagnitude(_) => "DEBUFF_NEGATIVE_MAGNITUDE",
            Self::Effect(e) => e.error_code(),
        }
    }
}

/// One debuff an enemy may inflict per attack.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DebuffAbility {
    effect: ActiveEffect,
    chance: f32,
}

impl DebuffAbility {
    /// Creates an ability. Unlike the consumable constructors, nothing is clamped.
    ///
    /// # Errors
    ///
    /// Fails if `chance` is outside `[0.0, 1.0]` (NaN included), `duration < 1`
    /// or `magnitude < 0`.
    pub fn new(
        kind: EffectKind,
        magnitude: i32,
        duration: i32,
        chance: f32,
    ) -> Result<Self, DebuffAbilityError> {
        if !(0.0..=1.0).contains(&chance) {
            return Err(DebuffAbilityError::ChanceOutOfRange(chance));
        }
        if duration < 1 {
            return Err(DebuffAbilityError::DurationTooShort(duration));
        }
        if magnitude < 0 {
            return Err(DebuffAbilityError::NegativeMagnitude(magnitude));
        }

        Ok(Self {
            effect: ActiveEffect::new(kind, magnitude, duration)?,
            chance,
        })
    }

    pub fn kind(&self) -> EffectKind {
        self.effect.kind()
    }

    pub fn magnitude(&self) -> i32 {
        self.effect.magnitude()
    }

    /// Duration in turns.
    pub fn duration(&self) -> i32 {
        self.effect.turns_remaining()
    }

    pub fn chance(&self) -> f32 {
        self.chance
    }

    /// Resolves one roll. `sample` is a uniform value in `[0.0, 1.0)` supplied by
    /// the caller's RNG; the ability triggers when `sample < chance`.
    pub fn roll(&self, sample: f32) -> Option<ActiveEffect> {
        (sample < self.chance).then_some(self.effect)
    }
}

/// Debuff abilities per enemy type. Lookups are case-insensitive.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DebuffProfiles {
    profiles: HashMap<String, Vec<DebuffAbility>>,
}

impl DebuffProfiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// The shipped enemy profiles.
    pub fn builtin() -> Result<Self, DebuffAbilityError> {
        use EffectKind::{Blind, Poison, Slow, Stun, Weaken};

        let table: [(&str, &[(EffectKind, i32, i32, f32)]); 5] = [
            ("goblin", &[(Poison, 5, 3, 0.20)]),
            ("cave_spider", &[(Poison, 8, 4, 0.35), (Slow, 4, 2, 0.20)]),
            ("skeleton_warrior", &[(Weaken, 8, 3, 0.25)]),
            ("swamp_wretch", &[(Poison, 10, 4, 0.30), (Blind, 0, 2, 0.20)]),
            ("dark_mage", &[(Weaken, 12, 3, 0.30), (Stun, 0, 1, 0.15)]),
        ];

        let mut profiles = Self::new();
        for (enemy_type, rows) in table {
            let abilities = rows
                .iter()
                .map(|&(kind, magnitude, duration, chance)| {
                    DebuffAbility::new(kind, magnitude, duration, chance)
                })
                .collect::<Result<Vec<_>, _>>()?;
            profiles.insert(enemy_type, abilities);
        }
        Ok(profiles)
    }

    /// Sets the abilities for an enemy type, replacing any previous profile.
    pub fn insert(&mut self, enemy_type: &str, abilities: Vec<DebuffAbility>) {
        self.profiles.insert(enemy_type.to_ascii_lowercase(), abilities);
    }

    /// Abilities for `enemy_type`; empty for enemies with normal attacks only.
    pub fn abilities(&self, enemy_type: &str) -> &[DebuffAbility] {
        self.profiles
            .get(&enemy_type.to_ascii_lowercase())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Rolls every ability of `enemy_type` once, adding each triggered effect to
    /// `target`'s collection. `sample` is called once per ability.
    ///
    /// Returns the effects that triggered, in profile order.
    pub fn inflict(
        &self,
        enemy_type: &str,
        target: &mut dyn Combatant,
        mut sample: impl FnMut() -> f32,
    ) -> Vec<ActiveEffect> {
        let mut inflicted = Vec::new();
        for ability in self.abilities(enemy_type) {
            if let Some(effect) = ability.roll(sample()) {
                target.effects_mut().add(effect);
                tracing::debug!(
                    "{} inflicted {} ({}) on {} for {} turns",
                    enemy_type,
                    effect.kind(),
                    effect.magnitude(),
                    target.name(),
                    effect.turns_remaining()
                );
                inflicted.push(effect);
            }
        }
        inflicted
    }
}
