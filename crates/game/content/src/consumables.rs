//! Consumable effects: what using an item does.
//!
//! Routing an effect to the user or to the opposing combatant is a plain tagged
//! choice ([`EffectTarget`]) decided here, not by the engine.

use effect_core::{
    ActiveEffect, CombatError, Combatant, EffectConfig, EffectError, EffectKind, ErrorSeverity,
};

/// Which combatant's collection receives a status effect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectTarget {
    /// The combatant using the item.
    #[default]
    User,
    /// The opposing combatant in the current battle.
    Opponent,
}

/// A timed status effect carried by an item, already clamped for construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusApplication {
    kind: EffectKind,
    label: String,
    magnitude: i32,
    turns: i32,
    target: EffectTarget,
}

impl StatusApplication {
    pub fn kind(&self) -> EffectKind {
        self.kind
    }

    /// Short stat label used in tooltips ("ATK", "DEF", "HP/turn").
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn magnitude(&self) -> i32 {
        self.magnitude
    }

    pub fn turns(&self) -> i32 {
        self.turns
    }

    pub fn target(&self) -> EffectTarget {
        self.target
    }

    fn to_effect(&self) -> Result<ActiveEffect, EffectError> {
        ActiveEffect::new(self.kind, self.magnitude, self.turns)
    }

    fn description(&self) -> String {
        let (kind, label, magnitude, turns) = (self.kind, &self.label, self.magnitude, self.turns);

        if self.target == EffectTarget::Opponent {
            return format!("Inflicts {kind} on the enemy for {turns} turns");
        }

        match kind {
            EffectKind::Stun => format!("Stuns for {turns} turn(s)"),
            EffectKind::Blind => {
                let accuracy = (EffectConfig::BLIND_ACCURACY_MULTIPLIER * 100.0).round() as i32;
                format!("Blinds for {turns} turns ({accuracy}% accuracy)")
            }
            EffectKind::Weaken | EffectKind::Slow => {
                format!("-{magnitude}% {label} for {turns} turns")
            }
            EffectKind::Poison | EffectKind::Burn => {
                format!("{label} {magnitude} HP/turn for {turns} turns")
            }
            EffectKind::Regen => format!("Regen {magnitude} HP/turn for {turns} turns"),
            EffectKind::Haste | EffectKind::Strength | EffectKind::Fortify => {
                format!("+{magnitude} {label} for {turns} turns")
            }
        }
    }
}

/// Effect applied when a consumable is used.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConsumableEffect {
    /// Instant heal on the user.
    Heal { amount: i32 },

    /// Timed status effect on the user or the opponent.
    ApplyStatus(StatusApplication),

    /// Removes each listed kind from the user. A no-op when none are present.
    Cure { label: String, kinds: Vec<EffectKind> },
}

/// What an applied consumable actually did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApplyOutcome {
    Healed { amount: i32 },
    StatusApplied {
        target: EffectTarget,
        effect: ActiveEffect,
    },
    /// Kinds that were present and removed. Empty when there was nothing to cure.
    Cured { removed: Vec<EffectKind> },
}

/// Errors raised when applying a consumable.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApplyError {
    /// Opponent-targeted effect used with no opponent present.
    #[error("{kind} targets an opponent but none is present")]
    NoOpponent { kind: EffectKind },

    #[error(transparent)]
    Effect(#[from] EffectError),
}

impl CombatError for ApplyError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NoOpponent { .. } => ErrorSeverity::Recoverable,
            Self::Effect(e) => e.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoOpponent { .. } => "APPLY_NO_OPPONENT",
            Self::Effect(e) => e.error_code(),
        }
    }
}

impl ConsumableEffect {
    /// Instant heal. Amounts below 1 are raised to 1.
    pub fn heal(amount: i32) -> Self {
        Self::Heal {
            amount: amount.max(1),
        }
    }

    /// Status effect on the user. Magnitude is clamped to 0 or more (0 is valid
    /// for Stun and Blind) and duration to at least one turn.
    pub fn status(kind: EffectKind, label: impl Into<String>, magnitude: i32, turns: i32) -> Self {
        Self::targeted(kind, label, magnitude, turns, EffectTarget::User)
    }

    /// Status effect on the opposing combatant.
    pub fn inflict(kind: EffectKind, magnitude: i32, turns: i32) -> Self {
        Self::targeted(kind, kind.as_ref(), magnitude, turns, EffectTarget::Opponent)
    }

    pub fn targeted(
        kind: EffectKind,
        label: impl Into<String>,
        magnitude: i32,
        turns: i32,
        target: EffectTarget,
    ) -> Self {
        Self::ApplyStatus(StatusApplication {
            kind,
            label: label.into(),
            magnitude: magnitude.max(0),
            turns: turns.max(1),
            target,
        })
    }

    pub fn cure(label: impl Into<String>, kinds: impl IntoIterator<Item = EffectKind>) -> Self {
        Self::Cure {
            label: label.into(),
            kinds: kinds.into_iter().collect(),
        }
    }

    /// Tooltip text.
    pub fn description(&self) -> String {
        match self {
            Self::Heal { amount } => format!("Restores {amount} HP"),
            Self::ApplyStatus(status) => status.description(),
            Self::Cure { label, .. } => format!("Cures {label}"),
        }
    }

    /// Returns true for effects that only make sense during battle.
    /// Heals and cures can be used anywhere.
    pub fn requires_battle(&self) -> bool {
        matches!(self, Self::ApplyStatus(_))
    }

    /// Applies the effect, routing status effects by their [`EffectTarget`].
    ///
    /// # Errors
    ///
    /// [`ApplyError::NoOpponent`] if an opponent-targeted effect is used without an
    /// opponent. Nothing is modified in that case.
    pub fn apply<'a>(
        &self,
        user: &'a mut dyn Combatant,
        opponent: Option<&'a mut dyn Combatant>,
    ) -> Result<ApplyOutcome, ApplyError> {
        match self {
            Self::Heal { amount } => {
                user.heal(*amount);
                tracing::debug!("{} healed for {} HP", user.name(), amount);
                Ok(ApplyOutcome::Healed { amount: *amount })
            }
            Self::ApplyStatus(status) => {
                let effect = status.to_effect()?;
                let recipient: &mut dyn Combatant = match status.target {
                    EffectTarget::User => user,
                    EffectTarget::Opponent => match opponent {
                        Some(opponent) => opponent,
                        None => {
                            tracing::warn!(
                                "{} used a {} effect with no opponent present",
                                user.name(),
                                status.kind
                            );
                            return Err(ApplyError::NoOpponent { kind: status.kind });
                        }
                    },
                };

                recipient.effects_mut().add(effect);
                tracing::debug!(
                    "{} gains {} ({}) for {} turns",
                    recipient.name(),
                    effect.kind(),
                    effect.magnitude(),
                    effect.turns_remaining()
                );
                Ok(ApplyOutcome::StatusApplied {
                    target: status.target,
                    effect,
                })
            }
            Self::Cure { label, kinds } => {
                let removed: Vec<EffectKind> = kinds
                    .iter()
                    .copied()
                    .filter(|kind| user.effects_mut().remove_kind(*kind))
                    .collect();
                if !removed.is_empty() {
                    tracing::debug!("{} cured of {}", user.name(), label);
                }
                Ok(ApplyOutcome::Cured { removed })
            }
        }
    }
}
