//! Per-combatant effect collection.
//!
//! # Invariant
//!
//! At most one entry per [`EffectKind`]. Only [`EffectCollection::add`] inserts,
//! and it merges duplicates. Restoring a persisted list rejects duplicates
//! instead of merging them.
//!
//! # Turn Flow
//!
//! The combat resolver calls [`EffectCollection::tick`] exactly once after each of
//! the owning combatant's actions. The collection never schedules itself.

use arrayvec::ArrayVec;

use super::effect::ActiveEffect;
use super::kind::EffectKind;
use super::tick::TickOutcome;
use crate::config::EffectConfig;
use crate::error::EffectError;
use crate::stats::StatusModifiers;

/// Active status effects on one combatant.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<ActiveEffect>", into = "Vec<ActiveEffect>")
)]
pub struct EffectCollection {
    effects: ArrayVec<ActiveEffect, { EffectConfig::MAX_ACTIVE_EFFECTS }>,
}

impl EffectCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self {
            effects: ArrayVec::new(),
        }
    }

    /// Adds an effect, merging with an existing entry of the same kind.
    ///
    /// On merge, magnitude and turns remaining are each raised to the larger of
    /// the two values independently. Re-applying a weaker or shorter instance is
    /// a no-op.
    pub fn add(&mut self, effect: ActiveEffect) {
        if let Some(existing) = self.effects.iter_mut().find(|e| e.kind() == effect.kind()) {
            *existing = existing.merged_with(effect);
            return;
        }

        // One slot per kind exists, so an unseen kind always fits.
        self.effects.push(effect);
    }

    /// Removes the entry of `kind`. Returns whether anything was removed.
    pub fn remove_kind(&mut self, kind: EffectKind) -> bool {
        let before = self.effects.len();
        self.effects.retain(|e| e.kind() != kind);
        self.effects.len() != before
    }

    /// Advances every effect by one turn.
    ///
    /// Order matters:
    /// 1. Accumulate DoT/HoT from the current entries, floored at
    ///    [`EffectConfig::MIN_PERIODIC_AMOUNT`] per effect
    /// 2. Advance every entry
    /// 3. Prune expired entries into the outcome
    ///
    /// An effect on its final turn therefore still deals (or heals) in the tick
    /// that expires it.
    pub fn tick(&mut self) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        for effect in &self.effects {
            let amount = effect.magnitude().max(EffectConfig::MIN_PERIODIC_AMOUNT);
            if effect.is_damage_over_time() {
                outcome.damage_total = outcome.damage_total.saturating_add(amount);
            }
            if effect.is_heal_over_time() {
                outcome.heal_total = outcome.heal_total.saturating_add(amount);
            }
        }

        let expired = &mut outcome.expired;
        self.effects.retain(|effect| {
            *effect = effect.advance();
            if effect.is_expired() {
                expired.push(*effect);
                false
            } else {
                true
            }
        });

        outcome
    }

    /// Drops every entry. Called at battle end so nothing carries into the next fight.
    pub fn clear(&mut self) {
        self.effects.clear();
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Returns the entry of `kind`, if present.
    pub fn get(&self, kind: EffectKind) -> Option<&ActiveEffect> {
        self.effects.iter().find(|e| e.kind() == kind)
    }

    pub fn contains(&self, kind: EffectKind) -> bool {
        self.get(kind).is_some()
    }

    /// Returns an iterator over all entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ActiveEffect> {
        self.effects.iter()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    // ========================================================================
    // Control
    // ========================================================================

    /// Stunned combatants skip their next action.
    pub fn is_stunned(&self) -> bool {
        self.contains(EffectKind::Stun)
    }

    pub fn is_blind(&self) -> bool {
        self.contains(EffectKind::Blind)
    }

    // ========================================================================
    // Stat modifiers
    // ========================================================================

    /// Flat attack bonus from Strength.
    pub fn attack_flat_bonus(&self) -> i32 {
        self.magnitude_of(EffectKind::Strength)
    }

    /// Flat defense bonus from Fortify.
    pub fn defense_flat_bonus(&self) -> i32 {
        self.magnitude_of(EffectKind::Fortify)
    }

    /// Flat speed bonus from Haste.
    pub fn speed_flat_bonus(&self) -> i32 {
        self.magnitude_of(EffectKind::Haste)
    }

    /// Attack multiplier from Weaken. Weaken 25 gives 0.75.
    pub fn attack_multiplier(&self) -> f32 {
        self.reduction_multiplier(EffectKind::Weaken)
    }

    /// Speed multiplier from Slow. Slow 50 gives 0.5.
    pub fn speed_multiplier(&self) -> f32 {
        self.reduction_multiplier(EffectKind::Slow)
    }

    pub fn accuracy_multiplier(&self) -> f32 {
        if self.is_blind() {
            EffectConfig::BLIND_ACCURACY_MULTIPLIER
        } else {
            1.0
        }
    }

    /// Captures every stat query at once.
    pub fn modifiers(&self) -> StatusModifiers {
        StatusModifiers::from_collection(self)
    }

    fn magnitude_of(&self, kind: EffectKind) -> i32 {
        self.get(kind).map_or(0, ActiveEffect::magnitude)
    }

    fn reduction_multiplier(&self, kind: EffectKind) -> f32 {
        self.get(kind).map_or(1.0, |effect| {
            let percent = effect
                .magnitude()
                .clamp(0, EffectConfig::MAX_PERCENT_REDUCTION);
            1.0 - percent as f32 / 100.0
        })
    }
}

impl TryFrom<Vec<ActiveEffect>> for EffectCollection {
    type Error = EffectError;

    /// Restores a persisted entry list verbatim, rejecting duplicate kinds.
    fn try_from(entries: Vec<ActiveEffect>) -> Result<Self, Self::Error> {
        let mut collection = Self::new();
        for effect in entries {
            if collection.contains(effect.kind()) {
                return Err(EffectError::DuplicateKind(effect.kind()));
            }
            collection.effects.push(effect);
        }
        Ok(collection)
    }
}

impl From<EffectCollection> for Vec<ActiveEffect> {
    fn from(collection: EffectCollection) -> Self {
        collection.effects.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a EffectCollection {
    type Item = &'a ActiveEffect;
    type IntoIter = core::slice::Iter<'a, ActiveEffect>;

    fn into_iter(self) -> Self::IntoIter {
        self.effects.iter()
    }
}

#[cfg(feature = "serde")]
impl EffectCollection {
    /// Encodes the entry list with bincode (kinds by stable id).
    pub fn to_bytes(&self) -> Result<Vec<u8>, EffectError> {
        bincode::serialize(self).map_err(|e| EffectError::Encoding(e.to_string()))
    }

    /// Decodes an entry list produced by [`EffectCollection::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EffectError> {
        bincode::deserialize(bytes).map_err(|e| EffectError::Encoding(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn effect(kind: EffectKind, magnitude: i32, turns: i32) -> ActiveEffect {
        ActiveEffect::new(kind, magnitude, turns).unwrap()
    }

    #[test]
    fn add_appends_new_kinds_in_order() {
        let mut effects = EffectCollection::new();
        effects.add(effect(EffectKind::Poison, 5, 3));
        effects.add(effect(EffectKind::Haste, 8, 2));

        let kinds: Vec<_> = effects.iter().map(ActiveEffect::kind).collect();
        assert_eq!(kinds, vec![EffectKind::Poison, EffectKind::Haste]);
    }

    #[test]
    fn add_merges_independently() {
        let mut effects = EffectCollection::new();
        effects.add(effect(EffectKind::Strength, 15, 3));
        effects.add(effect(EffectKind::Strength, 10, 5));

        assert_eq!(effects.len(), 1);
        let strength = effects.get(EffectKind::Strength).unwrap();
        assert_eq!(strength.magnitude(), 15);
        assert_eq!(strength.turns_remaining(), 5);
    }

    #[test]
    fn weaker_reapplication_is_a_noop() {
        let mut effects = EffectCollection::new();
        effects.add(effect(EffectKind::Fortify, 10, 4));
        let before = effects.clone();

        effects.add(effect(EffectKind::Fortify, 6, 2));
        assert_eq!(effects, before);

        effects.add(effect(EffectKind::Fortify, 10, 4));
        assert_eq!(effects, before);
    }

    #[test]
    fn merge_keeps_original_position() {
        let mut effects = EffectCollection::new();
        effects.add(effect(EffectKind::Poison, 5, 3));
        effects.add(effect(EffectKind::Blind, 0, 2));
        effects.add(effect(EffectKind::Poison, 9, 1));

        let kinds: Vec<_> = effects.iter().map(ActiveEffect::kind).collect();
        assert_eq!(kinds, vec![EffectKind::Poison, EffectKind::Blind]);
        assert_eq!(effects.get(EffectKind::Poison).unwrap().magnitude(), 9);
        assert_eq!(effects.get(EffectKind::Poison).unwrap().turns_remaining(), 3);
    }

    #[test]
    fn remove_kind_only_touches_that_kind() {
        let mut effects = EffectCollection::new();
        effects.add(effect(EffectKind::Poison, 5, 3));
        effects.add(effect(EffectKind::Blind, 0, 2));

        assert!(effects.remove_kind(EffectKind::Poison));
        assert!(!effects.contains(EffectKind::Poison));
        assert!(effects.is_blind());
        assert!(!effects.remove_kind(EffectKind::Poison));
    }

    #[test]
    fn tick_deals_damage_on_the_expiring_turn() {
        let mut effects = EffectCollection::new();
        effects.add(effect(EffectKind::Poison, 5, 1));

        let outcome = effects.tick();
        assert_eq!(outcome.damage_total, 5);
        assert_eq!(outcome.heal_total, 0);
        assert_eq!(outcome.expired.len(), 1);
        assert_eq!(outcome.expired[0].kind(), EffectKind::Poison);
        assert_eq!(outcome.expired[0].turns_remaining(), 0);
        assert!(effects.is_empty());
    }

    #[test]
    fn tick_floors_zero_magnitude_periodic_effects() {
        let mut effects = EffectCollection::new();
        effects.add(effect(EffectKind::Poison, 0, 1));
        effects.add(effect(EffectKind::Regen, 0, 1));

        let outcome = effects.tick();
        assert_eq!(outcome.damage_total, 1);
        assert_eq!(outcome.heal_total, 1);
    }

    #[test]
    fn tick_sums_damage_over_time_sources() {
        let mut effects = EffectCollection::new();
        effects.add(effect(EffectKind::Poison, 8, 3));
        effects.add(effect(EffectKind::Burn, 4, 2));
        effects.add(effect(EffectKind::Regen, 15, 3));
        effects.add(effect(EffectKind::Strength, 20, 3));

        let outcome = effects.tick();
        assert_eq!(outcome.damage_total, 12);
        assert_eq!(outcome.heal_total, 15);
        assert_eq!(outcome.net_health_change(), 3);
        assert!(outcome.expired.is_empty());
    }

    #[test]
    fn tick_prunes_every_expired_entry() {
        let mut effects = EffectCollection::new();
        effects.add(effect(EffectKind::Stun, 0, 1));
        effects.add(effect(EffectKind::Haste, 8, 3));
        effects.add(effect(EffectKind::Blind, 0, 1));
        effects.add(effect(EffectKind::Burn, 2, 1));

        let (expired, damage, heal) = effects.tick().into_parts();
        let expired_kinds: Vec<_> = expired.iter().map(ActiveEffect::kind).collect();
        assert_eq!(
            expired_kinds,
            vec![EffectKind::Stun, EffectKind::Blind, EffectKind::Burn]
        );
        assert_eq!(damage, 2);
        assert_eq!(heal, 0);
        assert_eq!(effects.len(), 1);
        assert_eq!(effects.get(EffectKind::Haste).unwrap().turns_remaining(), 2);
    }

    #[test]
    fn tick_on_empty_collection_is_quiet() {
        let mut effects = EffectCollection::new();
        assert!(effects.tick().is_quiet());
    }

    #[test]
    fn neutral_values_when_absent() {
        let effects = EffectCollection::new();
        assert_eq!(effects.attack_flat_bonus(), 0);
        assert_eq!(effects.defense_flat_bonus(), 0);
        assert_eq!(effects.speed_flat_bonus(), 0);
        assert_eq!(effects.attack_multiplier(), 1.0);
        assert_eq!(effects.speed_multiplier(), 1.0);
        assert_eq!(effects.accuracy_multiplier(), 1.0);
        assert!(!effects.is_stunned());
        assert!(!effects.is_blind());
    }

    #[test]
    fn flat_bonuses_read_their_kind() {
        let mut effects = EffectCollection::new();
        effects.add(effect(EffectKind::Strength, 15, 3));
        effects.add(effect(EffectKind::Fortify, 10, 4));
        effects.add(effect(EffectKind::Haste, 8, 3));

        assert_eq!(effects.attack_flat_bonus(), 15);
        assert_eq!(effects.defense_flat_bonus(), 10);
        assert_eq!(effects.speed_flat_bonus(), 8);
    }

    #[test]
    fn percent_debuffs_clamp_to_full_reduction() {
        let mut effects = EffectCollection::new();
        effects.add(effect(EffectKind::Slow, 50, 2));
        effects.add(effect(EffectKind::Weaken, 250, 2));

        assert!((effects.speed_multiplier() - 0.5).abs() < 1e-6);
        assert_eq!(effects.attack_multiplier(), 0.0);
    }

    #[test]
    fn blind_accuracy_ignores_magnitude() {
        let mut effects = EffectCollection::new();
        effects.add(effect(EffectKind::Blind, 40, 2));
        assert_eq!(effects.accuracy_multiplier(), 0.55);
    }

    #[test]
    fn stun_is_reported_until_it_expires() {
        let mut effects = EffectCollection::new();
        effects.add(effect(EffectKind::Stun, 0, 1));
        assert!(effects.is_stunned());

        effects.tick();
        assert!(!effects.is_stunned());
    }

    #[test]
    fn clear_drops_everything() {
        let mut effects = EffectCollection::new();
        effects.add(effect(EffectKind::Regen, 15, 3));
        effects.add(effect(EffectKind::Slow, 4, 2));

        effects.clear();
        assert!(effects.is_empty());
        assert_eq!(effects.speed_multiplier(), 1.0);
    }

    #[test]
    fn restoring_rejects_duplicate_kinds() {
        let entries = vec![
            effect(EffectKind::Poison, 5, 3),
            effect(EffectKind::Poison, 2, 1),
        ];
        assert_eq!(
            EffectCollection::try_from(entries),
            Err(EffectError::DuplicateKind(EffectKind::Poison))
        );
    }

    #[test]
    fn restoring_keeps_order_and_values_verbatim() {
        let entries = vec![
            effect(EffectKind::Blind, 0, 2),
            effect(EffectKind::Poison, 8, 4),
        ];
        let restored = EffectCollection::try_from(entries.clone()).unwrap();
        assert_eq!(Vec::from(restored), entries);
    }
}
