//! Combatant boundary.
//!
//! The engine has no notion of attacker or defender, only "the collection I was
//! given". Hosts implement [`Combatant`] for their player and enemy types so the
//! item layer can route an effect to the user or to the opposing combatant.

use crate::status::EffectCollection;

/// Anything that owns exactly one [`EffectCollection`].
pub trait Combatant {
    /// Display name used in logs and tooltips.
    fn name(&self) -> &str;

    fn effects(&self) -> &EffectCollection;

    fn effects_mut(&mut self) -> &mut EffectCollection;

    /// Restores HP. The host clamps to its own maximum.
    fn heal(&mut self, amount: i32);

    /// Drops every active effect so nothing persists into the next fight.
    fn end_battle(&mut self) {
        self.effects_mut().clear();
    }
}
