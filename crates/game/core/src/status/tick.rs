use super::effect::ActiveEffect;

/// Result of advancing a collection by one turn.
///
/// The resolver applies `damage_total` as defense-bypassing damage and
/// `heal_total` as an unconditional heal, then clamps HP itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Effects that ran out this tick, in storage order.
    pub expired: Vec<ActiveEffect>,
    pub damage_total: i32,
    pub heal_total: i32,
}

impl TickOutcome {
    /// Splits the outcome into `(expired, damage_total, heal_total)`.
    pub fn into_parts(self) -> (Vec<ActiveEffect>, i32, i32) {
        (self.expired, self.damage_total, self.heal_total)
    }

    /// Net HP change for the tick (heal minus damage).
    pub fn net_health_change(&self) -> i32 {
        self.heal_total.saturating_sub(self.damage_total)
    }

    /// Returns true if nothing happened: no HP change and nothing expired.
    pub fn is_quiet(&self) -> bool {
        self.expired.is_empty() && self.damage_total == 0 && self.heal_total == 0
    }
}
