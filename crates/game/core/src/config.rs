use strum::EnumCount;

use crate::status::EffectKind;

/// Status effect constants and tunable parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EffectConfig;

impl EffectConfig {
    // ===== compile-time constants used as type parameters =====
    /// Capacity of an effect collection. One entry per kind, so this never overflows.
    pub const MAX_ACTIVE_EFFECTS: usize = EffectKind::COUNT;

    // ===== combat tuning =====
    /// Accuracy multiplier applied while Blind is present, regardless of magnitude.
    pub const BLIND_ACCURACY_MULTIPLIER: f32 = 0.55;
    /// Floor for a single damage-over-time or heal-over-time contribution per tick.
    pub const MIN_PERIODIC_AMOUNT: i32 = 1;
    /// Upper clamp for Weaken/Slow percentages.
    pub const MAX_PERCENT_REDUCTION: i32 = 100;
}
