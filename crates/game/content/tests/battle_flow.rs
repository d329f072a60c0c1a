//! A full battle driven through the item layer and the engine together.

use effect_content::{ApplyError, ApplyOutcome, ConsumableCatalog, DebuffProfiles};
use effect_core::{Combatant, EffectCollection, EffectKind};

struct Unit {
    name: &'static str,
    kind: &'static str,
    hp: i32,
    max_hp: i32,
    effects: EffectCollection,
}

impl Unit {
    fn new(name: &'static str, kind: &'static str, hp: i32) -> Self {
        Self {
            name,
            kind,
            hp,
            max_hp: hp,
            effects: EffectCollection::new(),
        }
    }

    fn end_of_action(&mut self) -> Vec<EffectKind> {
        let outcome = self.effects.tick();
        self.hp = (self.hp - outcome.damage_total).clamp(0, self.max_hp);
        self.heal(outcome.heal_total);
        outcome.expired.iter().map(|e| e.kind()).collect()
    }
}

impl Combatant for Unit {
    fn name(&self) -> &str {
        self.name
    }

    fn effects(&self) -> &EffectCollection {
        &self.effects
    }

    fn effects_mut(&mut self) -> &mut EffectCollection {
        &mut self.effects
    }

    fn heal(&mut self, amount: i32) {
        self.hp = (self.hp + amount).min(self.max_hp);
    }
}

fn use_item(
    catalog: &ConsumableCatalog,
    id: &str,
    user: &mut Unit,
    opponent: Option<&mut Unit>,
) -> Result<ApplyOutcome, ApplyError> {
    let item = catalog.get(id).unwrap();
    match opponent {
        Some(opponent) => item.effect.apply(user, Some(opponent as &mut dyn Combatant)),
        None => item.effect.apply(user, None),
    }
}

#[test]
fn spider_fight() {
    let catalog = ConsumableCatalog::builtin();
    let profiles = DebuffProfiles::builtin().unwrap();
    let mut hero = Unit::new("hero", "player", 100);
    let mut spider = Unit::new("Cave Spider", "cave_spider", 60);

    // Turn 1: hero throws a poison vial at the spider.
    use_item(&catalog, "poison_vial", &mut hero, Some(&mut spider)).unwrap();
    assert!(spider.effects().contains(EffectKind::Poison));
    hero.end_of_action();

    // Spider bites; both abilities trigger.
    let inflicted = profiles.inflict(spider.kind, &mut hero, || 0.0);
    assert_eq!(inflicted.len(), 2);
    assert!((hero.effects().speed_multiplier() - 0.96).abs() < 1e-6);
    spider.end_of_action();
    assert_eq!(spider.hp, 52);

    // Turn 2: hero drinks an antidote; Slow stays.
    let outcome = use_item(&catalog, "antidote", &mut hero, Some(&mut spider)).unwrap();
    assert_eq!(
        outcome,
        ApplyOutcome::Cured {
            removed: vec![EffectKind::Poison]
        }
    );
    assert!(hero.effects().contains(EffectKind::Slow));
    assert_eq!(hero.end_of_action(), vec![]);
    assert_eq!(hero.hp, 100);

    // Slow (2 turns) runs out after the hero's next action.
    hero.end_of_action();
    assert!(hero.effects().is_empty());

    // Spider's poison vial: 4 turns of 8, the first already ticked.
    for _ in 0..3 {
        spider.end_of_action();
    }
    assert_eq!(spider.hp, 28);
    assert!(spider.effects().is_empty());

    hero.end_battle();
    spider.end_battle();
    assert!(hero.effects().is_empty());
}

#[test]
fn regen_and_buff_expire_on_schedule() {
    let catalog = ConsumableCatalog::builtin();
    let mut hero = Unit::new("hero", "player", 100);
    hero.hp = 40;

    use_item(&catalog, "regen_potion", &mut hero, None).unwrap();
    use_item(&catalog, "strength_tonic", &mut hero, None).unwrap();
    assert_eq!(hero.effects().attack_flat_bonus(), 15);

    let mut expired = Vec::new();
    for _ in 0..3 {
        expired.extend(hero.end_of_action());
    }

    assert_eq!(hero.hp, 85);
    assert_eq!(expired, vec![EffectKind::Regen, EffectKind::Strength]);
    assert_eq!(hero.effects().attack_flat_bonus(), 0);
}

#[test]
fn enemy_items_need_an_enemy() {
    let catalog = ConsumableCatalog::builtin();
    let mut hero = Unit::new("hero", "player", 100);

    let err = use_item(&catalog, "flash_powder", &mut hero, None).unwrap_err();
    assert_eq!(
        err,
        ApplyError::NoOpponent {
            kind: EffectKind::Blind
        }
    );
    assert!(hero.effects().is_empty());
}

#[test]
fn dark_mage_stun_skips_exactly_one_action() {
    let profiles = DebuffProfiles::builtin().unwrap();
    let mut hero = Unit::new("hero", "player", 100);

    // Weaken misses, Stun lands.
    let mut samples = [0.9, 0.0].into_iter();
    profiles.inflict("dark_mage", &mut hero, || samples.next().unwrap_or(1.0));

    assert!(hero.effects().is_stunned());
    assert_eq!(hero.effects().attack_multiplier(), 1.0);

    hero.end_of_action();
    assert!(!hero.effects().is_stunned());
}
