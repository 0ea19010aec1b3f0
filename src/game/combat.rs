use bevy::prelude::*;

use super::actor::{Actor, HitOutcome};
use super::types::Side;
use crate::config::tuning::Tuning;

/// Damage number color when Player 1 lands a hit.
pub const P1_HIT_COLOR: Color = Color::srgb(1.0, 1.0, 0.0);
/// Damage number color when Player 2 lands a hit.
pub const P2_HIT_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);

/// Vertical gap between a victim's sprite bounds and its damage number.
const DAMAGE_TEXT_LIFT: f32 = 20.0;

/// Receiver of presentational side effects. Fire-and-forget.
pub trait EffectSink {
    fn damage_number(&mut self, text: String, color: Color, anchor: Vec2);
    fn screen_shake(&mut self);
}

/// Buffered effect, drained by the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum CombatEffect {
    DamageNumber {
        text: String,
        color: Color,
        /// Play-field position (y down).
        anchor: Vec2,
    },
    ScreenShake,
}

impl EffectSink for Vec<CombatEffect> {
    fn damage_number(&mut self, text: String, color: Color, anchor: Vec2) {
        self.push(CombatEffect::DamageNumber {
            text,
            color,
            anchor,
        });
    }

    fn screen_shake(&mut self) {
        self.push(CombatEffect::ScreenShake);
    }
}

/// What each side's swing did this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Exchange {
    pub p1: Option<HitOutcome>,
    pub p2: Option<HitOutcome>,
}

fn overlaps(a: Rect, b: Rect) -> bool {
    !a.intersect(b).is_empty()
}

/// Whether `attacker`'s live swing touches `victim` this tick.
fn connects(attacker: &Actor, victim: &Actor, tuning: &Tuning) -> bool {
    victim.is_alive()
        && attacker
            .live_hitbox(&tuning.hit_shape)
            .is_some_and(|hitbox| overlaps(hitbox, victim.hurtbox(&tuning.hit_shape)))
}

fn land(
    attacker: &mut Actor,
    victim: &mut Actor,
    tuning: &Tuning,
    sink: &mut impl EffectSink,
) -> HitOutcome {
    attacker.mark_swing_connected();
    let outcome = victim.take_damage(tuning.attack_damage);
    debug!(
        "{} ({:?}) hit {} ({:?}): {:?}, {:.0} hp left",
        attacker.name,
        attacker.side(),
        victim.name,
        victim.side(),
        outcome,
        victim.health().current()
    );

    if matches!(outcome, HitOutcome::Hurt | HitOutcome::Killed) {
        let bounds = victim.bounds();
        let anchor = Vec2::new(bounds.center().x, bounds.min.y - DAMAGE_TEXT_LIFT);
        let color = match attacker.side() {
            Side::P1 => P1_HIT_COLOR,
            Side::P2 => P2_HIT_COLOR,
        };
        sink.damage_number(format!("-{}", tuning.attack_damage as i32), color, anchor);
        sink.screen_shake();
    }
    outcome
}

/// Resolve both swings for one tick. Connections are decided before any damage
/// is applied, so a mutual trade lands on both sides regardless of order.
pub fn resolve(
    p1: &mut Actor,
    p2: &mut Actor,
    tuning: &Tuning,
    sink: &mut impl EffectSink,
) -> Exchange {
    let p1_connects = connects(p1, p2, tuning);
    let p2_connects = connects(p2, p1, tuning);

    let mut exchange = Exchange::default();
    if p1_connects {
        exchange.p1 = Some(land(p1, p2, tuning, sink));
    }
    if p2_connects {
        exchange.p2 = Some(land(p2, p1, tuning, sink));
    }
    exchange
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::action::Action;
    use crate::game::intent::{Buttons, Controller};
    use crate::game::preset::{Archetype, PresetRegistry};

    struct Fixture {
        tuning: Tuning,
        p1: Actor,
        p2: Actor,
        effects: Vec<CombatEffect>,
    }

    impl Fixture {
        /// Two knights facing each other `gap` pixels apart (left edges).
        fn new(gap: f32) -> Self {
            let tuning = Tuning::default();
            let reg = PresetRegistry::with_defaults(tuning.hurt_duration);
            let preset = reg.get(Archetype::Knight).unwrap();
            let mut p1 = Actor::new(Side::P1, "One", preset, Controller::Human, &tuning);
            let mut p2 = Actor::new(Side::P2, "Two", preset, Controller::Human, &tuning);
            p1.place_at(400.0);
            p2.place_at(400.0 + gap);
            Self {
                tuning,
                p1,
                p2,
                effects: Vec::new(),
            }
        }

        fn tick(&mut self, b1: Buttons, b2: Buttons) -> Exchange {
            let dt = self.tuning.dt;
            self.p1.update(&b1.to_intent(), &self.tuning, dt);
            self.p2.update(&b2.to_intent(), &self.tuning, dt);
            resolve(&mut self.p1, &mut self.p2, &self.tuning, &mut self.effects)
        }
    }

    #[test]
    fn mutual_trade_hits_both() {
        let mut f = Fixture::new(60.0);
        let exchange = f.tick(Buttons::ATTACK1, Buttons::ATTACK1);
        assert_eq!(exchange.p1, Some(HitOutcome::Hurt));
        assert_eq!(exchange.p2, Some(HitOutcome::Hurt));
        assert_eq!(f.p1.health().current(), 238.0);
        assert_eq!(f.p2.health().current(), 238.0);
    }

    #[test]
    fn trade_is_symmetric_in_argument_order() {
        let mut f = Fixture::new(60.0);
        let dt = f.tuning.dt;
        f.p1.update(&Buttons::ATTACK1.to_intent(), &f.tuning, dt);
        f.p2.update(&Buttons::ATTACK1.to_intent(), &f.tuning, dt);
        resolve(&mut f.p2, &mut f.p1, &f.tuning, &mut f.effects);
        assert_eq!(f.p1.health().current(), 238.0);
        assert_eq!(f.p2.health().current(), 238.0);
    }

    #[test]
    fn one_swing_hits_at_most_once() {
        let mut f = Fixture::new(60.0);
        f.tick(Buttons::ATTACK1, Buttons::empty());
        // Hold the overlap for the rest of the swing.
        for _ in 0..40 {
            let exchange = f.tick(Buttons::empty(), Buttons::empty());
            assert_eq!(exchange.p1, None);
        }
        assert_eq!(f.p2.health().current(), 238.0);
        let numbers = f
            .effects
            .iter()
            .filter(|e| matches!(e, CombatEffect::DamageNumber { .. }))
            .count();
        assert_eq!(numbers, 1);
    }

    #[test]
    fn hit_emits_number_and_shake() {
        let mut f = Fixture::new(60.0);
        f.tick(Buttons::ATTACK1, Buttons::empty());
        let top = f.p2.bounds().min.y;
        match f.effects.as_slice() {
            [CombatEffect::DamageNumber { text, color, anchor }, CombatEffect::ScreenShake] => {
                assert_eq!(text, "-12");
                assert_eq!(*color, P1_HIT_COLOR);
                assert_eq!(anchor.y, top - DAMAGE_TEXT_LIFT);
            }
            other => panic!("unexpected effects {other:?}"),
        }
    }

    #[test]
    fn shielded_victim_takes_nothing_and_swing_is_spent() {
        let mut f = Fixture::new(60.0);
        f.tick(Buttons::empty(), Buttons::SHIELD);
        let exchange = f.tick(Buttons::ATTACK1, Buttons::SHIELD);
        assert_eq!(exchange.p1, Some(HitOutcome::Blocked));
        assert_eq!(f.p2.health().current(), f.tuning.max_health);
        assert_eq!(f.p2.action(), Action::Shield);
        assert!(f.p1.swing_connected());
        assert!(f.effects.is_empty());
    }

    #[test]
    fn hurt_mid_swing_cancels_pending_damage() {
        let mut f = Fixture::new(400.0);
        f.tick(Buttons::ATTACK1, Buttons::empty());
        assert!(f.p1.is_attacking());
        assert!(!f.p1.swing_connected());

        f.p1.take_damage(12.0);
        f.p2.place_at(460.0);
        let exchange = f.tick(Buttons::empty(), Buttons::empty());
        assert_eq!(exchange.p1, None);
        assert_eq!(f.p2.health().current(), f.tuning.max_health);
    }

    #[test]
    fn hurt_actor_cannot_start_a_swing() {
        let mut f = Fixture::new(60.0);
        f.tick(Buttons::empty(), Buttons::ATTACK1);
        assert!(f.p1.is_hurt());
        let exchange = f.tick(Buttons::ATTACK1, Buttons::empty());
        assert_eq!(exchange.p1, None);
        assert!(!f.p1.is_attacking());
        assert_eq!(f.p2.health().current(), f.tuning.max_health);
    }

    #[test]
    fn out_of_reach_swing_misses() {
        let mut f = Fixture::new(400.0);
        let exchange = f.tick(Buttons::ATTACK1, Buttons::ATTACK1);
        assert_eq!(exchange, Exchange::default());
        assert!(f.effects.is_empty());
    }

    #[test]
    fn dead_victim_is_not_hit_again() {
        let mut f = Fixture::new(60.0);
        f.p2.take_damage(1000.0);
        let exchange = f.tick(Buttons::ATTACK1, Buttons::empty());
        assert_eq!(exchange.p1, None);
        assert!(!f.p1.swing_connected());
    }
}
