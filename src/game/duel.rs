use bevy::prelude::*;

use super::actor::Actor;
use super::ai::AiBrain;
use super::clock::{MatchClock, MatchOutcome};
use super::combat::{self, CombatEffect};
use super::intent::{Controller, HeldButtons};
use super::preset::ArchetypePreset;
use super::types::{GameMode, Side};
use crate::config::tuning::Tuning;

/// Display names of the two sides.
pub fn side_name(side: Side, mode: GameMode) -> &'static str {
    match (side, mode) {
        (Side::P1, _) => "Player 1",
        (Side::P2, GameMode::PvP) => "Player 2",
        (Side::P2, GameMode::PvAI) => "Rival",
    }
}

fn controller_for(side: Side, mode: GameMode) -> Controller {
    match (side, mode) {
        (Side::P2, GameMode::PvAI) => Controller::Ai(AiBrain::default()),
        _ => Controller::Human,
    }
}

/// The whole match: both actors, the round clock, and the outcome once decided.
///
/// This is the only writer of actor state. Each tick resolves intents, physics and
/// combat for both sides before anything reads the result.
#[derive(Resource, Debug, Clone)]
pub struct Duel {
    pub p1: Actor,
    pub p2: Actor,
    mode: GameMode,
    clock: MatchClock,
    outcome: Option<MatchOutcome>,
    effects: Vec<CombatEffect>,
}

impl Duel {
    pub fn new(p1: &ArchetypePreset, p2: &ArchetypePreset, mode: GameMode, tuning: &Tuning) -> Self {
        Self {
            p1: Actor::new(
                Side::P1,
                side_name(Side::P1, mode),
                p1,
                controller_for(Side::P1, mode),
                tuning,
            ),
            p2: Actor::new(
                Side::P2,
                side_name(Side::P2, mode),
                p2,
                controller_for(Side::P2, mode),
                tuning,
            ),
            mode,
            clock: MatchClock::new(tuning.round_duration),
            outcome: None,
            effects: Vec::new(),
        }
    }

    /// Apply a new selection and start a fresh match. Actors are reloaded, never replaced.
    pub fn reinitialize(
        &mut self,
        p1: &ArchetypePreset,
        p2: &ArchetypePreset,
        mode: GameMode,
        tuning: &Tuning,
    ) {
        self.mode = mode;
        self.p1.name = side_name(Side::P1, mode).into();
        self.p2.name = side_name(Side::P2, mode).into();
        self.p1.reload(p1, controller_for(Side::P1, mode), tuning);
        self.p2.reload(p2, controller_for(Side::P2, mode), tuning);
        self.restart(tuning);
    }

    /// Same fighters, fresh match.
    pub fn restart(&mut self, tuning: &Tuning) {
        self.p1.reset(tuning);
        self.p2.reset(tuning);
        self.clock = MatchClock::new(tuning.round_duration);
        self.outcome = None;
        self.effects.clear();
    }

    /// Advance one tick. Returns the outcome on the tick it is decided.
    pub fn tick(&mut self, held: HeldButtons, tuning: &Tuning, raw_dt: f32) -> Option<MatchOutcome> {
        if self.is_decided() {
            return None;
        }
        let dt = tuning.clamp_frame_dt(raw_dt);

        // Both sides decide from the same start-of-tick snapshot.
        let obs1 = self.p1.observe(&self.p2);
        let obs2 = self.p2.observe(&self.p1);
        let intent1 = self.p1.controller.intent(held.p1, &obs1, tuning, dt);
        let intent2 = self.p2.controller.intent(held.p2, &obs2, tuning, dt);

        self.p1.update(&intent1, tuning, dt);
        self.p2.update(&intent2, tuning, dt);
        combat::resolve(&mut self.p1, &mut self.p2, tuning, &mut self.effects);

        let knockout = MatchOutcome::from_knockout(self.p1.is_alive(), self.p2.is_alive());
        if let Some(outcome) = knockout {
            return Some(self.decide(outcome));
        }

        self.clock.tick(dt);
        if self.clock.expired() {
            let outcome = MatchOutcome::from_health(self.p1.health(), self.p2.health());
            return Some(self.decide(outcome));
        }
        None
    }

    fn decide(&mut self, outcome: MatchOutcome) -> MatchOutcome {
        info!(
            "Match decided: {:?} ({} {:.0} hp, {} {:.0} hp, {} left)",
            outcome,
            self.p1.name,
            self.p1.health().current(),
            self.p2.name,
            self.p2.health().current(),
            self.clock.display()
        );
        self.outcome = Some(outcome);
        outcome
    }

    /// Hand buffered presentation effects to the caller.
    pub fn drain_effects(&mut self) -> Vec<CombatEffect> {
        std::mem::take(&mut self.effects)
    }

    pub fn actor(&self, side: Side) -> &Actor {
        match side {
            Side::P1 => &self.p1,
            Side::P2 => &self.p2,
        }
    }

    pub fn actor_mut(&mut self, side: Side) -> &mut Actor {
        match side {
            Side::P1 => &mut self.p1,
            Side::P2 => &mut self.p2,
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn clock(&self) -> &MatchClock {
        &self.clock
    }

    pub fn outcome(&self) -> Option<MatchOutcome> {
        self.outcome
    }

    pub fn is_decided(&self) -> bool {
        self.outcome.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::action::Action;
    use crate::game::intent::Buttons;
    use crate::game::preset::{Archetype, PresetRegistry};

    fn duel_with(mode: GameMode, tuning: &Tuning) -> Duel {
        let reg = PresetRegistry::with_defaults(tuning.hurt_duration);
        let knight = reg.get(Archetype::Knight).unwrap();
        let rogue = reg.get(Archetype::Rogue).unwrap();
        Duel::new(knight, rogue, mode, tuning)
    }

    fn idle() -> HeldButtons {
        HeldButtons::default()
    }

    #[test]
    fn timeout_goes_to_healthier_side() {
        let tuning = Tuning {
            round_duration: 0.05,
            ..default()
        };
        let mut duel = duel_with(GameMode::PvP, &tuning);
        duel.p1.take_damage(150.0);
        duel.p2.take_damage(190.0);

        let mut decided = None;
        for _ in 0..10 {
            if let Some(outcome) = duel.tick(idle(), &tuning, tuning.dt) {
                decided = Some(outcome);
                break;
            }
        }
        assert_eq!(decided, Some(MatchOutcome::Player1WinByTime));
        assert_eq!(duel.p1.health().current(), 100.0);
        assert_eq!(duel.p2.health().current(), 60.0);
    }

    #[test]
    fn knockout_decides_immediately_and_sticks() {
        let tuning = Tuning {
            round_duration: 45.0,
            ..default()
        };
        let mut duel = duel_with(GameMode::PvP, &tuning);
        duel.tick(idle(), &tuning, tuning.dt);
        duel.p1.take_damage(tuning.max_health);

        assert_eq!(duel.tick(idle(), &tuning, tuning.dt), Some(MatchOutcome::Player2Ko));
        assert!(duel.clock().remaining() > 44.0);

        let frozen = duel.p2.clone();
        let held = HeldButtons {
            p1: Buttons::empty(),
            p2: Buttons::LEFT | Buttons::ATTACK1,
        };
        for _ in 0..60 {
            assert_eq!(duel.tick(held, &tuning, tuning.dt), None);
        }
        assert_eq!(duel.outcome(), Some(MatchOutcome::Player2Ko));
        assert_eq!(duel.p2, frozen);
    }

    #[test]
    fn knockout_beats_timeout_on_the_same_tick() {
        let tuning = Tuning {
            round_duration: 1.0 / 60.0,
            ..default()
        };
        let mut duel = duel_with(GameMode::PvP, &tuning);
        duel.p2.take_damage(tuning.max_health);
        assert_eq!(duel.tick(idle(), &tuning, tuning.dt), Some(MatchOutcome::Player1Ko));
        assert!(!duel.outcome().is_some_and(MatchOutcome::by_time));
    }

    #[test]
    fn reinitialize_twice_is_stable() {
        let tuning = Tuning::default();
        let reg = PresetRegistry::with_defaults(tuning.hurt_duration);
        let samurai = reg.get(Archetype::Samurai).unwrap();
        let knight = reg.get(Archetype::Knight).unwrap();

        let mut duel = duel_with(GameMode::PvAI, &tuning);
        let held = HeldButtons {
            p1: Buttons::RIGHT | Buttons::JUMP,
            p2: Buttons::empty(),
        };
        for _ in 0..30 {
            duel.tick(held, &tuning, tuning.dt);
        }
        duel.p2.take_damage(40.0);

        duel.reinitialize(samurai, knight, GameMode::PvP, &tuning);
        let first = duel.clone();
        duel.reinitialize(samurai, knight, GameMode::PvP, &tuning);

        assert_eq!(duel.p1, first.p1);
        assert_eq!(duel.p2, first.p2);
        assert_eq!(duel.clock(), first.clock());
        assert_eq!(duel.p1.health().current(), tuning.max_health);
        assert_eq!(duel.p2.action(), Action::Idle);
        assert_eq!(duel.p2.archetype(), Archetype::Knight);
        assert_eq!(duel.p2.name, "Player 2");
        assert!(!duel.p2.controller.is_ai());
        assert_eq!(duel.outcome(), None);
    }

    #[test]
    fn stalls_are_clamped_to_nominal_step() {
        let tuning = Tuning::default();
        let mut duel = duel_with(GameMode::PvP, &tuning);
        duel.tick(idle(), &tuning, 3.0);
        let expected = tuning.round_duration - tuning.dt;
        assert!((duel.clock().remaining() - expected).abs() < 1e-4);
    }

    #[test]
    fn rival_closes_in_and_lands_a_hit() {
        let tuning = Tuning::default();
        let mut duel = duel_with(GameMode::PvAI, &tuning);
        assert_eq!(duel.p2.name, "Rival");
        let start = duel.p1.position().x;
        duel.p2.place_at(start + 300.0);

        let mut hit = false;
        for _ in 0..600 {
            duel.tick(idle(), &tuning, tuning.dt);
            if duel.p1.health().current() < tuning.max_health {
                hit = true;
                break;
            }
        }
        assert!(hit);
        assert_eq!(duel.p1.health().current(), tuning.max_health - tuning.attack_damage);
        assert!(duel.drain_effects().contains(&CombatEffect::ScreenShake));
    }

    #[test]
    fn health_stays_in_range_over_a_long_fight() {
        let tuning = Tuning::default();
        let mut duel = duel_with(GameMode::PvAI, &tuning);
        let script = [
            Buttons::RIGHT | Buttons::RUN,
            Buttons::ATTACK1,
            Buttons::ATTACK2 | Buttons::LEFT,
            Buttons::SHIELD,
            Buttons::JUMP | Buttons::ATTACK3,
            Buttons::empty(),
        ];
        for i in 0..(60 * 90) {
            let held = HeldButtons {
                p1: script[(i / 20) % script.len()],
                p2: Buttons::empty(),
            };
            duel.tick(held, &tuning, tuning.dt);
            for actor in [&duel.p1, &duel.p2] {
                let hp = actor.health().current();
                assert!((0.0..=tuning.max_health).contains(&hp));
            }
            if duel.is_decided() {
                break;
            }
        }
    }
}
