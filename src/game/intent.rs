use bevy::prelude::*;
use bitflags::bitflags;

use super::action::AttackKind;
use super::ai::{AiBrain, Observation};
use crate::config::tuning::Tuning;

bitflags! {
    /// Logical buttons of one side, as currently held.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Buttons: u8 {
        const LEFT    = 1 << 0;
        const RIGHT   = 1 << 1;
        const JUMP    = 1 << 2;
        const ATTACK1 = 1 << 3;
        const ATTACK2 = 1 << 4;
        const ATTACK3 = 1 << 5;
        const SHIELD  = 1 << 6;
        const RUN     = 1 << 7;
    }
}

impl Buttons {
    pub fn to_intent(self) -> Intent {
        let mut move_dir = 0.0;
        if self.contains(Self::LEFT) {
            move_dir -= 1.0;
        }
        if self.contains(Self::RIGHT) {
            move_dir += 1.0;
        }

        let attack = if self.contains(Self::ATTACK1) {
            Some(AttackKind::Light)
        } else if self.contains(Self::ATTACK2) {
            Some(AttackKind::Medium)
        } else if self.contains(Self::ATTACK3) {
            Some(AttackKind::Heavy)
        } else {
            None
        };

        Intent {
            move_dir,
            run: self.contains(Self::RUN),
            jump: self.contains(Self::JUMP),
            attack,
            shield: self.contains(Self::SHIELD),
        }
    }
}

/// Held buttons per side: written in Update, consumed in FixedUpdate.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldButtons {
    pub p1: Buttons,
    pub p2: Buttons,
}

/// One tick's worth of requests for an actor, independent of who made them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Intent {
    /// Desired horizontal direction; the magnitude scales movement speed.
    pub move_dir: f32,
    pub run: bool,
    pub jump: bool,
    pub attack: Option<AttackKind>,
    pub shield: bool,
}

/// Where an actor's intents come from.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Controller {
    #[default]
    Human,
    Ai(AiBrain),
}

impl Controller {
    pub fn is_ai(&self) -> bool {
        matches!(self, Self::Ai(_))
    }

    /// Human sides read `held` fresh every tick; AI sides consult their brain.
    pub fn intent(&mut self, held: Buttons, obs: &Observation, tuning: &Tuning, dt: f32) -> Intent {
        match self {
            Self::Human => held.to_intent(),
            Self::Ai(brain) => brain.think(obs, tuning, dt),
        }
    }

    /// Same source, fresh state.
    pub fn reset(&mut self) {
        if let Self::Ai(brain) = self {
            *brain = AiBrain::default();
        }
    }
}

/// Keyboard layout of one side.
#[derive(Debug, Clone, Copy)]
pub struct KeyBindings {
    pub left: KeyCode,
    pub right: KeyCode,
    pub jump: KeyCode,
    pub run: KeyCode,
    pub attack1: KeyCode,
    pub attack2: KeyCode,
    pub attack3: KeyCode,
    pub shield: KeyCode,
}

impl KeyBindings {
    pub const P1: Self = Self {
        left: KeyCode::KeyA,
        right: KeyCode::KeyD,
        jump: KeyCode::KeyW,
        run: KeyCode::ShiftLeft,
        attack1: KeyCode::KeyF,
        attack2: KeyCode::KeyG,
        attack3: KeyCode::KeyH,
        shield: KeyCode::KeyT,
    };

    pub const P2: Self = Self {
        left: KeyCode::ArrowLeft,
        right: KeyCode::ArrowRight,
        jump: KeyCode::ArrowUp,
        run: KeyCode::ShiftRight,
        attack1: KeyCode::Numpad1,
        attack2: KeyCode::Numpad2,
        attack3: KeyCode::Numpad3,
        shield: KeyCode::Numpad0,
    };

    pub fn sample(&self, keys: &ButtonInput<KeyCode>) -> Buttons {
        let pairs = [
            (self.left, Buttons::LEFT),
            (self.right, Buttons::RIGHT),
            (self.jump, Buttons::JUMP),
            (self.run, Buttons::RUN),
            (self.attack1, Buttons::ATTACK1),
            (self.attack2, Buttons::ATTACK2),
            (self.attack3, Buttons::ATTACK3),
            (self.shield, Buttons::SHIELD),
        ];
        pairs
            .into_iter()
            .filter(|(key, _)| keys.pressed(*key))
            .fold(Buttons::empty(), |acc, (_, button)| acc | button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_directions_cancel() {
        let intent = (Buttons::LEFT | Buttons::RIGHT).to_intent();
        assert_eq!(intent.move_dir, 0.0);
    }

    #[test]
    fn lower_attack_button_wins() {
        let intent = (Buttons::ATTACK3 | Buttons::ATTACK2).to_intent();
        assert_eq!(intent.attack, Some(AttackKind::Medium));
        let intent = (Buttons::ATTACK1 | Buttons::ATTACK3).to_intent();
        assert_eq!(intent.attack, Some(AttackKind::Light));
    }

    #[test]
    fn sampling_reads_only_bound_keys() {
        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::KeyA);
        keys.press(KeyCode::KeyT);
        keys.press(KeyCode::ArrowUp);
        assert_eq!(KeyBindings::P1.sample(&keys), Buttons::LEFT | Buttons::SHIELD);
        assert_eq!(KeyBindings::P2.sample(&keys), Buttons::JUMP);
    }
}
