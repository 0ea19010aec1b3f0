use bevy::prelude::*;

use super::action::AttackKind;
use super::intent::Intent;
use super::types::Elapsed;
use crate::config::tuning::Tuning;

/// What the AI is allowed to know about the fight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub position: Vec2,
    pub opponent_position: Vec2,
    pub opponent_alive: bool,
    pub can_attack: bool,
    /// Attacking or shielding; a committed action is never interrupted.
    pub busy: bool,
}

/// Decision state of a computer-controlled actor.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AiBrain {
    since_decision: Elapsed,
    chasing: bool,
}

impl AiBrain {
    pub fn is_chasing(&self) -> bool {
        self.chasing
    }

    /// Produce this tick's intent. Strategy is re-evaluated only every decision interval;
    /// chasing carries over between decisions.
    pub fn think(&mut self, obs: &Observation, tuning: &Tuning, dt: f32) -> Intent {
        if !obs.opponent_alive {
            self.chasing = false;
            return Intent::default();
        }

        self.since_decision.advance(dt);
        if self.since_decision.reached(tuning.ai_decision_interval) {
            self.since_decision = Elapsed::default();
            if !obs.busy {
                let (band_min, band_max) = tuning.ai_attack_band();
                let distance = obs.position.distance(obs.opponent_position);
                if (band_min..=band_max).contains(&distance) && obs.can_attack {
                    self.chasing = false;
                    return Intent {
                        attack: Some(AttackKind::Light),
                        ..default()
                    };
                }
                self.chasing = distance < tuning.ai_detection_range;
            }
        }

        if !self.chasing || obs.busy {
            return Intent::default();
        }

        let (band_min, _) = tuning.ai_attack_band();
        let dead_zone = band_min * 0.5;
        let dx = obs.opponent_position.x - obs.position.x;
        let move_dir = if dx < -dead_zone {
            -tuning.ai_chase_speed_ratio
        } else if dx > dead_zone {
            tuning.ai_chase_speed_ratio
        } else {
            0.0
        };

        Intent {
            move_dir,
            ..default()
        }
    }
}
