use bevy::prelude::*;

use super::clock::MatchOutcome;
use super::combat::CombatEffect;

/// Events leaving the fixed-step simulation, read by presentation and menus.
#[derive(Message, Debug, Clone, PartialEq)]
pub enum GameEvent {
    Effect(CombatEffect),
    MatchDecided(MatchOutcome),
}
