use bevy::prelude::*;

use super::map::{BackdropClock, MapId};
use super::preset::Archetype;
use super::types::{GameMode, Side};

// ── Game phase state ────────────────────────────────────────────────

#[derive(States, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    #[default]
    MainMenu,
    Selection,
    Battle,
    Paused,
    GameOver,
}

/// What the selection hub has picked for the next match.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSelection {
    pub mode: GameMode,
    pub p1: Archetype,
    pub p2: Archetype,
    pub map: MapId,
}

impl Default for GameSelection {
    fn default() -> Self {
        Self {
            mode: GameMode::PvAI,
            p1: Archetype::Knight,
            p2: Archetype::Rogue,
            map: MapId::TemplumDraconis,
        }
    }
}

/// Set when leaving GameOver/Paused with "Restart"/"Rematch"; the next Battle entry
/// restarts the match instead of resuming it.
#[derive(Resource, Debug, Default)]
pub struct PendingRestart(pub bool);

// ── Marker components ───────────────────────────────────────────────

/// Marker: tag all battle-session entities for cleanup when returning to main menu.
#[derive(Component)]
pub struct InGame;

/// Sprite showing one fighter.
#[derive(Component)]
pub struct FighterSprite(pub Side);

/// Animated arena background.
#[derive(Component, Default)]
pub struct Backdrop {
    pub map: MapId,
    pub frames: Vec<Handle<Image>>,
    pub clock: BackdropClock,
}

/// Floating damage number.
#[derive(Component)]
pub struct DamageText {
    pub velocity: Vec2,
    pub age: f32,
    pub base_color: Color,
}

// ── Presentation resources ──────────────────────────────────────────

/// Remaining screen-shake time in seconds (0 = still).
#[derive(Resource, Default)]
pub struct ScreenShake {
    pub remaining: f32,
}

/// Whether hitbox/hurtbox gizmos are drawn.
#[derive(Resource, Default)]
pub struct DebugHitboxes(pub bool);
