use bevy::asset::LoadState;
use bevy::prelude::*;
use std::collections::HashMap;

use crate::assets_map::{AssetsMap, SheetsState};
use crate::config::tuning::Tuning;
use crate::game::{
    animation::SheetMetrics,
    components::*,
    duel::Duel,
    map::MapId,
    preset::{Archetype, PresetRegistry},
    types::{Facing, Side},
};
use crate::plugins::game_plugin::FixedGameSet;

/// Tint while the damage flash is active.
const FLASH_TINT: Color = Color::srgba(1.0, 100.0 / 255.0, 100.0 / 255.0, 220.0 / 255.0);

const HITBOX_COLOR: Color = Color::srgb(1.0, 0.2, 0.2);
const HURTBOX_COLOR: Color = Color::srgb(0.2, 1.0, 0.3);

const BACKDROP_Z: f32 = -10.0;

/// Frame geometry of every archetype whose sheets have finished loading.
#[derive(Resource, Default)]
pub struct SheetCache {
    pub metrics: HashMap<Archetype, SheetMetrics>,
}

pub struct ArenaPlugin;

impl Plugin for ArenaPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SheetCache>();
        app.init_resource::<DebugHitboxes>();

        app.add_systems(Update, measure_sheets);
        app.add_systems(
            FixedUpdate,
            apply_sheet_metrics.in_set(FixedGameSet::PrepareSet),
        );

        // ── Battle scene ────────────────────────────────────────────────
        app.add_systems(OnEnter(GamePhase::Battle), spawn_arena);
        app.add_systems(
            Update,
            (fall_back_to_default_map, animate_backdrop)
                .chain()
                .run_if(in_state(GamePhase::Battle)),
        );
        app.add_systems(
            Update,
            (sync_fighter_sprites, toggle_debug_hitboxes, draw_hitboxes)
                .run_if(in_battle_scene),
        );

        app.add_systems(OnEnter(GamePhase::MainMenu), despawn_arena);
    }
}

/// Battle, Paused and GameOver all show the (possibly frozen) arena.
pub fn in_battle_scene(state: Res<State<GamePhase>>) -> bool {
    matches!(
        state.get(),
        GamePhase::Battle | GamePhase::Paused | GamePhase::GameOver
    )
}

/// Play-field point (origin top-left, y down) to world space (origin center, y up).
pub fn field_to_world(point: Vec2, tuning: &Tuning) -> Vec2 {
    Vec2::new(
        point.x - tuning.field_width * 0.5,
        tuning.field_height * 0.5 - point.y,
    )
}

// ── Sheets ──────────────────────────────────────────────────────────

/// Measure each archetype once its sheets settle; failures keep the default frame size.
fn measure_sheets(
    mut cache: ResMut<SheetCache>,
    assets: Option<Res<AssetsMap>>,
    registry: Option<Res<PresetRegistry>>,
    asset_server: Res<AssetServer>,
    images: Res<Assets<Image>>,
    tuning: Res<Tuning>,
) {
    let (Some(assets), Some(registry)) = (assets, registry) else {
        return;
    };
    for archetype in Archetype::ALL {
        if cache.metrics.contains_key(&archetype) {
            continue;
        }
        match assets.state(archetype, &asset_server) {
            SheetsState::Loading => continue,
            SheetsState::Ready => {}
            SheetsState::Failed(actions) => {
                warn!(
                    "{:?}: sprite sheets failed to load for {:?}, using {} px frames",
                    archetype, actions, tuning.default_frame_size
                );
            }
        }
        let metrics = assets.measure(&registry, archetype, &images, tuning.default_frame_size);
        cache.metrics.insert(archetype, metrics);
    }
}

fn apply_sheet_metrics(cache: Res<SheetCache>, tuning: Res<Tuning>, mut duel: ResMut<Duel>) {
    for side in [Side::P1, Side::P2] {
        let actor = duel.actor(side);
        let Some(metrics) = cache.metrics.get(&actor.archetype()).copied() else {
            continue;
        };
        if *actor.metrics() != metrics {
            duel.actor_mut(side).set_metrics(metrics, &tuning);
        }
    }
}

// ── Scene ───────────────────────────────────────────────────────────

/// Spawn fighters and the backdrop unless they survive from a paused or finished match.
fn spawn_arena(
    mut commands: Commands,
    fighters: Query<(), With<FighterSprite>>,
    backdrops: Query<(), With<Backdrop>>,
    selection: Res<GameSelection>,
    asset_server: Res<AssetServer>,
    tuning: Res<Tuning>,
) {
    if fighters.is_empty() {
        for (side, z) in [(Side::P1, 1.0), (Side::P2, 1.1)] {
            commands.spawn((
                InGame,
                FighterSprite(side),
                Sprite::default(),
                Transform::from_xyz(0.0, 0.0, z),
            ));
        }
    }

    if backdrops.is_empty() {
        let backdrop = load_backdrop(selection.map, &asset_server);
        let first = backdrop.frames.first().cloned().unwrap_or_default();
        commands.spawn((
            InGame,
            Sprite {
                image: first,
                custom_size: Some(Vec2::new(tuning.field_width, tuning.field_height)),
                ..default()
            },
            Transform::from_xyz(0.0, 0.0, BACKDROP_Z),
            backdrop,
        ));
    }
}

fn load_backdrop(map: MapId, asset_server: &AssetServer) -> Backdrop {
    Backdrop {
        map,
        frames: map
            .frames()
            .paths()
            .into_iter()
            .map(|path| asset_server.load(path))
            .collect(),
        clock: default(),
    }
}

/// A map with a missing frame is swapped for the default one.
fn fall_back_to_default_map(
    mut q: Query<(&mut Backdrop, &mut Sprite)>,
    asset_server: Res<AssetServer>,
) {
    for (mut backdrop, mut sprite) in &mut q {
        if backdrop.map == MapId::default() {
            continue;
        }
        let failed = backdrop
            .frames
            .iter()
            .any(|frame| matches!(asset_server.load_state(frame), LoadState::Failed(_)));
        if !failed {
            continue;
        }
        error!(
            "Map '{}' has frames that failed to load, falling back to '{}'",
            backdrop.map.display_name(),
            MapId::default().display_name()
        );
        *backdrop = load_backdrop(MapId::default(), &asset_server);
        sprite.image = backdrop.frames.first().cloned().unwrap_or_default();
    }
}

fn animate_backdrop(
    time: Res<Time>,
    tuning: Res<Tuning>,
    mut q: Query<(&mut Backdrop, &mut Sprite)>,
) {
    for (mut backdrop, mut sprite) in &mut q {
        let count = backdrop.frames.len() as u32;
        if backdrop
            .clock
            .advance(time.delta_secs(), tuning.map_frame_delay, count)
        {
            let frame = backdrop.clock.frame() as usize;
            if let Some(image) = backdrop.frames.get(frame) {
                sprite.image = image.clone();
            }
        }
    }
}

/// Copy each actor's action, frame and pose into its sprite.
fn sync_fighter_sprites(
    duel: Res<Duel>,
    assets: Res<AssetsMap>,
    tuning: Res<Tuning>,
    mut q: Query<(&FighterSprite, &mut Sprite, &mut Transform)>,
) {
    for (fighter, mut sprite, mut transform) in &mut q {
        let actor = duel.actor(fighter.0);
        sprite.image = assets
            .sheet(actor.archetype(), actor.action())
            .unwrap_or_default();
        sprite.rect = Some(actor.frame_rect());
        sprite.custom_size = Some(actor.size());
        sprite.flip_x = actor.facing() == Facing::Left;
        sprite.color = if actor.is_flashing() {
            FLASH_TINT
        } else {
            Color::WHITE
        };

        let center = field_to_world(actor.bounds().center(), &tuning);
        transform.translation.x = center.x;
        transform.translation.y = center.y;
    }
}

fn despawn_arena(mut commands: Commands, q: Query<Entity, With<InGame>>) {
    for entity in &q {
        commands.entity(entity).despawn();
    }
}

// ── Debug overlay ───────────────────────────────────────────────────

fn toggle_debug_hitboxes(keyboard: Res<ButtonInput<KeyCode>>, mut debug: ResMut<DebugHitboxes>) {
    if keyboard.just_pressed(KeyCode::F1) {
        debug.0 = !debug.0;
        let state = if debug.0 { "on" } else { "off" };
        info!("Hitbox overlay {}", state);
    }
}

fn draw_hitboxes(
    debug: Res<DebugHitboxes>,
    duel: Res<Duel>,
    tuning: Res<Tuning>,
    mut gizmos: Gizmos,
) {
    if !debug.0 {
        return;
    }
    let mut outline = |rect: Rect, color: Color| {
        let center = field_to_world(rect.center(), &tuning);
        gizmos.rect_2d(Isometry2d::from_translation(center), rect.size(), color);
    };
    for side in [Side::P1, Side::P2] {
        let actor = duel.actor(side);
        outline(actor.hurtbox(&tuning.hit_shape), HURTBOX_COLOR);
        if let Some(hitbox) = actor.hitbox(&tuning.hit_shape) {
            outline(hitbox, HITBOX_COLOR);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_corners_map_to_world_edges() {
        let tuning = Tuning::default();
        assert_eq!(field_to_world(Vec2::ZERO, &tuning), Vec2::new(-640.0, 360.0));
        assert_eq!(
            field_to_world(Vec2::new(1280.0, 720.0), &tuning),
            Vec2::new(640.0, -360.0)
        );
        assert_eq!(field_to_world(Vec2::new(640.0, 360.0), &tuning), Vec2::ZERO);
    }
}
