use bevy::camera::ScalingMode;
use bevy::input::InputSystems;
use bevy::prelude::*;
use std::time::Duration;

use crate::assets_map::AssetsMap;
use crate::config::tuning::Tuning;
use crate::game::{
    components::*,
    duel::Duel,
    events::GameEvent,
    intent::{HeldButtons, KeyBindings},
    preset::PresetRegistry,
    types::GameMode,
};

// ── SystemSets (strict FixedUpdate ordering, battle-phase only) ─────

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FixedGameSet {
    /// Install anything the presentation side learned since the last tick (sheet metrics).
    PrepareSet,
    SimulateSet,
}

/// Marker for the camera that shakes.
#[derive(Component)]
pub struct MainCamera;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<GameEvent>();
        app.init_state::<GamePhase>();
        app.init_resource::<HeldButtons>();
        app.init_resource::<GameSelection>();
        app.init_resource::<PendingRestart>();

        app.configure_sets(
            FixedUpdate,
            (FixedGameSet::PrepareSet, FixedGameSet::SimulateSet)
                .chain()
                .run_if(in_state(GamePhase::Battle)),
        );
        app.add_systems(FixedUpdate, tick_duel.in_set(FixedGameSet::SimulateSet));

        // ── Startup ─────────────────────────────────────────────────────
        app.add_systems(Startup, setup_game);

        // ── Battle ──────────────────────────────────────────────────────
        app.add_systems(OnEnter(GamePhase::Battle), start_match);
        register_input_sampling(app);
        app.add_systems(Update, check_game_over.run_if(in_state(GamePhase::Battle)));
        app.add_systems(OnExit(GamePhase::Battle), release_input);

        // ── Always-on ───────────────────────────────────────────────────
        app.add_systems(Update, tuning_reload_input);
    }
}

// ── Startup ─────────────────────────────────────────────────────────

fn setup_game(
    mut commands: Commands,
    tuning: Res<Tuning>,
    selection: Res<GameSelection>,
    asset_server: Res<AssetServer>,
) {
    // Camera (Bevy 0.18): Camera2d + Projection::Orthographic, letterboxed to the play field
    commands.spawn((
        Camera2d,
        MainCamera,
        Projection::Orthographic(OrthographicProjection {
            scaling_mode: ScalingMode::AutoMin {
                min_width: tuning.field_width,
                min_height: tuning.field_height,
            },
            ..OrthographicProjection::default_2d()
        }),
    ));

    let registry = PresetRegistry::with_defaults(tuning.hurt_duration);
    let assets = AssetsMap::load(&asset_server, &registry);

    let (Some(p1), Some(p2)) = (registry.get(selection.p1), registry.get(selection.p2)) else {
        error!("Preset registry is missing a default archetype");
        return;
    };
    commands.insert_resource(Duel::new(p1, p2, selection.mode, &tuning));
    commands.insert_resource(assets);
    commands.insert_resource(registry);
}

// ── Battle phase systems ────────────────────────────────────────────

/// Reinitialize the duel when entering Battle for a new match; resuming leaves it alone.
fn start_match(
    mut pending: ResMut<PendingRestart>,
    selection: Res<GameSelection>,
    registry: Res<PresetRegistry>,
    tuning: Res<Tuning>,
    mut duel: ResMut<Duel>,
) {
    if !pending.0 {
        return;
    }
    pending.0 = false;

    let (Some(p1), Some(p2)) = (registry.get(selection.p1), registry.get(selection.p2)) else {
        warn!("Unknown archetype in selection {:?}, restarting current fighters", selection);
        duel.restart(&tuning);
        return;
    };
    duel.reinitialize(p1, p2, selection.mode, &tuning);
    info!(
        "Match start: {:?} vs {:?} on {} ({:?})",
        selection.p1,
        selection.p2,
        selection.map.display_name(),
        selection.mode
    );
}

/// Keys are read after bevy updates them and before the fixed loop ticks.
fn register_input_sampling(app: &mut App) {
    app.add_systems(
        PreUpdate,
        sample_input
            .after(InputSystems)
            .run_if(in_state(GamePhase::Battle)),
    );
}

/// Poll held buttons for the human sides.
fn sample_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    duel: Res<Duel>,
    mut held: ResMut<HeldButtons>,
) {
    held.p1 = KeyBindings::P1.sample(&keyboard);
    held.p2 = match duel.mode() {
        GameMode::PvP => KeyBindings::P2.sample(&keyboard),
        GameMode::PvAI => default(),
    };
}

/// Nothing stays held across a pause or the end of a match.
fn release_input(mut held: ResMut<HeldButtons>) {
    *held = HeldButtons::default();
}

/// One simulation tick; publishes effects and the outcome.
fn tick_duel(
    time: Res<Time>,
    tuning: Res<Tuning>,
    held: Res<HeldButtons>,
    mut duel: ResMut<Duel>,
    mut events: MessageWriter<GameEvent>,
) {
    let outcome = duel.tick(*held, &tuning, time.delta_secs());
    for effect in duel.drain_effects() {
        events.write(GameEvent::Effect(effect));
    }
    if let Some(outcome) = outcome {
        events.write(GameEvent::MatchDecided(outcome));
    }
}

/// Transition to GameOver once the outcome is decided.
fn check_game_over(
    mut events: MessageReader<GameEvent>,
    mut next_state: ResMut<NextState<GamePhase>>,
) {
    for event in events.read() {
        if let GameEvent::MatchDecided(_) = event {
            next_state.set(GamePhase::GameOver);
        }
    }
}

// ── Always-on ───────────────────────────────────────────────────────

/// Longest frame delta virtual time may report before the simulation sees a stall.
pub fn max_frame_delta(tuning: &Tuning) -> Duration {
    Duration::from_secs_f32(tuning.max_frame_dt.max(tuning.dt))
}

/// Push tuning into everything derived from it. Running matches keep their presets
/// until the next match start.
fn apply_tuning(
    tuning: &Tuning,
    registry: &mut PresetRegistry,
    fixed: &mut Time<Fixed>,
    virtual_time: &mut Time<Virtual>,
) {
    *registry = PresetRegistry::with_defaults(tuning.hurt_duration);
    fixed.set_timestep_seconds(tuning.dt as f64);
    virtual_time.set_max_delta(max_frame_delta(tuning));
}

/// Reload tuning with F5.
fn tuning_reload_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut tuning: ResMut<Tuning>,
    mut registry: ResMut<PresetRegistry>,
    mut fixed: ResMut<Time<Fixed>>,
    mut virtual_time: ResMut<Time<Virtual>>,
) {
    if keyboard.just_pressed(KeyCode::F5) {
        tuning.reload();
        apply_tuning(&tuning, &mut registry, &mut fixed, &mut virtual_time);
    }
}
