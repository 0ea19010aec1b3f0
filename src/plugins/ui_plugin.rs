use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::prelude::*;
use rand::Rng;

use crate::config::tuning::Tuning;
use crate::game::{combat::CombatEffect, components::*, duel::Duel, events::GameEvent, types::Side};
use crate::plugins::arena_plugin::{field_to_world, in_battle_scene};
use crate::plugins::game_plugin::MainCamera;

/// Random drift added to each damage number, px/s per axis.
const DAMAGE_TEXT_JITTER: f32 = 10.0;

const BAR_WIDTH: f32 = 420.0;
const BAR_HEIGHT: f32 = 22.0;
const COLOR_BAR_BG: Color = Color::srgba(0.1, 0.1, 0.1, 0.8);
const COLOR_BAR_FILL: Color = Color::srgb(0.85, 0.15, 0.15);

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ScreenShake>();

        app.add_systems(OnEnter(GamePhase::Battle), setup_hud);
        app.add_systems(
            Update,
            (update_health_bars, update_name_labels, update_timer_display).run_if(in_battle_scene),
        );
        app.add_systems(
            Update,
            (spawn_combat_effects, drift_damage_text, apply_camera_shake)
                .run_if(in_state(GamePhase::Battle).or(in_state(GamePhase::GameOver))),
        );
        app.add_systems(OnExit(GamePhase::Battle), settle_camera);
        app.add_systems(OnExit(GamePhase::GameOver), settle_camera);
    }
}

#[derive(Component)]
struct HudRoot;

#[derive(Component)]
struct HealthFill(Side);

#[derive(Component)]
struct NameLabel(Side);

#[derive(Component)]
struct TimerText;

// ── HUD ─────────────────────────────────────────────────────────────

fn setup_hud(mut commands: Commands, existing: Query<(), With<HudRoot>>) {
    if !existing.is_empty() {
        return;
    }
    commands
        .spawn((
            InGame,
            HudRoot,
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                top: Val::Px(16.0),
                padding: UiRect::horizontal(Val::Px(24.0)),
                flex_direction: FlexDirection::Row,
                justify_content: JustifyContent::SpaceBetween,
                align_items: AlignItems::FlexStart,
                ..default()
            },
        ))
        .with_children(|parent| {
            spawn_health_panel(parent, Side::P1);
            parent.spawn((
                TimerText,
                Text::new("00:00"),
                TextFont {
                    font_size: 36.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
            spawn_health_panel(parent, Side::P2);
        });
}

fn spawn_health_panel(parent: &mut ChildSpawnerCommands, side: Side) {
    let align = match side {
        Side::P1 => AlignItems::FlexStart,
        Side::P2 => AlignItems::FlexEnd,
    };
    parent
        .spawn(Node {
            flex_direction: FlexDirection::Column,
            align_items: align,
            row_gap: Val::Px(6.0),
            ..default()
        })
        .with_children(|panel| {
            panel.spawn((
                NameLabel(side),
                Text::new(""),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
            panel
                .spawn((
                    Node {
                        width: Val::Px(BAR_WIDTH),
                        height: Val::Px(BAR_HEIGHT),
                        justify_content: match side {
                            Side::P1 => JustifyContent::FlexStart,
                            Side::P2 => JustifyContent::FlexEnd,
                        },
                        ..default()
                    },
                    BackgroundColor(COLOR_BAR_BG),
                ))
                .with_children(|bar| {
                    bar.spawn((
                        HealthFill(side),
                        Node {
                            width: Val::Percent(100.0),
                            height: Val::Percent(100.0),
                            ..default()
                        },
                        BackgroundColor(COLOR_BAR_FILL),
                    ));
                });
        });
}

fn update_health_bars(duel: Res<Duel>, mut q: Query<(&HealthFill, &mut Node)>) {
    for (fill, mut node) in &mut q {
        node.width = Val::Percent(duel.actor(fill.0).health().ratio() * 100.0);
    }
}

fn update_name_labels(duel: Res<Duel>, mut q: Query<(&NameLabel, &mut Text)>) {
    for (label, mut text) in &mut q {
        let actor = duel.actor(label.0);
        let name = format!("{} ({})", actor.name, actor.preset().name);
        if **text != name {
            **text = name;
        }
    }
}

fn update_timer_display(duel: Res<Duel>, mut q: Query<&mut Text, With<TimerText>>) {
    for mut text in &mut q {
        **text = duel.clock().display();
    }
}

// ── Combat effects ──────────────────────────────────────────────────

fn spawn_combat_effects(
    mut commands: Commands,
    mut events: MessageReader<GameEvent>,
    mut shake: ResMut<ScreenShake>,
    tuning: Res<Tuning>,
) {
    let mut rng = rand::thread_rng();
    for event in events.read() {
        let GameEvent::Effect(effect) = event else {
            continue;
        };
        match effect {
            CombatEffect::DamageNumber {
                text,
                color,
                anchor,
            } => {
                let at = field_to_world(*anchor, &tuning);
                let velocity = Vec2::new(
                    rng.gen_range(-DAMAGE_TEXT_JITTER..=DAMAGE_TEXT_JITTER),
                    tuning.damage_text_speed + rng.gen_range(-DAMAGE_TEXT_JITTER..=DAMAGE_TEXT_JITTER),
                );
                commands.spawn((
                    InGame,
                    DamageText {
                        velocity,
                        age: 0.0,
                        base_color: *color,
                    },
                    Text2d::new(text.clone()),
                    TextFont {
                        font_size: 28.0,
                        ..default()
                    },
                    TextColor(*color),
                    Transform::from_xyz(at.x, at.y, 5.0),
                ));
            }
            CombatEffect::ScreenShake => shake.remaining = tuning.shake_duration,
        }
    }
}

/// Rise (velocity is in play-field units, y down) and fade out.
fn drift_damage_text(
    mut commands: Commands,
    time: Res<Time>,
    tuning: Res<Tuning>,
    mut q: Query<(Entity, &mut DamageText, &mut Transform, &mut TextColor)>,
) {
    let dt = time.delta_secs();
    for (entity, mut label, mut transform, mut color) in &mut q {
        label.age += dt;
        if label.age >= tuning.damage_text_lifetime {
            commands.entity(entity).despawn();
            continue;
        }
        transform.translation.x += label.velocity.x * dt;
        transform.translation.y -= label.velocity.y * dt;
        let alpha = 1.0 - label.age / tuning.damage_text_lifetime;
        color.0 = label.base_color.with_alpha(alpha);
    }
}

fn apply_camera_shake(
    time: Res<Time>,
    tuning: Res<Tuning>,
    mut shake: ResMut<ScreenShake>,
    mut camera: Query<&mut Transform, With<MainCamera>>,
) {
    let Ok(mut transform) = camera.single_mut() else {
        return;
    };
    if shake.remaining <= 0.0 || tuning.shake_duration <= 0.0 {
        transform.translation.x = 0.0;
        transform.translation.y = 0.0;
        return;
    }
    let strength = tuning.shake_max_offset * (shake.remaining / tuning.shake_duration).min(1.0);
    let mut rng = rand::thread_rng();
    transform.translation.x = rng.gen_range(-strength..=strength);
    transform.translation.y = rng.gen_range(-strength..=strength);
    shake.remaining = (shake.remaining - time.delta_secs()).max(0.0);
}

fn settle_camera(
    mut shake: ResMut<ScreenShake>,
    mut camera: Query<&mut Transform, With<MainCamera>>,
) {
    shake.remaining = 0.0;
    for mut transform in &mut camera {
        transform.translation.x = 0.0;
        transform.translation.y = 0.0;
    }
}
