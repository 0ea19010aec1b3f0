mod assets_map;
mod config;
mod game;
mod plugins;

use bevy::prelude::*;

use config::tuning::Tuning;
use plugins::{arena_plugin::ArenaPlugin, game_plugin::{self, GamePlugin}, menu_plugin::MenuPlugin, ui_plugin::UiPlugin};

fn main() {
    let tuning = Tuning::load_or_default();

    let mut virtual_time = Time::<Virtual>::default();
    virtual_time.set_max_delta(game_plugin::max_frame_delta(&tuning));

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Fighter Duel".into(),
                resolution: (tuning.field_width as u32, tuning.field_height as u32).into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(Time::<Fixed>::from_seconds(tuning.dt as f64))
        .insert_resource(virtual_time)
        .insert_resource(tuning)
        .add_plugins(GamePlugin)
        .add_plugins(ArenaPlugin)
        .add_plugins(MenuPlugin)
        .add_plugins(UiPlugin)
        .run();
}
