use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::prelude::*;

use crate::game::{
    clock::MatchOutcome,
    components::{GamePhase, GameSelection, PendingRestart},
    duel::{side_name, Duel},
    preset::{Archetype, PresetRegistry},
    types::{GameMode, Side},
};

// ── Marker components ────────────────────────────────────────────────

#[derive(Component)]
struct MainMenuRoot;

#[derive(Component)]
struct SelectionRoot;

#[derive(Component)]
struct PauseOverlay;

#[derive(Component)]
struct GameOverOverlay;

#[derive(Component)]
enum MenuButton {
    StartGame,
    Quit,
}

#[derive(Component)]
enum SelectionButton {
    ModePvAI,
    ModePvP,
    PrevFighter(Side),
    NextFighter(Side),
    PrevMap,
    NextMap,
    StartBattle,
    Back,
}

#[derive(Component)]
enum PauseButton {
    Resume,
    Restart,
    MainMenu,
}

#[derive(Component)]
enum GameOverButton {
    Rematch,
    MainMenu,
}

/// Mode buttons that stay lit while their mode is selected.
#[derive(Component)]
struct SelectionHighlight;

#[derive(Component)]
struct FighterLabel(Side);

#[derive(Component)]
struct FighterPortrait(Side);

#[derive(Component)]
struct MapLabel;

#[derive(Component)]
struct MapPreview;

// ── Colors ───────────────────────────────────────────────────────────

const COLOR_BG: Color = Color::srgba(0.08, 0.08, 0.12, 1.0);
const COLOR_BTN: Color = Color::srgba(0.18, 0.20, 0.28, 1.0);
const COLOR_BTN_HOVER: Color = Color::srgba(0.28, 0.32, 0.42, 1.0);
const COLOR_BTN_PRESS: Color = Color::srgba(0.12, 0.14, 0.20, 1.0);
const COLOR_SELECTED: Color = Color::srgba(0.15, 0.45, 0.75, 1.0);
const COLOR_SELECTED_HOVER: Color = Color::srgba(0.20, 0.55, 0.85, 1.0);
const COLOR_TEXT: Color = Color::WHITE;
const COLOR_TEXT_DIM: Color = Color::srgba(0.5, 0.5, 0.5, 1.0);
const COLOR_ACCENT: Color = Color::srgba(0.2, 0.7, 1.0, 1.0);
const COLOR_CARD: Color = Color::srgba(0.12, 0.14, 0.20, 1.0);
const COLOR_OVERLAY: Color = Color::srgba(0.0, 0.0, 0.0, 0.6);

const COLOR_GOLD: Color = Color::srgb(1.0, 215.0 / 255.0, 0.0);
const COLOR_LOSS: Color = Color::srgb(1.0, 69.0 / 255.0, 0.0);
const COLOR_DRAW: Color = Color::srgb(1.0, 165.0 / 255.0, 0.0);
const COLOR_RESULT_WIN: Color = Color::srgb(50.0 / 255.0, 205.0 / 255.0, 50.0 / 255.0);
const COLOR_RESULT_DRAW: Color = Color::srgb(1.0, 140.0 / 255.0, 0.0);

// ── Plugin ───────────────────────────────────────────────────────────

pub struct MenuPlugin;

impl Plugin for MenuPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, button_feedback);

        // Main menu
        app.add_systems(OnEnter(GamePhase::MainMenu), spawn_main_menu);
        app.add_systems(OnExit(GamePhase::MainMenu), despawn::<MainMenuRoot>);
        app.add_systems(Update, menu_button_system.run_if(in_state(GamePhase::MainMenu)));

        // Selection hub
        app.add_systems(OnEnter(GamePhase::Selection), spawn_selection_hub);
        app.add_systems(OnExit(GamePhase::Selection), despawn::<SelectionRoot>);
        app.add_systems(
            Update,
            (selection_button_system, update_selection_hub_visuals)
                .chain()
                .run_if(in_state(GamePhase::Selection)),
        );

        // Pause
        app.add_systems(
            Update,
            pause_toggle_input.run_if(in_state(GamePhase::Battle).or(in_state(GamePhase::Paused))),
        );
        app.add_systems(OnEnter(GamePhase::Paused), spawn_pause_overlay);
        app.add_systems(OnExit(GamePhase::Paused), despawn::<PauseOverlay>);
        app.add_systems(Update, pause_button_system.run_if(in_state(GamePhase::Paused)));

        // Game over overlay
        app.add_systems(OnEnter(GamePhase::GameOver), spawn_game_over_overlay);
        app.add_systems(OnExit(GamePhase::GameOver), despawn::<GameOverOverlay>);
        app.add_systems(
            Update,
            (game_over_button_system, game_over_input).run_if(in_state(GamePhase::GameOver)),
        );
    }
}

// ── Generic despawn ──────────────────────────────────────────────────

fn despawn<T: Component>(mut commands: Commands, query: Query<Entity, With<T>>) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}

/// Hover/press tint for every plain button.
fn button_feedback(
    mut q: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>, Without<SelectionHighlight>),
    >,
) {
    for (interaction, mut bg) in &mut q {
        *bg = BackgroundColor(match interaction {
            Interaction::Pressed => COLOR_BTN_PRESS,
            Interaction::Hovered => COLOR_BTN_HOVER,
            Interaction::None => COLOR_BTN,
        });
    }
}

// ═══════════════════════════════════════════════════════════════════════
// MAIN MENU
// ═══════════════════════════════════════════════════════════════════════

fn spawn_main_menu(mut commands: Commands) {
    commands
        .spawn((
            MainMenuRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(20.0),
                ..default()
            },
            BackgroundColor(COLOR_BG),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("FIGHTER DUEL"),
                TextFont { font_size: 64.0, ..default() },
                TextColor(COLOR_ACCENT),
                Node { margin: UiRect::bottom(Val::Px(40.0)), ..default() },
            ));
            spawn_btn(parent, "Start Game", MenuButton::StartGame, 360.0, 56.0);
            spawn_btn(parent, "Quit", MenuButton::Quit, 360.0, 56.0);
        });
}

fn menu_button_system(
    q: Query<(&Interaction, &MenuButton), Changed<Interaction>>,
    mut next_state: ResMut<NextState<GamePhase>>,
    mut exit: MessageWriter<AppExit>,
) {
    for (interaction, button) in &q {
        if *interaction != Interaction::Pressed {
            continue;
        }
        match button {
            MenuButton::StartGame => next_state.set(GamePhase::Selection),
            MenuButton::Quit => {
                exit.write(AppExit::Success);
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// SELECTION HUB
// ═══════════════════════════════════════════════════════════════════════

fn spawn_selection_hub(
    mut commands: Commands,
    selection: Res<GameSelection>,
    registry: Res<PresetRegistry>,
    asset_server: Res<AssetServer>,
) {
    commands
        .spawn((
            SelectionRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(14.0),
                padding: UiRect::all(Val::Px(30.0)),
                ..default()
            },
            BackgroundColor(COLOR_BG),
        ))
        .with_children(|root| {
            root.spawn((
                Text::new("Game Setup"),
                TextFont { font_size: 40.0, ..default() },
                TextColor(COLOR_ACCENT),
                Node { margin: UiRect::bottom(Val::Px(16.0)), ..default() },
            ));

            // ── Mode ──
            section_label(root, "Mode");
            root.spawn(Node {
                flex_direction: FlexDirection::Row,
                column_gap: Val::Px(12.0),
                ..default()
            }).with_children(|row| {
                spawn_sel_btn(row, "Player vs AI", SelectionButton::ModePvAI,
                    selection.mode == GameMode::PvAI);
                spawn_sel_btn(row, "Player vs Player", SelectionButton::ModePvP,
                    selection.mode == GameMode::PvP);
            });

            // ── Fighters ──
            root.spawn(Node {
                flex_direction: FlexDirection::Row,
                column_gap: Val::Px(60.0),
                margin: UiRect::top(Val::Px(8.0)),
                ..default()
            }).with_children(|row| {
                for (side, archetype) in [(Side::P1, selection.p1), (Side::P2, selection.p2)] {
                    let image = registry
                        .get(archetype)
                        .map(|preset| asset_server.load(preset.title_path.clone()))
                        .unwrap_or_default();
                    spawn_fighter_card(row, side, image);
                }
            });

            // ── Map ──
            section_label(root, "Map");
            root.spawn((
                MapPreview,
                ImageNode::new(asset_server.load(selection.map.preview_path())),
                Node {
                    width: Val::Px(256.0),
                    height: Val::Px(144.0),
                    ..default()
                },
            ));
            spawn_cycle_row(
                root,
                (MapLabel, Text::new(selection.map.display_name())),
                SelectionButton::PrevMap,
                SelectionButton::NextMap,
            );

            // ── Action buttons ──
            root.spawn(Node {
                flex_direction: FlexDirection::Row,
                column_gap: Val::Px(20.0),
                margin: UiRect::top(Val::Px(20.0)),
                ..default()
            }).with_children(|row| {
                spawn_btn(row, "Back", SelectionButton::Back, 180.0, 44.0);
                spawn_btn(row, "Start Battle!", SelectionButton::StartBattle, 180.0, 44.0);
            });
        });
}

fn spawn_fighter_card(parent: &mut ChildSpawnerCommands, side: Side, portrait: Handle<Image>) {
    parent.spawn((
        Node {
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Center,
            row_gap: Val::Px(8.0),
            padding: UiRect::all(Val::Px(12.0)),
            border_radius: BorderRadius::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(COLOR_CARD),
    )).with_children(|card| {
        section_label(card, match side {
            Side::P1 => "Player 1",
            Side::P2 => "Player 2",
        });
        card.spawn((
            FighterPortrait(side),
            ImageNode::new(portrait),
            Node {
                width: Val::Px(160.0),
                height: Val::Px(160.0),
                ..default()
            },
        ));
        spawn_cycle_row(
            card,
            (FighterLabel(side), Text::new("")),
            SelectionButton::PrevFighter(side),
            SelectionButton::NextFighter(side),
        );
    });
}

/// `<  label  >` row.
fn spawn_cycle_row(
    parent: &mut ChildSpawnerCommands,
    label: impl Bundle,
    prev: SelectionButton,
    next: SelectionButton,
) {
    parent.spawn(Node {
        flex_direction: FlexDirection::Row,
        column_gap: Val::Px(12.0),
        align_items: AlignItems::Center,
        ..default()
    }).with_children(|row| {
        spawn_btn(row, "<", prev, 44.0, 40.0);
        row.spawn((
            label,
            TextFont { font_size: 20.0, ..default() },
            TextColor(COLOR_TEXT),
            Node { min_width: Val::Px(180.0), justify_content: JustifyContent::Center, ..default() },
        ));
        spawn_btn(row, ">", next, 44.0, 40.0);
    });
}

fn selection_button_system(
    q: Query<(&Interaction, &SelectionButton), Changed<Interaction>>,
    mut selection: ResMut<GameSelection>,
    mut pending: ResMut<PendingRestart>,
    mut next_state: ResMut<NextState<GamePhase>>,
) {
    for (interaction, button) in &q {
        if *interaction != Interaction::Pressed {
            continue;
        }
        match button {
            SelectionButton::ModePvAI => selection.mode = GameMode::PvAI,
            SelectionButton::ModePvP => selection.mode = GameMode::PvP,
            SelectionButton::PrevFighter(side) => step_fighter(&mut selection, *side, -1),
            SelectionButton::NextFighter(side) => step_fighter(&mut selection, *side, 1),
            SelectionButton::PrevMap => selection.map = selection.map.step(-1),
            SelectionButton::NextMap => selection.map = selection.map.step(1),
            SelectionButton::StartBattle => {
                pending.0 = true;
                next_state.set(GamePhase::Battle);
            }
            SelectionButton::Back => next_state.set(GamePhase::MainMenu),
        }
    }
}

fn step_fighter(selection: &mut GameSelection, side: Side, delta: i32) {
    let slot = match side {
        Side::P1 => &mut selection.p1,
        Side::P2 => &mut selection.p2,
    };
    *slot = slot.step(delta);
}

fn fighter_of(selection: &GameSelection, side: Side) -> Archetype {
    match side {
        Side::P1 => selection.p1,
        Side::P2 => selection.p2,
    }
}

#[allow(clippy::type_complexity)]
fn update_selection_hub_visuals(
    selection: Res<GameSelection>,
    registry: Res<PresetRegistry>,
    asset_server: Res<AssetServer>,
    mut mode_btns: Query<(&SelectionButton, &Interaction, &mut BackgroundColor), With<SelectionHighlight>>,
    mut fighter_labels: Query<(&FighterLabel, &mut Text), Without<MapLabel>>,
    mut portraits: Query<(&FighterPortrait, &mut ImageNode), Without<MapPreview>>,
    mut map_label: Query<&mut Text, (With<MapLabel>, Without<FighterLabel>)>,
    mut map_preview: Query<&mut ImageNode, (With<MapPreview>, Without<FighterPortrait>)>,
) {
    for (button, interaction, mut bg) in &mut mode_btns {
        let is_selected = match button {
            SelectionButton::ModePvP => selection.mode == GameMode::PvP,
            SelectionButton::ModePvAI => selection.mode == GameMode::PvAI,
            _ => false,
        };
        *bg = BackgroundColor(match (is_selected, interaction) {
            (true, Interaction::Hovered) => COLOR_SELECTED_HOVER,
            (true, _) => COLOR_SELECTED,
            (false, Interaction::Hovered) => COLOR_BTN_HOVER,
            (false, Interaction::Pressed) => COLOR_BTN_PRESS,
            (false, Interaction::None) => COLOR_BTN,
        });
    }

    for (label, mut text) in &mut fighter_labels {
        let name = registry
            .get(fighter_of(&selection, label.0))
            .map(|preset| preset.name.as_str())
            .unwrap_or("???");
        let shown = match (label.0, selection.mode) {
            (Side::P2, GameMode::PvAI) => format!("{name} (AI)"),
            _ => name.to_string(),
        };
        if **text != shown {
            **text = shown;
        }
    }

    if !selection.is_changed() {
        return;
    }
    for (portrait, mut image) in &mut portraits {
        if let Some(preset) = registry.get(fighter_of(&selection, portrait.0)) {
            image.image = asset_server.load(preset.title_path.clone());
        }
    }
    for mut text in &mut map_label {
        **text = selection.map.display_name().to_string();
    }
    for mut image in &mut map_preview {
        image.image = asset_server.load(selection.map.preview_path());
    }
}

// ═══════════════════════════════════════════════════════════════════════
// PAUSE
// ═══════════════════════════════════════════════════════════════════════

fn pause_toggle_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    state: Res<State<GamePhase>>,
    mut next_state: ResMut<NextState<GamePhase>>,
) {
    if !keyboard.just_pressed(KeyCode::Escape) {
        return;
    }
    match state.get() {
        GamePhase::Battle => next_state.set(GamePhase::Paused),
        GamePhase::Paused => next_state.set(GamePhase::Battle),
        _ => {}
    }
}

fn spawn_pause_overlay(mut commands: Commands) {
    commands
        .spawn((
            PauseOverlay,
            overlay_node(),
            BackgroundColor(COLOR_OVERLAY),
            GlobalZIndex(10),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("PAUSED"),
                TextFont { font_size: 56.0, ..default() },
                TextColor(COLOR_TEXT),
            ));
            spawn_btn(parent, "Resume", PauseButton::Resume, 280.0, 52.0);
            spawn_btn(parent, "Restart", PauseButton::Restart, 280.0, 52.0);
            spawn_btn(parent, "Main Menu", PauseButton::MainMenu, 280.0, 52.0);
        });
}

fn pause_button_system(
    q: Query<(&Interaction, &PauseButton), Changed<Interaction>>,
    mut pending: ResMut<PendingRestart>,
    mut next_state: ResMut<NextState<GamePhase>>,
) {
    for (interaction, button) in &q {
        if *interaction != Interaction::Pressed {
            continue;
        }
        match button {
            PauseButton::Resume => next_state.set(GamePhase::Battle),
            PauseButton::Restart => {
                pending.0 = true;
                next_state.set(GamePhase::Battle);
            }
            PauseButton::MainMenu => next_state.set(GamePhase::MainMenu),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// GAME OVER OVERLAY
// ═══════════════════════════════════════════════════════════════════════

/// Headline and result line shown for an outcome.
struct GameOverCopy {
    headline: &'static str,
    headline_color: Color,
    result: String,
    result_color: Color,
}

fn game_over_copy(outcome: MatchOutcome, mode: GameMode) -> GameOverCopy {
    let p1 = side_name(Side::P1, mode);
    let p2 = side_name(Side::P2, mode);
    let (headline, headline_color, result, result_color) = match (outcome.winner(), outcome.by_time()) {
        (Some(Side::P1), true) => ("VICTORY!", COLOR_GOLD, format!("{p1} WINS by Time!"), COLOR_RESULT_WIN),
        (Some(Side::P2), true) => ("DEFEATED!", COLOR_LOSS, format!("{p2} WINS by Time!"), COLOR_RESULT_WIN),
        (None, true) => ("TIME OVER!", COLOR_DRAW, "It's a DRAW!".to_string(), COLOR_RESULT_DRAW),
        (Some(Side::P1), false) => ("VICTORY!", COLOR_GOLD, format!("{p1} WINS!"), COLOR_RESULT_WIN),
        (Some(Side::P2), false) => ("DEFEATED!", COLOR_LOSS, format!("{p2} WINS!"), COLOR_RESULT_WIN),
        (None, false) => ("GAME OVER", COLOR_LOSS, "DRAW!".to_string(), COLOR_RESULT_DRAW),
    };
    GameOverCopy { headline, headline_color, result, result_color }
}

fn spawn_game_over_overlay(mut commands: Commands, duel: Res<Duel>) {
    let Some(outcome) = duel.outcome() else {
        warn!("Game over without a decided outcome");
        return;
    };
    let copy = game_over_copy(outcome, duel.mode());

    commands
        .spawn((
            GameOverOverlay,
            overlay_node(),
            BackgroundColor(COLOR_OVERLAY),
            GlobalZIndex(10),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(copy.headline),
                TextFont { font_size: 72.0, ..default() },
                TextColor(copy.headline_color),
            ));
            parent.spawn((
                Text::new(copy.result),
                TextFont { font_size: 36.0, ..default() },
                TextColor(copy.result_color),
            ));
            spawn_btn(parent, "Rematch", GameOverButton::Rematch, 280.0, 52.0);
            spawn_btn(parent, "Main Menu", GameOverButton::MainMenu, 280.0, 52.0);
            parent.spawn((
                Text::new("ENTER for a rematch, ESCAPE for the menu"),
                TextFont { font_size: 18.0, ..default() },
                TextColor(COLOR_TEXT_DIM),
            ));
        });
}

fn game_over_button_system(
    q: Query<(&Interaction, &GameOverButton), Changed<Interaction>>,
    mut pending: ResMut<PendingRestart>,
    mut next_state: ResMut<NextState<GamePhase>>,
) {
    for (interaction, button) in &q {
        if *interaction != Interaction::Pressed {
            continue;
        }
        match button {
            GameOverButton::Rematch => {
                pending.0 = true;
                next_state.set(GamePhase::Battle);
            }
            GameOverButton::MainMenu => next_state.set(GamePhase::MainMenu),
        }
    }
}

fn game_over_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut pending: ResMut<PendingRestart>,
    mut next_state: ResMut<NextState<GamePhase>>,
) {
    if keyboard.just_pressed(KeyCode::Enter) {
        pending.0 = true;
        next_state.set(GamePhase::Battle);
    } else if keyboard.just_pressed(KeyCode::Escape) {
        next_state.set(GamePhase::MainMenu);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// HELPERS
// ═══════════════════════════════════════════════════════════════════════

fn overlay_node() -> Node {
    Node {
        width: Val::Percent(100.0),
        height: Val::Percent(100.0),
        flex_direction: FlexDirection::Column,
        justify_content: JustifyContent::Center,
        align_items: AlignItems::Center,
        row_gap: Val::Px(24.0),
        position_type: PositionType::Absolute,
        ..default()
    }
}

/// Generic button spawner for menu screens.
fn spawn_btn<C: Component>(
    parent: &mut ChildSpawnerCommands,
    label: &str,
    marker: C,
    width: f32,
    height: f32,
) {
    parent.spawn((
        marker,
        Button,
        Node {
            width: Val::Px(width),
            height: Val::Px(height),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            border_radius: BorderRadius::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(COLOR_BTN),
    )).with_children(|btn| {
        btn.spawn((
            Text::new(label),
            TextFont { font_size: 24.0, ..default() },
            TextColor(COLOR_TEXT),
        ));
    });
}

fn section_label(parent: &mut ChildSpawnerCommands, label: &str) {
    parent.spawn((
        Text::new(label),
        TextFont { font_size: 20.0, ..default() },
        TextColor(COLOR_TEXT_DIM),
        Node { margin: UiRect::top(Val::Px(8.0)), ..default() },
    ));
}

/// Selection-hub toggle button.
fn spawn_sel_btn(
    parent: &mut ChildSpawnerCommands,
    label: &str,
    marker: SelectionButton,
    selected: bool,
) {
    let bg = if selected { COLOR_SELECTED } else { COLOR_BTN };
    parent.spawn((
        marker,
        SelectionHighlight,
        Button,
        Node {
            min_width: Val::Px(140.0),
            height: Val::Px(40.0),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            padding: UiRect::horizontal(Val::Px(14.0)),
            border_radius: BorderRadius::all(Val::Px(6.0)),
            ..default()
        },
        BackgroundColor(bg),
    )).with_children(|btn| {
        btn.spawn((
            Text::new(label),
            TextFont { font_size: 18.0, ..default() },
            TextColor(COLOR_TEXT),
        ));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headline_follows_player_one_perspective() {
        let copy = game_over_copy(MatchOutcome::Player1Ko, GameMode::PvAI);
        assert_eq!(copy.headline, "VICTORY!");
        assert_eq!(copy.result, "Player 1 WINS!");

        let copy = game_over_copy(MatchOutcome::Player2Ko, GameMode::PvAI);
        assert_eq!(copy.headline, "DEFEATED!");
        assert_eq!(copy.result, "Rival WINS!");
    }

    #[test]
    fn timeout_lines_name_the_leader() {
        let copy = game_over_copy(MatchOutcome::Player2WinByTime, GameMode::PvP);
        assert_eq!(copy.headline, "DEFEATED!");
        assert_eq!(copy.result, "Player 2 WINS by Time!");

        let copy = game_over_copy(MatchOutcome::DrawByTime, GameMode::PvP);
        assert_eq!(copy.headline, "TIME OVER!");
        assert_eq!(copy.result, "It's a DRAW!");
    }

    #[test]
    fn double_knockout_is_a_draw() {
        let copy = game_over_copy(MatchOutcome::DoubleKo, GameMode::PvAI);
        assert_eq!(copy.headline, "GAME OVER");
        assert_eq!(copy.result, "DRAW!");
    }

    #[test]
    fn fighter_slots_cycle_independently() {
        let mut selection = GameSelection::default();
        step_fighter(&mut selection, Side::P2, 1);
        assert_eq!(selection.p1, Archetype::Knight);
        assert_eq!(selection.p2, Archetype::Samurai);
        assert_eq!(fighter_of(&selection, Side::P2), Archetype::Samurai);
    }
}
