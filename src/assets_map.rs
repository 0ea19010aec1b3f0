use bevy::asset::LoadState;
use bevy::prelude::*;
use std::collections::HashMap;

use crate::game::action::Action;
use crate::game::animation::SheetMetrics;
use crate::game::preset::{Archetype, PresetRegistry};

/// Readiness of one archetype's sheets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetsState {
    Loading,
    Ready,
    /// Finished, but these actions have no usable sheet.
    Failed(Vec<Action>),
}

/// Sprite sheets of every archetype, requested once at startup and handed out by handle.
#[derive(Resource, Default)]
pub struct AssetsMap {
    pub sheets: HashMap<Archetype, Vec<Handle<Image>>>,
}

impl AssetsMap {
    pub fn load(asset_server: &AssetServer, registry: &PresetRegistry) -> Self {
        let sheets = registry
            .presets
            .values()
            .map(|preset| {
                let handles: Vec<Handle<Image>> = Action::ALL
                    .iter()
                    .map(|action| asset_server.load(preset.sheet_path(*action)))
                    .collect();
                (preset.archetype, handles)
            })
            .collect();
        Self { sheets }
    }

    pub fn sheet(&self, archetype: Archetype, action: Action) -> Option<Handle<Image>> {
        self.sheets
            .get(&archetype)
            .and_then(|handles| handles.get(action.index()))
            .cloned()
    }

    pub fn state(&self, archetype: Archetype, asset_server: &AssetServer) -> SheetsState {
        let Some(handles) = self.sheets.get(&archetype) else {
            return SheetsState::Failed(Action::ALL.to_vec());
        };
        let mut failed = Vec::new();
        for (action, handle) in Action::ALL.iter().zip(handles) {
            match asset_server.load_state(handle) {
                LoadState::Loaded => {}
                LoadState::Failed(_) => failed.push(*action),
                _ => return SheetsState::Loading,
            }
        }
        if failed.is_empty() {
            SheetsState::Ready
        } else {
            SheetsState::Failed(failed)
        }
    }

    /// Frame geometry from whatever sheets made it into `images`.
    pub fn measure(
        &self,
        registry: &PresetRegistry,
        archetype: Archetype,
        images: &Assets<Image>,
        fallback: u32,
    ) -> SheetMetrics {
        let Some(preset) = registry.get(archetype) else {
            return SheetMetrics::uniform(fallback);
        };
        SheetMetrics::measure(
            preset,
            |action| {
                self.sheet(archetype, action)
                    .and_then(|handle| images.get(&handle))
                    .map(|image| image.size())
            },
            fallback,
        )
    }
}
