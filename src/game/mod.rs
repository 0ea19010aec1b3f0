pub mod action;
pub mod actor;
pub mod ai;
pub mod animation;
pub mod clock;
pub mod combat;
pub mod components;
pub mod duel;
pub mod events;
pub mod intent;
pub mod map;
pub mod preset;
pub mod types;
