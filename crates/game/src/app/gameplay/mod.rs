use benji_engine::{Game, KeyValueStore, Vec2};

mod character;
mod editor;
mod map;
mod map_data;
mod prop_manager;
mod props;
mod save;
mod scenes;
mod sprites;
mod world;

use scenes::BenjiGame;
use world::World;

pub(crate) const TILE_SIZE: f32 = 64.0;
pub(crate) const GRID_COLUMNS: usize = 16;
pub(crate) const GRID_ROWS: usize = 9;
/// World-space extent of the play area; the HUD band sits below it.
pub(crate) const PLAY_AREA: Vec2 = Vec2::new(1024.0, 576.0);

pub(crate) fn build_game(store: Box<dyn KeyValueStore>) -> Box<dyn Game> {
    Box::new(BenjiGame::new(World::new(store)))
}

#[cfg(test)]
mod tests;
