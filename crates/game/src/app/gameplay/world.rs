use benji_engine::{CollisionManager, DrawList, InputSnapshot, KeyValueStore, Vec2};
use tracing::{info, warn};

use super::character::Character;
use super::map::{Direction, Map};
use super::prop_manager::PropManager;
use super::save::{
    self, CharacterSave, PropsSaveGame, SavedVec2, ACTIVE_SCREEN_KEY, CHARACTER_KEY,
    PROPS_SAVE_KEY,
};
use super::sprites::TileAnimations;
use super::PLAY_AREA;

/// Half the character sprite; the edge thresholds sit this far outside the
/// play area.
pub(crate) const CHARACTER_HALF_SIZE: f32 = 32.0;
/// Distance from the opposite edge after crossing into a new screen.
pub(crate) const EDGE_ENTRY_INSET: f32 = 32.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GameEvent {
    Continue,
    Won,
    Lost,
}

/// Everything a scene needs, threaded explicitly through every tick.
pub(crate) struct World {
    store: Box<dyn KeyValueStore>,
    pub(crate) collisions: CollisionManager,
    pub(crate) map: Map,
    pub(crate) props: PropManager,
    pub(crate) character: Character,
    pub(crate) tiles: TileAnimations,
    show_colliders: bool,
}

impl World {
    pub(crate) fn new(mut store: Box<dyn KeyValueStore>) -> Self {
        let mut map = Map::builtin();
        map.load_overrides(store.as_mut());
        Self {
            store,
            collisions: CollisionManager::default(),
            map,
            props: PropManager::default(),
            character: Character::default(),
            tiles: TileAnimations::default(),
            show_colliders: false,
        }
    }

    pub(crate) fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    pub(crate) fn show_colliders(&self) -> bool {
        self.show_colliders
    }

    pub(crate) fn toggle_colliders(&mut self) {
        self.show_colliders = !self.show_colliders;
        info!(enabled = self.show_colliders, "collider_overlay_toggled");
    }

    /// Fresh colliders, revived character and the saved screen/progress.
    pub(crate) fn init_game(&mut self) {
        self.collisions.clear();
        self.props.forget();
        self.character.revive();
        self.character.register_colliders(&mut self.collisions);
        self.load_character();
    }

    /// Activates `id` and restores its saved props, falling back to the
    /// screen's layout. Unknown ids fall back to screen 0.
    pub(crate) fn set_screen(&mut self, id: usize) {
        if !self.map.set_active(id) {
            warn!(screen = id, "unknown_screen_using_first");
            self.map.set_active(0);
        }
        let active = self.map.active_id();

        let saved = save::read_or_absent::<PropsSaveGame>(self.store.as_ref(), PROPS_SAVE_KEY)
            .and_then(|mut saves| saves.remove(&active));
        let restored = saved.is_some();
        match saved {
            Some(records) => self.props.restore(records, &mut self.collisions),
            None => {
                let layout = *self.map.active().props();
                self.props
                    .build_from_layout(&layout, Some(&mut self.collisions));
            }
        }
        info!(
            screen = active,
            prop_count = self.props.len(),
            restored,
            "screen_loaded"
        );
    }

    /// Display-only props for the editor; play collisions are dropped.
    pub(crate) fn set_screen_for_editing(&mut self, id: usize) {
        if !self.map.set_active(id) {
            warn!(screen = id, "unknown_screen_ignored");
        }
        self.rebuild_editor_props();
        self.collisions.clear();
    }

    pub(crate) fn rebuild_editor_props(&mut self) {
        let layout = *self.map.active().props();
        self.props.build_from_layout(&layout, None);
    }

    /// Stores the active screen's props under its id, keeping other screens.
    pub(crate) fn save_props(&mut self) {
        let mut saves =
            save::read_or_absent::<PropsSaveGame>(self.store.as_ref(), PROPS_SAVE_KEY)
                .unwrap_or_default();
        let screen = self.map.active_id();
        saves.insert(screen, self.props.snapshot());
        match save::write_json(self.store.as_mut(), PROPS_SAVE_KEY, &saves) {
            Ok(()) => info!(screen, "props_saved"),
            Err(error) => warn!(screen, error = %error, "props_save_failed"),
        }
    }

    pub(crate) fn save_character(&mut self) {
        let screen = self.map.active_id();
        let record = CharacterSave {
            position: SavedVec2::from_vec2(self.character.position()),
            score: self.character.score(),
            keys: self.character.keys_held(),
        };
        let result = save::write_json(self.store.as_mut(), ACTIVE_SCREEN_KEY, &screen)
            .and_then(|()| save::write_json(self.store.as_mut(), CHARACTER_KEY, &record));
        match result {
            Ok(()) => info!(screen, score = record.score, "character_saved"),
            Err(error) => warn!(screen, error = %error, "character_save_failed"),
        }
    }

    /// Activates the saved screen (default 0) and restores position, score
    /// and keys. Without a saved character, progress starts from zero.
    pub(crate) fn load_character(&mut self) {
        let screen =
            save::read_or_absent::<usize>(self.store.as_ref(), ACTIVE_SCREEN_KEY).unwrap_or(0);
        self.set_screen(screen);

        match save::read_or_absent::<CharacterSave>(self.store.as_ref(), CHARACTER_KEY) {
            Some(record) => {
                self.character.restore_progress(record.score, record.keys);
                self.character
                    .set_position(record.position.to_vec2(), &mut self.collisions);
                info!(screen, score = record.score, "character_loaded");
            }
            None => {
                self.character.reset_progress();
                info!(screen, "character_save_missing");
            }
        }
    }

    /// Forgets saved props and progress and puts the character back at the
    /// start.
    pub(crate) fn delete_game(&mut self) {
        for key in [PROPS_SAVE_KEY, ACTIVE_SCREEN_KEY, CHARACTER_KEY] {
            if let Err(error) = self.store.delete(key) {
                warn!(key, error = %error, "save_delete_failed");
            }
        }
        self.character.revive();
        self.character.reset_progress();
        self.character
            .set_position(self.character.position(), &mut self.collisions);
        info!("save_deleted");
    }

    /// Writes the active screen's editor overrides.
    pub(crate) fn save_overrides(&mut self) {
        if let Err(error) = self.map.save_active_overrides(self.store.as_mut()) {
            warn!(screen = self.map.active_id(), error = %error, "overrides_save_failed");
        }
    }

    /// Loss sends the next game back to the first screen.
    pub(crate) fn lose(&mut self) {
        self.map.set_active(0);
        info!(score = self.character.score(), "game_lost");
    }

    /// One game-scene tick after collisions were computed.
    pub(crate) fn update_game(&mut self, fixed_dt_seconds: f32, input: &InputSnapshot) -> GameEvent {
        let outcome = self
            .props
            .update(fixed_dt_seconds, &mut self.collisions, &mut self.character);
        if outcome.character_died {
            return GameEvent::Lost;
        }
        if outcome.reached_chest {
            info!(score = self.character.score(), "chest_reached");
            return GameEvent::Won;
        }

        self.character
            .update(fixed_dt_seconds, input, &mut self.collisions);
        self.tiles.advance(fixed_dt_seconds);
        self.check_edges();
        GameEvent::Continue
    }

    /// Checks up, right, down, left. A crossing into a connected screen
    /// ends the check; an unconnected edge clamps the character.
    pub(crate) fn check_edges(&mut self) -> Option<Direction> {
        let max = Vec2::new(
            PLAY_AREA.x - CHARACTER_HALF_SIZE,
            PLAY_AREA.y - CHARACTER_HALF_SIZE,
        );
        let min = Vec2::splat(-CHARACTER_HALF_SIZE);

        for direction in Direction::ALL {
            let position = self.character.position();
            let (crossed, entry, clamped) = match direction {
                Direction::North => (
                    position.y > max.y,
                    Vec2::new(position.x, min.y + EDGE_ENTRY_INSET),
                    Vec2::new(position.x, max.y),
                ),
                Direction::East => (
                    position.x > max.x,
                    Vec2::new(min.x + EDGE_ENTRY_INSET, position.y),
                    Vec2::new(max.x, position.y),
                ),
                Direction::South => (
                    position.y < min.y,
                    Vec2::new(position.x, max.y - EDGE_ENTRY_INSET),
                    Vec2::new(position.x, min.y),
                ),
                Direction::West => (
                    position.x < min.x,
                    Vec2::new(max.x - EDGE_ENTRY_INSET, position.y),
                    Vec2::new(min.x, position.y),
                ),
            };
            if !crossed {
                continue;
            }
            match self.map.active().connection(direction) {
                Some(target) => {
                    self.transition(direction, target, entry);
                    return Some(direction);
                }
                None => self.character.set_position(clamped, &mut self.collisions),
            }
        }
        None
    }

    fn transition(&mut self, direction: Direction, target: usize, entry: Vec2) {
        let from = self.map.active_id();
        self.save_props();
        self.set_screen(target);
        self.character.set_position(entry, &mut self.collisions);
        self.save_character();
        info!(from, to = target, direction = direction.name(), "screen_changed");
    }

    pub(crate) fn draw_play(&self, draw_list: &mut DrawList) {
        self.map.draw_tiles(draw_list, &self.tiles);
        self.props.draw(draw_list);
        self.character.draw(draw_list);
        if self.show_colliders {
            self.collisions.debug_draw(draw_list);
        }
    }
}
