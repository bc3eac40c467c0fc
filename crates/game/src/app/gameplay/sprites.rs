//! Sprite keys under `assets/sprites`, one file per frame.

use benji_engine::{SpriteAnimation, Vec2};

/// Source art is 16×16 pixels drawn four times larger.
pub(crate) const WORLD_SCALE: f32 = 4.0;
pub(crate) const TILE_SPRITE_SIZE: Vec2 = Vec2::splat(16.0 * WORLD_SCALE);

pub(crate) const CHARACTER: &[&str] = &[
    "character_up",
    "character_right",
    "character_down",
    "character_left",
];

pub(crate) const SWORD: &[&str] = &[
    "sword_up",
    "sword_up_right",
    "sword_right",
    "sword_down_right",
    "sword_down",
    "sword_down_left",
    "sword_left",
    "sword_up_left",
];
pub(crate) const SWORD_STATIC: &str = "sword_up";

pub(crate) const GRASS_GREEN: &[&str] = &[
    "grass_green_01",
    "grass_green_02",
    "grass_green_03",
    "grass_green_04",
];
pub(crate) const GRASS_YELLOW_MOVING: &[&str] = &[
    "grass_yellow_moving_01",
    "grass_yellow_moving_02",
    "grass_yellow_moving_03",
    "grass_yellow_moving_04",
];
pub(crate) const GRASS_YELLOW_1: &[&str] = &["grass_yellow_01"];
pub(crate) const GRASS_YELLOW_2: &[&str] = &["grass_yellow_02"];
pub(crate) const SAND: &[&str] = &["sand_01", "sand_02"];
pub(crate) const LAVA: &[&str] = &["lava_01", "lava_02", "lava_03"];

pub(crate) const WALL: &[&str] = &["wall"];
pub(crate) const ROCK: &[&str] = &["rock"];
pub(crate) const ROCK_HEAVY: &[&str] = &["rock_heavy"];
pub(crate) const COIN: &[&str] = &["coin"];
pub(crate) const ENEMY: &[&str] = &["enemy"];
pub(crate) const CHEST: &[&str] = &["chest"];
pub(crate) const KEYS: &[&str] = &["key_red", "key_green", "key_blue"];
pub(crate) const DOORS: &[&str] = &["door_red", "door_green", "door_blue"];

pub(crate) const MAIN_MENU: &str = "main_menu";
pub(crate) const HEART: &str = "heart";
pub(crate) const BORDER_1: &str = "border_1";
pub(crate) const BORDER_3: &str = "border_3";

pub(crate) const GRASS_SECONDS_PER_FRAME: f32 = 0.3;
pub(crate) const SAND_SECONDS_PER_FRAME: f32 = 0.8;
pub(crate) const LAVA_SECONDS_PER_FRAME: f32 = 0.4;

/// One shared clock per tile code so every cell of a kind animates in step.
#[derive(Debug, Clone)]
pub(crate) struct TileAnimations {
    by_code: [Option<SpriteAnimation>; 6],
}

impl Default for TileAnimations {
    fn default() -> Self {
        Self {
            by_code: [
                None,
                Some(SpriteAnimation::new(GRASS_GREEN, GRASS_SECONDS_PER_FRAME)),
                Some(SpriteAnimation::new(
                    GRASS_YELLOW_MOVING,
                    GRASS_SECONDS_PER_FRAME,
                )),
                Some(SpriteAnimation::still(GRASS_YELLOW_1)),
                Some(SpriteAnimation::still(GRASS_YELLOW_2)),
                Some(SpriteAnimation::new(SAND, SAND_SECONDS_PER_FRAME)),
            ],
        }
    }
}

impl TileAnimations {
    pub(crate) fn advance(&mut self, dt_seconds: f32) {
        for animation in self.by_code.iter_mut().flatten() {
            animation.advance(dt_seconds);
        }
    }

    /// `None` for empty cells and unknown codes.
    pub(crate) fn current_key(&self, code: u8) -> Option<&'static str> {
        self.by_code
            .get(usize::from(code))?
            .as_ref()?
            .current_key()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_codes_map_to_their_first_frame() {
        let tiles = TileAnimations::default();
        assert_eq!(tiles.current_key(0), None);
        assert_eq!(tiles.current_key(1), Some("grass_green_01"));
        assert_eq!(tiles.current_key(4), Some("grass_yellow_02"));
        assert_eq!(tiles.current_key(5), Some("sand_01"));
        assert_eq!(tiles.current_key(6), None);
    }

    #[test]
    fn sand_advances_slower_than_grass() {
        let mut tiles = TileAnimations::default();
        tiles.advance(0.35);
        assert_eq!(tiles.current_key(1), Some("grass_green_02"));
        assert_eq!(tiles.current_key(5), Some("sand_01"));
        assert_eq!(tiles.current_key(3), Some("grass_yellow_01"));
    }

    #[test]
    fn every_key_is_a_valid_sprite_key() {
        let groups: [&[&str]; 16] = [
            CHARACTER,
            SWORD,
            GRASS_GREEN,
            GRASS_YELLOW_MOVING,
            GRASS_YELLOW_1,
            GRASS_YELLOW_2,
            SAND,
            LAVA,
            WALL,
            ROCK,
            ROCK_HEAVY,
            COIN,
            ENEMY,
            CHEST,
            KEYS,
            DOORS,
        ];
        for key in groups
            .iter()
            .flat_map(|group| group.iter())
            .chain([MAIN_MENU, HEART, BORDER_1, BORDER_3, SWORD_STATIC].iter())
        {
            assert!(benji_engine::validate_sprite_key(key).is_ok(), "key={key}");
        }
    }
}
