use std::collections::BTreeMap;

use benji_engine::{KeyValueStore, StorageError, Vec2};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use super::props::{KeyColor, Patrol, PatrolAxis, Prop, PropKind, ENEMY_SPEED_UNITS_PER_SECOND};

pub(crate) const ACTIVE_SCREEN_KEY: &str = "activeScreen";
pub(crate) const CHARACTER_KEY: &str = "character";
pub(crate) const PROPS_SAVE_KEY: &str = "propsSaveGame";

pub(crate) fn plan_key(screen: usize) -> String {
    format!("plan{screen}")
}

pub(crate) fn props_key(screen: usize) -> String {
    format!("props{screen}")
}

#[derive(Debug, Error)]
pub(crate) enum SaveError {
    #[error("failed to encode '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to parse '{key}' at {path}: {source}")]
    Parse {
        key: String,
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub(crate) struct SavedVec2 {
    pub(crate) x: f32,
    pub(crate) y: f32,
}

impl SavedVec2 {
    pub(crate) fn from_vec2(value: Vec2) -> Self {
        Self {
            x: value.x,
            y: value.y,
        }
    }

    pub(crate) fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct CharacterSave {
    pub(crate) position: SavedVec2,
    pub(crate) score: u32,
    pub(crate) keys: [bool; 3],
}

fn default_enemy_speed() -> f32 {
    ENEMY_SPEED_UNITS_PER_SECOND
}

/// Per-kind prop record. Positions are world units, enemy waypoints tile
/// units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub(crate) enum PropSave {
    Wall {
        position: SavedVec2,
    },
    Rock {
        position: SavedVec2,
        heavy: bool,
    },
    Coin {
        position: SavedVec2,
    },
    Lava {
        position: SavedVec2,
    },
    Enemy {
        position: SavedVec2,
        axis: PatrolAxis,
        waypoints: Vec<SavedVec2>,
        current_waypoint: usize,
        #[serde(default = "default_enemy_speed")]
        speed: f32,
    },
    Door {
        position: SavedVec2,
        color: KeyColor,
    },
    Key {
        position: SavedVec2,
        color: KeyColor,
    },
    Chest {
        position: SavedVec2,
    },
}

impl PropSave {
    pub(crate) fn from_prop(prop: &Prop) -> Self {
        let position = SavedVec2::from_vec2(prop.position());
        match prop.kind() {
            PropKind::Wall => Self::Wall { position },
            PropKind::Rock { heavy } => Self::Rock {
                position,
                heavy: *heavy,
            },
            PropKind::Coin => Self::Coin { position },
            PropKind::Lava => Self::Lava { position },
            PropKind::Enemy(patrol) => Self::Enemy {
                position,
                axis: patrol.axis,
                waypoints: patrol
                    .waypoints
                    .iter()
                    .copied()
                    .map(SavedVec2::from_vec2)
                    .collect(),
                current_waypoint: patrol.current_waypoint,
                speed: patrol.speed,
            },
            PropKind::Door(color) => Self::Door {
                position,
                color: *color,
            },
            PropKind::Key(color) => Self::Key {
                position,
                color: *color,
            },
            PropKind::Chest => Self::Chest { position },
        }
    }

    /// Rebuilds the prop without a collider. An enemy saved with no
    /// waypoints gets a fresh patrol around its position.
    pub(crate) fn into_prop(self) -> Prop {
        let (kind, position) = match self {
            Self::Wall { position } => (PropKind::Wall, position),
            Self::Rock { position, heavy } => (PropKind::Rock { heavy }, position),
            Self::Coin { position } => (PropKind::Coin, position),
            Self::Lava { position } => (PropKind::Lava, position),
            Self::Enemy {
                position,
                axis,
                waypoints,
                current_waypoint,
                speed,
            } => {
                let patrol = if waypoints.is_empty() {
                    Patrol::around(position.to_vec2(), axis)
                } else {
                    let current_waypoint = current_waypoint % waypoints.len();
                    Patrol {
                        axis,
                        waypoints: waypoints.into_iter().map(SavedVec2::to_vec2).collect(),
                        current_waypoint,
                        speed,
                    }
                };
                (PropKind::Enemy(patrol), position)
            }
            Self::Door { position, color } => (PropKind::Door(color), position),
            Self::Key { position, color } => (PropKind::Key(color), position),
            Self::Chest { position } => (PropKind::Chest, position),
        };
        Prop::new(kind, position.to_vec2())
    }
}

/// Saved props per screen id.
pub(crate) type PropsSaveGame = BTreeMap<usize, Vec<PropSave>>;

pub(crate) fn parse_json<T: DeserializeOwned>(key: &str, raw: &str) -> Result<T, SaveError> {
    let mut deserializer = serde_json::Deserializer::from_str(raw);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|error| {
        let path = error.path().to_string();
        SaveError::Parse {
            key: key.to_string(),
            path,
            source: error.into_inner(),
        }
    })
}

pub(crate) fn read_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, SaveError> {
    match store.get(key)? {
        Some(raw) => parse_json(key, &raw).map(Some),
        None => Ok(None),
    }
}

pub(crate) fn write_json<T: Serialize>(
    store: &mut dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), SaveError> {
    let raw = serde_json::to_string(value).map_err(|source| SaveError::Encode {
        key: key.to_string(),
        source,
    })?;
    store.set(key, &raw)?;
    Ok(())
}

/// Unreadable or malformed values count as absent.
pub(crate) fn read_or_absent<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    match read_json(store, key) {
        Ok(value) => value,
        Err(error) => {
            warn!(key, error = %error, "save_value_ignored");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use benji_engine::MemoryStore;

    #[test]
    fn parse_errors_carry_the_json_path() {
        let raw = r#"{"position":{"x":1.0,"y":"oops"},"score":0,"keys":[false,false,false]}"#;
        let error = parse_json::<CharacterSave>(CHARACTER_KEY, raw).expect_err("must fail");
        match error {
            SaveError::Parse { key, path, .. } => {
                assert_eq!(key, CHARACTER_KEY);
                assert_eq!(path, "position.y");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn props_save_uses_kind_tags_and_screen_keys() {
        let mut saves = PropsSaveGame::new();
        saves.insert(
            3,
            vec![PropSave::Door {
                position: SavedVec2 { x: 64.0, y: 0.0 },
                color: KeyColor::Green,
            }],
        );
        let raw = serde_json::to_string(&saves).expect("encode");
        assert_eq!(
            raw,
            r#"{"3":[{"kind":"door","position":{"x":64.0,"y":0.0},"color":"green"}]}"#
        );
        let parsed: PropsSaveGame = parse_json(PROPS_SAVE_KEY, &raw).expect("parse");
        assert_eq!(parsed, saves);
    }

    #[test]
    fn enemy_without_waypoints_gets_a_fresh_patrol() {
        let raw = r#"{"kind":"enemy","position":{"x":320.0,"y":192.0},"axis":"horizontal","waypoints":[],"current_waypoint":4}"#;
        let save: PropSave = parse_json(PROPS_SAVE_KEY, raw).expect("parse");
        let prop = save.into_prop();
        match prop.kind() {
            PropKind::Enemy(patrol) => {
                assert_eq!(patrol.waypoints.len(), 2);
                assert_eq!(patrol.current_waypoint, 0);
                assert_eq!(patrol.speed, ENEMY_SPEED_UNITS_PER_SECOND);
            }
            other => panic!("unexpected kind: {other:?}"),
        }
    }

    #[test]
    fn malformed_values_read_as_absent() {
        let mut store = MemoryStore::default();
        store.set(CHARACTER_KEY, "[1, 2").expect("set");
        assert_eq!(read_or_absent::<CharacterSave>(&store, CHARACTER_KEY), None);
        assert_eq!(read_or_absent::<CharacterSave>(&store, "missing"), None);
    }
}
