use benji_engine::{
    ColliderDesc, ColliderId, ColliderRole, CollisionManager, DrawLayer, DrawList, PhysicsMode,
    SpriteAnimation, Vec2,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::character::{Character, HurtOutcome};
use super::sprites::{self, TILE_SPRITE_SIZE};
use super::TILE_SIZE;

pub(crate) const CHEST_SIZE: Vec2 = Vec2::new(128.0, 64.0);
pub(crate) const ENEMY_SPEED_UNITS_PER_SECOND: f32 = 48.0;
pub(crate) const WAYPOINT_ARRIVAL_DISTANCE: f32 = 68.0;
pub(crate) const PATROL_HALF_SPAN_TILES: f32 = 3.0;

pub(crate) const PROP_CODE_MAX: u8 = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum KeyColor {
    Red,
    Green,
    Blue,
}

impl KeyColor {
    pub(crate) const ALL: [KeyColor; 3] = [KeyColor::Red, KeyColor::Green, KeyColor::Blue];

    pub(crate) fn index(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Green => 1,
            Self::Blue => 2,
        }
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum PatrolAxis {
    Horizontal,
    Vertical,
}

/// Back-and-forth route between waypoints stored in tile units.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Patrol {
    pub(crate) axis: PatrolAxis,
    pub(crate) waypoints: Vec<Vec2>,
    pub(crate) current_waypoint: usize,
    pub(crate) speed: f32,
}

impl Patrol {
    /// Two waypoints three tiles either side of `position` along `axis`.
    pub(crate) fn around(position: Vec2, axis: PatrolAxis) -> Self {
        let origin = position / Vec2::splat(TILE_SIZE);
        let offset = match axis {
            PatrolAxis::Horizontal => Vec2::new(PATROL_HALF_SPAN_TILES, 0.0),
            PatrolAxis::Vertical => Vec2::new(0.0, PATROL_HALF_SPAN_TILES),
        };
        Self {
            axis,
            waypoints: vec![origin - offset, origin + offset],
            current_waypoint: 0,
            speed: ENEMY_SPEED_UNITS_PER_SECOND,
        }
    }

    pub(crate) fn target(&self) -> Option<Vec2> {
        self.waypoints
            .get(self.current_waypoint)
            .map(|waypoint| *waypoint * TILE_SIZE)
    }

    /// Advances to the next waypoint when close to the current one, then
    /// moves toward whichever is current.
    pub(crate) fn step(&mut self, position: Vec2, fixed_dt_seconds: f32) -> Vec2 {
        let Some(target) = self.target() else {
            return position;
        };
        if target.distance(position) < WAYPOINT_ARRIVAL_DISTANCE {
            self.current_waypoint = (self.current_waypoint + 1) % self.waypoints.len();
        }
        let Some(target) = self.target() else {
            return position;
        };
        position + (target - position).normalized() * (self.speed * fixed_dt_seconds)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum PropKind {
    Wall,
    Rock { heavy: bool },
    Coin,
    Lava,
    Enemy(Patrol),
    Door(KeyColor),
    Key(KeyColor),
    Chest,
}

impl PropKind {
    /// Builds the kind placed by a layout code at `position`. Zero and
    /// unknown codes place nothing.
    pub(crate) fn from_code(code: u8, position: Vec2) -> Option<Self> {
        let kind = match code {
            1 => Self::Wall,
            2 => Self::Rock { heavy: false },
            3 => Self::Rock { heavy: true },
            4 => Self::Coin,
            5 => Self::Lava,
            6 => Self::Enemy(Patrol::around(position, PatrolAxis::Horizontal)),
            7 => Self::Enemy(Patrol::around(position, PatrolAxis::Vertical)),
            8..=10 => Self::Door(KeyColor::ALL[usize::from(code - 8)]),
            11..=13 => Self::Key(KeyColor::ALL[usize::from(code - 11)]),
            14 => Self::Chest,
            _ => return None,
        };
        Some(kind)
    }

    pub(crate) fn physics(&self) -> PhysicsMode {
        match self {
            Self::Wall | Self::Door(_) | Self::Rock { heavy: true } => PhysicsMode::Kinematic,
            Self::Rock { heavy: false } | Self::Enemy(_) => PhysicsMode::Simulated,
            Self::Coin | Self::Lava | Self::Key(_) | Self::Chest => PhysicsMode::Trigger,
        }
    }

    pub(crate) fn size(&self) -> Vec2 {
        match self {
            Self::Chest => CHEST_SIZE,
            _ => TILE_SPRITE_SIZE,
        }
    }

    pub(crate) fn name(&self) -> &'static str {
        match self {
            Self::Wall => "wall",
            Self::Rock { .. } => "rock",
            Self::Coin => "coin",
            Self::Lava => "lava",
            Self::Enemy(_) => "enemy",
            Self::Door(_) => "door",
            Self::Key(_) => "key",
            Self::Chest => "chest",
        }
    }

    fn animation(&self) -> SpriteAnimation {
        match self {
            Self::Wall => SpriteAnimation::still(sprites::WALL),
            Self::Rock { heavy: false } => SpriteAnimation::still(sprites::ROCK),
            Self::Rock { heavy: true } => SpriteAnimation::still(sprites::ROCK_HEAVY),
            Self::Coin => SpriteAnimation::still(sprites::COIN),
            Self::Lava => SpriteAnimation::new(sprites::LAVA, sprites::LAVA_SECONDS_PER_FRAME),
            Self::Enemy(_) => SpriteAnimation::still(sprites::ENEMY),
            Self::Door(_) => SpriteAnimation::still(sprites::DOORS),
            Self::Key(_) => SpriteAnimation::still(sprites::KEYS),
            Self::Chest => SpriteAnimation::still(sprites::CHEST),
        }
    }
}

/// What a prop update pass reports back to the scene.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct PropOutcome {
    pub(crate) reached_chest: bool,
    pub(crate) character_died: bool,
}

impl PropOutcome {
    fn record_hurt(&mut self, outcome: HurtOutcome) {
        if outcome == HurtOutcome::Died {
            self.character_died = true;
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Prop {
    kind: PropKind,
    position: Vec2,
    collider: Option<ColliderId>,
    animation: SpriteAnimation,
    removed: bool,
}

impl Prop {
    pub(crate) fn new(kind: PropKind, position: Vec2) -> Self {
        let animation = kind.animation();
        Self {
            kind,
            position,
            collider: None,
            animation,
            removed: false,
        }
    }

    pub(crate) fn kind(&self) -> &PropKind {
        &self.kind
    }

    pub(crate) fn position(&self) -> Vec2 {
        self.position
    }

    pub(crate) fn collider(&self) -> Option<ColliderId> {
        self.collider
    }

    pub(crate) fn is_removed(&self) -> bool {
        self.removed
    }

    pub(crate) fn attach_collider(&mut self, collisions: &mut CollisionManager) {
        let desc = ColliderDesc::new(self.position, self.kind.size(), self.kind.physics())
            .with_role(ColliderRole::Prop);
        self.collider = Some(collisions.register(desc));
    }

    /// Marks the prop for removal at the end of the pass. Idempotent.
    pub(crate) fn mark_removed(&mut self) {
        if !self.removed {
            debug!(kind = self.kind.name(), x = self.position.x, y = self.position.y, "prop_removed");
        }
        self.removed = true;
    }

    /// Reacts to the partners recorded by this tick's collision pass.
    pub(crate) fn update(
        &mut self,
        fixed_dt_seconds: f32,
        collisions: &mut CollisionManager,
        character: &mut Character,
        outcome: &mut PropOutcome,
    ) {
        if self.removed {
            return;
        }
        self.animation.advance(fixed_dt_seconds);

        let Some(id) = self.collider else {
            return;
        };
        if let Some(position) = collisions.position(id) {
            self.position = position;
        }
        let touches_player = collisions.touches_role(id, ColliderRole::Player);
        let touches_sword = collisions.touches_role(id, ColliderRole::Sword);

        match &mut self.kind {
            PropKind::Wall | PropKind::Rock { .. } => {}
            PropKind::Coin => {
                if touches_player {
                    character.add_score(1);
                    self.mark_removed();
                }
            }
            PropKind::Lava => {
                if touches_player {
                    outcome.record_hurt(character.hurt(1));
                }
            }
            PropKind::Enemy(patrol) => {
                let next = patrol.step(self.position, fixed_dt_seconds);
                self.position = next;
                collisions.set_position(id, next);

                if touches_player {
                    outcome.record_hurt(character.hurt(1));
                    self.mark_removed();
                }
                if touches_sword {
                    character.add_score(1);
                    self.mark_removed();
                }
            }
            PropKind::Door(color) => {
                if touches_player && character.has_key(*color) {
                    self.mark_removed();
                }
            }
            PropKind::Key(color) => {
                if touches_player {
                    character.collect_key(*color);
                    self.mark_removed();
                }
            }
            PropKind::Chest => {
                if touches_player {
                    outcome.reached_chest = true;
                }
            }
        }
    }

    pub(crate) fn draw(&self, draw_list: &mut DrawList) {
        let key = match &self.kind {
            PropKind::Door(color) | PropKind::Key(color) => self.animation.key_at(color.index()),
            _ => self.animation.current_key(),
        };
        if let Some(key) = key {
            draw_list.sprite(DrawLayer::World, key, self.position, self.kind.size());
        }
    }
}
