use benji_engine::{
    ColliderDesc, ColliderId, ColliderRole, CollisionManager, DrawLayer, DrawList, InputSnapshot,
    Key, PhysicsMode, SpriteAnimation, Vec2,
};
use tracing::{debug, info};

use super::props::KeyColor;
use super::sprites::{self, TILE_SPRITE_SIZE};

pub(crate) const START_POSITION: Vec2 = Vec2::new(100.0, 100.0);
pub(crate) const MAX_HEALTH: u32 = 3;
pub(crate) const MOVE_SPEED_UNITS_PER_SECOND: f32 = 180.0;
pub(crate) const BODY_OFFSET: Vec2 = Vec2::splat(4.0);
pub(crate) const BODY_SIZE: Vec2 = Vec2::splat(56.0);
pub(crate) const WEAPON_REACH: f32 = 64.0;
pub(crate) const ATTACK_SECONDS: f32 = 0.2;
pub(crate) const ATTACK_COOLDOWN_SECONDS: f32 = 0.5;
pub(crate) const IMMUNE_SECONDS: f32 = 0.8;
const BLINK_PERIOD_SECONDS: f32 = 0.2;
const BLINK_VISIBLE_SECONDS: f32 = 0.12;

/// Eight-way facing, in the order of the sword frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Facing {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Facing {
    /// Buckets a direction by the sign of each axis. `None` for zero.
    pub(crate) fn from_direction(direction: Vec2) -> Option<Self> {
        let x = sign(direction.x);
        let y = sign(direction.y);
        let facing = match (x, y) {
            (0, 1) => Self::North,
            (1, 1) => Self::NorthEast,
            (1, 0) => Self::East,
            (1, -1) => Self::SouthEast,
            (0, -1) => Self::South,
            (-1, -1) => Self::SouthWest,
            (-1, 0) => Self::West,
            (-1, 1) => Self::NorthWest,
            _ => return None,
        };
        Some(facing)
    }

    pub(crate) fn unit(self) -> Vec2 {
        let (x, y) = match self {
            Self::North => (0.0, 1.0),
            Self::NorthEast => (1.0, 1.0),
            Self::East => (1.0, 0.0),
            Self::SouthEast => (1.0, -1.0),
            Self::South => (0.0, -1.0),
            Self::SouthWest => (-1.0, -1.0),
            Self::West => (-1.0, 0.0),
            Self::NorthWest => (-1.0, 1.0),
        };
        Vec2::new(x, y).normalized()
    }

    /// The walking sheet only has up, right, down and left.
    pub(crate) fn character_frame(self) -> usize {
        match self {
            Self::North | Self::NorthEast | Self::NorthWest => 0,
            Self::East => 1,
            Self::SouthEast | Self::South | Self::SouthWest => 2,
            Self::West => 3,
        }
    }

    pub(crate) fn sword_frame(self) -> usize {
        self as usize
    }
}

fn sign(value: f32) -> i8 {
    if value > 0.0 {
        1
    } else if value < 0.0 {
        -1
    } else {
        0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HurtOutcome {
    Ignored,
    Damaged,
    Died,
}

#[derive(Debug, Clone)]
pub(crate) struct Character {
    position: Vec2,
    facing: Facing,
    health: u32,
    immune: bool,
    immune_timer: f32,
    attacking: bool,
    attack_timer: f32,
    attack_cooldown_timer: f32,
    keys_held: [bool; 3],
    score: u32,
    body: Option<ColliderId>,
    weapon: Option<ColliderId>,
}

impl Default for Character {
    fn default() -> Self {
        Self {
            position: START_POSITION,
            facing: Facing::South,
            health: MAX_HEALTH,
            immune: false,
            immune_timer: 0.0,
            attacking: false,
            attack_timer: 0.0,
            attack_cooldown_timer: 0.0,
            keys_held: [false; 3],
            score: 0,
            body: None,
            weapon: None,
        }
    }
}

impl Character {
    /// Registers fresh body and weapon colliders. Call after the collision
    /// manager was cleared; stale ids are simply forgotten.
    pub(crate) fn register_colliders(&mut self, collisions: &mut CollisionManager) {
        self.body = Some(
            collisions.register(
                ColliderDesc::new(self.position + BODY_OFFSET, BODY_SIZE, PhysicsMode::Simulated)
                    .with_role(ColliderRole::Player),
            ),
        );
        self.weapon = Some(
            collisions.register(
                ColliderDesc::new(self.weapon_position(), TILE_SPRITE_SIZE, PhysicsMode::Trigger)
                    .with_role(ColliderRole::Sword)
                    .with_enabled(self.attacking),
            ),
        );
    }

    /// Full health, no immunity, back at the start position.
    pub(crate) fn revive(&mut self) {
        self.position = START_POSITION;
        self.health = MAX_HEALTH;
        self.immune = false;
        self.immune_timer = 0.0;
        self.attacking = false;
        self.attack_timer = 0.0;
        self.attack_cooldown_timer = 0.0;
    }

    pub(crate) fn reset_progress(&mut self) {
        self.score = 0;
        self.keys_held = [false; 3];
    }

    pub(crate) fn restore_progress(&mut self, score: u32, keys_held: [bool; 3]) {
        self.score = score;
        self.keys_held = keys_held;
    }

    pub(crate) fn position(&self) -> Vec2 {
        self.position
    }

    pub(crate) fn set_position(&mut self, position: Vec2, collisions: &mut CollisionManager) {
        self.position = position;
        self.sync_body(collisions);
    }

    pub(crate) fn facing(&self) -> Facing {
        self.facing
    }

    pub(crate) fn health(&self) -> u32 {
        self.health
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn add_score(&mut self, amount: u32) {
        self.score = self.score.saturating_add(amount);
    }

    pub(crate) fn keys_held(&self) -> [bool; 3] {
        self.keys_held
    }

    pub(crate) fn has_key(&self, color: KeyColor) -> bool {
        self.keys_held[color.index()]
    }

    pub(crate) fn collect_key(&mut self, color: KeyColor) {
        self.keys_held[color.index()] = true;
        info!(color = color.name(), "key_collected");
    }

    pub(crate) fn is_immune(&self) -> bool {
        self.immune
    }

    pub(crate) fn is_attacking(&self) -> bool {
        self.attacking
    }

    pub(crate) fn body(&self) -> Option<ColliderId> {
        self.body
    }

    pub(crate) fn weapon(&self) -> Option<ColliderId> {
        self.weapon
    }

    pub(crate) fn update(
        &mut self,
        fixed_dt_seconds: f32,
        input: &InputSnapshot,
        collisions: &mut CollisionManager,
    ) {
        if let Some(body_position) = self.body.and_then(|id| collisions.position(id)) {
            self.position = body_position - BODY_OFFSET;
        }

        let direction = input_direction(input);
        if !self.attacking {
            if let Some(facing) = Facing::from_direction(direction) {
                self.facing = facing;
            }
        }
        self.position += direction * (MOVE_SPEED_UNITS_PER_SECOND * fixed_dt_seconds);
        self.sync_body(collisions);

        if input.is_pressed(Key::Space) {
            self.try_attack();
        }

        self.attack_timer += fixed_dt_seconds;
        self.attack_cooldown_timer -= fixed_dt_seconds;
        if self.attack_timer >= ATTACK_SECONDS {
            self.attacking = false;
        }

        if self.immune {
            self.immune_timer -= fixed_dt_seconds;
        }
        if self.immune_timer <= 0.0 {
            self.immune = false;
        }

        self.sync_weapon(collisions);
    }

    fn try_attack(&mut self) -> bool {
        if self.attacking || self.attack_cooldown_timer > 0.0 {
            return false;
        }
        self.attacking = true;
        self.attack_timer = 0.0;
        self.attack_cooldown_timer = ATTACK_COOLDOWN_SECONDS;
        debug!(facing = ?self.facing, "attack_started");
        true
    }

    /// Immunity-gated damage. `Died` is reported only on the hit that takes
    /// health to zero.
    pub(crate) fn hurt(&mut self, amount: u32) -> HurtOutcome {
        if self.health == 0 || self.immune {
            return HurtOutcome::Ignored;
        }
        self.immune = true;
        self.immune_timer = IMMUNE_SECONDS;
        self.health = self.health.saturating_sub(amount);
        info!(amount, health = self.health, "character_hurt");
        if self.health == 0 {
            HurtOutcome::Died
        } else {
            HurtOutcome::Damaged
        }
    }

    /// Hidden during the tail of each blink period while immune.
    pub(crate) fn is_visible(&self) -> bool {
        !(self.is_immune() && self.immune_timer % BLINK_PERIOD_SECONDS > BLINK_VISIBLE_SECONDS)
    }

    pub(crate) fn weapon_position(&self) -> Vec2 {
        self.position + self.facing.unit() * WEAPON_REACH
    }

    pub(crate) fn draw(&self, draw_list: &mut DrawList) {
        let sheet = SpriteAnimation::still(sprites::CHARACTER);
        if self.is_visible() {
            if let Some(key) = sheet.key_at(self.facing.character_frame()) {
                draw_list.sprite(DrawLayer::World, key, self.position, TILE_SPRITE_SIZE);
            }
        }
        if self.is_attacking() {
            let sword = SpriteAnimation::still(sprites::SWORD);
            if let Some(key) = sword.key_at(self.facing.sword_frame()) {
                draw_list.sprite(
                    DrawLayer::World,
                    key,
                    self.weapon_position(),
                    TILE_SPRITE_SIZE,
                );
            }
        }
    }

    fn sync_body(&self, collisions: &mut CollisionManager) {
        if let Some(id) = self.body {
            collisions.set_position(id, self.position + BODY_OFFSET);
        }
    }

    fn sync_weapon(&self, collisions: &mut CollisionManager) {
        if let Some(id) = self.weapon {
            collisions.set_position(id, self.weapon_position());
            collisions.set_enabled(id, self.attacking);
        }
    }
}

fn input_direction(input: &InputSnapshot) -> Vec2 {
    let mut direction = Vec2::ZERO;
    if input.is_down(Key::D) {
        direction.x += 1.0;
    }
    if input.is_down(Key::A) {
        direction.x -= 1.0;
    }
    if input.is_down(Key::W) {
        direction.y += 1.0;
    }
    if input.is_down(Key::S) {
        direction.y -= 1.0;
    }
    direction.normalized()
}
