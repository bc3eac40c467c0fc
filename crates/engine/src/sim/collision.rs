use tracing::debug;

use super::physics;
use super::vector::Vec2;
use crate::app::{colors, DrawLayer, DrawList};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColliderId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhysicsMode {
    /// Reports overlaps, never pushes or gets pushed.
    Trigger,
    /// Pushed out of non-trigger overlaps.
    Simulated,
    /// Pushes simulated colliders, never moves itself.
    Kinematic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColliderRole {
    Player,
    Sword,
    #[default]
    Prop,
}

/// One overlap partner recorded during the last `compute_collisions`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub other: ColliderId,
    pub role: ColliderRole,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColliderDesc {
    pub position: Vec2,
    pub size: Vec2,
    pub physics: PhysicsMode,
    pub role: ColliderRole,
    pub enabled: bool,
}

impl ColliderDesc {
    pub fn new(position: Vec2, size: Vec2, physics: PhysicsMode) -> Self {
        Self {
            position,
            size,
            physics,
            role: ColliderRole::Prop,
            enabled: true,
        }
    }

    pub fn with_role(mut self, role: ColliderRole) -> Self {
        self.role = role;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// Axis-aligned rectangle; `position` is the bottom-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct Collider {
    id: ColliderId,
    position: Vec2,
    size: Vec2,
    physics: PhysicsMode,
    role: ColliderRole,
    enabled: bool,
    colliding: bool,
    contacts: Vec<Contact>,
}

impl Collider {
    fn from_desc(id: ColliderId, desc: ColliderDesc) -> Self {
        Self {
            id,
            position: desc.position,
            size: desc.size,
            physics: desc.physics,
            role: desc.role,
            enabled: desc.enabled,
            colliding: false,
            contacts: Vec::new(),
        }
    }

    pub fn id(&self) -> ColliderId {
        self.id
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn physics(&self) -> PhysicsMode {
        self.physics
    }

    pub fn role(&self) -> ColliderRole {
        self.role
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_colliding(&self) -> bool {
        self.colliding
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn touches_role(&self, role: ColliderRole) -> bool {
        self.contacts.iter().any(|contact| contact.role == role)
    }

    pub(crate) fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Strict overlap test; touching edges do not count and a disabled
    /// collider never overlaps anything.
    pub fn overlaps(&self, other: &Collider) -> bool {
        self.enabled
            && other.enabled
            && rects_overlap(self.position, self.size, other.position, other.size)
    }

    fn reset_contacts(&mut self) {
        self.colliding = false;
        self.contacts.clear();
    }

    fn record_contact(&mut self, other: &Collider) {
        self.colliding = true;
        self.contacts.push(Contact {
            other: other.id,
            role: other.role,
        });
    }
}

pub fn rects_overlap(a_pos: Vec2, a_size: Vec2, b_pos: Vec2, b_size: Vec2) -> bool {
    a_pos.x < b_pos.x + b_size.x
        && a_pos.x + a_size.x > b_pos.x
        && a_pos.y < b_pos.y + b_size.y
        && a_pos.y + a_size.y > b_pos.y
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionStats {
    pub pairs_tested: usize,
    pub overlapping_pairs: usize,
    pub resolved_pairs: usize,
}

/// Owns every active collider. Pair order follows registration order.
#[derive(Debug, Default)]
pub struct CollisionManager {
    next_id: u64,
    colliders: Vec<Collider>,
}

impl CollisionManager {
    pub fn register(&mut self, desc: ColliderDesc) -> ColliderId {
        let id = ColliderId(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        self.colliders.push(Collider::from_desc(id, desc));
        id
    }

    /// Removes the collider. Returns `false` if it was not registered.
    pub fn deregister(&mut self, id: ColliderId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        self.colliders.remove(index);
        true
    }

    pub fn clear(&mut self) {
        let removed = self.colliders.len();
        self.colliders.clear();
        debug!(removed, "colliders_cleared");
    }

    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }

    pub fn contains(&self, id: ColliderId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn get(&self, id: ColliderId) -> Option<&Collider> {
        self.colliders.iter().find(|collider| collider.id == id)
    }

    pub fn position(&self, id: ColliderId) -> Option<Vec2> {
        self.get(id).map(Collider::position)
    }

    pub fn set_position(&mut self, id: ColliderId, position: Vec2) -> bool {
        match self.get_mut(id) {
            Some(collider) => {
                collider.position = position;
                true
            }
            None => false,
        }
    }

    pub fn set_enabled(&mut self, id: ColliderId, enabled: bool) -> bool {
        match self.get_mut(id) {
            Some(collider) => {
                collider.enabled = enabled;
                true
            }
            None => false,
        }
    }

    pub fn touches_role(&self, id: ColliderId, role: ColliderRole) -> bool {
        self.get(id)
            .map(|collider| collider.touches_role(role))
            .unwrap_or(false)
    }

    /// Recomputes every overlap from scratch and resolves each overlapping
    /// pair exactly once.
    pub fn compute_collisions(&mut self, fixed_dt_seconds: f32) -> CollisionStats {
        for collider in &mut self.colliders {
            collider.reset_contacts();
        }

        let mut stats = CollisionStats::default();
        let count = self.colliders.len();
        for i in 0..count {
            let (head, tail) = self.colliders.split_at_mut(i + 1);
            let a = &mut head[i];
            for b in tail.iter_mut() {
                stats.pairs_tested += 1;
                if !a.overlaps(b) {
                    continue;
                }
                a.record_contact(b);
                b.record_contact(a);
                stats.overlapping_pairs += 1;
                if physics::resolve(a, b, fixed_dt_seconds) {
                    stats.resolved_pairs += 1;
                }
            }
        }
        stats
    }

    /// Outline per collider: red while colliding, green when enabled,
    /// yellow when disabled.
    pub fn debug_draw(&self, draw_list: &mut DrawList) {
        for collider in &self.colliders {
            let color = if collider.colliding {
                colors::RED
            } else if collider.enabled {
                colors::GREEN
            } else {
                colors::YELLOW
            };
            draw_list.outline(DrawLayer::World, collider.position, collider.size, color);
        }
    }

    fn index_of(&self, id: ColliderId) -> Option<usize> {
        self.colliders.iter().position(|collider| collider.id == id)
    }

    fn get_mut(&mut self, id: ColliderId) -> Option<&mut Collider> {
        self.colliders.iter_mut().find(|collider| collider.id == id)
    }
}
