mod collision;
mod physics;
mod vector;

pub use collision::{
    rects_overlap, Collider, ColliderDesc, ColliderId, ColliderRole, CollisionManager,
    CollisionStats, Contact, PhysicsMode,
};
pub use physics::{
    resolve, separation_impulse, COINCIDENT_PUSH_DIRECTION, MIN_INVERSE_DISTANCE,
    MIN_RESOLVE_DISTANCE, RESOLVE_STRENGTH,
};
pub use vector::Vec2;
