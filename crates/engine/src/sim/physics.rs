use super::collision::{Collider, PhysicsMode};
use super::vector::Vec2;

/// Scales the inverse-distance push into world units per second.
pub const RESOLVE_STRENGTH: f32 = 12_000.0;
/// Lower bound of the inverse-distance factor so distant overlaps still separate.
pub const MIN_INVERSE_DISTANCE: f32 = 0.015;
/// Floor on `d` in the push factor `max(1 / d, MIN_INVERSE_DISTANCE)`.
/// Pairs closer than this push as hard as a pair exactly this far apart,
/// never harder; without it `1 / d` grows without bound as `d` nears zero.
pub const MIN_RESOLVE_DISTANCE: f32 = 1.0;
/// Push axis used when both colliders sit on exactly the same position.
pub const COINCIDENT_PUSH_DIRECTION: Vec2 = Vec2 { x: 1.0, y: 0.0 };

/// Pushes an overlapping pair apart according to their physics modes.
///
/// Only `Simulated` colliders move. Returns `true` when a separating impulse
/// was applied to at least one side.
pub fn resolve(a: &mut Collider, b: &mut Collider, fixed_dt_seconds: f32) -> bool {
    match (a.physics(), b.physics()) {
        (PhysicsMode::Trigger, _) | (_, PhysicsMode::Trigger) => false,
        (PhysicsMode::Kinematic, PhysicsMode::Kinematic) => false,
        (PhysicsMode::Simulated, _) | (_, PhysicsMode::Simulated) => {
            let impulse = separation_impulse(a.position(), b.position(), fixed_dt_seconds);
            if a.physics() == PhysicsMode::Simulated {
                a.translate(impulse);
            }
            if b.physics() == PhysicsMode::Simulated {
                b.translate(-impulse);
            }
            true
        }
    }
}

/// Displacement applied to `a` (and negated for `b`) for one resolution step.
///
/// The push points from `b` to `a` and its length is inversely proportional
/// to their distance, independent of either velocity.
pub fn separation_impulse(a: Vec2, b: Vec2, fixed_dt_seconds: f32) -> Vec2 {
    let offset = a - b;
    let distance = offset.magnitude();
    let direction = if distance > 0.0 && distance.is_finite() {
        offset.normalized()
    } else {
        COINCIDENT_PUSH_DIRECTION
    };
    let inverse_distance = (1.0 / distance.max(MIN_RESOLVE_DISTANCE)).max(MIN_INVERSE_DISTANCE);
    direction * (inverse_distance * RESOLVE_STRENGTH * fixed_dt_seconds)
}
