use benji_engine::{CollisionManager, DrawList, Vec2};
use tracing::debug;

use super::character::Character;
use super::map::{cell_to_world, Grid};
use super::props::{Prop, PropKind, PropOutcome};
use super::save::PropSave;
use super::{GRID_COLUMNS, GRID_ROWS};

/// The active screen's props. Removal during an update pass is deferred
/// until the pass completes.
#[derive(Debug, Default)]
pub(crate) struct PropManager {
    props: Vec<Prop>,
}

impl PropManager {
    pub(crate) fn len(&self) -> usize {
        self.props.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Prop> {
        self.props.iter()
    }

    /// Drops every prop and deregisters their colliders.
    pub(crate) fn clear(&mut self, collisions: &mut CollisionManager) {
        for prop in self.props.drain(..) {
            if let Some(id) = prop.collider() {
                collisions.deregister(id);
            }
        }
    }

    /// Drops every prop without touching the collision manager. Use after
    /// the manager itself was cleared.
    pub(crate) fn forget(&mut self) {
        self.props.clear();
    }

    pub(crate) fn spawn(
        &mut self,
        kind: PropKind,
        position: Vec2,
        collisions: Option<&mut CollisionManager>,
    ) {
        self.push(Prop::new(kind, position), collisions);
    }

    fn push(&mut self, mut prop: Prop, collisions: Option<&mut CollisionManager>) {
        if let Some(collisions) = collisions {
            prop.attach_collider(collisions);
        }
        self.props.push(prop);
    }

    /// Replaces the current props with the ones placed by `layout`, column by
    /// column. Without a collision manager the props are display-only.
    pub(crate) fn build_from_layout(
        &mut self,
        layout: &Grid,
        mut collisions: Option<&mut CollisionManager>,
    ) -> usize {
        if let Some(collisions) = collisions.as_deref_mut() {
            self.clear(collisions);
        } else {
            self.forget();
        }

        for column in 0..GRID_COLUMNS {
            for row in 0..GRID_ROWS {
                let position = cell_to_world(column, row);
                if let Some(kind) = PropKind::from_code(layout[row][column], position) {
                    self.spawn(kind, position, collisions.as_deref_mut());
                }
            }
        }
        self.props.len()
    }

    /// Replaces the current props with a saved snapshot.
    pub(crate) fn restore(&mut self, saved: Vec<PropSave>, collisions: &mut CollisionManager) {
        self.clear(collisions);
        for record in saved {
            self.push(record.into_prop(), Some(&mut *collisions));
        }
    }

    pub(crate) fn snapshot(&self) -> Vec<PropSave> {
        self.props
            .iter()
            .filter(|prop| !prop.is_removed())
            .map(PropSave::from_prop)
            .collect()
    }

    /// Runs every prop's behavior against this tick's collision partners,
    /// then removes the props marked along the way.
    pub(crate) fn update(
        &mut self,
        fixed_dt_seconds: f32,
        collisions: &mut CollisionManager,
        character: &mut Character,
    ) -> PropOutcome {
        let mut outcome = PropOutcome::default();
        for prop in &mut self.props {
            prop.update(fixed_dt_seconds, collisions, character, &mut outcome);
        }
        self.compact(collisions);
        outcome
    }

    fn compact(&mut self, collisions: &mut CollisionManager) -> usize {
        let before = self.props.len();
        self.props.retain(|prop| {
            if !prop.is_removed() {
                return true;
            }
            if let Some(id) = prop.collider() {
                collisions.deregister(id);
            }
            false
        });
        let removed = before - self.props.len();
        if removed > 0 {
            debug!(removed, remaining = self.props.len(), "props_compacted");
        }
        removed
    }

    pub(crate) fn draw(&self, draw_list: &mut DrawList) {
        for prop in &self.props {
            prop.draw(draw_list);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::gameplay::map::Map;

    #[test]
    fn layout_builds_one_prop_per_nonzero_cell() {
        let map = Map::builtin();
        let layout = map.screen(0).expect("screen").props();
        let expected = layout.iter().flatten().filter(|code| **code != 0).count();

        let mut collisions = CollisionManager::default();
        let mut props = PropManager::default();
        assert_eq!(props.build_from_layout(layout, Some(&mut collisions)), expected);
        assert_eq!(collisions.len(), expected);

        props.build_from_layout(layout, Some(&mut collisions));
        assert_eq!(collisions.len(), expected, "rebuild replaces old colliders");
    }

    #[test]
    fn editor_layout_has_no_colliders() {
        let map = Map::builtin();
        let mut props = PropManager::default();
        props.build_from_layout(map.screen(1).expect("screen").props(), None);
        assert!(!props.is_empty());
        assert!(props.iter().all(|prop| prop.collider().is_none()));
    }

    #[test]
    fn snapshot_and_restore_preserve_kinds_and_positions() {
        let map = Map::builtin();
        let mut collisions = CollisionManager::default();
        let mut props = PropManager::default();
        props.build_from_layout(map.screen(2).expect("screen").props(), Some(&mut collisions));
        let snapshot = props.snapshot();

        let mut restored = PropManager::default();
        let mut other = CollisionManager::default();
        restored.restore(snapshot.clone(), &mut other);
        assert_eq!(restored.snapshot(), snapshot);
        assert_eq!(other.len(), snapshot.len());
    }

    #[test]
    fn clear_deregisters_only_prop_colliders() {
        let mut collisions = CollisionManager::default();
        let mut character = Character::default();
        character.register_colliders(&mut collisions);

        let mut props = PropManager::default();
        props.spawn(PropKind::Wall, Vec2::ZERO, Some(&mut collisions));
        props.spawn(PropKind::Coin, Vec2::new(64.0, 0.0), Some(&mut collisions));
        assert_eq!(collisions.len(), 4);

        props.clear(&mut collisions);
        assert!(props.is_empty());
        assert_eq!(collisions.len(), 2);
    }
}
