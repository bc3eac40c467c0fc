use benji_engine::{DrawLayer, DrawList, KeyValueStore, Vec2};
use tracing::{info, warn};

use super::map_data;
use super::save::{self, SaveError};
use super::sprites::{TileAnimations, TILE_SPRITE_SIZE};
use super::{GRID_COLUMNS, GRID_ROWS, PLAY_AREA, TILE_SIZE};

/// Rows top to bottom, columns left to right.
pub(crate) type Grid = [[u8; GRID_COLUMNS]; GRID_ROWS];

pub(crate) const TILE_CODE_MAX: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub(crate) const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        }
    }
}

/// Bottom-left world position of a grid cell. Row 0 is the top row.
pub(crate) fn cell_to_world(column: usize, row: usize) -> Vec2 {
    Vec2::new(
        column as f32 * TILE_SIZE,
        PLAY_AREA.y - (row as f32 + 1.0) * TILE_SIZE,
    )
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Screen {
    id: usize,
    plan: Grid,
    props: Grid,
    connections: [Option<usize>; 4],
}

impl Screen {
    pub(crate) fn new(id: usize, plan: Grid, props: Grid, connections: [Option<usize>; 4]) -> Self {
        Self {
            id,
            plan,
            props,
            connections,
        }
    }

    pub(crate) fn id(&self) -> usize {
        self.id
    }

    pub(crate) fn plan(&self) -> &Grid {
        &self.plan
    }

    pub(crate) fn props(&self) -> &Grid {
        &self.props
    }

    pub(crate) fn connection(&self, direction: Direction) -> Option<usize> {
        self.connections[direction.index()]
    }

    /// Returns `false` for cells outside the grid.
    pub(crate) fn set_tile(&mut self, column: usize, row: usize, code: u8) -> bool {
        set_cell(&mut self.plan, column, row, code)
    }

    pub(crate) fn set_prop(&mut self, column: usize, row: usize, code: u8) -> bool {
        set_cell(&mut self.props, column, row, code)
    }
}

fn set_cell(grid: &mut Grid, column: usize, row: usize, code: u8) -> bool {
    match grid.get_mut(row).and_then(|cells| cells.get_mut(column)) {
        Some(cell) => {
            *cell = code;
            true
        }
        None => false,
    }
}

/// Fixed graph of screens with exactly one active. Never empty, and
/// `active` is always a valid index.
#[derive(Debug, Clone)]
pub(crate) struct Map {
    screens: Vec<Screen>,
    active: usize,
}

impl Map {
    /// `first` starts active; a map always holds at least that screen.
    pub(crate) fn new(first: Screen, others: impl IntoIterator<Item = Screen>) -> Self {
        let mut screens = vec![first];
        screens.extend(others);
        Self { screens, active: 0 }
    }

    /// The five built-in screens and their connections.
    pub(crate) fn builtin() -> Self {
        Self::new(
            Screen::new(
                0,
                map_data::SCREEN_0_PLAN,
                map_data::SCREEN_0_PROPS,
                [Some(1), Some(4), None, None],
            ),
            [
                Screen::new(
                    1,
                    map_data::SCREEN_1_PLAN,
                    map_data::SCREEN_1_PROPS,
                    [None, Some(3), Some(0), Some(2)],
                ),
                Screen::new(
                    2,
                    map_data::SCREEN_2_PLAN,
                    map_data::SCREEN_2_PROPS,
                    [None, Some(1), None, None],
                ),
                Screen::new(
                    3,
                    map_data::SCREEN_3_PLAN,
                    map_data::SCREEN_3_PROPS,
                    [None, None, None, Some(1)],
                ),
                Screen::new(
                    4,
                    map_data::SCREEN_4_PLAN,
                    map_data::SCREEN_4_PROPS,
                    [None, None, None, Some(0)],
                ),
            ],
        )
    }

    pub(crate) fn len(&self) -> usize {
        self.screens.len()
    }

    pub(crate) fn screen(&self, id: usize) -> Option<&Screen> {
        self.screens.get(id)
    }

    pub(crate) fn active(&self) -> &Screen {
        &self.screens[self.active]
    }

    pub(crate) fn active_mut(&mut self) -> &mut Screen {
        &mut self.screens[self.active]
    }

    pub(crate) fn active_id(&self) -> usize {
        self.active
    }

    /// Unknown ids leave the active screen unchanged.
    pub(crate) fn set_active(&mut self, id: usize) -> bool {
        if id >= self.screens.len() {
            return false;
        }
        self.active = id;
        true
    }

    /// Replaces layouts with editor overrides from `store`. Screens without
    /// a stored override write their built-in layout back.
    pub(crate) fn load_overrides(&mut self, store: &mut dyn KeyValueStore) {
        for screen in &mut self.screens {
            let plan_key = save::plan_key(screen.id);
            match save::read_or_absent::<Grid>(store, &plan_key) {
                Some(plan) => screen.plan = plan,
                None => {
                    info!(screen = screen.id, "plan_override_missing_using_builtin");
                    if let Err(error) = save::write_json(store, &plan_key, &screen.plan) {
                        warn!(screen = screen.id, error = %error, "plan_write_back_failed");
                    }
                }
            }

            let props_key = save::props_key(screen.id);
            match save::read_or_absent::<Grid>(store, &props_key) {
                Some(props) => screen.props = props,
                None => {
                    info!(screen = screen.id, "props_override_missing_using_builtin");
                    if let Err(error) = save::write_json(store, &props_key, &screen.props) {
                        warn!(screen = screen.id, error = %error, "props_write_back_failed");
                    }
                }
            }
        }
    }

    pub(crate) fn save_active_overrides(
        &self,
        store: &mut dyn KeyValueStore,
    ) -> Result<(), SaveError> {
        let screen = self.active();
        save::write_json(store, &save::plan_key(screen.id), &screen.plan)?;
        save::write_json(store, &save::props_key(screen.id), &screen.props)?;
        info!(screen = screen.id, "screen_overrides_saved");
        Ok(())
    }

    pub(crate) fn draw_tiles(&self, draw_list: &mut DrawList, tiles: &TileAnimations) {
        for (row, cells) in self.active().plan.iter().enumerate() {
            for (column, code) in cells.iter().enumerate() {
                if let Some(key) = tiles.current_key(*code) {
                    draw_list.sprite(
                        DrawLayer::World,
                        key,
                        cell_to_world(column, row),
                        TILE_SPRITE_SIZE,
                    );
                }
            }
        }
    }
}
