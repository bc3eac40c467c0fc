use benji_engine::{colors, DrawLayer, DrawList, InputSnapshot, Key, MouseButton, Vec2};
use tracing::{debug, info};

use super::map::{cell_to_world, Direction, TILE_CODE_MAX};
use super::props::PROP_CODE_MAX;
use super::sprites::TILE_SPRITE_SIZE;
use super::world::World;
use super::{GRID_COLUMNS, GRID_ROWS, PLAY_AREA, TILE_SIZE};

pub(crate) const TILE_ITEM_NAMES: [&str; TILE_CODE_MAX as usize + 1] = [
    "Remove",
    "Grass Green (Moving)",
    "Grass Yellow (Moving)",
    "Grass Yellow 1",
    "Grass Yellow 2",
    "Sand",
];

pub(crate) const PROP_ITEM_NAMES: [&str; PROP_CODE_MAX as usize + 1] = [
    "Remove",
    "Wall",
    "Rock (Small)",
    "Rock (Large)",
    "Coin",
    "Lava",
    "Enemy (Patrol Horizontally)",
    "Enemy (Patrol Vertically)",
    "Door - Red",
    "Door - Green",
    "Door - Blue",
    "Key - Red",
    "Key - Green",
    "Key - Blue",
    "Chest",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EditorLayer {
    Tiles,
    Props,
}

impl EditorLayer {
    fn toggled(self) -> Self {
        match self {
            Self::Tiles => Self::Props,
            Self::Props => Self::Tiles,
        }
    }

    pub(crate) fn max_item(self) -> u8 {
        match self {
            Self::Tiles => TILE_CODE_MAX,
            Self::Props => PROP_CODE_MAX,
        }
    }

    fn item_name(self, item: u8) -> &'static str {
        let names: &[&str] = match self {
            Self::Tiles => &TILE_ITEM_NAMES,
            Self::Props => &PROP_ITEM_NAMES,
        };
        names.get(usize::from(item)).copied().unwrap_or("Unknown")
    }

    fn name(self) -> &'static str {
        match self {
            Self::Tiles => "tiles",
            Self::Props => "props",
        }
    }
}

/// Grid cell under a top-down canvas pixel, clamped to the play grid.
/// `None` over the HUD band below the play area.
pub(crate) fn cell_under_cursor(cursor_px: Vec2) -> Option<(usize, usize)> {
    if cursor_px.y >= PLAY_AREA.y {
        return None;
    }
    let column = (cursor_px.x.max(0.0) / TILE_SIZE) as usize;
    let row = (cursor_px.y.max(0.0) / TILE_SIZE) as usize;
    Some((column.min(GRID_COLUMNS - 1), row.min(GRID_ROWS - 1)))
}

#[derive(Debug, Clone)]
pub(crate) struct Editor {
    layer: EditorLayer,
    item: u8,
    cell: (usize, usize),
}

impl Default for Editor {
    fn default() -> Self {
        Self {
            layer: EditorLayer::Tiles,
            item: 1,
            cell: (0, 0),
        }
    }
}

impl Editor {
    pub(crate) fn layer(&self) -> EditorLayer {
        self.layer
    }

    pub(crate) fn item(&self) -> u8 {
        self.item
    }

    pub(crate) fn cell(&self) -> (usize, usize) {
        self.cell
    }

    pub(crate) fn enter(&mut self, world: &mut World) {
        world.set_screen_for_editing(0);
        info!(layer = self.layer.name(), item = self.item, "editor_entered");
    }

    pub(crate) fn tick(&mut self, world: &mut World, input: &InputSnapshot) {
        if input.is_pressed(Key::M) {
            self.layer = self.layer.toggled();
            debug!(layer = self.layer.name(), "editor_layer_toggled");
        }
        for value in 1..=9 {
            if Key::digit(value).is_some_and(|key| input.is_pressed(key)) {
                self.item = value;
            }
        }

        let moves = [
            (Key::W, Direction::North),
            (Key::D, Direction::East),
            (Key::S, Direction::South),
            (Key::A, Direction::West),
        ];
        for (key, direction) in moves {
            if !input.is_pressed(key) {
                continue;
            }
            if let Some(target) = world.map.active().connection(direction) {
                world.save_overrides();
                world.set_screen_for_editing(target);
                info!(screen = target, direction = direction.name(), "editor_screen_changed");
            }
        }

        let hovered = input.cursor_position_px().and_then(cell_under_cursor);
        if let Some(cell) = hovered {
            self.cell = cell;
        }

        match input.scroll_steps() {
            1 => self.item = self.item.saturating_sub(1),
            -1 => self.item = self.item.saturating_add(1),
            _ => {}
        }
        self.item = self.item.clamp(1, self.layer.max_item());

        let paint = if input.mouse_down(MouseButton::Left) {
            Some(self.item)
        } else if input.mouse_down(MouseButton::Right) {
            Some(0)
        } else {
            None
        };
        if let (Some(code), Some(_)) = (paint, hovered) {
            self.paint(world, code);
        }
    }

    fn paint(&self, world: &mut World, code: u8) {
        let (column, row) = self.cell;
        let screen = world.map.active_mut();
        let changed = match self.layer {
            EditorLayer::Tiles => {
                screen.plan()[row][column] != code && screen.set_tile(column, row, code)
            }
            EditorLayer::Props => {
                screen.props()[row][column] != code && screen.set_prop(column, row, code)
            }
        };
        if !changed {
            return;
        }
        if self.layer == EditorLayer::Props {
            world.rebuild_editor_props();
        }
        debug!(
            layer = self.layer.name(),
            column,
            row,
            code,
            "editor_cell_painted"
        );
    }

    pub(crate) fn draw(&self, draw_list: &mut DrawList) {
        let (column, row) = self.cell;
        draw_list.outline(
            DrawLayer::World,
            cell_to_world(column, row),
            TILE_SPRITE_SIZE,
            colors::RED,
        );
    }

    pub(crate) fn status(&self, screen: usize) -> String {
        format!(
            "Editor | screen {screen} | {}: {}",
            self.layer.name(),
            self.layer.item_name(self.item)
        )
    }
}
