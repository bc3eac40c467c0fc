use crate::sim::Vec2;

pub type Rgba = [u8; 4];

pub mod colors {
    use super::Rgba;

    pub const BLACK: Rgba = [0, 0, 0, 255];
    pub const WHITE: Rgba = [255, 255, 255, 255];
    pub const RED: Rgba = [255, 0, 0, 255];
    pub const GREEN: Rgba = [0, 255, 0, 255];
    pub const YELLOW: Rgba = [255, 255, 0, 255];
    pub const BACKGROUND: Rgba = [20, 22, 28, 255];
    pub const PLACEHOLDER: Rgba = [220, 220, 240, 255];
}

/// Coordinate space of a draw command. Both are y-up with the origin at the
/// bottom-left corner of their band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawLayer {
    /// The play area.
    World,
    /// The status band below the play area.
    Hud,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Sprite stretched to `size`, `position` being its bottom-left corner.
    Sprite {
        layer: DrawLayer,
        key: &'static str,
        position: Vec2,
        size: Vec2,
    },
    Rect {
        layer: DrawLayer,
        position: Vec2,
        size: Vec2,
        color: Rgba,
        filled: bool,
    },
}

/// Ordered list of draw commands for one frame; later commands paint over
/// earlier ones.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawList {
    clear_color: Rgba,
    commands: Vec<DrawCommand>,
}

impl Default for DrawList {
    fn default() -> Self {
        Self {
            clear_color: colors::BACKGROUND,
            commands: Vec::new(),
        }
    }
}

impl DrawList {
    pub fn reset(&mut self, clear_color: Rgba) {
        self.clear_color = clear_color;
        self.commands.clear();
    }

    pub fn clear_color(&self) -> Rgba {
        self.clear_color
    }

    pub fn sprite(&mut self, layer: DrawLayer, key: &'static str, position: Vec2, size: Vec2) {
        self.commands.push(DrawCommand::Sprite {
            layer,
            key,
            position,
            size,
        });
    }

    pub fn outline(&mut self, layer: DrawLayer, position: Vec2, size: Vec2, color: Rgba) {
        self.commands.push(DrawCommand::Rect {
            layer,
            position,
            size,
            color,
            filled: false,
        });
    }

    pub fn fill(&mut self, layer: DrawLayer, position: Vec2, size: Vec2, color: Rgba) {
        self.commands.push(DrawCommand::Rect {
            layer,
            position,
            size,
            color,
            filled: true,
        });
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Sprite keys in draw order. Handy for asserting what a frame shows.
    pub fn sprite_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Sprite { key, .. } => Some(*key),
            DrawCommand::Rect { .. } => None,
        })
    }
}
