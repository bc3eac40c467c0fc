use crate::sim::Vec2;

use super::DrawLayer;

/// Pixel layout of the frame buffer: the play area on top, the HUD band
/// directly below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasLayout {
    pub width: u32,
    pub play_height: u32,
    pub hud_height: u32,
}

impl Default for CanvasLayout {
    fn default() -> Self {
        Self {
            width: 1024,
            play_height: 576,
            hud_height: 96,
        }
    }
}

impl CanvasLayout {
    pub fn total_height(&self) -> u32 {
        self.play_height + self.hud_height
    }

    /// Top pixel row and height of a layer's band.
    fn band(&self, layer: DrawLayer) -> (i32, i32) {
        match layer {
            DrawLayer::World => (0, self.play_height as i32),
            DrawLayer::Hud => (self.play_height as i32, self.hud_height as i32),
        }
    }
}

/// Top-left pixel of a rect given in a layer's y-up coordinates.
pub fn layer_rect_to_buffer_px(
    layout: CanvasLayout,
    layer: DrawLayer,
    position: Vec2,
    size: Vec2,
) -> (i32, i32) {
    let (band_top, band_height) = layout.band(layer);
    let x = position.x.round() as i32;
    let y = band_top + band_height - (position.y + size.y).round() as i32;
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_origin_maps_to_bottom_of_play_area() {
        let layout = CanvasLayout::default();
        let (x, y) = layer_rect_to_buffer_px(
            layout,
            DrawLayer::World,
            Vec2::ZERO,
            Vec2::splat(64.0),
        );
        assert_eq!((x, y), (0, 512));
    }

    #[test]
    fn top_row_cell_maps_to_first_pixel_row() {
        let layout = CanvasLayout::default();
        let (x, y) = layer_rect_to_buffer_px(
            layout,
            DrawLayer::World,
            Vec2::new(128.0, 512.0),
            Vec2::splat(64.0),
        );
        assert_eq!((x, y), (128, 0));
    }

    #[test]
    fn hud_band_sits_below_play_area() {
        let layout = CanvasLayout::default();
        assert_eq!(layout.total_height(), 672);
        let (_, y) = layer_rect_to_buffer_px(
            layout,
            DrawLayer::Hud,
            Vec2::new(16.0, 32.0),
            Vec2::splat(64.0),
        );
        assert_eq!(y, 576);
    }
}
