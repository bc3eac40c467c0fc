use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::ImageReader;
use pixels::{Error, Pixels, SurfaceTexture, TextureError};
use tracing::warn;
use winit::window::Window;

use crate::sim::Vec2;
use crate::sprite_keys::validate_sprite_key;

use super::{colors, layer_rect_to_buffer_px, CanvasLayout, DrawCommand, DrawList, Rgba};

const SPRITE_EXTENSIONS: [&str; 2] = ["png", "jpg"];

struct LoadedSprite {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

/// Lazily decoded sprites keyed by sprite key. Failed loads are cached as
/// `None` and warned about once.
struct SpriteCache {
    sprite_dir: PathBuf,
    loaded: HashMap<&'static str, Option<LoadedSprite>>,
    warned_keys: HashSet<&'static str>,
}

impl SpriteCache {
    fn new(sprite_dir: PathBuf) -> Self {
        Self {
            sprite_dir,
            loaded: HashMap::new(),
            warned_keys: HashSet::new(),
        }
    }

    fn get(&mut self, key: &'static str) -> Option<&LoadedSprite> {
        if !self.loaded.contains_key(key) {
            let sprite = match resolve_sprite_image_path(&self.sprite_dir, key) {
                Ok(path) => match load_sprite_rgba(&path) {
                    Ok(sprite) => Some(sprite),
                    Err(reason) => {
                        warn_sprite_load_once(&mut self.warned_keys, key, Some(&path), &reason);
                        None
                    }
                },
                Err(reason) => {
                    warn_sprite_load_once(&mut self.warned_keys, key, None, &reason);
                    None
                }
            };
            self.loaded.insert(key, sprite);
        }
        self.loaded.get(key).and_then(Option::as_ref)
    }
}

pub struct Renderer {
    pixels: Pixels<'static>,
    layout: CanvasLayout,
    sprites: SpriteCache,
}

impl Renderer {
    /// The frame buffer keeps the canvas resolution; `pixels` scales it to
    /// whatever size the window surface has.
    pub fn new(window: Arc<Window>, layout: CanvasLayout, sprite_dir: PathBuf) -> Result<Self, Error> {
        let size = window.inner_size();
        let surface = SurfaceTexture::new(size.width.max(1), size.height.max(1), window);
        let pixels = Pixels::new(layout.width, layout.total_height(), surface)?;
        Ok(Self {
            pixels,
            layout,
            sprites: SpriteCache::new(sprite_dir),
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), TextureError> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        self.pixels.resize_surface(width, height)
    }

    /// Maps a physical window position to canvas pixels, `None` outside the canvas.
    pub fn window_to_canvas_px(&self, x: f32, y: f32) -> Option<Vec2> {
        self.pixels
            .window_pos_to_pixel((x, y))
            .ok()
            .map(|(px, py)| Vec2::new(px as f32, py as f32))
    }

    pub fn render(&mut self, draw_list: &DrawList) -> Result<(), Error> {
        rasterize(
            self.pixels.frame_mut(),
            self.layout,
            draw_list,
            &mut self.sprites,
        );
        self.pixels.render()
    }
}

fn rasterize(
    frame: &mut [u8],
    layout: CanvasLayout,
    draw_list: &DrawList,
    sprites: &mut SpriteCache,
) {
    let width = layout.width;
    let height = layout.total_height();
    let clear_color = draw_list.clear_color();
    for pixel in frame.chunks_exact_mut(4) {
        pixel.copy_from_slice(&clear_color);
    }

    for command in draw_list.commands() {
        match command {
            DrawCommand::Sprite {
                layer,
                key,
                position,
                size,
            } => {
                let (left, top) = layer_rect_to_buffer_px(layout, *layer, *position, *size);
                let dest_w = size.x.round() as i32;
                let dest_h = size.y.round() as i32;
                match sprites.get(*key) {
                    Some(sprite) => {
                        draw_sprite_scaled(frame, width, height, left, top, dest_w, dest_h, sprite)
                    }
                    None => fill_rect_clipped(
                        frame,
                        width,
                        height,
                        left,
                        top,
                        dest_w,
                        dest_h,
                        colors::PLACEHOLDER,
                    ),
                }
            }
            DrawCommand::Rect {
                layer,
                position,
                size,
                color,
                filled,
            } => {
                let (left, top) = layer_rect_to_buffer_px(layout, *layer, *position, *size);
                let w = size.x.round() as i32;
                let h = size.y.round() as i32;
                if *filled {
                    fill_rect_clipped(frame, width, height, left, top, w, h, *color);
                } else {
                    draw_rect_outline(frame, width, height, left, top, w, h, *color);
                }
            }
        }
    }
}

fn resolve_sprite_image_path(sprite_dir: &Path, key: &str) -> Result<PathBuf, String> {
    validate_sprite_key(key).map_err(|error| format!("invalid_key:{error}"))?;
    SPRITE_EXTENSIONS
        .iter()
        .map(|extension| sprite_dir.join(format!("{key}.{extension}")))
        .find(|path| path.is_file())
        .ok_or_else(|| "file_not_found".to_string())
}

fn load_sprite_rgba(path: &Path) -> Result<LoadedSprite, String> {
    let reader = ImageReader::open(path).map_err(|error| format!("file_open_failed:{error}"))?;
    let decoded = reader
        .decode()
        .map_err(|error| format!("decode_failed:{error}"))?;
    let image = decoded.to_rgba8();
    Ok(LoadedSprite {
        width: image.width(),
        height: image.height(),
        rgba: image.into_raw(),
    })
}

fn warn_sprite_load_once(
    warned_keys: &mut HashSet<&'static str>,
    key: &'static str,
    resolved_path: Option<&Path>,
    reason: &str,
) {
    if !warned_keys.insert(key) {
        return;
    }
    let path_display = resolved_path
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "<unresolved>".to_string());
    warn!(
        sprite_key = key,
        path = %path_display,
        reason,
        "renderer_sprite_load_failed_using_placeholder"
    );
}

fn write_pixel_rgba_clipped(frame: &mut [u8], width: u32, height: u32, x: i32, y: i32, color: Rgba) {
    if x < 0 || y < 0 || x >= width as i32 || y >= height as i32 {
        return;
    }
    let offset = (y as usize * width as usize + x as usize) * 4;
    if let Some(pixel) = frame.get_mut(offset..offset + 4) {
        pixel.copy_from_slice(&color);
    }
}

#[allow(clippy::too_many_arguments)]
fn fill_rect_clipped(
    frame: &mut [u8],
    width: u32,
    height: u32,
    left: i32,
    top: i32,
    w: i32,
    h: i32,
    color: Rgba,
) {
    let x_end = (left + w).min(width as i32);
    let y_end = (top + h).min(height as i32);
    for y in top.max(0)..y_end {
        for x in left.max(0)..x_end {
            write_pixel_rgba_clipped(frame, width, height, x, y, color);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_rect_outline(
    frame: &mut [u8],
    width: u32,
    height: u32,
    left: i32,
    top: i32,
    w: i32,
    h: i32,
    color: Rgba,
) {
    if w <= 0 || h <= 0 {
        return;
    }
    let right = left + w - 1;
    let bottom = top + h - 1;
    for x in left..=right {
        write_pixel_rgba_clipped(frame, width, height, x, top, color);
        write_pixel_rgba_clipped(frame, width, height, x, bottom, color);
    }
    for y in top..=bottom {
        write_pixel_rgba_clipped(frame, width, height, left, y, color);
        write_pixel_rgba_clipped(frame, width, height, right, y, color);
    }
}

/// Nearest-neighbour blit of `sprite` stretched to `dest_w`×`dest_h`.
/// Fully transparent source pixels are skipped.
#[allow(clippy::too_many_arguments)]
fn draw_sprite_scaled(
    frame: &mut [u8],
    width: u32,
    height: u32,
    left: i32,
    top: i32,
    dest_w: i32,
    dest_h: i32,
    sprite: &LoadedSprite,
) {
    if sprite.width == 0 || sprite.height == 0 || dest_w <= 0 || dest_h <= 0 {
        return;
    }
    let expected_rgba_len = sprite.width as usize * sprite.height as usize * 4;
    if sprite.rgba.len() < expected_rgba_len {
        return;
    }

    let draw_left = left.max(0);
    let draw_top = top.max(0);
    let draw_right = (left + dest_w).min(width as i32);
    let draw_bottom = (top + dest_h).min(height as i32);
    if draw_left >= draw_right || draw_top >= draw_bottom {
        return;
    }

    let sprite_width = sprite.width as usize;
    for out_y in draw_top..draw_bottom {
        let dy = (out_y - top) as u64;
        let src_y = (dy * u64::from(sprite.height) / dest_h as u64) as usize;
        let src_row_offset = src_y.min(sprite.height as usize - 1) * sprite_width * 4;
        let dst_row_offset = out_y as usize * width as usize * 4;

        for out_x in draw_left..draw_right {
            let dx = (out_x - left) as u64;
            let src_x = (dx * u64::from(sprite.width) / dest_w as u64) as usize;
            let src_offset = src_row_offset + src_x.min(sprite_width - 1) * 4;
            let alpha = sprite.rgba[src_offset + 3];
            if alpha == 0 {
                continue;
            }
            let dst_offset = dst_row_offset + out_x as usize * 4;
            frame[dst_offset..dst_offset + 4].copy_from_slice(&sprite.rgba[src_offset..src_offset + 4]);
        }
    }
}
