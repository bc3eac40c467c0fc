mod draw_list;
mod renderer;
mod transform;

pub use draw_list::{colors, DrawCommand, DrawLayer, DrawList, Rgba};
pub use renderer::Renderer;
pub use transform::{layer_rect_to_buffer_px, CanvasLayout};
