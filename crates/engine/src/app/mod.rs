mod game;
mod input;
mod loop_runner;
mod metrics;
mod rendering;
mod sprite;

pub use game::{Game, LoopCommand};
pub use input::{InputSnapshot, Key, MouseButton};
pub use loop_runner::{run_app, AppError, LoopConfig};
pub use metrics::LoopMetricsSnapshot;
pub use rendering::{
    colors, layer_rect_to_buffer_px, CanvasLayout, DrawCommand, DrawLayer, DrawList, Renderer,
    Rgba,
};
pub use sprite::SpriteAnimation;
