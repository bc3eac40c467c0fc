use std::sync::Arc;
use std::time::{Duration, Instant};

use pixels::Error as PixelsError;
use thiserror::Error;
use tracing::{info, warn};
use winit::dpi::LogicalSize;
use winit::error::{EventLoopError, OsError};
use winit::event::{ElementState, Event, MouseButton as WinitMouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::WindowBuilder;

use crate::sim::Vec2;
use crate::AppPaths;

use super::input::{KeyStates, MouseStates};
use super::metrics::MetricsAccumulator;
use super::{CanvasLayout, DrawList, Game, InputSnapshot, Key, LoopCommand, MouseButton, Renderer};

#[derive(Debug, Clone)]
pub struct LoopConfig {
    pub window_title: String,
    pub canvas: CanvasLayout,
    pub window_scale: f64,
    pub target_tps: u32,
    pub max_frame_delta: Duration,
    pub max_ticks_per_frame: u32,
    pub metrics_log_interval: Duration,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            window_title: "Benji".to_string(),
            canvas: CanvasLayout::default(),
            window_scale: 1.0,
            target_tps: 60,
            max_frame_delta: Duration::from_millis(250),
            max_ticks_per_frame: 5,
            metrics_log_interval: Duration::from_secs(1),
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to create event loop: {0}")]
    CreateEventLoop(#[source] EventLoopError),
    #[error("failed to create application window: {0}")]
    CreateWindow(#[source] OsError),
    #[error("failed to initialize renderer: {0}")]
    CreateRenderer(#[source] PixelsError),
    #[error("event loop failed: {0}")]
    EventLoopRun(#[source] EventLoopError),
}

/// Opens the window and drives `game` with a fixed-step accumulator until
/// the window closes or the game asks to quit.
pub fn run_app(config: LoopConfig, paths: &AppPaths, mut game: Box<dyn Game>) -> Result<(), AppError> {
    let event_loop = EventLoop::new().map_err(AppError::CreateEventLoop)?;
    let window_scale = if config.window_scale > 0.0 {
        config.window_scale
    } else {
        1.0
    };
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(config.window_title.clone())
            .with_inner_size(LogicalSize::new(
                config.canvas.width as f64 * window_scale,
                config.canvas.total_height() as f64 * window_scale,
            ))
            .build(&event_loop)
            .map_err(AppError::CreateWindow)?,
    );
    let mut renderer = Renderer::new(Arc::clone(&window), config.canvas, paths.sprite_dir.clone())
        .map_err(AppError::CreateRenderer)?;

    event_loop.set_control_flow(ControlFlow::Poll);

    let target_tps = config.target_tps.max(1);
    let max_frame_delta =
        normalize_non_zero_duration(config.max_frame_delta, Duration::from_millis(250));
    let max_ticks_per_frame = config.max_ticks_per_frame.max(1);
    let metrics_log_interval =
        normalize_non_zero_duration(config.metrics_log_interval, Duration::from_secs(1));
    let fixed_dt = Duration::from_secs_f64(1.0 / target_tps as f64);
    let fixed_dt_seconds = fixed_dt.as_secs_f32();

    info!(
        target_tps,
        max_frame_delta_ms = max_frame_delta.as_millis() as u64,
        max_ticks_per_frame,
        metrics_log_interval_ms = metrics_log_interval.as_millis() as u64,
        canvas_width = config.canvas.width,
        canvas_height = config.canvas.total_height(),
        "loop_config"
    );

    let mut input_collector = InputCollector::default();
    let mut draw_list = DrawList::default();
    let mut accumulator = Duration::ZERO;
    let mut last_frame_instant = Instant::now();
    let mut metrics_accumulator = MetricsAccumulator::new(metrics_log_interval);
    let mut last_applied_title: Option<String> = None;

    event_loop
        .run(move |event, window_target| match event {
            Event::WindowEvent { window_id, event } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => {
                    info!(reason = "window_close", "shutdown_requested");
                    window_target.exit();
                }
                WindowEvent::Resized(new_size) => {
                    if let Err(error) = renderer.resize(new_size.width, new_size.height) {
                        warn!(error = %error, "renderer_resize_failed");
                        window_target.exit();
                    }
                }
                WindowEvent::Focused(false) => {
                    input_collector.release_all();
                }
                WindowEvent::CursorMoved { position, .. } => {
                    let canvas_position =
                        renderer.window_to_canvas_px(position.x as f32, position.y as f32);
                    input_collector.set_cursor_position_px(canvas_position);
                }
                WindowEvent::CursorLeft { .. } => {
                    input_collector.set_cursor_position_px(None);
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    input_collector.handle_mouse_input(button, state);
                }
                WindowEvent::MouseWheel { delta, .. } => {
                    input_collector.handle_mouse_wheel(delta);
                }
                WindowEvent::KeyboardInput { event, .. } => {
                    input_collector.handle_physical_key(event.physical_key, event.state);
                }
                WindowEvent::RedrawRequested => {
                    let now = Instant::now();
                    let raw_frame_dt = now.saturating_duration_since(last_frame_instant);
                    last_frame_instant = now;

                    let clamped_frame_dt = clamp_frame_delta(raw_frame_dt, max_frame_delta);
                    accumulator = accumulator.saturating_add(clamped_frame_dt);

                    let step_plan = plan_sim_steps(accumulator, fixed_dt, max_ticks_per_frame);
                    let mut quit_requested = false;
                    for _ in 0..step_plan.ticks_to_run {
                        let input_snapshot = input_collector.snapshot_for_tick();
                        if game.tick(fixed_dt_seconds, &input_snapshot) == LoopCommand::Quit {
                            quit_requested = true;
                        }
                        metrics_accumulator.record_tick();
                        if quit_requested {
                            break;
                        }
                    }
                    accumulator = step_plan.remaining_accumulator;

                    if step_plan.dropped_backlog > Duration::ZERO {
                        warn!(
                            dropped_backlog_ms = step_plan.dropped_backlog.as_millis() as u64,
                            max_ticks_per_frame, "sim_clamp_triggered"
                        );
                    }
                    if quit_requested {
                        info!(reason = "game_quit", "shutdown_requested");
                        window_target.exit();
                        return;
                    }

                    draw_list.reset(draw_list.clear_color());
                    game.render(&mut draw_list);
                    if let Err(error) = renderer.render(&draw_list) {
                        warn!(error = %error, "renderer_draw_failed");
                        window_target.exit();
                    }
                    metrics_accumulator.record_frame(raw_frame_dt);

                    if let Some(snapshot) = metrics_accumulator.maybe_snapshot(now) {
                        info!(
                            fps = snapshot.fps,
                            tps = snapshot.tps,
                            frame_time_ms = snapshot.frame_time_ms,
                            draw_commands = draw_list.len(),
                            "loop_metrics"
                        );
                    }

                    let next_title = game.window_title(&metrics_accumulator.latest());
                    if next_title != last_applied_title {
                        match &next_title {
                            Some(title) => window.set_title(title),
                            None => window.set_title(&config.window_title),
                        }
                        last_applied_title = next_title;
                    }
                }
                _ => {}
            },
            Event::AboutToWait => {
                window.request_redraw();
            }
            Event::LoopExiting => {
                game.shutdown();
                info!("shutdown");
            }
            _ => {}
        })
        .map_err(AppError::EventLoopRun)
}

/// Turns window events into per-tick input snapshots.
#[derive(Debug, Default)]
struct InputCollector {
    keys: KeyStates,
    mouse: MouseStates,
    cursor_position_px: Option<Vec2>,
    pending_scroll_steps: i32,
}

impl InputCollector {
    fn handle_physical_key(&mut self, key: PhysicalKey, state: ElementState) {
        let Some(key) = map_physical_key(key) else {
            return;
        };
        match state {
            ElementState::Pressed => self.keys.press(key),
            ElementState::Released => self.keys.release(key),
        }
    }

    fn handle_mouse_input(&mut self, button: WinitMouseButton, state: ElementState) {
        let button = match button {
            WinitMouseButton::Left => MouseButton::Left,
            WinitMouseButton::Right => MouseButton::Right,
            _ => return,
        };
        match state {
            ElementState::Pressed => self.mouse.press(button),
            ElementState::Released => self.mouse.release(button),
        }
    }

    /// Last wheel direction since the previous tick wins.
    fn handle_mouse_wheel(&mut self, delta: MouseScrollDelta) {
        let steps = scroll_steps_from_delta(delta);
        if steps != 0 {
            self.pending_scroll_steps = steps;
        }
    }

    fn set_cursor_position_px(&mut self, position: Option<Vec2>) {
        self.cursor_position_px = position;
    }

    fn release_all(&mut self) {
        self.keys.release_all();
        self.mouse.release_all();
    }

    fn snapshot_for_tick(&mut self) -> InputSnapshot {
        let snapshot = InputSnapshot::new(
            self.keys,
            self.mouse,
            self.cursor_position_px,
            self.pending_scroll_steps,
        );
        self.keys.clear_edges();
        self.mouse.clear_edges();
        self.pending_scroll_steps = 0;
        snapshot
    }
}

fn map_physical_key(key: PhysicalKey) -> Option<Key> {
    let PhysicalKey::Code(code) = key else {
        return None;
    };
    let key = match code {
        KeyCode::KeyW | KeyCode::ArrowUp => Key::W,
        KeyCode::KeyA | KeyCode::ArrowLeft => Key::A,
        KeyCode::KeyS | KeyCode::ArrowDown => Key::S,
        KeyCode::KeyD | KeyCode::ArrowRight => Key::D,
        KeyCode::KeyM => Key::M,
        KeyCode::KeyC => Key::C,
        KeyCode::KeyL => Key::L,
        KeyCode::Space => Key::Space,
        KeyCode::Escape => Key::Escape,
        KeyCode::Digit1 => Key::Digit1,
        KeyCode::Digit2 => Key::Digit2,
        KeyCode::Digit3 => Key::Digit3,
        KeyCode::Digit4 => Key::Digit4,
        KeyCode::Digit5 => Key::Digit5,
        KeyCode::Digit6 => Key::Digit6,
        KeyCode::Digit7 => Key::Digit7,
        KeyCode::Digit8 => Key::Digit8,
        KeyCode::Digit9 => Key::Digit9,
        KeyCode::Numpad0 => Key::Numpad0,
        KeyCode::Numpad1 => Key::Numpad1,
        KeyCode::Numpad2 => Key::Numpad2,
        _ => return None,
    };
    Some(key)
}

fn scroll_steps_from_delta(delta: MouseScrollDelta) -> i32 {
    let y = match delta {
        MouseScrollDelta::LineDelta(_, y) => y as f64,
        MouseScrollDelta::PixelDelta(position) => position.y,
    };
    if y > 0.0 {
        1
    } else if y < 0.0 {
        -1
    } else {
        0
    }
}

#[derive(Debug, Clone, Copy)]
struct StepPlan {
    ticks_to_run: u32,
    remaining_accumulator: Duration,
    dropped_backlog: Duration,
}

fn plan_sim_steps(
    mut accumulator: Duration,
    fixed_dt: Duration,
    max_ticks_per_frame: u32,
) -> StepPlan {
    let mut ticks_to_run = 0u32;
    while accumulator >= fixed_dt && ticks_to_run < max_ticks_per_frame {
        accumulator = accumulator.saturating_sub(fixed_dt);
        ticks_to_run = ticks_to_run.saturating_add(1);
    }

    let dropped_backlog = if accumulator >= fixed_dt {
        std::mem::take(&mut accumulator)
    } else {
        Duration::ZERO
    };
    StepPlan {
        ticks_to_run,
        remaining_accumulator: accumulator,
        dropped_backlog,
    }
}

fn clamp_frame_delta(frame_dt: Duration, max_frame_delta: Duration) -> Duration {
    frame_dt.min(max_frame_delta)
}

fn normalize_non_zero_duration(value: Duration, fallback: Duration) -> Duration {
    if value.is_zero() {
        fallback
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_frame_delta_caps_large_frame() {
        let max_frame_delta = Duration::from_millis(250);
        assert_eq!(
            clamp_frame_delta(Duration::from_secs(2), max_frame_delta),
            max_frame_delta
        );
    }

    #[test]
    fn plan_sim_steps_runs_expected_ticks_without_drop() {
        let result = plan_sim_steps(Duration::from_millis(50), Duration::from_millis(16), 5);
        assert_eq!(result.ticks_to_run, 3);
        assert_eq!(result.remaining_accumulator, Duration::from_millis(2));
        assert_eq!(result.dropped_backlog, Duration::ZERO);
    }

    #[test]
    fn plan_sim_steps_drops_backlog_when_tick_cap_hit() {
        let result = plan_sim_steps(Duration::from_millis(120), Duration::from_millis(16), 3);
        assert_eq!(result.ticks_to_run, 3);
        assert_eq!(result.remaining_accumulator, Duration::ZERO);
        assert_eq!(result.dropped_backlog, Duration::from_millis(72));
    }

    #[test]
    fn normalize_zero_duration_uses_fallback() {
        let fallback = Duration::from_secs(1);
        assert_eq!(normalize_non_zero_duration(Duration::ZERO, fallback), fallback);
        assert_eq!(
            normalize_non_zero_duration(Duration::from_millis(5), fallback),
            Duration::from_millis(5)
        );
    }

    #[test]
    fn key_press_is_edge_triggered_for_single_tick() {
        let mut input = InputCollector::default();
        input.handle_physical_key(PhysicalKey::Code(KeyCode::Space), ElementState::Pressed);

        let first = input.snapshot_for_tick();
        let second = input.snapshot_for_tick();

        assert!(first.is_pressed(Key::Space));
        assert!(!second.is_pressed(Key::Space));
        assert!(second.is_down(Key::Space));
    }

    #[test]
    fn held_key_does_not_repeat_edges() {
        let mut input = InputCollector::default();
        input.handle_physical_key(PhysicalKey::Code(KeyCode::KeyL), ElementState::Pressed);
        assert!(input.snapshot_for_tick().is_pressed(Key::L));

        input.handle_physical_key(PhysicalKey::Code(KeyCode::KeyL), ElementState::Pressed);
        assert!(!input.snapshot_for_tick().is_pressed(Key::L));

        input.handle_physical_key(PhysicalKey::Code(KeyCode::KeyL), ElementState::Released);
        input.handle_physical_key(PhysicalKey::Code(KeyCode::KeyL), ElementState::Pressed);
        assert!(input.snapshot_for_tick().is_pressed(Key::L));
    }

    #[test]
    fn arrows_alias_movement_keys() {
        let mut input = InputCollector::default();
        input.handle_physical_key(PhysicalKey::Code(KeyCode::ArrowUp), ElementState::Pressed);
        input.handle_physical_key(PhysicalKey::Code(KeyCode::KeyA), ElementState::Pressed);
        let snapshot = input.snapshot_for_tick();
        assert!(snapshot.is_down(Key::W));
        assert!(snapshot.is_down(Key::A));
        assert!(!snapshot.is_down(Key::D));
    }

    #[test]
    fn numpad_and_digit_rows_are_distinct() {
        let mut input = InputCollector::default();
        input.handle_physical_key(PhysicalKey::Code(KeyCode::Numpad1), ElementState::Pressed);
        let snapshot = input.snapshot_for_tick();
        assert!(snapshot.is_pressed(Key::Numpad1));
        assert!(!snapshot.is_pressed(Key::Digit1));
    }

    #[test]
    fn mouse_press_edges_and_levels() {
        let mut input = InputCollector::default();
        input.handle_mouse_input(WinitMouseButton::Right, ElementState::Pressed);
        let first = input.snapshot_for_tick();
        let second = input.snapshot_for_tick();
        input.handle_mouse_input(WinitMouseButton::Right, ElementState::Released);
        let third = input.snapshot_for_tick();

        assert!(first.mouse_pressed(MouseButton::Right));
        assert!(!second.mouse_pressed(MouseButton::Right));
        assert!(second.mouse_down(MouseButton::Right));
        assert!(!third.mouse_down(MouseButton::Right));
    }

    #[test]
    fn wheel_direction_is_reported_once() {
        let mut input = InputCollector::default();
        input.handle_mouse_wheel(MouseScrollDelta::LineDelta(0.0, -2.0));
        input.handle_mouse_wheel(MouseScrollDelta::LineDelta(0.0, 1.0));

        assert_eq!(input.snapshot_for_tick().scroll_steps(), 1);
        assert_eq!(input.snapshot_for_tick().scroll_steps(), 0);
    }

    #[test]
    fn pixel_wheel_delta_maps_to_direction() {
        let down = scroll_steps_from_delta(MouseScrollDelta::PixelDelta(
            winit::dpi::PhysicalPosition::new(0.0, -5.0),
        ));
        let none = scroll_steps_from_delta(MouseScrollDelta::PixelDelta(
            winit::dpi::PhysicalPosition::new(0.0, 0.0),
        ));
        assert_eq!(down, -1);
        assert_eq!(none, 0);
    }

    #[test]
    fn focus_loss_releases_held_input() {
        let mut input = InputCollector::default();
        input.handle_physical_key(PhysicalKey::Code(KeyCode::KeyD), ElementState::Pressed);
        input.handle_mouse_input(WinitMouseButton::Left, ElementState::Pressed);
        input.release_all();
        let snapshot = input.snapshot_for_tick();
        assert!(!snapshot.is_down(Key::D));
        assert!(!snapshot.mouse_down(MouseButton::Left));
    }

    #[test]
    fn cursor_is_carried_until_cleared() {
        let mut input = InputCollector::default();
        input.set_cursor_position_px(Some(Vec2::new(100.0, 200.0)));
        assert_eq!(
            input.snapshot_for_tick().cursor_position_px(),
            Some(Vec2::new(100.0, 200.0))
        );
        input.set_cursor_position_px(None);
        assert_eq!(input.snapshot_for_tick().cursor_position_px(), None);
    }
}
