use super::{DrawList, InputSnapshot, LoopMetricsSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopCommand {
    Continue,
    Quit,
}

/// The single top-level game driven by the loop runner.
///
/// `tick` runs once per fixed simulation step with the input edges collected
/// since the previous tick; `render` fills the draw list for the next present.
pub trait Game {
    fn tick(&mut self, fixed_dt_seconds: f32, input: &InputSnapshot) -> LoopCommand;
    fn render(&self, draw_list: &mut DrawList);
    fn window_title(&self, _metrics: &LoopMetricsSnapshot) -> Option<String> {
        None
    }
    fn shutdown(&mut self) {}
}
