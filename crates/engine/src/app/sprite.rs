/// Frame sequence of sprite keys advanced by simulation time.
///
/// A `seconds_per_frame` of zero (or less) keeps the first frame forever.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteAnimation {
    frames: &'static [&'static str],
    seconds_per_frame: f32,
    timer: f32,
    frame: usize,
}

impl SpriteAnimation {
    pub const fn new(frames: &'static [&'static str], seconds_per_frame: f32) -> Self {
        Self {
            frames,
            seconds_per_frame,
            timer: 0.0,
            frame: 0,
        }
    }

    pub const fn still(frames: &'static [&'static str]) -> Self {
        Self::new(frames, 0.0)
    }

    pub fn advance(&mut self, dt_seconds: f32) {
        if self.seconds_per_frame <= 0.0 || self.frames.len() < 2 {
            return;
        }
        self.timer += dt_seconds;
        while self.timer >= self.seconds_per_frame {
            self.timer -= self.seconds_per_frame;
            self.frame = (self.frame + 1) % self.frames.len();
        }
    }

    pub fn frame_index(&self) -> usize {
        self.frame
    }

    pub fn current_key(&self) -> Option<&'static str> {
        self.frames.get(self.frame).copied()
    }

    /// Key of an explicit frame, ignoring the clock. Used for sheets indexed
    /// by state (facing, color) instead of time.
    pub fn key_at(&self, frame: usize) -> Option<&'static str> {
        self.frames.get(frame).copied()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
