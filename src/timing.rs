//! Frame timing for FPS estimates

/// Number of frame timestamps kept
const WINDOW: usize = 60;

/// Ring buffer of recent frame timestamps (milliseconds)
#[derive(Debug, Clone)]
pub struct FrameStats {
    frame_times: [f64; WINDOW],
    frame_index: usize,
    frames: u64,
    fps: u32,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameStats {
    pub fn new() -> Self {
        Self {
            frame_times: [0.0; WINDOW],
            frame_index: 0,
            frames: 0,
            fps: 0,
        }
    }

    /// Record a frame timestamp (ms, as passed to the animation callback)
    pub fn record(&mut self, time: f64) {
        self.frame_times[self.frame_index] = time;
        self.frame_index = (self.frame_index + 1) % WINDOW;
        self.frames += 1;

        // Oldest sample sits at the next write slot once the ring is full
        if self.frames >= WINDOW as u64 {
            let oldest = self.frame_times[self.frame_index];
            let elapsed = time - oldest;
            if elapsed > 0.0 {
                self.fps = ((WINDOW - 1) as f64 * 1000.0 / elapsed).round() as u32;
            }
        }
    }

    /// Latest FPS estimate, 0 until the window has filled
    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Frames recorded so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
