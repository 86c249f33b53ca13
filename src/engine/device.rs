#[cfg(not(target_arch = "wasm32"))]
use std::time::{Duration, Instant};

#[cfg(target_arch = "wasm32")]
use web_time::{Duration, Instant};

use crate::engine::GraphicsDevice;

/// Frames-per-second counter with a one second measurement window.
pub struct FpsCounter {
    last_update: Instant,
    frame_count: u32,
    accumulated_time: Duration,
    current_fps: f32,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl FpsCounter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_update: Instant::now(),
            frame_count: 0,
            accumulated_time: Duration::new(0, 0),
            current_fps: 0.0,
        }
    }

    /// Records one presented frame. Returns the new measurement when the
    /// one second window rolls over.
    pub fn tick(&mut self) -> Option<f32> {
        self.frame_count += 1;
        let now = Instant::now();
        let delta = now - self.last_update;
        self.last_update = now;
        self.accumulated_time += delta;

        if self.accumulated_time.as_secs_f32() >= 1.0 {
            self.current_fps = self.frame_count as f32 / self.accumulated_time.as_secs_f32();

            self.accumulated_time = Duration::new(0, 0);
            self.frame_count = 0;

            return Some(self.current_fps);
        }

        None
    }

    /// The most recent completed measurement, `0.0` before the first one.
    #[must_use]
    pub fn current(&self) -> f32 {
        self.current_fps
    }
}

/// Built-in device: viewport and frame bookkeeping without GPU submission.
///
/// This is the seam where a real renderer plugs in. `begin_frame` /
/// `end_frame` / `present` sequence exactly like a surface-backed device so
/// the controller's render cycle is exercised end to end, and frame pacing
/// is measured for [`GraphicsDevice::frame_rate`].
pub struct FrameDevice {
    viewport: (u32, u32, u32, u32),
    in_frame: bool,
    presented_frames: u64,
    fps: FpsCounter,
}

impl Default for FrameDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameDevice {
    #[must_use]
    pub fn new() -> Self {
        Self {
            viewport: (0, 0, 0, 0),
            in_frame: false,
            presented_frames: 0,
            fps: FpsCounter::new(),
        }
    }

    /// The last viewport rectangle set on this device as `(x, y, w, h)`.
    #[must_use]
    pub fn viewport(&self) -> (u32, u32, u32, u32) {
        self.viewport
    }

    /// Total number of presented frames since creation.
    #[must_use]
    pub fn presented_frames(&self) -> u64 {
        self.presented_frames
    }

    /// Whether a frame is currently open.
    #[must_use]
    pub fn in_frame(&self) -> bool {
        self.in_frame
    }
}

impl GraphicsDevice for FrameDevice {
    fn set_viewport(&mut self, x: u32, y: u32, width: u32, height: u32) {
        self.viewport = (x, y, width, height);
    }

    fn begin_frame(&mut self) {
        if self.in_frame {
            log::warn!("begin_frame called while a frame is already open");
        }
        self.in_frame = true;
    }

    fn end_frame(&mut self) {
        self.in_frame = false;
    }

    fn present(&mut self) {
        self.presented_frames += 1;
        self.fps.tick();
    }

    fn frame_rate(&self) -> f32 {
        self.fps.current()
    }
}
