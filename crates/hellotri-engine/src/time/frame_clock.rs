use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick, in seconds.
    pub dt: f32,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock for the render loop.
///
/// Produces per-frame `FrameTime` snapshots and a periodic frame-rate
/// report. Delta time is clamped so a stalled loop (debugger, minimized
/// window) does not report absurd values.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,

    report_start: Instant,
    report_frames: u32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    fn starting_at(now: Instant) -> Self {
        Self {
            last: now,
            frame_index: 0,
            dt_min: Duration::from_micros(100),
            dt_max: Duration::from_millis(250),
            report_start: now,
            report_frames: 0,
        }
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);
        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);
        self.report_frames = self.report_frames.saturating_add(1);

        ft
    }

    /// Frames per second since the last report, once at least `period` has passed.
    ///
    /// Starts a new report window when it returns `Some`.
    pub fn report(&mut self, period: Duration) -> Option<f32> {
        self.report_at(Instant::now(), period)
    }

    fn report_at(&mut self, now: Instant, period: Duration) -> Option<f32> {
        let elapsed = now.saturating_duration_since(self.report_start);
        if elapsed < period || elapsed.is_zero() {
            return None;
        }

        let fps = self.report_frames as f32 / elapsed.as_secs_f32();
        self.report_start = now;
        self.report_frames = 0;
        Some(fps)
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
