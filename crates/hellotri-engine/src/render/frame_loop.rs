use std::time::Duration;

use crate::error::RenderError;
use crate::paint::Color;
use crate::time::FrameClock;

use super::signal::ExitSignal;
use super::target::{FrameStatus, FrameTarget};

/// Light blue background.
pub const CLEAR_COLOR: Color = Color::rgb(0.5, 0.5, 1.0);

/// Fixed wait between frames.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

const FPS_REPORT_PERIOD: Duration = Duration::from_secs(5);

/// What the loop draws each frame and how long it waits in between.
#[derive(Debug, Clone)]
pub struct FrameLoopConfig {
    pub clear_color: Color,
    pub vertex_count: u32,
    pub first_vertex: u32,
    pub frame_interval: Duration,
}

impl Default for FrameLoopConfig {
    fn default() -> Self {
        Self {
            clear_color: CLEAR_COLOR,
            vertex_count: 3,
            first_vertex: 0,
            frame_interval: FRAME_INTERVAL,
        }
    }
}

/// Counters reported when the loop stops.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct LoopStats {
    pub frames_presented: u64,
    pub frames_skipped: u64,
}

/// Runs frames until `signal` is set or a frame fails.
///
/// The signal is checked before any GPU call of an iteration, and the wait
/// between frames wakes as soon as it is set.
pub fn run_frames<T>(
    target: &mut T,
    signal: &ExitSignal,
    config: &FrameLoopConfig,
) -> Result<LoopStats, RenderError>
where
    T: FrameTarget + ?Sized,
{
    let mut stats = LoopStats::default();
    let mut clock = FrameClock::new();

    loop {
        if signal.is_set() {
            break;
        }

        match target.begin_frame()? {
            FrameStatus::Ready => {
                target.clear(config.clear_color)?;
                target.draw(config.vertex_count, config.first_vertex)?;
                target.present()?;

                stats.frames_presented += 1;
                let ft = clock.tick();
                if let Some(fps) = clock.report(FPS_REPORT_PERIOD) {
                    log::debug!(
                        "{fps:.1} fps, last frame {:.2} ms (frame {})",
                        ft.dt * 1000.0,
                        ft.frame_index
                    );
                }
            }
            FrameStatus::Skipped => {
                stats.frames_skipped += 1;
                log::debug!("frame skipped: no back buffer available");
            }
        }

        if signal.wait_timeout(config.frame_interval) {
            break;
        }
    }

    Ok(stats)
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::*;
    use crate::render::target::{Release, ResourceKind};

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) enum Op {
        Begin,
        Clear(Color),
        Draw(u32, u32),
        Present,
        Release,
    }

    /// Records every call; can stop the loop or fail on demand.
    pub(crate) struct FakeTarget {
        pub ops: Arc<Mutex<Vec<Op>>>,
        pub stop_after: Option<(u64, ExitSignal)>,
        pub skip_frames: u32,
        pub fail_present_at: Option<u64>,
        pub panic_on_begin: bool,
        presented: u64,
    }

    impl FakeTarget {
        pub fn new() -> Self {
            Self {
                ops: Arc::new(Mutex::new(Vec::new())),
                stop_after: None,
                skip_frames: 0,
                fail_present_at: None,
                panic_on_begin: false,
                presented: 0,
            }
        }
    }

    impl FrameTarget for FakeTarget {
        fn begin_frame(&mut self) -> Result<FrameStatus, RenderError> {
            assert!(!self.panic_on_begin, "device exploded");
            self.ops.lock().push(Op::Begin);
            if self.skip_frames > 0 {
                self.skip_frames -= 1;
                return Ok(FrameStatus::Skipped);
            }
            Ok(FrameStatus::Ready)
        }

        fn clear(&mut self, color: Color) -> Result<(), RenderError> {
            self.ops.lock().push(Op::Clear(color));
            Ok(())
        }

        fn draw(&mut self, vertex_count: u32, first_vertex: u32) -> Result<(), RenderError> {
            self.ops.lock().push(Op::Draw(vertex_count, first_vertex));
            Ok(())
        }

        fn present(&mut self) -> Result<(), RenderError> {
            if self.fail_present_at == Some(self.presented) {
                return Err(RenderError::Surface(wgpu::SurfaceError::Lost));
            }
            self.ops.lock().push(Op::Present);
            self.presented += 1;
            if let Some((n, signal)) = &self.stop_after {
                if self.presented == *n {
                    signal.set();
                }
            }
            Ok(())
        }
    }

    impl Release for FakeTarget {
        fn release(self) -> Vec<ResourceKind> {
            self.ops.lock().push(Op::Release);
            vec![ResourceKind::VertexBuffer, ResourceKind::Device]
        }
    }

    pub(crate) fn fast_config() -> FrameLoopConfig {
        FrameLoopConfig {
            frame_interval: Duration::from_millis(1),
            ..FrameLoopConfig::default()
        }
    }

    fn frame_ops() -> Vec<Op> {
        vec![Op::Begin, Op::Clear(CLEAR_COLOR), Op::Draw(3, 0), Op::Present]
    }

    #[test]
    fn default_config_draws_one_triangle_on_light_blue() {
        let cfg = FrameLoopConfig::default();
        assert_eq!(cfg.clear_color, Color::new(0.5, 0.5, 1.0, 1.0));
        assert_eq!((cfg.vertex_count, cfg.first_vertex), (3, 0));
        assert_eq!(cfg.frame_interval, Duration::from_millis(16));
    }

    #[test]
    fn each_frame_is_clear_draw_present() {
        let signal = ExitSignal::new();
        let mut target = FakeTarget::new();
        target.stop_after = Some((3, signal.clone()));

        let stats = run_frames(&mut target, &signal, &fast_config()).unwrap();

        assert_eq!(stats.frames_presented, 3);
        let expected: Vec<Op> = (0..3).flat_map(|_| frame_ops()).collect();
        assert_eq!(*target.ops.lock(), expected);
    }

    #[test]
    fn preset_signal_issues_nothing() {
        let signal = ExitSignal::new();
        signal.set();
        let mut target = FakeTarget::new();

        let stats = run_frames(&mut target, &signal, &fast_config()).unwrap();

        assert_eq!(stats, LoopStats::default());
        assert!(target.ops.lock().is_empty());
    }

    #[test]
    fn skipped_frame_issues_no_commands() {
        let signal = ExitSignal::new();
        let mut target = FakeTarget::new();
        target.skip_frames = 1;
        target.stop_after = Some((1, signal.clone()));

        let stats = run_frames(&mut target, &signal, &fast_config()).unwrap();

        assert_eq!(stats.frames_skipped, 1);
        assert_eq!(stats.frames_presented, 1);
        let mut expected = vec![Op::Begin];
        expected.extend(frame_ops());
        assert_eq!(*target.ops.lock(), expected);
    }

    #[test]
    fn present_failure_stops_the_loop() {
        let signal = ExitSignal::new();
        let mut target = FakeTarget::new();
        target.fail_present_at = Some(1);

        let err = run_frames(&mut target, &signal, &fast_config()).unwrap_err();

        assert!(matches!(err, RenderError::Surface(wgpu::SurfaceError::Lost)));
        let ops = target.ops.lock();
        assert_eq!(ops.iter().filter(|op| **op == Op::Present).count(), 1);
        assert_eq!(ops.last(), Some(&Op::Draw(3, 0)));
    }
}
