use std::panic::{self, AssertUnwindSafe};
use std::thread::JoinHandle;

use crate::error::RenderError;

use super::frame_loop::{run_frames, FrameLoopConfig, LoopStats};
use super::signal::ExitSignal;
use super::target::{FrameTarget, Release, ResourceKind};

type LoopOutcome<T> = (T, Result<LoopStats, RenderError>);

/// Render loop running on its own thread.
///
/// The target is moved in fully built, so setup always happens-before the
/// first frame, and it comes back out of [`stop`](Self::stop) only after the
/// thread has been joined.
pub struct RenderThread<T> {
    signal: ExitSignal,
    handle: JoinHandle<LoopOutcome<T>>,
}

impl<T> RenderThread<T>
where
    T: FrameTarget + Send + 'static,
{
    /// Starts the loop on a thread named `render`.
    ///
    /// `on_stop` runs on the render thread if the loop ends without the
    /// signal having been set, i.e. after a fatal frame error or a panic.
    /// A panic is re-raised afterwards and surfaces from [`stop`](Self::stop).
    pub fn spawn<F>(
        mut target: T,
        signal: ExitSignal,
        config: FrameLoopConfig,
        on_stop: F,
    ) -> Result<Self, RenderError>
    where
        F: FnOnce() + Send + 'static,
    {
        let loop_signal = signal.clone();

        let handle = std::thread::Builder::new()
            .name("render".into())
            .spawn(move || {
                log::debug!("render loop started ({:?} interval)", config.frame_interval);

                let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
                    run_frames(&mut target, &loop_signal, &config)
                }));
                match &outcome {
                    Ok(Ok(stats)) => log::info!(
                        "render loop stopped after {} frames ({} skipped)",
                        stats.frames_presented,
                        stats.frames_skipped
                    ),
                    Ok(Err(e)) => log::error!("render loop failed: {e}"),
                    Err(_) => log::error!("render loop panicked"),
                }

                if !loop_signal.is_set() {
                    loop_signal.set();
                    on_stop();
                }

                match outcome {
                    Ok(result) => (target, result),
                    Err(payload) => panic::resume_unwind(payload),
                }
            })
            .map_err(RenderError::Spawn)?;

        Ok(Self { signal, handle })
    }

    pub fn signal(&self) -> &ExitSignal {
        &self.signal
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Sets the exit signal and joins the thread, handing the target back.
    pub fn stop(self) -> Result<LoopOutcome<T>, RenderError> {
        self.signal.set();
        self.handle.join().map_err(|_| RenderError::ThreadPanicked)
    }
}

/// Result of a completed teardown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeardownReport {
    pub stats: LoopStats,
    pub released: Vec<ResourceKind>,
}

/// Stops the render loop, waits for it, then releases every resource.
///
/// Resources are released even when the loop had failed; the loop error is
/// returned afterwards.
pub fn teardown<T>(thread: RenderThread<T>) -> Result<TeardownReport, RenderError>
where
    T: FrameTarget + Release + Send + 'static,
{
    let (target, loop_result) = thread.stop()?;

    let released = target.release();
    log::debug!("released {} resources", released.len());

    Ok(TeardownReport {
        stats: loop_result?,
        released,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    use super::*;
    use crate::render::frame_loop::tests::{fast_config, FakeTarget, Op};

    #[test]
    fn stop_hands_the_target_back() {
        let target = FakeTarget::new();
        let ops = target.ops.clone();

        let thread = RenderThread::spawn(target, ExitSignal::new(), fast_config(), || {}).unwrap();
        std::thread::sleep(Duration::from_millis(20));
        let (_target, result) = thread.stop().unwrap();

        let stats = result.unwrap();
        let presents = ops.lock().iter().filter(|op| **op == Op::Present).count() as u64;
        assert_eq!(stats.frames_presented, presents);
    }

    #[test]
    fn stop_interrupts_a_long_frame_wait() {
        let config = FrameLoopConfig {
            frame_interval: Duration::from_secs(30),
            ..FrameLoopConfig::default()
        };
        let thread = RenderThread::spawn(FakeTarget::new(), ExitSignal::new(), config, || {}).unwrap();
        std::thread::sleep(Duration::from_millis(20));

        let start = Instant::now();
        let (_target, result) = thread.stop().unwrap();
        assert!(start.elapsed() < Duration::from_secs(5));
        assert!(result.unwrap().frames_presented <= 1);
    }

    #[test]
    fn teardown_releases_after_the_last_present() {
        let target = FakeTarget::new();
        let ops = target.ops.clone();

        let thread = RenderThread::spawn(target, ExitSignal::new(), fast_config(), || {}).unwrap();
        std::thread::sleep(Duration::from_millis(20));
        let report = teardown(thread).unwrap();

        assert_eq!(report.released, vec![ResourceKind::VertexBuffer, ResourceKind::Device]);

        let ops = ops.lock();
        assert_eq!(ops.last(), Some(&Op::Release));
        assert_eq!(ops.iter().filter(|op| **op == Op::Release).count(), 1);
    }

    #[test]
    fn loop_failure_notifies_and_still_releases() {
        let mut target = FakeTarget::new();
        target.fail_present_at = Some(0);
        let ops = target.ops.clone();

        let notified = Arc::new(AtomicBool::new(false));
        let flag = notified.clone();

        let thread = RenderThread::spawn(target, ExitSignal::new(), fast_config(), move || {
            flag.store(true, Ordering::SeqCst);
        })
        .unwrap();

        wait_until_finished(&thread);
        assert!(thread.signal().is_set());

        let err = teardown(thread).unwrap_err();
        assert!(matches!(err, RenderError::Surface(_)));
        assert!(notified.load(Ordering::SeqCst));
        assert_eq!(ops.lock().last(), Some(&Op::Release));
    }

    #[test]
    fn requested_stop_does_not_notify() {
        let notified = Arc::new(AtomicBool::new(false));
        let flag = notified.clone();

        let thread = RenderThread::spawn(FakeTarget::new(), ExitSignal::new(), fast_config(), move || {
            flag.store(true, Ordering::SeqCst);
        })
        .unwrap();
        thread.stop().unwrap();

        assert!(!notified.load(Ordering::SeqCst));
    }

    fn wait_until_finished<T: FrameTarget + Send + 'static>(thread: &RenderThread<T>) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while !thread.is_finished() && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(1));
        }
        assert!(thread.is_finished());
    }

    #[test]
    fn panicking_loop_is_reported() {
        let mut target = FakeTarget::new();
        target.panic_on_begin = true;

        let thread = RenderThread::spawn(target, ExitSignal::new(), fast_config(), || {}).unwrap();
        wait_until_finished(&thread);

        assert!(matches!(thread.stop(), Err(RenderError::ThreadPanicked)));
    }

    #[test]
    fn panicking_loop_still_notifies() {
        let mut target = FakeTarget::new();
        target.panic_on_begin = true;

        let notified = Arc::new(AtomicBool::new(false));
        let flag = notified.clone();

        let thread = RenderThread::spawn(target, ExitSignal::new(), fast_config(), move || {
            flag.store(true, Ordering::SeqCst);
        })
        .unwrap();
        wait_until_finished(&thread);

        assert!(thread.signal().is_set());
        assert!(notified.load(Ordering::SeqCst));
        assert!(matches!(teardown(thread), Err(RenderError::ThreadPanicked)));
    }
}
