use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

/// One-shot stop flag shared between the window thread and the render thread.
///
/// Once set it stays set. Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct ExitSignal {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    set: Mutex<bool>,
    cond: Condvar,
}

impl ExitSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the flag and wakes every waiter.
    pub fn set(&self) {
        let mut set = self.inner.set.lock();
        *set = true;
        self.inner.cond.notify_all();
    }

    pub fn is_set(&self) -> bool {
        *self.inner.set.lock()
    }

    /// Blocks for at most `timeout`, returning early once the flag is set.
    ///
    /// Returns whether the flag is set.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let mut set = self.inner.set.lock();
        while !*set {
            if self.inner.cond.wait_until(&mut set, deadline).timed_out() {
                break;
            }
        }
        *set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_clear_and_stays_set() {
        let signal = ExitSignal::new();
        assert!(!signal.is_set());
        signal.set();
        signal.set();
        assert!(signal.is_set());
        assert!(signal.clone().is_set());
    }

    #[test]
    fn wait_times_out_when_unset() {
        let signal = ExitSignal::new();
        let start = Instant::now();
        assert!(!signal.wait_timeout(Duration::from_millis(20)));
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn wait_returns_early_when_set_from_another_thread() {
        let signal = ExitSignal::new();
        let remote = signal.clone();
        let start = Instant::now();

        let setter = std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(10));
            remote.set();
        });

        assert!(signal.wait_timeout(Duration::from_secs(10)));
        assert!(start.elapsed() < Duration::from_secs(5));
        setter.join().unwrap();
    }
}
