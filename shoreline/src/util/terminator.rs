//! Early termination of batch queries.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Decides whether a running batch should stop evaluating its remaining points.
pub trait Terminator: Sync {
    /// Polled before each point is evaluated. Once `true`, the remaining points are skipped.
    fn kill(&self) -> bool;
}

/// Never terminates
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTerminator;

impl Terminator for NoTerminator {
    fn kill(&self) -> bool {
        false
    }
}

/// A flag that can be raised from another thread
impl Terminator for AtomicBool {
    fn kill(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

/// Terminates once a wall-clock deadline has passed
#[derive(Debug, Clone, Copy)]
pub struct DeadlineTerminator {
    pub deadline: Instant,
}

impl DeadlineTerminator {
    pub fn new(timeout: Duration) -> Self {
        DeadlineTerminator {
            deadline: Instant::now() + timeout,
        }
    }
}

impl Terminator for DeadlineTerminator {
    fn kill(&self) -> bool {
        Instant::now() >= self.deadline
    }
}

impl<T: Terminator + ?Sized> Terminator for &T {
    fn kill(&self) -> bool {
        (**self).kill()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expired_deadline_kills() {
        assert!(DeadlineTerminator::new(Duration::ZERO).kill());
    }

    #[test]
    fn distant_deadline_does_not_kill() {
        let terminator = DeadlineTerminator::new(Duration::from_secs(3600));
        assert!(!terminator.kill());
        assert!(!(&terminator).kill());
    }

    #[test]
    fn flag_raised_from_another_thread() {
        let flag = AtomicBool::new(false);
        assert!(!flag.kill());
        std::thread::scope(|s| {
            s.spawn(|| flag.store(true, Ordering::Relaxed));
        });
        assert!(flag.kill());
    }
}
