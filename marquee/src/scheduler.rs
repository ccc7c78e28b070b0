use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use std::thread::JoinHandle;
use std::time::Duration;

/// A recurring tick source with explicit start and cancel.
///
/// Host render loops (an animation-frame callback, a TUI event loop) are one
/// implementation; [`ThreadScheduler`] is a plain timer for hosts without a
/// frame loop of their own.
pub trait TickScheduler {
    type Handle: TickHandle;

    /// Start invoking `tick` once per `interval` until the handle is
    /// cancelled or dropped.
    fn every(&self, interval: Duration, tick: Box<dyn FnMut() + Send>) -> Self::Handle;
}

/// Handle to a scheduled recurring tick. Cancelling stops future ticks;
/// dropping the handle must do the same, so a torn-down component never
/// leaves a callback running.
pub trait TickHandle {
    fn cancel(&mut self);

    fn is_cancelled(&self) -> bool;
}

/// Timer-thread implementation of [`TickScheduler`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadScheduler;

impl TickScheduler for ThreadScheduler {
    type Handle = ThreadTickHandle;

    fn every(&self, interval: Duration, mut tick: Box<dyn FnMut() + Send>) -> Self::Handle {
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);
        let thread = std::thread::spawn(move || {
            while !stop_flag.load(Ordering::Relaxed) {
                std::thread::sleep(interval);
                if stop_flag.load(Ordering::Relaxed) {
                    break;
                }
                tick();
            }
        });
        ThreadTickHandle {
            stop,
            thread: Some(thread),
        }
    }
}

/// Cancellation handle for [`ThreadScheduler`]. Cancels on drop.
#[derive(Debug)]
pub struct ThreadTickHandle {
    stop: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl TickHandle for ThreadTickHandle {
    fn cancel(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }

    fn is_cancelled(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }
}

impl Drop for ThreadTickHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn ticks_until_cancelled() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);

        let scheduler = ThreadScheduler;
        let mut handle = scheduler.every(
            Duration::from_millis(5),
            Box::new(move || {
                counter.fetch_add(1, Ordering::Relaxed);
            }),
        );

        std::thread::sleep(Duration::from_millis(60));
        handle.cancel();
        assert!(handle.is_cancelled());

        let after_cancel = count.load(Ordering::Relaxed);
        assert!(after_cancel > 0);

        std::thread::sleep(Duration::from_millis(30));
        assert_eq!(count.load(Ordering::Relaxed), after_cancel);
    }

    #[test]
    fn drop_cancels() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);

        let scheduler = ThreadScheduler;
        let handle = scheduler.every(
            Duration::from_millis(5),
            Box::new(move || {
                counter.fetch_add(1, Ordering::Relaxed);
            }),
        );
        drop(handle);

        let after_drop = count.load(Ordering::Relaxed);
        std::thread::sleep(Duration::from_millis(30));
        assert_eq!(count.load(Ordering::Relaxed), after_drop);
    }
}
