//! Millisecond tick sources.
//!
//! Movement integration reads the current tick from a `TimeSource`. Ticks are
//! 32-bit and wrap like a hardware tick counter; elapsed time is always taken
//! with `wrapping_sub`.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Instant;

/// Monotonic millisecond clock consumed by a camera.
///
/// Readings must be non-decreasing within a session (modulo `u32` wrap).
pub trait TimeSource: Send + Sync {
    /// Milliseconds since an arbitrary epoch.
    fn now_ms(&self) -> u32;
}

/// Wall clock: milliseconds elapsed since the clock was created.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    epoch: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { epoch: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for SystemClock {
    fn now_ms(&self) -> u32 {
        // Truncation is the wrap-around of a 32-bit tick counter
        self.epoch.elapsed().as_millis() as u32
    }
}

/// Manually driven clock for deterministic stepping and replay.
///
/// Clones share the same counter, so a test can hand one clone to a camera
/// and keep another to advance time.
///
/// ```
/// use flycam_3d::flycam::{ManualClock, TimeSource};
///
/// let clock = ManualClock::new(100);
/// let handle = clock.clone();
/// handle.advance(16);
/// assert_eq!(clock.now_ms(), 116);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    ticks: Arc<AtomicU32>,
}

impl ManualClock {
    pub fn new(start_ms: u32) -> Self {
        Self { ticks: Arc::new(AtomicU32::new(start_ms)) }
    }

    /// Jump to an absolute tick.
    pub fn set(&self, now_ms: u32) {
        self.ticks.store(now_ms, Ordering::Relaxed);
    }

    /// Step forward by `delta_ms` (wrapping).
    pub fn advance(&self, delta_ms: u32) {
        let _ = self.ticks.fetch_add(delta_ms, Ordering::Relaxed);
    }
}

impl TimeSource for ManualClock {
    fn now_ms(&self) -> u32 {
        self.ticks.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
#[path = "time_tests.rs"]
mod tests;
