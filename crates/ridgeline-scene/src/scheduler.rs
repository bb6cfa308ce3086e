//! Animation scheduler: per-frame time advancement and twinkle.
//!
//! A two-state machine. While `Running`, each host frame tick produces a
//! pure [`FrameUpdate`] describing the per-layer times and star opacity for
//! that frame; the caller applies it to the scene and renders. After
//! [`stop`](AnimationScheduler::stop) no further updates are produced, which
//! establishes the teardown invariant that no render can follow disposal.

use crate::layer::{LAYER_COUNT, TIME_SCALES};

/// Global time scale applied to the host's millisecond tick counter.
pub const GLOBAL_TIME_SCALE: f64 = 0.0003;

/// Frequency of the star twinkle in the host's millisecond time base.
pub const TWINKLE_RATE: f64 = 0.001;

/// Everything that changes between two frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameUpdate {
    /// Animation time per layer, front to back. The ratios between entries
    /// are exactly [`TIME_SCALES`].
    pub layer_times: [f32; LAYER_COUNT],
    /// Shared opacity of the star field, within [0.4, 0.8].
    pub star_opacity: f32,
}

/// Scheduler state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Running,
    Stopped,
}

/// Drives the scene's animation from the host's frame callbacks.
#[derive(Debug)]
pub struct AnimationScheduler {
    phase: Phase,
}

impl AnimationScheduler {
    /// A scheduler in the `Running` state.
    pub fn new() -> Self {
        Self {
            phase: Phase::Running,
        }
    }

    /// Advance to the frame at `elapsed_ms` milliseconds since mount.
    ///
    /// Returns the update to apply, or `None` once stopped. The update is a
    /// pure function of `elapsed_ms`: the scheduler holds no accumulated
    /// time, so a late or dropped host tick never skews the animation.
    pub fn advance(&mut self, elapsed_ms: f64) -> Option<FrameUpdate> {
        if self.phase == Phase::Stopped {
            return None;
        }

        let global = elapsed_ms * GLOBAL_TIME_SCALE;
        let mut layer_times = [0.0f32; LAYER_COUNT];
        for (time, scale) in layer_times.iter_mut().zip(TIME_SCALES) {
            *time = (global * scale) as f32;
        }

        let star_opacity = (0.6 + (elapsed_ms * TWINKLE_RATE).sin() * 0.2) as f32;

        Some(FrameUpdate {
            layer_times,
            star_opacity,
        })
    }

    /// Transition to `Stopped`. Idempotent; stopping twice is safe.
    pub fn stop(&mut self) {
        if self.phase == Phase::Running {
            log::debug!("animation scheduler stopped");
        }
        self.phase = Phase::Stopped;
    }

    /// Whether the scheduler still produces frames.
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallax_time_ratios_are_exact() {
        let mut scheduler = AnimationScheduler::new();
        for step in 0..500 {
            let elapsed = step as f64 * 16.6;
            let update = scheduler.advance(elapsed).unwrap();
            let [front, mid, back] = update.layer_times;
            assert_eq!(mid, (elapsed * GLOBAL_TIME_SCALE * 0.75) as f32);
            assert_eq!(back, (elapsed * GLOBAL_TIME_SCALE * 0.5) as f32);
            assert_eq!(front, (elapsed * GLOBAL_TIME_SCALE) as f32);
        }
    }

    #[test]
    fn test_star_opacity_stays_in_band() {
        let mut scheduler = AnimationScheduler::new();
        for step in 0..10_000 {
            let update = scheduler.advance(step as f64 * 7.7).unwrap();
            assert!(
                (0.4..=0.8).contains(&update.star_opacity),
                "star opacity {} escaped [0.4, 0.8]",
                update.star_opacity
            );
        }
    }

    #[test]
    fn test_star_opacity_actually_twinkles() {
        let mut scheduler = AnimationScheduler::new();
        let a = scheduler.advance(0.0).unwrap().star_opacity;
        // A quarter twinkle period later the sine is near its crest.
        let b = scheduler.advance(std::f64::consts::FRAC_PI_2 / TWINKLE_RATE).unwrap().star_opacity;
        assert!((a - 0.6).abs() < 1e-6);
        assert!((b - 0.8).abs() < 1e-4);
    }

    #[test]
    fn test_stopped_scheduler_produces_nothing() {
        let mut scheduler = AnimationScheduler::new();
        assert!(scheduler.advance(16.0).is_some());
        assert!(scheduler.advance(33.0).is_some());

        scheduler.stop();
        assert!(!scheduler.is_running());
        // A forced tick after stop must not produce a frame.
        assert!(scheduler.advance(50.0).is_none());
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut scheduler = AnimationScheduler::new();
        scheduler.stop();
        scheduler.stop();
        assert!(!scheduler.is_running());
        assert!(scheduler.advance(100.0).is_none());
    }

    #[test]
    fn test_update_is_pure_in_elapsed_time() {
        let mut a = AnimationScheduler::new();
        let mut b = AnimationScheduler::new();
        // Different tick histories, same final timestamp, same update.
        a.advance(10.0);
        a.advance(20.0);
        let ua = a.advance(1234.5).unwrap();
        let ub = b.advance(1234.5).unwrap();
        assert_eq!(ua, ub);
    }
}
