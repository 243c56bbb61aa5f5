//! Frame-callback adapter
//!
//! Hosts usually get absolute timestamps from a display-refresh callback.
//! `FrameDriver` turns those into clamped deltas and feeds the engine, either
//! one variable tick per frame or fixed substeps.

use std::time::Duration;

use crate::clamp_elapsed;
use crate::clock::Clock;
use crate::sim::{Engine, NotificationSink};
use crate::words::WordSource;

/// Maximum substeps per frame in fixed mode to prevent spiral of death
pub const MAX_SUBSTEPS: u32 = 8;

/// How frame time is turned into ticks
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepMode {
    /// One tick per frame with the measured delta
    Variable,
    /// Ticks of exactly `step` seconds, leftover time carried forward
    Fixed { step: f64 },
}

#[derive(Debug, Clone)]
pub struct FrameDriver {
    mode: StepMode,
    last_frame: Option<Duration>,
    accumulator: f64,
}

impl FrameDriver {
    pub fn new(mode: StepMode) -> Self {
        Self {
            mode,
            last_frame: None,
            accumulator: 0.0,
        }
    }

    pub fn variable() -> Self {
        Self::new(StepMode::Variable)
    }

    pub fn fixed(step: f64) -> Self {
        Self::new(StepMode::Fixed { step })
    }

    /// Start timing from `now`. Call alongside `Engine::start`.
    pub fn reset(&mut self, now: Duration) {
        self.last_frame = Some(now);
        self.accumulator = 0.0;
    }

    /// Handle one frame at time `now`. Returns the number of ticks run.
    pub fn frame<W, C, S>(&mut self, engine: &mut Engine<W, C, S>, now: Duration) -> u32
    where
        W: WordSource,
        C: Clock,
        S: NotificationSink,
    {
        let Some(last) = self.last_frame.replace(now) else {
            return 0;
        };
        if !engine.is_running() {
            self.accumulator = 0.0;
            return 0;
        }

        let dt = clamp_elapsed(now.saturating_sub(last).as_secs_f64());
        match self.mode {
            StepMode::Variable => {
                engine.tick(dt);
                1
            }
            StepMode::Fixed { step } if step > 0.0 => {
                self.accumulator += dt;
                let mut substeps = 0;
                while self.accumulator >= step && substeps < MAX_SUBSTEPS && engine.is_running() {
                    engine.tick(step);
                    self.accumulator -= step;
                    substeps += 1;
                }
                if substeps == MAX_SUBSTEPS {
                    // Drop the backlog rather than chase it
                    self.accumulator = 0.0;
                }
                substeps
            }
            StepMode::Fixed { .. } => 0,
        }
    }

    /// `frame` using the engine's own clock
    pub fn frame_now<W, C, S>(&mut self, engine: &mut Engine<W, C, S>) -> u32
    where
        W: WordSource,
        C: Clock,
        S: NotificationSink,
    {
        let now = engine.clock().now();
        self.frame(engine, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::settings::Config;
    use crate::words::WordList;

    fn engine() -> Engine<WordList, ManualClock, ()> {
        let config = Config {
            spawn_interval_ms: 100.0,
            ..Default::default()
        };
        Engine::new(config, WordList::builtin(5), ManualClock::new(), (), 5)
    }

    #[test]
    fn test_first_frame_only_primes() {
        let mut engine = engine();
        engine.start();
        let mut driver = FrameDriver::variable();
        assert_eq!(driver.frame(&mut engine, Duration::from_millis(500)), 0);
        assert_eq!(driver.frame(&mut engine, Duration::from_millis(650)), 1);
        assert_eq!(engine.spawned_count(), 1);
    }

    #[test]
    fn test_idle_engine_not_ticked() {
        let mut engine = engine();
        let mut driver = FrameDriver::variable();
        driver.reset(Duration::ZERO);
        assert_eq!(driver.frame(&mut engine, Duration::from_millis(150)), 0);
        assert_eq!(engine.spawned_count(), 0);
    }

    #[test]
    fn test_fixed_substeps() {
        let mut engine = engine();
        engine.start();
        let mut driver = FrameDriver::fixed(0.05);
        driver.reset(Duration::ZERO);
        assert_eq!(driver.frame(&mut engine, Duration::from_millis(160)), 3);
        // 10ms carried over, 45ms more reaches one more step
        assert_eq!(driver.frame(&mut engine, Duration::from_millis(205)), 1);
    }

    #[test]
    fn test_fixed_substep_cap() {
        let mut engine = engine();
        engine.start();
        let mut driver = FrameDriver::fixed(0.01);
        driver.reset(Duration::ZERO);
        // 0.2s clamp would want 20 steps
        assert_eq!(driver.frame(&mut engine, Duration::from_secs(3)), MAX_SUBSTEPS);
        assert_eq!(driver.frame(&mut engine, Duration::from_secs(3)), 0);
    }

    #[test]
    fn test_frame_now_uses_engine_clock() {
        let mut engine = engine();
        engine.start();
        let mut driver = FrameDriver::variable();
        driver.reset(engine.clock().now());
        engine.clock().advance(Duration::from_millis(150));
        assert_eq!(driver.frame_now(&mut engine), 1);
        assert_eq!(engine.spawned_count(), 1);
    }
}
