//! Let's Type - a falling-word typing game
//!
//! Core modules:
//! - `sim`: Session engine (spawn/fall/miss loop, scoring, notifications)
//! - `words`: Word source collaborator
//! - `clock`: Monotonic time source
//! - `driver`: Frame-callback adapter for hosts
//! - `settings`: Session configuration

pub mod clock;
pub mod driver;
pub mod error;
pub mod settings;
pub mod sim;
pub mod words;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use driver::FrameDriver;
pub use error::{ConfigError, EngineError};
pub use settings::Config;
pub use sim::{Engine, NotificationSink, SessionPhase, StateSnapshot, WordId};
pub use words::{WordList, WordSource};

/// Game constants
pub mod consts {
    /// Largest elapsed step a single tick will simulate (seconds)
    pub const MAX_TICK_SECS: f64 = 0.2;
    /// Fall speed jitter added on top of the base speed: [0, SPEED_JITTER)
    pub const SPEED_JITTER: f64 = 40.0;
    /// Characters per "word" for WPM
    pub const CHARS_PER_WORD: f64 = 5.0;
    /// Floor on elapsed minutes so WPM stays finite right after start
    pub const MIN_WPM_MINUTES: f64 = 0.01;

    /// Config defaults
    pub const DEFAULT_SPAWN_INTERVAL_MS: f64 = 900.0;
    pub const DEFAULT_BASE_FALL_SPEED: f64 = 90.0;
    pub const DEFAULT_INITIAL_LIVES: u32 = 3;
}

/// Clamp a frame delta to the range a tick is allowed to simulate
#[inline]
pub fn clamp_elapsed(secs: f64) -> f64 {
    if secs.is_nan() {
        return 0.0;
    }
    secs.clamp(0.0, consts::MAX_TICK_SECS)
}
