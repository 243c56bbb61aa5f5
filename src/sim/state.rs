//! Session state and word records
//!
//! Everything the engine owns lives here. Hosts only ever see copies
//! (`StateSnapshot`, the notice types in `events`).

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Opaque identifier for one spawned word. Never reused by an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WordId(pub(crate) u64);

impl WordId {
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "w{}", self.0)
    }
}

/// Session-level phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Never started, or halted by `stop()`
    #[default]
    Idle,
    /// Ticks advance the simulation
    Running,
    /// Lives exhausted or word budget cleared
    Ended,
}

/// A word currently falling
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveWord {
    pub id: WordId,
    pub text: String,
    /// Horizontal placement hint in [0, 1)
    pub horizontal_slot: f64,
    /// Distance fallen so far
    pub vertical_position: f64,
    /// Units per second, fixed at spawn
    pub fall_speed: f64,
    /// Miss threshold. `None` until the host supplies geometry.
    pub fall_limit: Option<f64>,
    pub created_at: Duration,
}

impl ActiveWord {
    /// Advance by `dt` seconds
    pub fn advance(&mut self, dt: f64) {
        self.vertical_position += self.fall_speed * dt;
    }

    /// True once the word is past its limit. A word without a limit never
    /// counts as missed.
    pub fn has_crossed_limit(&self) -> bool {
        self.fall_limit
            .is_some_and(|limit| self.vertical_position > limit)
    }

    /// Character count used for scoring
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Score/lives/speed snapshot handed to every state-change notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub score: u64,
    pub lives: u32,
    pub wpm: u32,
}

/// Counters and collections for one session
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub score: u64,
    pub lives: u32,
    /// Characters from correctly typed words
    pub typed_chars: u64,
    pub started_at: Option<Duration>,
    pub spawned_count: u64,
    /// Word budget reached; never set when the budget is unbounded
    pub spawn_finished: bool,
    pub phase: SessionPhase,
    /// Milliseconds since the last spawn
    pub spawn_timer_ms: f64,
    /// Keyed by id so iteration order is spawn order
    pub active: BTreeMap<WordId, ActiveWord>,
}

impl Session {
    pub fn new(initial_lives: u32) -> Self {
        Self {
            lives: initial_lives,
            ..Default::default()
        }
    }

    /// Back to a fresh session with full lives. Leaves `started_at` and the
    /// phase to the caller.
    pub fn reset(&mut self, initial_lives: u32) {
        self.score = 0;
        self.lives = initial_lives;
        self.typed_chars = 0;
        self.spawned_count = 0;
        self.spawn_finished = false;
        self.spawn_timer_ms = 0.0;
        self.active.clear();
    }

    pub fn is_running(&self) -> bool {
        self.phase == SessionPhase::Running
    }
}
