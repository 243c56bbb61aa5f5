//! Session simulation
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and input concerns:
//! - Time arrives only through `tick` and the injected `Clock`
//! - Seeded RNG only
//! - Stable iteration order (by word id)
//! - Hosts observe through `NotificationSink` and owned snapshots

pub mod engine;
pub mod events;
pub mod scoring;
pub mod state;
pub mod tick;

pub use engine::Engine;
pub use events::{EndSummary, EventLog, NotificationSink, RemoveNotice, SessionEvent, SpawnNotice};
pub use scoring::{word_points, words_per_minute};
pub use state::{ActiveWord, SessionPhase, StateSnapshot, WordId};
