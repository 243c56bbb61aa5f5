//! Notifications emitted by the engine
//!
//! The host implements `NotificationSink`; every payload is an owned copy so
//! nothing the host keeps can alias engine state.

use serde::{Deserialize, Serialize};

use super::state::{StateSnapshot, WordId};

/// A word entered the play area
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnNotice {
    pub id: WordId,
    pub text: String,
    pub horizontal_slot: f64,
    pub fall_speed: f64,
}

/// A word left the play area, typed or missed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveNotice {
    pub id: WordId,
    pub text: String,
    pub miss: bool,
}

/// Final tally when a session ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndSummary {
    pub score: u64,
    pub lives: u32,
    pub wpm: u32,
    pub spawned: u64,
}

/// Host-side receiver for engine notifications. All methods default to
/// no-ops so hosts implement only what they render.
pub trait NotificationSink {
    fn on_spawn(&mut self, _notice: &SpawnNotice) {}
    fn on_remove(&mut self, _notice: &RemoveNotice) {}
    fn on_state_change(&mut self, _state: &StateSnapshot) {}
    fn on_end(&mut self, _summary: &EndSummary) {}
}

/// Discards everything
impl NotificationSink for () {}

impl<S: NotificationSink + ?Sized> NotificationSink for Box<S> {
    fn on_spawn(&mut self, notice: &SpawnNotice) {
        (**self).on_spawn(notice)
    }

    fn on_remove(&mut self, notice: &RemoveNotice) {
        (**self).on_remove(notice)
    }

    fn on_state_change(&mut self, state: &StateSnapshot) {
        (**self).on_state_change(state)
    }

    fn on_end(&mut self, summary: &EndSummary) {
        (**self).on_end(summary)
    }
}

/// One recorded notification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionEvent {
    Spawn(SpawnNotice),
    Remove(RemoveNotice),
    StateChange(StateSnapshot),
    End(EndSummary),
}

/// Sink that records every notification in order
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    pub events: Vec<SessionEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Take everything recorded so far
    pub fn drain(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn spawns(&self) -> impl Iterator<Item = &SpawnNotice> {
        self.events.iter().filter_map(|e| match e {
            SessionEvent::Spawn(n) => Some(n),
            _ => None,
        })
    }

    pub fn removals(&self) -> impl Iterator<Item = &RemoveNotice> {
        self.events.iter().filter_map(|e| match e {
            SessionEvent::Remove(n) => Some(n),
            _ => None,
        })
    }

    pub fn ends(&self) -> impl Iterator<Item = &EndSummary> {
        self.events.iter().filter_map(|e| match e {
            SessionEvent::End(s) => Some(s),
            _ => None,
        })
    }

    pub fn last_state(&self) -> Option<StateSnapshot> {
        self.events.iter().rev().find_map(|e| match e {
            SessionEvent::StateChange(s) => Some(*s),
            _ => None,
        })
    }
}

impl NotificationSink for EventLog {
    fn on_spawn(&mut self, notice: &SpawnNotice) {
        self.events.push(SessionEvent::Spawn(notice.clone()));
    }

    fn on_remove(&mut self, notice: &RemoveNotice) {
        self.events.push(SessionEvent::Remove(notice.clone()));
    }

    fn on_state_change(&mut self, state: &StateSnapshot) {
        self.events.push(SessionEvent::StateChange(*state));
    }

    fn on_end(&mut self, summary: &EndSummary) {
        self.events.push(SessionEvent::End(*summary));
    }
}
