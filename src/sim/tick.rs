//! Per-frame advance
//!
//! Spawn, fall, miss, end: in that order, once per call.

use super::engine::Engine;
use super::events::{NotificationSink, RemoveNotice};
use super::state::WordId;
use crate::clock::Clock;
use crate::clamp_elapsed;
use crate::words::WordSource;

impl<W: WordSource, C: Clock, S: NotificationSink> Engine<W, C, S> {
    /// Advance the running session by `elapsed_secs` (clamped to
    /// `MAX_TICK_SECS`). Ignored unless running.
    pub fn tick(&mut self, elapsed_secs: f64) {
        if !self.session.is_running() {
            return;
        }
        let dt = clamp_elapsed(elapsed_secs);

        // Spawn
        self.session.spawn_timer_ms += dt * 1000.0;
        if !self.session.spawn_finished
            && self.session.spawn_timer_ms > self.config.spawn_interval_ms
        {
            self.session.spawn_timer_ms = 0.0;
            self.spawn_word();
        }

        // Fall
        for word in self.session.active.values_mut() {
            word.advance(dt);
        }

        // Misses, collected first so the map is not mutated mid-iteration
        let missed: Vec<WordId> = self
            .session
            .active
            .values()
            .filter(|w| w.has_crossed_limit())
            .map(|w| w.id)
            .collect();

        for id in missed {
            let Some(word) = self.session.active.remove(&id) else {
                continue;
            };
            self.session.lives = self.session.lives.saturating_sub(1);
            log::debug!("Missed {} '{}', lives={}", id, word.text, self.session.lives);

            self.sink.on_remove(&RemoveNotice {
                id,
                text: word.text,
                miss: true,
            });
            self.emit_state();

            // Out of lives: remaining crossed words stay where they are
            if self.session.lives == 0 {
                self.end_session();
                return;
            }
        }

        if self.session.spawn_finished && self.session.active.is_empty() {
            self.end_session();
        }
    }
}
