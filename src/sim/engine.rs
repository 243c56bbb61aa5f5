//! Session engine
//!
//! Owns all timed state. Collaborators come in through construction: a word
//! source, a clock, a notification sink, and the config. Per-frame advance
//! lives in `tick.rs`.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::events::{EndSummary, NotificationSink, RemoveNotice, SpawnNotice};
use super::scoring::{word_points, words_per_minute};
use super::state::{ActiveWord, Session, SessionPhase, StateSnapshot, WordId};
use crate::clock::Clock;
use crate::consts::SPEED_JITTER;
use crate::settings::Config;
use crate::words::WordSource;

/// Falling-word session engine
#[derive(Debug)]
pub struct Engine<W, C, S> {
    pub(super) config: Config,
    pub(super) session: Session,
    pub(super) words: W,
    pub(super) clock: C,
    pub(super) sink: S,
    /// Fall speed and slot jitter
    rng: Pcg32,
    /// Next word id. Survives restarts so ids are never reused.
    next_id: u64,
}

impl<W: WordSource, C: Clock, S: NotificationSink> Engine<W, C, S> {
    /// Build an idle engine. `seed` drives fall speeds and horizontal slots.
    pub fn new(config: Config, words: W, clock: C, sink: S, seed: u64) -> Self {
        if config.initial_lives == 0 {
            log::warn!("initial_lives is 0; sessions will end as soon as they start");
        }
        Self {
            session: Session::new(config.initial_lives),
            config,
            words,
            clock,
            sink,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Reset counters and begin a new running session
    pub fn start(&mut self) {
        self.session.reset(self.config.initial_lives);
        self.session.started_at = Some(self.clock.now());
        self.session.phase = SessionPhase::Running;
        log::info!(
            "Session started: lives={}, budget={:?}",
            self.session.lives,
            self.config.word_budget
        );
        self.emit_state();

        // Nothing to play with no lives
        if self.session.lives == 0 {
            self.end_session();
        }
    }

    /// Halt without resetting counters. Safe to call repeatedly.
    pub fn stop(&mut self) {
        if self.session.phase == SessionPhase::Running {
            log::info!("Session stopped: score={}", self.session.score);
        }
        self.session.phase = SessionPhase::Idle;
        self.emit_state();
    }

    /// Spawn one word now. Its fall limit stays unset until the host calls
    /// `set_fall_limit`, so it cannot be missed before then.
    pub fn spawn_word(&mut self) -> SpawnNotice {
        let text = self.words.next_word();
        let id = WordId(self.next_id);
        self.next_id += 1;

        let fall_speed = self.config.base_fall_speed + self.rng.random::<f64>() * SPEED_JITTER;
        let horizontal_slot = self.rng.random::<f64>();

        let word = ActiveWord {
            id,
            text: text.clone(),
            horizontal_slot,
            vertical_position: 0.0,
            fall_speed,
            fall_limit: None,
            created_at: self.clock.now(),
        };
        self.session.active.insert(id, word);
        self.session.spawned_count += 1;

        if let Some(budget) = self.config.word_budget {
            if self.session.spawned_count >= u64::from(budget) {
                self.session.spawn_finished = true;
                log::debug!("Word budget of {} reached", budget);
            }
        }

        log::debug!("Spawned {} '{}' at speed {:.1}", id, text, fall_speed);
        let notice = SpawnNotice {
            id,
            text,
            horizontal_slot,
            fall_speed,
        };
        self.sink.on_spawn(&notice);
        self.emit_state();
        notice
    }

    /// Credit a correctly typed word. Returns false (and emits nothing) when
    /// the id is not active, e.g. it was already typed or missed.
    pub fn resolve_word(&mut self, id: WordId) -> bool {
        let Some(word) = self.session.active.remove(&id) else {
            return false;
        };

        let len = word.char_len();
        self.session.score += word_points(len);
        self.session.typed_chars += len as u64;
        log::debug!("Resolved {} '{}', score={}", id, word.text, self.session.score);

        self.sink.on_remove(&RemoveNotice {
            id,
            text: word.text,
            miss: false,
        });
        self.emit_state();
        true
    }

    /// Resolve the oldest active word whose text equals the trimmed input
    pub fn resolve_typed(&mut self, input: &str) -> Option<WordId> {
        let typed = input.trim();
        if typed.is_empty() {
            return None;
        }
        let id = self
            .session
            .active
            .values()
            .find(|w| w.text == typed)
            .map(|w| w.id)?;
        self.resolve_word(id).then_some(id)
    }

    /// Complete a spawned word with its miss threshold. The first assignment
    /// wins; unknown ids and repeat calls return false.
    pub fn set_fall_limit(&mut self, id: WordId, limit: f64) -> bool {
        match self.session.active.get_mut(&id) {
            Some(word) if word.fall_limit.is_none() => {
                word.fall_limit = Some(limit);
                true
            }
            _ => false,
        }
    }

    pub fn compute_wpm(&self) -> u32 {
        words_per_minute(
            self.session.typed_chars,
            self.session.started_at,
            self.clock.now(),
        )
    }

    pub fn current_state(&self) -> StateSnapshot {
        StateSnapshot {
            score: self.session.score,
            lives: self.session.lives,
            wpm: self.compute_wpm(),
        }
    }

    /// Terminal transition: stop ticking, report the summary, then a final
    /// state change
    pub(super) fn end_session(&mut self) {
        self.session.phase = SessionPhase::Ended;
        let summary = EndSummary {
            score: self.session.score,
            lives: self.session.lives,
            wpm: self.compute_wpm(),
            spawned: self.session.spawned_count,
        };
        log::info!(
            "Session ended: score={}, lives={}, wpm={}, spawned={}",
            summary.score,
            summary.lives,
            summary.wpm,
            summary.spawned
        );
        self.sink.on_end(&summary);
        self.emit_state();
    }

    pub(super) fn emit_state(&mut self) {
        let state = self.current_state();
        self.sink.on_state_change(&state);
    }

    pub fn phase(&self) -> SessionPhase {
        self.session.phase
    }

    pub fn is_running(&self) -> bool {
        self.session.is_running()
    }

    pub fn score(&self) -> u64 {
        self.session.score
    }

    pub fn lives(&self) -> u32 {
        self.session.lives
    }

    pub fn typed_chars(&self) -> u64 {
        self.session.typed_chars
    }

    pub fn spawned_count(&self) -> u64 {
        self.session.spawned_count
    }

    pub fn spawn_finished(&self) -> bool {
        self.session.spawn_finished
    }

    pub fn active_word(&self, id: WordId) -> Option<&ActiveWord> {
        self.session.active.get(&id)
    }

    /// Active words in spawn order. Valid only until the next mutation.
    pub fn active_words(&self) -> impl Iterator<Item = &ActiveWord> {
        self.session.active.values()
    }

    pub fn active_count(&self) -> usize {
        self.session.active.len()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}
