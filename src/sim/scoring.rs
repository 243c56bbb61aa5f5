//! Scoring and typing speed

use std::time::Duration;

use crate::consts::{CHARS_PER_WORD, MIN_WPM_MINUTES};

/// Points for a correctly typed word: one per character, at least one
#[inline]
pub fn word_points(char_len: usize) -> u64 {
    char_len.max(1) as u64
}

/// Words per minute from typed characters and session age.
///
/// `None` start means the session never began. Elapsed time is floored at
/// `MIN_WPM_MINUTES` so the result stays finite right after start.
pub fn words_per_minute(typed_chars: u64, started_at: Option<Duration>, now: Duration) -> u32 {
    let Some(started_at) = started_at else {
        return 0;
    };
    let minutes = (now.saturating_sub(started_at).as_secs_f64() / 60.0).max(MIN_WPM_MINUTES);
    let wpm = (typed_chars as f64 / CHARS_PER_WORD) / minutes;
    wpm.round() as u32
}
