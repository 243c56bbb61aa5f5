//! Word source
//!
//! The engine only needs `next_word()`. `WordList` is the stock
//! implementation: a fixed corpus with a uniform, seeded pick.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::error::EngineError;

/// Built-in corpus
pub const BUILTIN_WORDS: &[&str] = &[
    "apple", "banana", "orange", "grape", "melon", "keyboard", "javascript", "module",
    "request", "animation", "frame", "performance", "function", "variable", "constant",
    "array", "object", "style", "layout", "accessibility", "focus", "event",
    "listener", "promise", "async", "await", "thread", "render", "viewport", "design",
    "pattern", "component", "state", "score", "lives", "wpm", "typing", "speed",
    "race", "challenge", "practice", "effort", "skill",
];

/// Supplies the text of each spawned word
pub trait WordSource {
    /// Next word to spawn. Must never be empty.
    fn next_word(&mut self) -> String;
}

/// Fixed corpus with uniform random selection
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<String>,
    rng: Pcg32,
}

impl WordList {
    /// Build from any corpus. Blank entries are dropped; a corpus with no
    /// usable words is rejected here rather than on the first spawn.
    pub fn new<I, S>(words: I, seed: u64) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(|w| {
                let w: String = w.into();
                w.trim().to_string()
            })
            .filter(|w| !w.is_empty())
            .collect();

        if words.is_empty() {
            return Err(EngineError::EmptyCorpus);
        }

        Ok(Self {
            words,
            rng: Pcg32::seed_from_u64(seed),
        })
    }

    /// The built-in corpus
    pub fn builtin(seed: u64) -> Self {
        Self {
            words: BUILTIN_WORDS.iter().map(|w| w.to_string()).collect(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

impl WordSource for WordList {
    fn next_word(&mut self) -> String {
        let i = self.rng.random_range(0..self.words.len());
        self.words[i].clone()
    }
}
