//! Word banks: the vocabulary a session draws from.
//!
//! A [`WordBank`] is an ordered collection of [`WordEntry`] values with an
//! index for O(1) lookup by word. Words are normalized to lowercase ASCII on
//! insertion; anything else is rejected so the rest of the engine can assume
//! every letter is a plain `'a'..='z'` char.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::GameRng;

/// Fallback shown when a word carries no definition of its own.
pub const STOCK_DEFINITION: &str = "a word to learn";

/// A single spellable word plus its kid-friendly definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    word: String,
    definition: String,
}

impl WordEntry {
    /// The word itself, lowercase ASCII.
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The definition text. May be empty; callers wanting a guaranteed
    /// non-empty string go through [`WordBank::definition_or_stock`].
    #[must_use]
    pub fn definition(&self) -> &str {
        &self.definition
    }
}

/// An ordered, indexed collection of words.
///
/// Insertion order is preserved (it is the order [`WordBank::words`] yields),
/// while the index makes `contains` and definition lookup O(1).
#[derive(Clone, Debug, Default)]
pub struct WordBank {
    entries: Vec<WordEntry>,
    index: FxHashMap<String, usize>,
}

impl WordBank {
    /// Create an empty bank.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a bank from `(word, definition)` pairs.
    ///
    /// Invalid or duplicate words are silently skipped.
    #[must_use]
    pub fn from_entries(entries: &[(&str, &str)]) -> Self {
        let mut bank = Self::new();
        for (word, definition) in entries {
            bank.insert(word, definition);
        }
        bank
    }

    /// Insert a word. Returns `false` if the word is empty, contains
    /// anything but ASCII letters, or is already present.
    ///
    /// Words are lowercased, so `"Cat"` and `"cat"` are the same entry.
    pub fn insert(&mut self, word: &str, definition: &str) -> bool {
        if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
            return false;
        }
        let word = word.to_ascii_lowercase();
        if self.index.contains_key(&word) {
            return false;
        }
        self.index.insert(word.clone(), self.entries.len());
        self.entries.push(WordEntry {
            word,
            definition: definition.to_string(),
        });
        true
    }

    /// Number of words in the bank.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the bank holds no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if the bank contains `word` (case-insensitive).
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(&word.to_ascii_lowercase())
    }

    /// The definition for `word`, if the word is present.
    #[must_use]
    pub fn definition(&self, word: &str) -> Option<&str> {
        self.index
            .get(&word.to_ascii_lowercase())
            .map(|&i| self.entries[i].definition())
    }

    /// The definition for `word`, falling back to [`STOCK_DEFINITION`]
    /// when the word is unknown or its definition is empty.
    #[must_use]
    pub fn definition_or_stock(&self, word: &str) -> &str {
        match self.definition(word) {
            Some(d) if !d.is_empty() => d,
            _ => STOCK_DEFINITION,
        }
    }

    /// Iterate entries in insertion order.
    pub fn words(&self) -> impl Iterator<Item = &WordEntry> {
        self.entries.iter()
    }

    /// All words in a fresh random order.
    #[must_use]
    pub fn shuffled_words(&self, rng: &mut GameRng) -> Vec<String> {
        let mut words: Vec<String> = self.entries.iter().map(|e| e.word.clone()).collect();
        rng.shuffle(&mut words);
        words
    }
}
