use std::collections::HashMap;

use crate::{error::Error, Result};

/// Sentence built word by word.
///
/// Words are kept in slots in insertion order; deleting a word empties its
/// slot. For every word the slots of its live occurrences are remembered in
/// insertion order, so the most recent occurrence is the last entry.
#[derive(Default)]
pub struct Document {
    slots: Vec<Option<String>>,
    occurrences: HashMap<String, Vec<usize>>,
    live_words: usize,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.live_words
    }

    pub fn is_empty(&self) -> bool {
        self.live_words == 0
    }

    pub fn insert(&mut self, word: &str) {
        let slot = self.slots.len();
        self.slots.push(Some(word.to_owned()));
        self.occurrences
            .entry(word.to_owned())
            .or_default()
            .push(slot);
        self.live_words += 1;
    }

    /// Replaces every occurrence of `old_word`, keeping the positions.
    ///
    /// Returns the number of replaced occurrences.
    pub fn replace(&mut self, old_word: &str, new_word: &str) -> Result<usize> {
        if old_word == new_word {
            return self
                .occurrences
                .get(old_word)
                .map(Vec::len)
                .ok_or_else(|| Error::WordNotFound(old_word.to_owned()));
        }
        let replaced_slots = self
            .occurrences
            .remove(old_word)
            .ok_or_else(|| Error::WordNotFound(old_word.to_owned()))?;
        for &slot in &replaced_slots {
            self.slots[slot] = Some(new_word.to_owned());
        }
        let new_word_slots = self.occurrences.entry(new_word.to_owned()).or_default();
        new_word_slots.extend_from_slice(&replaced_slots);
        new_word_slots.sort_unstable();
        Ok(replaced_slots.len())
    }

    /// Removes the most recently inserted occurrence of `word`.
    pub fn delete(&mut self, word: &str) -> Result<()> {
        let slots = self
            .occurrences
            .get_mut(word)
            .ok_or_else(|| Error::WordNotFound(word.to_owned()))?;
        let slot = slots
            .pop()
            .ok_or_else(|| Error::WordNotFound(word.to_owned()))?;
        if slots.is_empty() {
            self.occurrences.remove(word);
        }
        self.slots[slot] = None;
        self.live_words -= 1;
        Ok(())
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().flatten().map(String::as_str)
    }

    /// The live words joined by single spaces.
    pub fn sentence(&self) -> String {
        self.words().collect::<Vec<_>>().join(" ")
    }
}

impl<'a> FromIterator<&'a str> for Document {
    fn from_iter<T: IntoIterator<Item = &'a str>>(words: T) -> Self {
        let mut document = Document::new();
        for word in words {
            document.insert(word);
        }
        document
    }
}
