use std::sync::{mpsc, Arc};

use threadpool::ThreadPool;

use crate::Result;

mod distance;
mod index;

pub use distance::edit_distance;
pub use index::EditDistanceIndex;

pub const DEFAULT_TOLERANCE: usize = 2;

/// Suggests dictionary words close to a possibly misspelled word.
#[derive(Default)]
pub struct SpellChecker {
    index: EditDistanceIndex,
}

impl SpellChecker {
    pub fn new(index: EditDistanceIndex) -> Self {
        Self { index }
    }

    /// Builds the checker by inserting the words in dictionary order.
    pub fn from_dictionary<I, T>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut checker = Self::default();
        checker.load_dictionary(words)?;
        Ok(checker)
    }

    /// Builds the checker from whitespace separated dictionary text.
    pub fn from_text(dictionary: &str) -> Result<Self> {
        Self::from_dictionary(dictionary.split_whitespace())
    }

    pub fn load_dictionary<I, T>(&mut self, words: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut inserted = 0;
        let mut duplicates = 0;
        for word in words {
            if self.index.insert(word.as_ref())? {
                inserted += 1;
            } else {
                duplicates += 1;
            }
        }
        log::info!(
            "Loaded {} dictionary words ({} duplicates skipped)",
            inserted,
            duplicates
        );
        Ok(())
    }

    pub fn index(&self) -> &EditDistanceIndex {
        &self.index
    }

    pub fn spell_check(&self, word: &str) -> Vec<String> {
        self.spell_check_with_tolerance(word, DEFAULT_TOLERANCE)
    }

    /// Dictionary words within `tolerance` edits of `word`, closest first.
    pub fn spell_check_with_tolerance(&self, word: &str, tolerance: usize) -> Vec<String> {
        let mut matches = self.index.query(word, tolerance);
        matches.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));
        log::debug!("{} suggestions for '{}'", matches.len(), word);
        matches
            .into_iter()
            .map(|(suggestion, _)| suggestion.to_owned())
            .collect()
    }

    /// Checks every word on the pool; results are in the order of `words`.
    pub fn check_all(
        self: &Arc<Self>,
        words: &[String],
        tolerance: usize,
        pool: &ThreadPool,
    ) -> Vec<Vec<String>> {
        let (sender, receiver) = mpsc::channel();
        for (position, word) in words.iter().enumerate() {
            let checker = Arc::clone(self);
            let sender = sender.clone();
            let word = word.clone();
            pool.execute(move || {
                let suggestions = checker.spell_check_with_tolerance(&word, tolerance);
                // receiver lives until every job has finished
                let _ = sender.send((position, suggestions));
            });
        }
        drop(sender);

        let mut results = vec![Vec::new(); words.len()];
        for (position, suggestions) in receiver.iter() {
            results[position] = suggestions;
        }
        results
    }
}
