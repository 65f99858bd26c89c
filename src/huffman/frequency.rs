use std::collections::{btree_map, BTreeMap};

/// Occurrence count of every symbol of a text, ordered by symbol.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    frequencies: BTreeMap<char, usize>,
}

impl FrequencyTable {
    pub fn get(&self, symbol: char) -> Option<usize> {
        self.frequencies.get(&symbol).copied()
    }

    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    pub fn total(&self) -> usize {
        self.frequencies.values().sum()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, char, usize> {
        self.frequencies.iter()
    }
}

impl FromIterator<char> for FrequencyTable {
    fn from_iter<T: IntoIterator<Item = char>>(symbols: T) -> Self {
        let mut frequencies = BTreeMap::new();
        for symbol in symbols {
            *frequencies.entry(symbol).or_insert(0) += 1;
        }
        Self { frequencies }
    }
}

impl From<&str> for FrequencyTable {
    fn from(text: &str) -> Self {
        text.chars().collect()
    }
}

impl From<&[(char, usize)]> for FrequencyTable {
    fn from(symbols_and_frequencies: &[(char, usize)]) -> Self {
        let mut frequencies = BTreeMap::new();
        for &(symbol, frequency) in symbols_and_frequencies {
            if frequency > 0 {
                *frequencies.entry(symbol).or_insert(0) += frequency;
            }
        }
        Self { frequencies }
    }
}
