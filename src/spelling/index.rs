use std::collections::BTreeMap;

use super::distance::edit_distance;
use crate::{error::Error, Result};

const ROOT_INDEX: usize = 0;

struct IndexNode {
    word: String,
    /// child index keyed by the edit distance of the child's word to this word
    children: BTreeMap<usize, usize>,
}

impl IndexNode {
    fn new(word: &str) -> Self {
        Self {
            word: word.to_owned(),
            children: BTreeMap::new(),
        }
    }
}

/// Clustering tree over a dictionary, keyed by edit distance.
///
/// Every child is stored under its distance to the parent word, which lets
/// [`EditDistanceIndex::query`] skip subtrees that cannot contain a match.
/// Nodes live in an arena and are never changed once appended, except for
/// gaining children.
#[derive(Default)]
pub struct EditDistanceIndex {
    nodes: Vec<IndexNode>,
    capacity: Option<usize>,
}

impl EditDistanceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index that refuses to hold more than `capacity` words.
    pub fn with_capacity_limit(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            capacity: Some(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|node| node.word.as_str())
    }

    /// Adds `word` to the index.
    ///
    /// Returns `false` when the word is already present. A full index
    /// fails with [`Error::CapacityExceeded`] and is left untouched.
    pub fn insert(&mut self, word: &str) -> Result<bool> {
        if self.is_empty() {
            self.ensure_capacity_left()?;
            self.nodes.push(IndexNode::new(word));
            return Ok(true);
        }

        let mut current_index = ROOT_INDEX;
        loop {
            let current = &self.nodes[current_index];
            let distance = edit_distance(word, &current.word);
            if distance == 0 {
                return Ok(false);
            }
            match current.children.get(&distance) {
                Some(&child_index) => current_index = child_index,
                None => {
                    self.ensure_capacity_left()?;
                    let new_index = self.nodes.len();
                    self.nodes.push(IndexNode::new(word));
                    self.nodes[current_index]
                        .children
                        .insert(distance, new_index);
                    return Ok(true);
                }
            }
        }
    }

    fn ensure_capacity_left(&self) -> Result<()> {
        match self.capacity {
            Some(capacity) if self.nodes.len() >= capacity => {
                Err(Error::CapacityExceeded(capacity))
            }
            _ => Ok(()),
        }
    }

    /// All indexed words within `tolerance` edits of `word`, in no particular order.
    pub fn query(&self, word: &str, tolerance: usize) -> Vec<(&str, usize)> {
        let mut matches = Vec::new();
        if self.is_empty() {
            return matches;
        }

        let mut node_index_stack = vec![ROOT_INDEX];
        while let Some(index) = node_index_stack.pop() {
            let node = &self.nodes[index];
            let distance = edit_distance(word, &node.word);
            if distance <= tolerance {
                matches.push((node.word.as_str(), distance));
            }
            // a match below the child at key k requires |k - distance| <= tolerance
            let lowest = distance.saturating_sub(tolerance);
            let highest = distance.saturating_add(tolerance);
            node_index_stack.extend(
                node.children
                    .range(lowest..=highest)
                    .map(|(_, &child_index)| child_index),
            );
        }
        matches
    }
}
