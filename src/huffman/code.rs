use std::collections::{btree_map, BTreeMap};

use super::tree::{HuffmanTree, NodeKind};
use crate::{binary_stream::BitSequence, error::Error, Result};

/// Code word of every symbol, derived from the root-to-leaf paths of a
/// [`HuffmanTree`] (`0` for a left edge, `1` for a right edge).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeTable {
    code_words: BTreeMap<char, BitSequence>,
}

impl CodeTable {
    pub fn get(&self, symbol: char) -> Option<&BitSequence> {
        self.code_words.get(&symbol)
    }

    pub fn len(&self) -> usize {
        self.code_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code_words.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, char, BitSequence> {
        self.code_words.iter()
    }

    pub fn encode(&self, text: &str) -> Result<BitSequence> {
        let mut encoded = BitSequence::new();
        for symbol in text.chars() {
            let code_word = self.get(symbol).ok_or(Error::UnknownSymbol(symbol))?;
            encoded.extend_from(code_word);
        }
        Ok(encoded)
    }
}

impl From<&HuffmanTree> for CodeTable {
    fn from(tree: &HuffmanTree) -> Self {
        let mut code_words = BTreeMap::new();
        let root_index = tree.root_index();
        if let NodeKind::Leaf { symbol } = tree.kind(root_index) {
            code_words.insert(symbol, BitSequence::from_iter([false]));
            return CodeTable { code_words };
        }

        let mut stack = vec![(root_index, BitSequence::new())];
        while let Some((index, path)) = stack.pop() {
            match tree.kind(index) {
                NodeKind::Leaf { symbol } => {
                    code_words.insert(symbol, path);
                }
                NodeKind::Inner { left, right } => {
                    let mut right_path = path.clone();
                    right_path.push(true);
                    let mut left_path = path;
                    left_path.push(false);
                    stack.push((right, right_path));
                    stack.push((left, left_path));
                }
            }
        }
        CodeTable { code_words }
    }
}

#[cfg(test)]
mod test {
    use super::CodeTable;
    use crate::binary_stream::BitSequence;
    use crate::error::Error;
    use crate::huffman::{FrequencyTable, HuffmanTree};

    fn create_code_table(text: &str) -> CodeTable {
        let tree = HuffmanTree::new(&FrequencyTable::from(text)).unwrap();
        CodeTable::from(&tree)
    }

    fn code(table: &CodeTable, symbol: char) -> String {
        table.get(symbol).unwrap().to_string()
    }

    #[test]
    fn test_code_words_follow_tree_paths() {
        let table = create_code_table("abcc");
        assert_eq!(code(&table, 'c'), "0");
        assert_eq!(code(&table, 'a'), "10");
        assert_eq!(code(&table, 'b'), "11");
    }

    #[test]
    fn test_every_symbol_gets_a_code_word() {
        let text = "the quick brown fox jumps over the lazy dog";
        let table = create_code_table(text);
        let frequencies = FrequencyTable::from(text);
        assert_eq!(table.len(), frequencies.len());
        for (&symbol, _) in frequencies.iter() {
            assert!(table.get(symbol).is_some(), "No code for {:?}", symbol);
        }
    }

    #[test]
    fn test_code_table_is_prefix_free() {
        let table = create_code_table("she sells sea shells by the sea shore");
        for (symbol_a, code_a) in table.iter() {
            for (symbol_b, code_b) in table.iter() {
                if symbol_a != symbol_b {
                    assert!(
                        !code_b.starts_with(code_a),
                        "Code {} of {:?} is a prefix of code {} of {:?}",
                        code_a,
                        symbol_a,
                        code_b,
                        symbol_b
                    );
                }
            }
        }
    }

    #[test]
    fn test_more_frequent_symbols_get_shorter_codes() {
        let text = "aaaaaaaaaaaaaaaabbbbbbbbccccdde";
        let table = create_code_table(text);
        let frequencies = FrequencyTable::from(text);
        for (&symbol_a, &frequency_a) in frequencies.iter() {
            for (&symbol_b, &frequency_b) in frequencies.iter() {
                if frequency_a > frequency_b {
                    let length_a = table.get(symbol_a).unwrap().len();
                    let length_b = table.get(symbol_b).unwrap().len();
                    assert!(length_a <= length_b);
                }
            }
        }
    }

    #[test]
    fn test_single_symbol_gets_one_bit_code() {
        let table = create_code_table("aaaa");
        assert_eq!(table.len(), 1);
        assert_eq!(code(&table, 'a'), "0");
    }

    #[test]
    fn test_derivation_is_reproducible() {
        let text = "mississippi river";
        assert_eq!(create_code_table(text), create_code_table(text));
    }

    #[test]
    fn test_encode_concatenates_code_words() {
        let table = create_code_table("abcc");
        let encoded = table.encode("cabcb").unwrap();
        assert_eq!(encoded, BitSequence::parse("01011011").unwrap());
    }

    #[test]
    fn test_encode_unknown_symbol() {
        let table = create_code_table("abcc");
        match table.encode("abd") {
            Err(Error::UnknownSymbol('d')) => (),
            other => panic!("Expected unknown symbol error, got {:?}", other),
        }
    }

    #[test]
    fn test_encode_empty_text() {
        let table = create_code_table("abcc");
        assert!(table.encode("").unwrap().is_empty());
    }
}
