use super::{CodeTable, FrequencyTable, HuffmanTree};
use crate::{binary_stream::BitSequence, Result};

/// Tree and code table built from the symbol frequencies of one text.
///
/// Each codec owns its own tables, so independent texts never share state.
pub struct HuffmanCodec {
    tree: HuffmanTree,
    code_table: CodeTable,
}

impl HuffmanCodec {
    pub fn from_text(text: &str) -> Result<Self> {
        Self::from_frequencies(&FrequencyTable::from(text))
    }

    pub fn from_frequencies(frequencies: &FrequencyTable) -> Result<Self> {
        let tree = HuffmanTree::new(frequencies)?;
        let code_table = CodeTable::from(&tree);
        Ok(Self { tree, code_table })
    }

    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }

    pub fn code_table(&self) -> &CodeTable {
        &self.code_table
    }

    pub fn encode(&self, text: &str) -> Result<BitSequence> {
        self.code_table.encode(text)
    }

    pub fn decode(&self, bits: &BitSequence) -> Result<String> {
        self.tree.decode(bits)
    }
}

/// Encoded size relative to storing every character of `text` in 8 bits.
pub fn compression_ratio(encoded: &BitSequence, text: &str) -> f64 {
    let original_size = original_size_in_bits(text);
    if original_size == 0 {
        return 0.0;
    }
    encoded.len() as f64 / original_size as f64
}

pub fn original_size_in_bits(text: &str) -> usize {
    text.chars().count() * 8
}
