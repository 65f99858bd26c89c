mod code;
mod codec;
mod frequency;
mod tree;

pub use code::CodeTable;
pub use codec::{compression_ratio, original_size_in_bits, HuffmanCodec};
pub use frequency::FrequencyTable;
pub use tree::HuffmanTree;
