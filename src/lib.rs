pub mod bitstreams;
pub mod codec;
pub mod error;
pub mod frequency;
pub mod properties;
pub mod stats;
pub mod tree;

pub use codec::{decode, decode_file, encode, encode_file, PackedFile};
pub use error::{HuffmanError, Result};
pub use frequency::FrequencyTable;
pub use properties::Properties;
pub use stats::CompressionStats;
pub use tree::{CodeTable, Codeword, HuffmanNode, HuffmanTree};
