use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{codec::PackedFile, error::{HuffmanError, Result}, tree::HuffmanTree};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CompressionStats {
    pub original_bytes: u64,
    pub packed_bytes: u64,
    pub payload_bits: u64,
    pub distinct_symbols: usize,
    pub max_code_len: u8,
    /// Packed size over original size; 0 for an empty original.
    pub ratio: f64,
}

impl CompressionStats {
    pub fn new(original_len: usize, packed: &PackedFile) -> Self {
        let max_code_len = HuffmanTree::build(&packed.frequencies)
            .map_or(0, |tree| tree.code_table().max_len());
        let packed_bytes = packed.encoded_len() as u64;

        Self {
            original_bytes: original_len as u64,
            packed_bytes,
            payload_bits: packed.payload_bits(),
            distinct_symbols: packed.frequencies.distinct(),
            max_code_len,
            ratio: if original_len == 0 { 0.0 } else { packed_bytes as f64 / original_len as f64 },
        }
    }

    pub fn store<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| HuffmanError::Io(e.into()))?;
        fs::write(path.as_ref(), json)
            .map_err(|source| HuffmanError::OutputUnwritable { path: path.as_ref().to_path_buf(), source })
    }
}

#[test]
fn test_stats_of_sample() {
    let packed = crate::codec::encode(b"AAABBC").unwrap();

    let stats = CompressionStats::new(6, &packed);

    assert_eq!(stats.original_bytes, 6);
    assert_eq!(stats.packed_bytes, 1025 + 2);
    assert_eq!(stats.payload_bits, 9);
    assert_eq!(stats.distinct_symbols, 3);
    assert_eq!(stats.max_code_len, 2);
}

#[test]
fn test_stats_json_shape() {
    let packed = crate::codec::encode(&[]).unwrap();
    let stats = CompressionStats::new(0, &packed);

    let json = serde_json::to_value(&stats).unwrap();

    assert_eq!(json["packed_bytes"], 1025);
    assert_eq!(json["payload_bits"], 0);
    assert_eq!(json["ratio"], 0.0);

    let back: CompressionStats = serde_json::from_value(json).unwrap();
    assert_eq!(back, stats);
}
