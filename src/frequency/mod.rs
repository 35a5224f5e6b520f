use std::{io::{Read, Write}, ops::Index};

use crate::error::{HuffmanError, Result};

pub const NUM_SYMBOLS: usize = 256;
/// Serialized size of a table: one little-endian `u32` per byte value.
pub const TABLE_BYTES: usize = NUM_SYMBOLS * 4;

/// Occurrence count of every byte value in a stream.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FrequencyTable {
    counts: [u32; NUM_SYMBOLS],
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self { counts: [0; NUM_SYMBOLS] }
    }
}

impl FrequencyTable {
    pub fn new(counts: [u32; NUM_SYMBOLS]) -> Self {
        Self { counts }
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut table = Self::default();

        for &byte in data {
            let count = &mut table.counts[byte as usize];
            *count = count.checked_add(1).ok_or(HuffmanError::SymbolOverflow { byte })?;
        }

        Ok(table)
    }

    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self> {
        let mut raw = [0u8; TABLE_BYTES];
        reader.read_exact(&mut raw)?;

        let mut counts = [0u32; NUM_SYMBOLS];
        for (count, chunk) in counts.iter_mut().zip(raw.chunks_exact(4)) {
            *count = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        Ok(Self { counts })
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        for count in self.counts.iter() {
            writer.write_all(&count.to_le_bytes())?;
        }
        Ok(())
    }

    #[inline(always)]
    pub fn get(&self, byte: u8) -> u32 {
        self.counts[byte as usize]
    }

    /// Number of bytes the table was computed over.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }

    /// Number of byte values that occur at least once.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c != 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Byte values with a non-zero count, in ascending byte order.
    pub fn iter_nonzero(&self) -> impl Iterator<Item = (u8, u32)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c != 0)
            .map(|(b, &c)| (b as u8, c))
    }
}

impl Index<u8> for FrequencyTable {
    type Output = u32;

    fn index(&self, byte: u8) -> &Self::Output {
        &self.counts[byte as usize]
    }
}

#[cfg(test)]
mod tests;
