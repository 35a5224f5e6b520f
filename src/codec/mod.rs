use std::{fs, io::Cursor, path::Path};

use crate::{
    bitstreams::{BinaryReader, BinaryWriterBuilder},
    error::{HuffmanError, Result},
    frequency::{FrequencyTable, TABLE_BYTES},
    stats::CompressionStats,
    tree::{HuffmanNode, HuffmanTree},
};

/// Meaningful-bit count byte followed by the frequency table.
pub const HEADER_LEN: usize = 1 + TABLE_BYTES;

/// In-memory form of a compressed file.
///
/// | offset | size     | field                                          |
/// |--------|----------|------------------------------------------------|
/// | 0      | 1        | meaningful bits in the last payload byte (0-8)  |
/// | 1      | 256 * 4  | little-endian `u32` count per byte value        |
/// | 1025   | rest     | packed codewords                               |
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PackedFile {
    pub last_byte_bits: u8,
    pub frequencies: FrequencyTable,
    pub payload: Box<[u8]>,
}

impl PackedFile {
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::with_capacity(HEADER_LEN + self.payload.len());

        bytes.push(self.last_byte_bits);
        self.frequencies.write_to(&mut bytes)?;
        bytes.extend_from_slice(&self.payload);

        Ok(bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_LEN {
            return Err(HuffmanError::CorruptHeader(format!(
                "{} bytes is shorter than the {} byte header",
                bytes.len(),
                HEADER_LEN
            )));
        }

        let last_byte_bits = bytes[0];
        if last_byte_bits > 8 {
            return Err(HuffmanError::CorruptHeader(format!(
                "last byte cannot hold {} meaningful bits",
                last_byte_bits
            )));
        }

        let frequencies = FrequencyTable::read_from(&mut Cursor::new(&bytes[1..HEADER_LEN]))?;
        let payload: Box<[u8]> = bytes[HEADER_LEN..].into();

        if payload.is_empty() && last_byte_bits != 0 {
            return Err(HuffmanError::CorruptHeader(format!(
                "{} meaningful bits announced but the payload is empty",
                last_byte_bits
            )));
        }

        Ok(Self { last_byte_bits, frequencies, payload })
    }

    /// Number of meaningful payload bits.
    pub fn payload_bits(&self) -> u64 {
        BinaryReader::stream_bits(self.payload.len(), self.last_byte_bits) as u64
    }

    /// Size of the serialized file.
    pub fn encoded_len(&self) -> usize {
        HEADER_LEN + self.payload.len()
    }
}

pub fn encode(data: &[u8]) -> Result<PackedFile> {
    let frequencies = FrequencyTable::from_bytes(data)?;

    let Some(tree) = HuffmanTree::build(&frequencies) else {
        return Ok(PackedFile { last_byte_bits: 0, frequencies, payload: Box::new([]) });
    };

    let codes = tree.code_table();
    let payload_bits = codes.bit_count(&frequencies);

    let mut writer = BinaryWriterBuilder::with_capacity(payload_bits.div_ceil(8) as usize);
    for &byte in data {
        let code = codes.get(byte).ok_or(HuffmanError::MissingCode(byte))?;
        writer.push_bits(code.bits, code.len as u64);
    }

    debug_assert_eq!(writer.written_bits as u64, payload_bits);

    let out = writer.build();

    log::debug!(
        "encoded {} bytes into {} bits with {} codewords (longest {})",
        data.len(),
        payload_bits,
        codes.len(),
        codes.max_len()
    );

    Ok(PackedFile {
        last_byte_bits: out.last_byte_bits,
        frequencies,
        payload: out.os,
    })
}

/// Rebuilds the tree from the stored table and walks it one payload bit at a time.
pub fn decode(packed: &PackedFile) -> Result<Vec<u8>> {
    let Some(tree) = HuffmanTree::build(&packed.frequencies) else {
        if !packed.payload.is_empty() {
            return corrupt(format!("{} payload bytes but no symbols in the table", packed.payload.len()));
        }
        return Ok(Vec::new());
    };

    let mut reader = BinaryReader::new(&packed.payload, packed.last_byte_bits);

    let expected = packed.frequencies.total();
    if expected > reader.remaining() as u64 {
        return corrupt(format!("{} symbols cannot fit in {} bits", expected, reader.remaining()));
    }

    let mut output = Vec::with_capacity(expected as usize);
    let root = tree.root();
    let mut curr_node = root;

    while let Some(bit) = reader.read_bit() {
        match tree[curr_node] {
            // Only reachable when the whole tree is one leaf with the code `0`.
            HuffmanNode::Leaf { byte, .. } => {
                if bit {
                    return corrupt(format!("unexpected 1 bit at offset {}", reader.read_bits - 1));
                }
                output.push(byte);
            }
            HuffmanNode::Internal { left, right, .. } => {
                curr_node = if bit { right } else { left };

                if let HuffmanNode::Leaf { byte, .. } = tree[curr_node] {
                    output.push(byte);
                    curr_node = root;
                }
            }
        }

        if output.len() as u64 > expected {
            return corrupt(format!("more than the {} announced symbols", expected));
        }
    }

    if curr_node != root {
        return corrupt("stream ends in the middle of a codeword".to_string());
    }

    if output.len() as u64 != expected {
        return corrupt(format!("decoded {} symbols, header announces {}", output.len(), expected));
    }

    if FrequencyTable::from_bytes(&output)? != packed.frequencies {
        return corrupt("decoded symbols disagree with the header histogram".to_string());
    }

    log::debug!("decoded {} bytes from {} bits", output.len(), reader.read_bits);

    Ok(output)
}

fn corrupt<T>(reason: String) -> Result<T> {
    log::warn!("rejecting packed stream: {}", reason);
    Err(HuffmanError::CorruptStream(reason))
}

/// Compresses `input` into `output`. The output file is only created once the
/// whole packed image is ready.
pub fn encode_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<CompressionStats> {
    let data = read_input(input.as_ref())?;
    let packed = encode(&data)?;
    write_output(output.as_ref(), &packed.to_bytes()?)?;

    let stats = CompressionStats::new(data.len(), &packed);

    log::info!(
        "encoded {} -> {} ({} -> {} bytes)",
        input.as_ref().display(),
        output.as_ref().display(),
        stats.original_bytes,
        stats.packed_bytes
    );

    Ok(stats)
}

/// Restores the original of the packed file `input` into `output`, returning the
/// number of bytes written.
pub fn decode_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<usize> {
    let bytes = read_input(input.as_ref())?;
    let packed = PackedFile::from_bytes(&bytes)?;
    let data = decode(&packed)?;
    write_output(output.as_ref(), &data)?;

    log::info!(
        "decoded {} -> {} ({} -> {} bytes)",
        input.as_ref().display(),
        output.as_ref().display(),
        bytes.len(),
        data.len()
    );

    Ok(data.len())
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| HuffmanError::InputUnreadable { path: path.to_path_buf(), source })
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).map_err(|source| HuffmanError::OutputUnwritable { path: path.to_path_buf(), source })
}
