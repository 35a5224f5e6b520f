/// A finished bit stream: the packed bytes and how many high bits of the last
/// byte are meaningful (0 when the stream ends on a byte boundary).
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct BinaryWriter {
    pub os: Box<[u8]>,
    pub last_byte_bits: u8,
}

pub struct BinaryWriterBuilder {
    os: Vec<u8>,
    pub written_bits: usize,
    pub current: u64,
    pub free: usize,
}

impl Default for BinaryWriterBuilder {
    fn default() -> Self {
        BinaryWriterBuilder {
            os: Vec::default(),
            written_bits: 0,
            current: 0,
            free: 8,
        }
    }
}

impl BinaryWriterBuilder {
    /// Flushes the partial byte, if any, padded with zeros in its low bits.
    pub fn build(mut self) -> BinaryWriter {
        let last_byte_bits = (8 - self.free) as u8;

        if last_byte_bits != 0 {
            self.write(self.current);
        }

        BinaryWriter {
            os: self.os.into_boxed_slice(),
            last_byte_bits,
        }
    }

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(bytes: usize) -> Self {
        Self { os: Vec::with_capacity(bytes), ..Default::default() }
    }

    #[inline(always)]
    pub fn write(&mut self, b: u64) {
        self.os.push(b as u8);
    }

    #[inline(always)]
    pub fn write_in_current(&mut self, b: u64, len: u64) -> u64 {
        debug_assert!(len as usize <= self.free);

        self.free -= len as usize;
        self.current |= (b & ((1 << len) - 1)) << self.free;

        if self.free == 0 {
            self.write(self.current);
            self.free = 8;
            self.current = 0;
        }

        self.written_bits += len as usize;
        len
    }

    /// Appends the low `len` bits of `x`, most significant first.
    #[inline(always)]
    pub fn push_bits(&mut self, x: u64, len: u64) -> u64 {
        assert!(len <= 64, "Cannot write {} bits from an integer", len);

        let mut left = len;
        while left != 0 {
            let take = left.min(self.free as u64);
            self.write_in_current(x >> (left - take), take);
            left -= take;
        }

        len
    }
}

/// Reads bits most significant first, stopping at the last meaningful bit.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct BinaryReader<'a> {
    is: &'a [u8],
    pub position: usize,
    pub read_bits: usize,
    pub current: u64,
    pub fill: usize,
    total_bits: usize,
}

impl<'a> BinaryReader<'a> {
    /// `last_byte_bits` of 0 means the last byte is fully used.
    pub fn new(input_stream: &'a [u8], last_byte_bits: u8) -> Self {
        let total_bits = Self::stream_bits(input_stream.len(), last_byte_bits);

        BinaryReader {
            is: input_stream,
            position: 0,
            read_bits: 0,
            current: 0,
            fill: 0,
            total_bits,
        }
    }

    /// Meaningful bits in a stream of `len` bytes.
    pub fn stream_bits(len: usize, last_byte_bits: u8) -> usize {
        match len {
            0 => 0,
            n if last_byte_bits == 0 => n * 8,
            n => (n - 1) * 8 + last_byte_bits.min(8) as usize,
        }
    }

    #[inline(always)]
    pub fn read(&mut self) -> Option<u64> {
        let b = *self.is.get(self.position)?;
        self.position += 1;
        Some(b as u64)
    }

    #[inline(always)]
    pub fn read_bit(&mut self) -> Option<bool> {
        if self.read_bits >= self.total_bits {
            return None;
        }

        if self.fill == 0 {
            self.current = self.read()?;
            self.fill = 8;
        }

        self.fill -= 1;
        self.read_bits += 1;
        Some((self.current >> self.fill) & 1 == 1)
    }

    /// Bits left before the end of the meaningful stream.
    pub fn remaining(&self) -> usize {
        self.total_bits - self.read_bits
    }
}
