use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, HuffmanError>;

#[derive(Error, Debug)]
pub enum HuffmanError {
    #[error("cannot read input file {}: {source}", path.display())]
    InputUnreadable { path: PathBuf, source: io::Error },
    #[error("cannot write output file {}: {source}", path.display())]
    OutputUnwritable { path: PathBuf, source: io::Error },
    #[error("corrupt header: {0}")]
    CorruptHeader(String),
    #[error("corrupt stream: {0}")]
    CorruptStream(String),
    /// A byte value occurs more often than the 32-bit header count can hold.
    #[error("byte {byte:#04x} occurs more than {} times", u32::MAX)]
    SymbolOverflow { byte: u8 },
    #[error("byte {0:#04x} has no codeword")]
    MissingCode(u8),
    #[error("malformed properties: {0}")]
    Properties(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}
