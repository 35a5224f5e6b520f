use std::{collections::HashMap, fs::File, io::BufReader, path::{Path, PathBuf}};

use crate::error::{HuffmanError, Result};

/// File locations used by the command-line tools, read from a `.properties` file.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Properties {
    pub input: PathBuf,
    pub packed: PathBuf,
    pub output: PathBuf,
    pub stats: bool,
}

impl Default for Properties {
    fn default() -> Self {
        Self {
            input: PathBuf::from("files/input.txt"),
            packed: PathBuf::from("files/input.dat"),
            output: PathBuf::from("files/output.txt"),
            stats: false,
        }
    }
}

impl Properties {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())
            .map_err(|source| HuffmanError::InputUnreadable { path: path.as_ref().to_path_buf(), source })?;
        let p = java_properties::read(BufReader::new(file))
            .map_err(|e| HuffmanError::Properties(e.to_string()))?;

        Properties::try_from(p)
    }
}

impl TryFrom<HashMap<String, String>> for Properties {
    type Error = HuffmanError;

    fn try_from(value: HashMap<String, String>) -> Result<Self> {
        let mut props = Properties::default();

        if let Some(input) = value.get("input") {
            props.input = PathBuf::from(input.trim());
        }
        if let Some(packed) = value.get("packed") {
            props.packed = PathBuf::from(packed.trim());
        }
        if let Some(output) = value.get("output") {
            props.output = PathBuf::from(output.trim());
        }
        if let Some(stats) = value.get("stats") {
            props.stats = stats
                .trim()
                .parse()
                .map_err(|_| HuffmanError::Properties(format!("stats must be true or false, got {:?}", stats)))?;
        }

        Ok(props)
    }
}
