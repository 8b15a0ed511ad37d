//! Document Loader
//!
//! Turns a raw byte buffer into a [`Level`]. All-or-nothing: an oversize
//! buffer or a buffer that does not decode into the schema shape fails
//! without producing a partial document. Value-range rules (bounds,
//! whole numbers, overlaps) are the validators' concern, not the loader's.

use std::error::Error;
use std::fmt;

use crate::level::{Level, MAX_FILE_SIZE};

/// Why a buffer failed to load.
#[derive(Debug)]
pub enum LoadError {
    /// The buffer exceeds [`MAX_FILE_SIZE`]. Checked before decoding.
    Oversize { size: usize },
    /// The bytes do not decode into the schema shape: invalid JSON, a
    /// missing or unknown field, a wrong `version` tag, or an enum value
    /// outside its declared set.
    Malformed(serde_json::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Oversize { size } => {
                write!(f, "file is {size} bytes, limit is {MAX_FILE_SIZE}")
            }
            LoadError::Malformed(err) => write!(f, "malformed level document: {err}"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoadError::Oversize { .. } => None,
            LoadError::Malformed(err) => Some(err),
        }
    }
}

/// Decode a level document from raw file contents.
pub fn load_level(bytes: &[u8]) -> Result<Level, LoadError> {
    if bytes.len() > MAX_FILE_SIZE {
        return Err(LoadError::Oversize { size: bytes.len() });
    }

    serde_json::from_slice(bytes).map_err(LoadError::Malformed)
}
