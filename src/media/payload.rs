/// Base64 payloads for images stored inside the labels table
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::Path;

use crate::error::{Error, Result};

/// Read an image file and encode its raw bytes as base64 text
pub fn encode_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|source| Error::ImageRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(encode(&bytes))
}

pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Turn a stored payload back into the original file bytes
pub fn decode(payload: &str) -> Result<Vec<u8>> {
    Ok(STANDARD.decode(payload)?)
}
