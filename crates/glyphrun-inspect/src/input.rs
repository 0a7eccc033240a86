//! Reading and decoding the inspected input.

use std::io::Read;
use std::path::Path;

use glyphrun::{DecodeOptions, Located, decode_bytes_located};

use crate::error::{InspectError, Result};

/// Read the whole input: the file at `path`, or stdin when `path` is `None`
/// or `-`.
pub fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) if path != Path::new("-") => {
            std::fs::read(path).map_err(|source| InspectError::ReadInput {
                path: path.to_path_buf(),
                source,
            })
        }
        _ => {
            let mut bytes = Vec::new();
            std::io::stdin().lock().read_to_end(&mut bytes)?;
            Ok(bytes)
        }
    }
}

/// Decode `bytes` and log what happened to them.
pub fn decode(bytes: &[u8], options: &DecodeOptions) -> Result<Vec<Located>> {
    let located = decode_bytes_located(bytes, options)?;
    tracing::debug!(
        encoding = %options.encoding,
        bytes = bytes.len(),
        codepoints = located.len(),
        "decoded input"
    );
    Ok(located)
}
