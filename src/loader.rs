use std::convert::TryInto;
use std::fs;
use std::path::Path;

use crate::error::UmError;

/// Load a UM binary as a sequence of big-endian 32-bit words in memory
/// (segment 0).
///
/// A file whose length is not a multiple of 4 bytes is rejected rather
/// than silently truncated; it is always malformed.
pub fn boot(path: &Path) -> Result<Vec<u32>, UmError> {
    let contents = fs::read(path)
        .map_err(|source| UmError::ProgramRead { path: path.to_path_buf(), source })?;

    if contents.len() % 4 != 0 {
        return Err(UmError::MalformedProgram {
            path: path.to_path_buf(),
            len: contents.len() as u64,
        });
    }

    let program: Vec<u32> = contents
        .chunks_exact(4)
        .map(|chunk| u32::from_be_bytes(chunk.try_into().unwrap()))
        .collect();

    log::debug!(
        "loaded program {} ({} bytes, {} instructions)",
        path.display(),
        contents.len(),
        program.len()
    );

    Ok(program)
}
