//! Flat-file output of rendered ACH text

use crate::types::AchError;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Write `ach` to `path`, creating or truncating the file
///
/// The handle is closed when it goes out of scope, whether or not the write
/// succeeded.
pub fn dump_ach(ach: &str, path: &Path) -> Result<(), AchError> {
    let mut file = File::create(path).map_err(|e| {
        log::error!("Could not write file {}", path.display());
        AchError::from(e)
    })?;

    file.write_all(ach.as_bytes()).map_err(|e| {
        log::error!("Error at writing file {}", path.display());
        AchError::from(e)
    })?;

    log::info!("wrote {} bytes to {}", ach.len(), path.display());
    Ok(())
}
