use std::fs;
use std::io;
use std::path::Path;

use log::*;

use crate::error::{Result, ShaderError};

/// Deletes a previously compiled artifact. Returns `true` if a file was removed.
pub fn remove_stale(directory: &Path, output: &Path) -> Result<bool> {
    let path = directory.join(output);
    match fs::remove_file(&path) {
        Ok(()) => {
            info!("Removed stale output `{}`.", path.display());
            Ok(true)
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(source) => Err(ShaderError::Cleanup { path, source }),
    }
}
