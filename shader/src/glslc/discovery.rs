use std::ffi::OsString;
use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use log::*;

use super::constants;
use crate::error::{Result, ShaderError};

/// Lists shader sources in `directory`, one extension at a time.
///
/// Every match for the first extension comes before any match for the second,
/// and so on; names within one extension are sorted. The scan is not
/// recursive and hidden files are skipped. Returned paths are bare file names
/// relative to `directory`.
pub fn find_sources(directory: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
    if !directory.is_dir() {
        return Err(ShaderError::NotADirectory(directory.to_path_buf()));
    }

    let root = directory.to_str().ok_or_else(|| {
        ShaderError::InvalidConfig(format!(
            "shader directory `{}` is not valid UTF-8",
            directory.display()
        ))
    })?;

    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };

    let mut sources = Vec::new();
    for extension in extensions {
        let pattern = format!("{}/*.{}", Pattern::escape(root), extension);
        let paths = glob::glob_with(&pattern, options).map_err(|source| ShaderError::Pattern {
            pattern: pattern.clone(),
            source,
        })?;

        for entry in paths {
            let path = entry.map_err(|e| ShaderError::Scan {
                path: e.path().to_path_buf(),
                source: e.into_error(),
            })?;

            if !path.is_file() {
                debug!("Skipping `{}`: not a regular file.", path.display());
                continue;
            }

            if let Some(name) = path.file_name() {
                sources.push(PathBuf::from(name));
            }
        }
    }

    debug!(
        "Found {} shader source(s) in `{}`.",
        sources.len(),
        directory.display()
    );
    Ok(sources)
}

/// `shader.vert` compiles to `shader.vert.spv`.
pub fn output_path(source: &Path) -> PathBuf {
    let mut name = OsString::from(source.as_os_str());
    name.push(".");
    name.push(constants::OUTPUT_EXTENSION);
    PathBuf::from(name)
}
