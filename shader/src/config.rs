use std::path::{Path, PathBuf};

use crate::error::{Result, ShaderError};
use crate::glslc::constants;

/// What to do with an existing output artifact when its source fails to compile.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum CleanupPolicy {
    /// Delete the previously compiled `.spv` so a stale binary never outlives a broken source.
    #[default]
    RemoveStale,
    /// Leave whatever was there before.
    KeepStale,
}

#[derive(Clone, Debug)]
pub struct CompileConfig {
    /// Directory scanned for sources; the compiler also runs from here.
    pub directory: PathBuf,
    pub compiler: PathBuf,
    /// Passed to the compiler ahead of the source file name.
    pub extra_args: Vec<String>,
    /// Extensions without the leading dot, matched in this order.
    pub extensions: Vec<String>,
    pub cleanup: CleanupPolicy,
    /// Suppresses the `compiling <file>:` progress lines.
    pub quiet: bool,
}

impl Default for CompileConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            compiler: PathBuf::from(constants::DEFAULT_COMPILER),
            extra_args: Vec::new(),
            extensions: constants::SOURCE_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect(),
            cleanup: CleanupPolicy::default(),
            quiet: false,
        }
    }
}

impl CompileConfig {
    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = directory.into();
        self
    }

    pub fn with_compiler(mut self, compiler: impl Into<PathBuf>) -> Self {
        self.compiler = compiler.into();
        self
    }

    pub fn with_extra_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_cleanup(mut self, cleanup: CleanupPolicy) -> Self {
        self.cleanup = cleanup;
        self
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Anchors a relative compiler path such as `./tools/glslc` to `base`.
    ///
    /// The compiler runs from the shader directory, so a relative path with
    /// more than one component would otherwise be looked up there. Bare names
    /// are left alone for the `PATH` lookup.
    pub fn resolve_compiler(mut self, base: &Path) -> Self {
        if self.compiler.is_relative() && self.compiler.components().count() > 1 {
            self.compiler = base.join(&self.compiler);
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.compiler.as_os_str().is_empty() {
            return Err(ShaderError::InvalidConfig(
                "compiler executable is empty".to_string(),
            ));
        }

        if self.extensions.is_empty() {
            return Err(ShaderError::InvalidConfig(
                "no source extensions given".to_string(),
            ));
        }

        for extension in &self.extensions {
            if extension.is_empty() {
                return Err(ShaderError::InvalidConfig(
                    "source extension is empty".to_string(),
                ));
            }
            if extension
                .chars()
                .any(|c| matches!(c, '/' | '\\' | '*' | '?' | '[' | ']' | '{' | '}'))
            {
                return Err(ShaderError::InvalidConfig(format!(
                    "source extension `{}` contains a path separator or pattern character",
                    extension
                )));
            }
            if extension.starts_with('.') {
                return Err(ShaderError::InvalidConfig(format!(
                    "source extension `{}` must be given without the leading dot",
                    extension
                )));
            }
        }

        Ok(())
    }
}
