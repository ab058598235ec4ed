//! Batch compilation of GLSL sources into SPIR-V through an external `glslc`.
//!
//! Every `*.vert` and then every `*.frag` in a directory is handed to the
//! compiler, one synchronous process per file. Depending on the
//! [`CleanupPolicy`], a failed compile also deletes the `.spv` left over
//! from an earlier successful run.

use log::*;

pub use config::{CleanupPolicy, CompileConfig};
pub use error::{Result, ShaderError};
pub use glslc::Invocation;
pub use report::{CompileStatus, Report, ShaderOutcome};

mod config;
mod error;
pub mod glslc;
mod report;

#[cfg(test)]
mod test_support;

#[derive(Debug)]
pub struct ShaderCompiler {
    config: CompileConfig,
}

impl ShaderCompiler {
    /// Validates `config` and anchors a relative compiler path to the
    /// current directory of this process.
    pub fn new(config: CompileConfig) -> Result<ShaderCompiler> {
        config.validate()?;
        let cwd = std::env::current_dir().map_err(ShaderError::CurrentDir)?;
        let config = config.resolve_compiler(&cwd);
        Ok(ShaderCompiler { config })
    }

    pub fn config(&self) -> &CompileConfig {
        &self.config
    }

    /// Compiles every matching source in order. A failing shader never stops
    /// the batch; only scan and cleanup I/O errors do.
    pub fn run(&self) -> Result<Report> {
        let sources =
            glslc::discovery::find_sources(&self.config.directory, &self.config.extensions)?;
        info!(
            "Compiling {} shader(s) in `{}` with `{}`.",
            sources.len(),
            self.config.directory.display(),
            self.config.compiler.display()
        );

        let mut report = Report::default();
        for source in sources {
            if !self.config.quiet {
                println!("compiling {}:", source.display());
            }

            let output = glslc::discovery::output_path(&source);
            let invocation = glslc::invoke(&self.config, &source, &output);

            let status = if invocation.is_success() {
                CompileStatus::Compiled
            } else {
                warn!("Compiling `{}` {}.", source.display(), invocation);
                let stale_removed = match self.config.cleanup {
                    CleanupPolicy::RemoveStale => {
                        glslc::cleanup::remove_stale(&self.config.directory, &output)?
                    }
                    CleanupPolicy::KeepStale => false,
                };
                CompileStatus::Failed {
                    reason: invocation,
                    stale_removed,
                }
            };

            report.outcomes.push(ShaderOutcome {
                source,
                output,
                status,
            });
        }

        info!("{}.", report);
        Ok(report)
    }
}
