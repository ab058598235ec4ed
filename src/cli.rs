use std::path::PathBuf;

use clap::Parser;
use shader::glslc::constants;
use shader::{CleanupPolicy, CompileConfig};

/// Compile every GLSL vertex and fragment shader in a directory to SPIR-V.
#[derive(Debug, Parser)]
#[command(name = "compile-shaders", author, version, about, long_about = None)]
pub struct Cli {
    /// Directory holding the shader sources; outputs are written next to them
    #[arg(short, long, default_value = ".")]
    pub dir: PathBuf,

    /// Compiler executable
    #[arg(short, long, env = "GLSLC", default_value = constants::DEFAULT_COMPILER)]
    pub compiler: PathBuf,

    /// Source extension to compile, without the dot (repeatable; default: vert, frag)
    #[arg(short, long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Extra argument passed to the compiler before the source file (repeatable)
    #[arg(short, long = "arg", value_name = "ARG", allow_hyphen_values = true)]
    pub args: Vec<String>,

    /// Keep a previously compiled .spv when its source fails to compile
    #[arg(long)]
    pub keep_stale: bool,

    /// Exit with a failure status if any shader fails to compile
    #[arg(long)]
    pub strict: bool,

    /// Only print the final summary
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn config(&self) -> CompileConfig {
        let mut config = CompileConfig::default()
            .with_directory(&self.dir)
            .with_compiler(&self.compiler)
            .with_extra_args(self.args.iter().cloned())
            .with_quiet(self.quiet)
            .with_cleanup(if self.keep_stale {
                CleanupPolicy::KeepStale
            } else {
                CleanupPolicy::RemoveStale
            });

        if !self.extensions.is_empty() {
            config = config.with_extensions(self.extensions.iter().cloned());
        }

        config
    }
}
