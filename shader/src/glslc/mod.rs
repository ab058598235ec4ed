use std::fmt;
use std::path::Path;
use std::process::Command;

use log::*;

use crate::config::CompileConfig;

pub mod cleanup;
pub mod constants;
pub mod discovery;

/// Result of launching the compiler once.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Invocation {
    Succeeded,
    /// Non-zero exit. `None` when the process was terminated by a signal.
    Exited(Option<i32>),
    /// The executable could not be started at all.
    LaunchFailed(String),
}

impl Invocation {
    pub fn is_success(&self) -> bool {
        matches!(self, Invocation::Succeeded)
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Invocation::Succeeded => write!(f, "succeeded"),
            Invocation::Exited(Some(code)) => write!(f, "exited with status {}", code),
            Invocation::Exited(None) => write!(f, "terminated by signal"),
            Invocation::LaunchFailed(reason) => write!(f, "could not be launched: {}", reason),
        }
    }
}

/// Runs `<compiler> <extra args...> <source> -o <output>` from the shader
/// directory and waits for it. Compiler diagnostics go straight to the
/// inherited stdout/stderr.
pub fn invoke(config: &CompileConfig, source: &Path, output: &Path) -> Invocation {
    let mut command = Command::new(&config.compiler);
    command
        .current_dir(&config.directory)
        .args(&config.extra_args)
        .arg(source)
        .arg(constants::OUTPUT_FLAG)
        .arg(output);

    debug!("Running {:?}.", command);

    match command.status() {
        Ok(status) if status.success() => Invocation::Succeeded,
        Ok(status) => Invocation::Exited(status.code()),
        Err(err) => {
            error!(
                "Failed to launch `{}`: {}",
                config.compiler.display(),
                err
            );
            Invocation::LaunchFailed(err.to_string())
        }
    }
}
