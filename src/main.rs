use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::*;

use shader::ShaderCompiler;

mod cli;

fn main() -> Result<ExitCode> {
    pretty_env_logger::init();

    let cli = cli::Cli::parse();
    let compiler = ShaderCompiler::new(cli.config())?;
    let report = compiler.run().with_context(|| {
        format!(
            "Failed to compile shaders in `{}`",
            compiler.config().directory.display()
        )
    })?;

    for failure in report.failures() {
        debug!("Failed: {:?}", failure);
    }
    println!("{}", report);

    if cli.strict && !report.is_success() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
