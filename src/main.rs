use anyhow::{Context, Result};
use clap::{ErrorKind, Parser};
use cli_log::init_cli_log;
use wavetext::{config::Config, run_to_output, setup, Opts};

fn main() -> Result<()> {
    init_cli_log!();

    let opts = match Opts::try_parse() {
        Ok(opts) => opts,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                // usage errors exit with 1 like every other failure
                let _ = e.print();
                std::process::exit(1);
            }
        },
    };
    let input = opts.input
        .as_ref()
        .map_or_else(|| "<stdin>".to_string(), |p| p.display().to_string());
    let output = opts.output
        .as_ref()
        .map_or_else(|| "<stdout>".to_string(), |p| p.display().to_string());

    let config = Config::load()
        .context("Failed to load configuration")?;
    let setup = setup(opts, &config)
        .with_context(|| format!("Failed to read sequences from {}", input))?;

    run_to_output(&setup)
        .with_context(|| format!("Failed to write diagram to {}", output))?;

    Ok(())
}
