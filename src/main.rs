use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};

use hello_nx::config::HelloFile;
use hello_nx::{selftest, util};

const DEFAULT_CONFIG: &str = "./Hello.toml";

/// Print a greeting with a few math results
#[derive(Parser, Debug, Clone)]
#[clap(version)]
struct Cli {
    /// Path to the Hello.toml config
    #[clap(short = 'C', long)]
    config: Option<String>,
    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Print the greeting and the math demo (default)
    Hello,
    /// Check the add and math helpers against known values
    Test,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let start_time = Instant::now();
    let args = Cli::parse();
    if let Err(e) = main_internal(args) {
        println!("Error: {:?}", e);
        util::error_message("failed, please see errors above.");
        return ExitCode::FAILURE;
    }

    let elapsed = start_time.elapsed();
    util::message(format!("done in {:.2?}", elapsed));

    ExitCode::SUCCESS
}

fn main_internal(args: Cli) -> anyhow::Result<()> {
    log::debug!("parsed arguments: {args:#?}");
    match args.command.unwrap_or(Command::Hello) {
        Command::Hello => {
            let config = match &args.config {
                Some(path) => HelloFile::load(Path::new(path), true),
                None => HelloFile::load(Path::new(DEFAULT_CONFIG), false),
            }
            .context("failed to load config")?;
            hello_nx::print_hello(&config).context("hello demo failed")?;
        }
        Command::Test => {
            if let Some(path) = &args.config {
                log::debug!("config '{path}' is not used by the test command");
            }
            selftest::run(&mut std::io::stdout().lock()).context("self test failed")?;
        }
    }
    Ok(())
}
