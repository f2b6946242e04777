use std::fs::File;
use std::process::ExitCode;

use clap::Parser;
use simplelog::{Config, WriteLogger};
use tablesort_cli::{Cli, CliError, run};

fn init_logger(cli: &Cli) -> Result<(), CliError> {
    match &cli.log_file {
        Some(path) => {
            let file = File::create(path).map_err(|source| CliError::Io {
                path: path.display().to_string(),
                source,
            })?;
            WriteLogger::init(cli.log_level, Config::default(), file)?;
        }
        None => WriteLogger::init(cli.log_level, Config::default(), std::io::stderr())?,
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logger(&cli) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
