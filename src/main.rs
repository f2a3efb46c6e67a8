// src/main.rs

use std::process::ExitCode;

use jobboard::{RunStatus, cli, logging, run};

fn main() -> ExitCode {
    match run_main() {
        Ok(RunStatus::Ok) => ExitCode::SUCCESS,
        Ok(RunStatus::ConflictsFound) => ExitCode::from(2),
        Err(err) => {
            eprintln!("jobboard error: {err:?}");
            ExitCode::FAILURE
        }
    }
}

fn run_main() -> anyhow::Result<RunStatus> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    run(args)
}
