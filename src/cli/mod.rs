use anyhow::Result;

pub use args::Arguments;
pub use exit_status::ExitStatus;

pub mod args;
mod exit_status;
mod run;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    run::run(&args)?;
    Ok(ExitStatus::Success)
}
