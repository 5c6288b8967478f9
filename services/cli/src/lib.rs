mod cli;
mod commands;
mod infra;

use respira::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
