//! make-weeks - generate weekly PreTeXt schedule files

use std::process::ExitCode;

use make_weeks::cli::ArgsError;

fn main() -> ExitCode {
    match make_weeks::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Usage text has already been printed
            if e.downcast_ref::<ArgsError>() != Some(&ArgsError::Usage) {
                eprintln!("Error: {:#}", e);
            }
            ExitCode::FAILURE
        }
    }
}
