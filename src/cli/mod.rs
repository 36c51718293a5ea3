//! # Command-Line Interface
//!
//! ```bash
//! make-weeks <START> <END> <DAYS> [--no-class <DATES>]
//! ```
//!
//! Parses the arguments into a [`ScheduleArgs`], walks the calendar week by
//! week, and writes `weekNN.ptx` files plus `main.ptx`.
//!
//! ## Options
//!
//! | Flag | Purpose |
//! |------|---------|
//! | `--no-class` | Dates to skip (`3/27/2026,4/10/2026`) |
//! | `--output-dir`, `-o` | Where files go (default: current directory) |
//! | `--dry-run` | Report files without writing them |
//! | `--config`, `-c` | Course config file (default: `./schedule.toml`) |
//! | `--format`, `-f` | `text` (default) or `json` report |
//! | `--verbose`, `-v` | Debug output on stderr |
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and generate the schedule.

mod app;
mod args;
mod generate;
mod output;

pub use app::{run, Cli};
pub use args::{ArgsError, ScheduleArgs};
pub use generate::{GenerateReport, WeekReport};
pub use output::Output;
