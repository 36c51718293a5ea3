//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use super::args::{ArgsError, ScheduleArgs};
use super::generate;
use super::output::Output;
use crate::storage::{Config, OutputFormat};

const EXAMPLES: &str = "\
Examples:
  make-weeks 3/12/2026 6/2/2026 \"Mon Wed\"
  make-weeks 3/12/2026 6/2/2026 MWF --no-class 3/27/2026,4/10/2026";

#[derive(Parser)]
#[command(name = "make-weeks")]
#[command(
    author,
    version,
    about = "Generate weekly PreTeXt schedule files (weekNN.ptx) and a main.ptx that includes them"
)]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    /// First day of the term (M/D/YYYY)
    pub start: String,

    /// Last day of the term (M/D/YYYY)
    pub end: String,

    /// Meeting days: compact letters ("MWF", "TR") or names ("Mon Wed")
    pub days: String,

    /// Dates without class, separated by commas and/or spaces
    #[arg(long = "no-class", value_name = "DATES")]
    pub no_class: Option<Option<String>>,

    /// Directory to write the generated files into
    #[arg(long, short = 'o', default_value = ".")]
    pub output_dir: PathBuf,

    /// Show what would be written without touching any files
    #[arg(long)]
    pub dry_run: bool,

    /// Course configuration file (defaults to ./schedule.toml when present)
    #[arg(long, short = 'c', env = "MAKE_WEEKS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f')]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::MissingRequiredArgument => {
            println!("{}", Cli::command().render_help());
            return Err(ArgsError::Usage.into());
        }
        Err(e) => e.exit(),
    };

    let config = Config::load(cli.config.as_deref())?;
    let format = cli.format.unwrap_or(config.global.default_format);
    let output = Output::new(format, cli.verbose);

    output.verbose("make-weeks starting");
    match &config.course_path {
        Some(path) => output.verbose_ctx("config", &format!("Loaded {}", path.display())),
        None => output.verbose_ctx("config", "No course config, using defaults"),
    }

    let args = ScheduleArgs::from_cli(&cli, &config.course)?;
    output.verbose_ctx(
        "args",
        &format!(
            "range={:?}, days={}, no_class={:?}",
            args.schedule.range(),
            args.schedule.days(),
            args.schedule.no_class()
        ),
    );

    let report = generate::run(&args, &config.course.document, &output)?;
    output.data(&report);

    output.verbose("Command completed successfully");
    Ok(())
}
