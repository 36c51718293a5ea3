//! # Storage Layer
//!
//! Filesystem side of make-weeks: writing generated documents and reading
//! configuration.
//!
//! ## Files
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Week documents | PreTeXt | `<output-dir>/weekNN.ptx` |
//! | Index document | PreTeXt | `<output-dir>/main.ptx` |
//! | Course config | TOML | `./schedule.toml` or `--config` |
//! | Global config | TOML | `<config dir>/make-weeks/config.toml` |

mod config;
mod writer;

pub use config::{Config, ConfigError, CourseConfig, GlobalConfig, OutputFormat, COURSE_CONFIG_FILE};
pub use writer::ScheduleWriter;
