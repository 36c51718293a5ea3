//! Schedule generation: calendar, documents, files

use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;

use super::args::ScheduleArgs;
use super::output::Output;
use crate::document::{Document, DocumentSettings, IndexDocument, WeekDocument};
use crate::domain::Week;
use crate::storage::ScheduleWriter;

/// Summary of a generate run, printed in JSON mode
#[derive(Debug, Serialize)]
pub struct GenerateReport {
    pub dry_run: bool,
    pub output_dir: PathBuf,
    pub index: String,
    pub weeks: Vec<WeekReport>,
}

#[derive(Debug, Serialize)]
pub struct WeekReport {
    #[serde(flatten)]
    pub week: Week,
    pub file: String,
}

/// Renders and writes every week document followed by the index
pub fn run(args: &ScheduleArgs, settings: &DocumentSettings, output: &Output) -> Result<GenerateReport> {
    let writer = ScheduleWriter::new(&args.output_dir);
    let mut weeks = Vec::new();

    for week in args.schedule.weeks() {
        output.verbose_ctx(
            "week",
            &format!(
                "Week {} ({} to {}): {} meeting(s)",
                week.number,
                week.start,
                week.end,
                week.meetings.len()
            ),
        );

        let doc = WeekDocument::render(&week, settings);
        emit(&writer, &doc, args.dry_run, output)?;

        weeks.push(WeekReport {
            file: doc.file_name().to_string(),
            week,
        });
    }

    let files: Vec<&str> = weeks.iter().map(|w| w.file.as_str()).collect();
    let index = IndexDocument::render(&files, settings);
    emit(&writer, &index, args.dry_run, output)?;

    Ok(GenerateReport {
        dry_run: args.dry_run,
        output_dir: writer.dir().to_path_buf(),
        index: index.file_name().to_string(),
        weeks,
    })
}

/// Writes one document, or only reports it on a dry run
fn emit(writer: &ScheduleWriter, doc: &impl Document, dry_run: bool, output: &Output) -> Result<()> {
    if dry_run {
        output.verbose_ctx("write", &format!("Skipping {}", writer.path_for(doc).display()));
        output.success(&format!("Would write {}", doc.file_name()));
    } else {
        let path = writer.write(doc)?;
        output.verbose_ctx("write", &format!("{} bytes to {}", doc.contents().len(), path.display()));
        output.success(&format!("Wrote {}", doc.file_name()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::date::parse_date;
    use crate::domain::{DateRange, Schedule};
    use crate::storage::OutputFormat;
    use std::collections::BTreeSet;
    use std::fs;
    use tempfile::TempDir;

    fn args(dir: &TempDir, dry_run: bool) -> ScheduleArgs {
        let range = DateRange::new(
            parse_date("3/12/2026").unwrap(),
            parse_date("3/25/2026").unwrap(),
        )
        .unwrap();
        let no_class: BTreeSet<_> = [parse_date("3/18/2026").unwrap()].into_iter().collect();

        ScheduleArgs {
            schedule: Schedule::new(range, "Mon Wed".parse().unwrap(), no_class),
            output_dir: dir.path().to_path_buf(),
            dry_run,
        }
    }

    fn quiet() -> Output {
        Output::new(OutputFormat::Json, false)
    }

    #[test]
    fn writes_weeks_and_index() {
        let dir = TempDir::new().unwrap();
        let report = run(&args(&dir, false), &DocumentSettings::default(), &quiet()).unwrap();

        let files: Vec<_> = report.weeks.iter().map(|w| w.file.as_str()).collect();
        assert_eq!(files, vec!["week01.ptx", "week02.ptx", "week03.ptx"]);
        assert_eq!(report.index, "main.ptx");

        for file in files.iter().chain(std::iter::once(&"main.ptx")) {
            assert!(dir.path().join(file).is_file(), "{} missing", file);
        }

        let week2 = fs::read_to_string(dir.path().join("week02.ptx")).unwrap();
        assert!(week2.contains("<title>March 16</title>"));
        assert!(!week2.contains("March 18"));
    }

    #[test]
    fn dry_run_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let report = run(&args(&dir, true), &DocumentSettings::default(), &quiet()).unwrap();

        assert!(report.dry_run);
        assert_eq!(report.weeks.len(), 3);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn report_serializes_week_fields() {
        let dir = TempDir::new().unwrap();
        let report = run(&args(&dir, true), &DocumentSettings::default(), &quiet()).unwrap();

        let json = serde_json::to_value(&report).unwrap();
        let week3 = &json["weeks"][2];
        assert_eq!(week3["number"], 3);
        assert_eq!(week3["start"], "2026-03-23");
        assert_eq!(week3["file"], "week03.ptx");
        assert_eq!(week3["meetings"], serde_json::json!(["2026-03-23", "2026-03-25"]));
    }
}
