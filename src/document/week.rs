//! Week documents (`weekNN.ptx`)

use crate::domain::date::{format_meeting_title_date, format_week_title_date};
use crate::domain::Week;

use super::{week_file_name, Document, DocumentSettings};

/// Rendered `<subsection>` for one week
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekDocument {
    id: String,
    file_name: String,
    contents: String,
}

impl WeekDocument {
    pub fn render(week: &Week, settings: &DocumentSettings) -> Self {
        let id = week.id();
        let mut lines = vec![
            r#"<?xml version="1.0" encoding="utf-8"?>"#.to_string(),
            format!(r#"<subsection xml:id="week-{}">"#, id),
            format!(
                "  <title>{} <ndash/> {}</title>",
                format_week_title_date(week.start),
                format_week_title_date(week.end)
            ),
            "  <p>".to_string(),
            "    <dl>".to_string(),
        ];

        for date in &week.meetings {
            lines.push("      <li>".to_string());
            lines.push(format!(
                "        <title>{}</title>",
                format_meeting_title_date(*date)
            ));
            lines.push("        <p>".to_string());
            lines.push(format!("          {}", settings.placeholder));
            lines.push("        </p>".to_string());
            lines.push("      </li>".to_string());
        }

        lines.push("    </dl>".to_string());
        lines.push("  </p>".to_string());
        lines.push("</subsection>".to_string());

        Self {
            file_name: week_file_name(week.number),
            id,
            contents: lines.join("\n"),
        }
    }

    /// Two-digit week identifier
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Document for WeekDocument {
    fn file_name(&self) -> &str {
        &self.file_name
    }

    fn contents(&self) -> &str {
        &self.contents
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn renders_week_with_meetings() {
        let week = Week {
            number: 3,
            start: ymd(2026, 3, 23),
            end: ymd(2026, 3, 29),
            meetings: vec![ymd(2026, 3, 23), ymd(2026, 3, 25)],
        };

        let doc = WeekDocument::render(&week, &DocumentSettings::default());

        let expected = r#"<?xml version="1.0" encoding="utf-8"?>
<subsection xml:id="week-03">
  <title>March 23 <ndash/> March 29</title>
  <p>
    <dl>
      <li>
        <title>March 23</title>
        <p>
          Material
        </p>
      </li>
      <li>
        <title>March 25</title>
        <p>
          Material
        </p>
      </li>
    </dl>
  </p>
</subsection>"#;

        assert_eq!(doc.contents(), expected);
        assert_eq!(doc.file_name(), "week03.ptx");
        assert_eq!(doc.id(), "03");
    }

    #[test]
    fn week_title_days_are_unpadded_and_meeting_days_padded() {
        let week = Week {
            number: 1,
            start: ymd(2026, 3, 2),
            end: ymd(2026, 3, 8),
            meetings: vec![ymd(2026, 3, 4)],
        };

        let doc = WeekDocument::render(&week, &DocumentSettings::default());

        assert!(doc.contents().contains("<title>March 2 <ndash/> March 8</title>"));
        assert!(doc.contents().contains("<title>March 04</title>"));
    }

    #[test]
    fn week_spanning_months() {
        let week = Week {
            number: 4,
            start: ymd(2026, 3, 30),
            end: ymd(2026, 4, 5),
            meetings: vec![],
        };

        let doc = WeekDocument::render(&week, &DocumentSettings::default());

        assert!(doc.contents().contains("<title>March 30 <ndash/> April 5</title>"));
    }

    #[test]
    fn empty_week_has_empty_list() {
        let week = Week {
            number: 1,
            start: ymd(2026, 3, 9),
            end: ymd(2026, 3, 15),
            meetings: vec![],
        };

        let doc = WeekDocument::render(&week, &DocumentSettings::default());

        assert!(doc.contents().contains("    <dl>\n    </dl>"));
        assert!(!doc.contents().contains("<li>"));
        assert!(!doc.contents().ends_with('\n'));
    }

    #[test]
    fn placeholder_is_configurable() {
        let week = Week {
            number: 2,
            start: ymd(2026, 3, 16),
            end: ymd(2026, 3, 22),
            meetings: vec![ymd(2026, 3, 16)],
        };
        let settings = DocumentSettings {
            placeholder: "Reading: TBD".to_string(),
            ..DocumentSettings::default()
        };

        let doc = WeekDocument::render(&week, &settings);

        assert!(doc.contents().contains("          Reading: TBD\n"));
        assert!(!doc.contents().contains("Material"));
    }
}
