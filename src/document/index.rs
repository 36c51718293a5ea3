//! Index document (`main.ptx`)

use super::{Document, DocumentSettings, INDEX_FILE_NAME};

/// Rendered `<section>` that includes every week document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexDocument {
    contents: String,
}

impl IndexDocument {
    /// Renders the index; `week_files` must already be in week order
    pub fn render<S: AsRef<str>>(week_files: &[S], settings: &DocumentSettings) -> Self {
        let mut lines = vec![
            r#"<?xml version="1.0" encoding="utf-8"?>"#.to_string(),
            format!(
                r#"<section xml:id="{}" xmlns:xi="http://www.w3.org/2001/XInclude">"#,
                settings.index_id
            ),
            format!("  <title>{}</title>", settings.index_title),
        ];

        lines.extend(
            week_files
                .iter()
                .map(|file| format!(r#"  <xi:include href="{}"/>"#, file.as_ref())),
        );

        lines.push(String::new());
        lines.push("  <conclusion>".to_string());
        lines.push("    <warning>".to_string());
        lines.push("      <p>".to_string());
        lines.push(format!("        {}", settings.disclaimer));
        lines.push("      </p>".to_string());
        lines.push("    </warning>".to_string());
        lines.push("  </conclusion>".to_string());
        lines.push("</section>".to_string());

        Self {
            contents: lines.join("\n"),
        }
    }
}

impl Document for IndexDocument {
    fn file_name(&self) -> &str {
        INDEX_FILE_NAME
    }

    fn contents(&self) -> &str {
        &self.contents
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_includes_in_order() {
        let files = ["week01.ptx", "week02.ptx", "week03.ptx"];
        let doc = IndexDocument::render(&files, &DocumentSettings::default());

        let expected = r#"<?xml version="1.0" encoding="utf-8"?>
<section xml:id="schedule" xmlns:xi="http://www.w3.org/2001/XInclude">
  <title>Schedule</title>
  <xi:include href="week01.ptx"/>
  <xi:include href="week02.ptx"/>
  <xi:include href="week03.ptx"/>

  <conclusion>
    <warning>
      <p>
        The instructor reserves the right to modify the schedule as needed.
      </p>
    </warning>
  </conclusion>
</section>"#;

        assert_eq!(doc.contents(), expected);
        assert_eq!(doc.file_name(), "main.ptx");
    }

    #[test]
    fn custom_title_and_id() {
        let settings = DocumentSettings {
            index_title: "Course Calendar".to_string(),
            index_id: "calendar".to_string(),
            ..DocumentSettings::default()
        };
        let doc = IndexDocument::render(&["week01.ptx".to_string()], &settings);

        assert!(doc.contents().contains(r#"<section xml:id="calendar" "#));
        assert!(doc.contents().contains("<title>Course Calendar</title>"));
    }
}
