use clap::ValueEnum;
use revision_diff::{FieldDiff, escape_html};

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// The field diffs as a JSON array
    Json,
    /// One two-column table per changed field
    Html,
}

impl OutputFormat {
    pub fn render(self, diffs: &[FieldDiff]) -> serde_json::Result<String> {
        match self {
            OutputFormat::Json => serde_json::to_string_pretty(diffs),
            OutputFormat::Html => Ok(diffs.iter().map(html_table).collect::<Vec<_>>().join("\n")),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(
            self.to_possible_value()
                .expect("no values are skipped")
                .get_name(),
        )
    }
}

fn html_table(diff: &FieldDiff) -> String {
    let caption = match &diff.section_label {
        Some(section_label) => format!("{section_label}: {}", diff.field_label),
        None => diff.field_label.clone(),
    };

    let mut table = format!(
        "<table class='diff' data-field='{}'>\n<caption>{}</caption>\n<tbody>\n",
        escape_html(&diff.field_id),
        escape_html(&caption)
    );
    for row in diff.to_html_rows() {
        table.push_str(&row);
        table.push('\n');
    }
    table.push_str("</tbody>\n</table>");

    table
}
