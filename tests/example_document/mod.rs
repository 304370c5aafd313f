use pretty_assertions::assert_eq;
use revision_diff::{DiffOptions, FieldDiff, FieldValue, Question, diff_field};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ExampleValue {
    Text(String),
    List(Vec<String>),
}

impl From<&ExampleValue> for FieldValue {
    fn from(value: &ExampleValue) -> Self {
        match value {
            ExampleValue::Text(text) => FieldValue::Text(text.clone()),
            ExampleValue::List(items) => FieldValue::List(items.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExampleSide {
    pub kind: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExampleRow {
    pub line: usize,
    pub before: ExampleSide,
    pub after: ExampleSide,
}

/// A field's two values and the rows their comparison has to produce.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleDocument {
    description: String,
    before: ExampleValue,
    after: ExampleValue,
    #[serde(default)]
    include_unchanged_lines: bool,
    #[serde(default)]
    skipped: bool,
    #[serde(default)]
    rows: Vec<ExampleRow>,
}

impl ExampleDocument {
    pub fn description(&self) -> &str { &self.description }

    pub fn diff(&self) -> Option<FieldDiff> {
        diff_field(
            &Question::new("field", self.description.clone()),
            &(&self.before).into(),
            &(&self.after).into(),
            &DiffOptions::new().with_include_unchanged_lines(self.include_unchanged_lines),
        )
    }

    pub fn assert_matches(&self) {
        let Some(diff) = self.diff() else {
            assert!(
                self.skipped,
                "'{}' produced no diff but rows were expected",
                self.description
            );
            return;
        };

        assert!(
            !self.skipped,
            "'{}' was expected to be skipped",
            self.description
        );

        let rows: Vec<ExampleRow> = diff
            .rows()
            .map(|(before, after)| {
                assert_eq!(before.line_number, after.line_number);

                ExampleRow {
                    line: before.line_number,
                    before: ExampleSide {
                        kind: before.kind.to_string(),
                        text: before.text.clone(),
                    },
                    after: ExampleSide {
                        kind: after.kind.to_string(),
                        text: after.text.clone(),
                    },
                }
            })
            .collect();

        assert_eq!(rows, self.rows, "{}", self.description);
    }
}
