#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A field taking part in the comparison.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: String,
    pub label: String,
}

impl Question {
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Question {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// An ordered group of questions shown under a common heading.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    #[cfg_attr(feature = "serde", serde(default))]
    pub slug: String,
    pub label: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub questions: Vec<Question>,
}

impl Section {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Section {
            slug: slugify(&label),
            label,
            questions: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_question(mut self, id: impl Into<String>, label: impl Into<String>) -> Self {
        self.questions.push(Question::new(id, label));
        self
    }
}

/// The ordered sections of a document type, defining which fields are
/// compared and in what order they are presented.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentSchema {
    pub sections: Vec<Section>,
}

impl ContentSchema {
    #[must_use]
    pub fn new(sections: Vec<Section>) -> Self { ContentSchema { sections } }

    /// Loads a schema manifest such as:
    ///
    /// ```yaml
    /// sections:
    ///   - label: Description
    ///     questions:
    ///       - id: serviceName
    ///         label: Service name
    /// ```
    ///
    /// Sections without a slug get one derived from their label.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Parse` when the document is not a valid manifest.
    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(yaml: &str) -> Result<Self, crate::errors::SchemaError> {
        let mut schema: ContentSchema = serde_yaml::from_str(yaml)?;

        for section in &mut schema.sections {
            if section.slug.is_empty() {
                section.slug = slugify(&section.label);
            }
        }

        Ok(schema)
    }

    /// Finds the question with the given field id.
    #[must_use]
    pub fn question(&self, field_id: &str) -> Option<(&Section, &Question)> {
        self.sections.iter().find_map(|section| {
            section
                .questions
                .iter()
                .find(|question| question.id == field_id)
                .map(|question| (section, question))
        })
    }
}

fn slugify(label: &str) -> String {
    label
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_section_slug_from_label() {
        assert_eq!(Section::new("About your service").slug, "about-your-service");
        assert_eq!(Section::new("  Pricing & terms ").slug, "pricing-terms");
    }

    #[test]
    fn test_find_question() {
        let schema = ContentSchema::new(vec![
            Section::new("Description").with_question("serviceName", "Service name"),
            Section::new("Features")
                .with_question("serviceFeatures", "Service features")
                .with_question("serviceBenefits", "Service benefits"),
        ]);

        let (section, question) = schema.question("serviceBenefits").unwrap();
        assert_eq!(section.label, "Features");
        assert_eq!(question.label, "Service benefits");
        assert!(schema.question("lot").is_none());
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn test_from_yaml_str() {
        let schema = ContentSchema::from_yaml_str(
            "sections:
  - label: Description
    questions:
      - id: serviceName
        label: Service name
      - id: serviceDescription
        label: Service description
  - slug: custom
    label: Features and benefits
",
        )
        .unwrap();

        assert_eq!(schema.sections.len(), 2);
        assert_eq!(schema.sections[0].slug, "description");
        assert_eq!(schema.sections[0].questions[1].id, "serviceDescription");
        assert_eq!(schema.sections[1].slug, "custom");
        assert!(schema.sections[1].questions.is_empty());
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn test_from_yaml_str_rejects_garbage() {
        assert!(ContentSchema::from_yaml_str("sections: 12").is_err());
    }
}
