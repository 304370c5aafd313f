use std::fmt::Display;

use crate::tokenizer::line_tokenizer::line_tokenizer;

/// The value of one field in one revision of a record.
///
/// Free text is compared line by line, repeatable answers element by element.
/// Anything else a record may hold (numbers, flags, nested objects, lists
/// with non-text items) is kept as `Unsupported` so that the rest of the
/// record can still be compared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
    Unsupported,
}

impl FieldValue {
    /// An empty value of the same shape, standing in for a field that is
    /// missing from the other revision.
    #[must_use]
    pub fn empty_like(&self) -> FieldValue {
        match self {
            FieldValue::Text(_) => FieldValue::Text(String::new()),
            FieldValue::List(_) => FieldValue::List(Vec::new()),
            FieldValue::Unsupported => FieldValue::Unsupported,
        }
    }

    /// The lines this value is compared by: text is split on universal
    /// newlines, lists are taken element by element.
    #[must_use]
    pub fn lines(&self) -> Option<Vec<String>> {
        match self {
            FieldValue::Text(text) => Some(line_tokenizer(text)),
            FieldValue::List(items) => Some(items.clone()),
            FieldValue::Unsupported => None,
        }
    }

    #[must_use]
    pub fn shape(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::List(_) => "list",
            FieldValue::Unsupported => "unsupported",
        }
    }
}

impl Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::List(items) => f.write_str(&items.join("\n")),
            FieldValue::Unsupported => Ok(()),
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self { FieldValue::Text(value) }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self { FieldValue::Text(value.to_owned()) }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self { FieldValue::List(value) }
}

impl From<Vec<&str>> for FieldValue {
    fn from(value: Vec<&str>) -> Self {
        FieldValue::List(value.into_iter().map(str::to_owned).collect())
    }
}

impl From<&[&str]> for FieldValue {
    fn from(value: &[&str]) -> Self {
        FieldValue::List(value.iter().copied().map(str::to_owned).collect())
    }
}

#[cfg(feature = "serde")]
mod serialization {
    use std::fmt;

    use serde::{
        Deserialize, Deserializer, Serialize, Serializer,
        de::{Error, IgnoredAny, MapAccess, SeqAccess, Visitor},
    };

    use super::FieldValue;

    impl Serialize for FieldValue {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match self {
                FieldValue::Text(text) => serializer.serialize_str(text),
                FieldValue::List(items) => serializer.collect_seq(items),
                FieldValue::Unsupported => serializer.serialize_unit(),
            }
        }
    }

    impl<'de> Deserialize<'de> for FieldValue {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(FieldValueVisitor)
        }
    }

    struct FieldValueVisitor;

    impl<'de> Visitor<'de> for FieldValueVisitor {
        type Value = FieldValue;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("any value")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(FieldValue::Text(value.to_owned()))
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(FieldValue::Text(value))
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
            let mut all_text = true;

            while let Some(MaybeText(item)) = seq.next_element()? {
                match item {
                    Some(text) if all_text => items.push(text),
                    _ => all_text = false,
                }
            }

            Ok(if all_text {
                FieldValue::List(items)
            } else {
                FieldValue::Unsupported
            })
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
            Ok(FieldValue::Unsupported)
        }

        fn visit_bool<E>(self, _: bool) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(FieldValue::Unsupported)
        }

        fn visit_i64<E>(self, _: i64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(FieldValue::Unsupported)
        }

        fn visit_u64<E>(self, _: u64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(FieldValue::Unsupported)
        }

        fn visit_f64<E>(self, _: f64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(FieldValue::Unsupported)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(FieldValue::Unsupported)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(FieldValue::Unsupported)
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(self)
        }
    }

    /// A list element: text, or anything else which gets skipped over.
    struct MaybeText(Option<String>);

    impl<'de> Deserialize<'de> for MaybeText {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let value = FieldValue::deserialize(deserializer)?;
            Ok(MaybeText(match value {
                FieldValue::Text(text) => Some(text),
                FieldValue::List(_) | FieldValue::Unsupported => None,
            }))
        }
    }
}
