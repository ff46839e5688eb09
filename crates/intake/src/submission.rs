use serde::{
    Deserialize, Deserializer,
    de::{MapAccess, Visitor},
};
use std::{collections::HashMap, fmt};

/// Hidden fields rendered in every form. Humans leave them empty.
pub const DECOY_FIELDS: [&str; 2] = ["website_url", "honeyPot"];

/// Raw field values as posted by the browser.
///
/// A repeated field keeps its first value, as browsers' `FormData.get` does.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmittedForm(HashMap<String, String>);

impl SubmittedForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Value of a required field. Missing fields read as empty so they fail
    /// the length checks like blank ones do.
    pub fn text(&self, name: &str) -> String {
        self.get(name).unwrap_or_default().to_owned()
    }

    /// Value of an optional field, `None` when missing or blank.
    pub fn optional(&self, name: &str) -> Option<String> {
        self.get(name)
            .filter(|value| !value.is_empty())
            .map(str::to_owned)
    }

    /// True when any decoy field carries a value.
    pub fn is_spam(&self) -> bool {
        DECOY_FIELDS
            .iter()
            .any(|name| self.get(name).is_some_and(|value| !value.is_empty()))
    }
}

impl From<HashMap<String, String>> for SubmittedForm {
    fn from(fields: HashMap<String, String>) -> Self {
        Self(fields)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SubmittedForm {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = HashMap::new();
        for (name, value) in iter {
            fields.entry(name.into()).or_insert_with(|| value.into());
        }

        Self(fields)
    }
}

struct SubmittedFormVisitor;

impl<'de> Visitor<'de> for SubmittedFormVisitor {
    type Value = SubmittedForm;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("form fields as name/value pairs")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut fields = HashMap::with_capacity(access.size_hint().unwrap_or_default());
        while let Some((name, value)) = access.next_entry::<String, String>()? {
            fields.entry(name).or_insert(value);
        }

        Ok(SubmittedForm(fields))
    }
}

impl<'de> Deserialize<'de> for SubmittedForm {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SubmittedFormVisitor)
    }
}
