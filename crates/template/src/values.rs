use serde::Serialize;
use std::collections::BTreeMap;

/// The values available to one page's template, keyed by token name.
///
/// This is the render context handed to Handlebars. Text values are
/// escaped by `{{TOKEN}}`; markup values (rows, styled amounts) are meant
/// for `{{{TOKEN}}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Substitutions {
    values: BTreeMap<String, String>,
}

impl Substitutions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a text value, replacing any previous value for `token`.
    pub fn text(&mut self, token: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.values.insert(token.into(), value.into());
        self
    }

    /// Sets an optional text value; `None` is stored as empty so a
    /// `default` helper in the template applies.
    pub fn optional_text(&mut self, token: impl Into<String>, value: Option<&str>) -> &mut Self {
        self.text(token, value.unwrap_or_default())
    }

    /// Sets a pre-built markup value, replacing any previous value for `token`.
    pub fn markup(&mut self, token: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.values.insert(token.into(), value.into());
        self
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.values.get(token).map(String::as_str)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.values.contains_key(token)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
