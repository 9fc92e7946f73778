//! Attribute values and the formatting of an opening tag's attribute list

use indexmap::IndexMap;
use std::fmt;

/// Value of a single HTML attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// A plain string, emitted as is
    Single(String),
    /// Several tokens, emitted joined by a single space (e.g. `class`)
    Multi(Vec<String>),
}

impl AttrValue {
    /// The string placed between the quotes
    pub fn display_value(&self) -> String {
        match self {
            Self::Single(value) => value.clone(),
            Self::Multi(values) => values.join(" "),
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_value())
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<String>> for AttrValue {
    fn from(values: Vec<String>) -> Self {
        Self::Multi(values)
    }
}

impl From<Vec<&str>> for AttrValue {
    fn from(values: Vec<&str>) -> Self {
        Self::Multi(values.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for AttrValue {
    fn from(values: &[&str]) -> Self {
        Self::Multi(values.iter().map(|v| (*v).to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for AttrValue {
    fn from(values: [&str; N]) -> Self {
        Self::Multi(values.iter().map(|v| (*v).to_string()).collect())
    }
}

/// Insertion-ordered attribute bag of a tag.
///
/// Keys are stored exactly as given; the `_` to `-` rewrite happens when the
/// tag is formatted, so `data_id` and `data-id` are distinct entries here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(IndexMap<String, AttrValue>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key`, replacing an existing value without moving it.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, AttrValue> {
        self.0.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Self::new();
        for (key, value) in iter {
            attributes.set(key, value);
        }
        attributes
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = (&'a String, &'a AttrValue);
    type IntoIter = indexmap::map::Iter<'a, String, AttrValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Rewrites an attribute key into its HTML spelling (`data_x` -> `data-x`).
pub fn html_key(key: &str) -> String {
    key.replace('_', "-")
}

/// Formats the inside of an opening tag: `name k1="v1" k2="v2"`.
///
/// Values are wrapped in double quotes verbatim. Embedded quotes are not
/// escaped.
pub fn format_attributes(name: &str, attributes: &Attributes) -> String {
    let mut parts = Vec::with_capacity(attributes.len() + 1);
    parts.push(name.to_string());

    for (key, value) in attributes {
        parts.push(format!("{}=\"{}\"", html_key(key), value));
    }

    parts.join(" ")
}
