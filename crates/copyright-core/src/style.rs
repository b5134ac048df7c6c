//! Inline style handling
//!
//! Style maps use camelCase property names (`fontSize`) and keep insertion
//! order, so the generated CSS lists properties in the order they were given.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Insertion-ordered CSS property map
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleMap {
    entries: Vec<(String, String)>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property. Re-setting an existing key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder form of [`StyleMap::insert`]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = StyleMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl Serialize for StyleMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

struct StyleMapVisitor;

impl<'de> Visitor<'de> for StyleMapVisitor {
    type Value = StyleMap;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of CSS property names to string values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = StyleMap::new();
        while let Some((key, value)) = access.next_entry::<String, String>()? {
            map.insert(key, value);
        }
        Ok(map)
    }
}

impl<'de> Deserialize<'de> for StyleMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(StyleMapVisitor)
    }
}

/// Convert a camelCase property name to kebab-case (`fontSize` -> `font-size`).
///
/// Every ASCII uppercase letter gets a leading hyphen, then the whole name is
/// lowercased. Vendor prefixes get no special treatment:
/// `WebkitTransition` becomes `-webkit-transition`.
pub fn camel_to_kebab(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
        }
        out.push(c);
    }
    out.to_lowercase()
}

/// Render a style map as an inline CSS declaration list.
///
/// # Examples
/// ```
/// use copyright_core::{style_object_to_string, StyleMap};
///
/// let style = StyleMap::new().with("color", "gray").with("fontSize", "12px");
/// assert_eq!(style_object_to_string(&style), "color: gray; font-size: 12px");
/// ```
pub fn style_object_to_string(style: &StyleMap) -> String {
    style
        .iter()
        .map(|(key, value)| format!("{}: {}", camel_to_kebab(key), value))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_property() {
        let style = StyleMap::new().with("color", "red");
        assert_eq!(style_object_to_string(&style), "color: red");
    }

    #[test]
    fn test_camel_case_conversion() {
        let style = StyleMap::new().with("fontSize", "14px");
        assert_eq!(style_object_to_string(&style), "font-size: 14px");
    }

    #[test]
    fn test_multiple_properties_keep_order() {
        let style = StyleMap::new()
            .with("fontSize", "14px")
            .with("color", "gray")
            .with("marginTop", "10px");
        assert_eq!(
            style_object_to_string(&style),
            "font-size: 14px; color: gray; margin-top: 10px"
        );
    }

    #[test]
    fn test_empty_map() {
        assert_eq!(style_object_to_string(&StyleMap::new()), "");
    }

    #[test]
    fn test_reinsert_keeps_position() {
        let style = StyleMap::new()
            .with("color", "red")
            .with("fontSize", "14px")
            .with("color", "blue");
        assert_eq!(style.len(), 2);
        assert_eq!(
            style_object_to_string(&style),
            "color: blue; font-size: 14px"
        );
    }

    #[test]
    fn test_vendor_prefix_and_hyphenated_keys() {
        assert_eq!(camel_to_kebab("WebkitTransition"), "-webkit-transition");
        assert_eq!(camel_to_kebab("font-size"), "font-size");
        assert_eq!(camel_to_kebab("borderTopLeftRadius"), "border-top-left-radius");
    }

    #[test]
    fn test_deserialize_preserves_order() {
        let style: StyleMap =
            serde_json::from_str(r#"{"zIndex":"2","color":"gray","fontSize":"12px"}"#).unwrap();
        assert_eq!(
            style_object_to_string(&style),
            "z-index: 2; color: gray; font-size: 12px"
        );
        assert_eq!(style.get("color"), Some("gray"));
    }

    #[test]
    fn test_serialize_as_object() {
        let style = StyleMap::new().with("fontSize", "12px");
        assert_eq!(
            serde_json::to_string(&style).unwrap(),
            r#"{"fontSize":"12px"}"#
        );
    }
}
