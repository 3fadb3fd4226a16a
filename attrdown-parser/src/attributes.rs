use serde::ser::{Serialize, SerializeMap, Serializer};

/// Insertion-ordered attribute map for an [`Element`](crate::Element).
///
/// Keys are unique; overwriting a key keeps its original position.
/// `class` is special-cased throughout the crate: new class values are
/// appended with a space rather than replacing the old value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementAttributes(Vec<(String, String)>);

impl ElementAttributes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|(k, _)| k == name)
    }

    /// Set `name` to `value`, overwriting any previous value but keeping
    /// the key's original position.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(slot) = self.0.iter_mut().find(|(k, _)| *k == name) {
            slot.1 = value;
        } else {
            self.0.push((name, value));
        }
    }

    /// Append `value` to the `class` attribute, separated by a space, or
    /// create the attribute if it is not present yet.
    pub fn append_class(&mut self, value: &str) {
        if let Some(slot) = self.0.iter_mut().find(|(k, _)| k == "class") {
            slot.1.push(' ');
            slot.1.push_str(value);
        } else {
            self.0.push(("class".to_string(), value.to_string()));
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Serialize for ElementAttributes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            state.serialize_entry(key, value)?;
        }
        state.end()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ElementAttributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Replace each control character that must never reach an attribute
/// (NBSP, tab, LF, CR, NUL, vertical tab) with a single regular space,
/// then trim the result.
#[must_use]
pub(crate) fn normalize_attr_text(text: &str) -> String {
    let replaced: String = text
        .chars()
        .map(|c| match c {
            '\u{a0}' | '\t' | '\n' | '\r' | '\0' | '\u{b}' => ' ',
            other => other,
        })
        .collect();
    replaced.trim().to_string()
}
