use std::{collections::HashMap, fmt::Display};

/// An owned mapping from keys to values. Redefining a key overwrites the previous
/// value silently (last write wins).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Section {
    pub(crate) entries: HashMap<String, String>,
}

impl Section {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a key, returning a view into the stored value. A missing key is
    /// `None`, never an error.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (key, value) in self.iter() {
            writeln!(f, "{key} = {value}")?;
        }
        Ok(())
    }
}
