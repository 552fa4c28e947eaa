use crate::{
    GLOBAL_SECTION_NAME,
    models::{Document, Entry, Section},
};

/// Owns the document under construction plus the "current section" cursor the parse
/// loop threads through. Dropping the builder mid-build releases every section and
/// string allocated so far, so an aborted parse leaks nothing.
#[derive(Debug)]
pub struct DocumentBuilder {
    document: Document,
    current: String,
}

impl DocumentBuilder {
    /// Starts an empty document with the global section pre-inserted and selected.
    pub fn new() -> Self {
        Self {
            document: Document::new(),
            current: GLOBAL_SECTION_NAME.to_owned(),
        }
    }

    /// Inserts a fresh empty section under `name` and makes it the target of
    /// subsequent entries. A previous section of the same name is replaced outright;
    /// its entries become unreachable.
    pub fn open_section(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.document.sections.insert(name.clone(), Section::new());
        self.current = name;
        self
    }

    /// Inserts an entry into the current section, overwriting any previous value for
    /// the same key.
    pub fn add_entry(mut self, entry: Entry) -> Self {
        self.document
            .sections
            .entry(self.current.clone())
            .or_default()
            .entries
            .insert(entry.key, entry.value);
        self
    }

    pub fn add_key_value_pair(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_entry(Entry {
            key: key.into(),
            value: value.into(),
        })
    }

    pub fn build(self) -> Document {
        self.document
    }
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}
