use std::{collections::HashMap, fmt::Display};

use crate::{GLOBAL_SECTION_NAME, models::section::Section};

/// The parsed result: an owned mapping from section names to [`Section`]s.
///
/// A `Document` always holds a section under [`GLOBAL_SECTION_NAME`] for the key-value
/// pairs that precede any `[section]` header; it is pre-inserted at construction, so the
/// entry exists even when the source defines no global keys at all. A user-declared
/// `[_]` header collides with it and replaces it like any duplicate header would.
///
/// All sections and strings are exclusively owned by the `Document` and released when
/// it is dropped; values returned by the query methods borrow from that storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub(crate) sections: HashMap<String, Section>,
}

impl Default for Document {
    fn default() -> Self {
        let mut sections = HashMap::new();
        sections.insert(GLOBAL_SECTION_NAME.to_owned(), Section::new());
        Self { sections }
    }
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// The implicit section holding key-value pairs declared before any header.
    pub fn global_section(&self) -> Option<&Section> {
        self.sections.get(GLOBAL_SECTION_NAME)
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Looks up `key` in the named section, or in the global section when `section` is
    /// `None`. A missing section or key is `None`, never an error; the returned value
    /// borrows from the document's storage.
    pub fn get(&self, section: Option<&str>, key: &str) -> Option<&str> {
        self.sections.get(section.unwrap_or(GLOBAL_SECTION_NAME))?.get(key)
    }

    /// Number of sections, the always-present global section included.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the section map is empty. Always `false` for documents built by the
    /// parser or the builder, since the global section is pre-inserted.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(global_section) = self.global_section() {
            write!(f, "{global_section}")?;
        }
        for (section_name, section) in self.sections.iter() {
            if section_name == GLOBAL_SECTION_NAME {
                continue;
            }
            writeln!(f, "[{section_name}]")?;
            write!(f, "{section}")?;
        }
        Ok(())
    }
}
