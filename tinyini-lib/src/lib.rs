mod builders;
pub mod models;
mod trim;

use std::{fs, io::Read, path::Path};

use regex::Regex;
use thiserror::Error;

pub use crate::builders::DocumentBuilder;
pub use crate::models::{Document, Entry, Section};
pub use crate::trim::trim;

/// Reserved name of the implicit section holding key-value pairs that precede any
/// `[section]` header. A user-declared `[_]` header aliases it.
pub const GLOBAL_SECTION_NAME: &str = "_";
pub const COMMENT_CHAR: char = ';';

pub const ENTRY_KEY_GROUP_NAME: &str = "key";
pub const ENTRY_VALUE_GROUP_NAME: &str = "value";
pub const SECTION_NAME_GROUP_NAME: &str = "section_name";

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Regex compilation error: {0}")]
    RegexCompilationError(#[from] regex::Error),
    #[error("The group {0} was not found in the provided regex")]
    RegexCaptureGroupNotFound(&'static str),
    #[error("Section header on line {line} has no closing ']'")]
    UnterminatedSectionHeader { line: usize },
    #[error("Line {line} is not a comment, section header or key-value pair (no '=' found)")]
    MissingKeyValueSeparator { line: usize },
}

/// Failure surface of the file and stream wrappers: distinguishes "the source could
/// not be read" from "the source is not valid INI".
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read INI source: {0}")]
    Source(#[from] std::io::Error),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Parses a full INI text buffer into a [`Document`].
///
/// One sequential pass over the lines of `ini_text`, split on `\n` (a trailing line
/// without a terminating newline is still processed, and `\r` is stripped as ordinary
/// trailing whitespace). Blank lines and `;` comments are skipped; `[name]` headers
/// switch the current section; every other line must contain a `=` separating a key
/// from a value, both trimmed. Keys seen before any header land in the global section.
///
/// Any malformed line aborts the whole parse: no partial document is returned, and
/// everything allocated up to that point is released.
pub fn parse(ini_text: &str) -> Result<Document, ParseError> {
    let key_value_regex = Regex::new(&format!(
        r"^(?P<{ENTRY_KEY_GROUP_NAME}>[^=]*)=(?P<{ENTRY_VALUE_GROUP_NAME}>.*)$"
    ))?;
    // Unanchored at the end: the header ends at the first ']', anything after it on
    // the same line is ignored.
    let section_header_regex = Regex::new(&format!(r"^\[(?P<{SECTION_NAME_GROUP_NAME}>[^\]]*)\]"))?;

    let mut builder = DocumentBuilder::new();

    for (index, raw_line) in ini_text.split('\n').enumerate() {
        let line = raw_line.trim();
        log::debug!("Parsing line {}: {line}", index + 1);

        if line.is_empty() {
            continue;
        }

        if line.starts_with(COMMENT_CHAR) {
            continue;
        }

        if line.starts_with('[') {
            let captures = section_header_regex
                .captures(line)
                .ok_or(ParseError::UnterminatedSectionHeader { line: index + 1 })?;

            let name = captures
                .name(SECTION_NAME_GROUP_NAME)
                .ok_or(ParseError::RegexCaptureGroupNotFound(SECTION_NAME_GROUP_NAME))?;
            let name = trim(name.as_str());

            if name == GLOBAL_SECTION_NAME {
                log::warn!(
                    "Line {}: explicit [{GLOBAL_SECTION_NAME}] header aliases the implicit global section and replaces its contents",
                    index + 1
                );
            }

            log::debug!("Opening section {name:?}");
            builder = builder.open_section(name);
            continue;
        }

        let captures = key_value_regex
            .captures(line)
            .ok_or(ParseError::MissingKeyValueSeparator { line: index + 1 })?;

        builder = builder.add_entry(Entry::try_from(captures)?);
    }

    Ok(builder.build())
}

/// Reads the file at `path` into memory and parses it.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Document, Error> {
    let contents = fs::read_to_string(path)?;
    Ok(parse(&contents)?)
}

/// Reads `reader` to the end and parses the result.
pub fn parse_reader(mut reader: impl Read) -> Result<Document, Error> {
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(parse(&contents)?)
}
