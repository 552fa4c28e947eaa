use std::fmt::Display;

use regex::Captures;

use crate::{ENTRY_KEY_GROUP_NAME, ENTRY_VALUE_GROUP_NAME, ParseError, trim};

/// A single owned key-value pair, as produced by one key-value line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: String,
}

impl Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.key, self.value)
    }
}

impl TryFrom<Captures<'_>> for Entry {
    type Error = ParseError;

    fn try_from(captures: Captures<'_>) -> Result<Self, Self::Error> {
        let key = captures
            .name(ENTRY_KEY_GROUP_NAME)
            .ok_or(ParseError::RegexCaptureGroupNotFound(ENTRY_KEY_GROUP_NAME))?;

        let value = captures
            .name(ENTRY_VALUE_GROUP_NAME)
            .ok_or(ParseError::RegexCaptureGroupNotFound(ENTRY_VALUE_GROUP_NAME))?;

        Ok(Self {
            key: trim(key.as_str()),
            value: trim(value.as_str()),
        })
    }
}
