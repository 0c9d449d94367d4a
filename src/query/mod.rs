//! Query parsing module
//!
//! A query starting with `!` names an engine shortcut:
//! - `!gh octocat` → shortcut `gh`, remaining query `octocat`
//! - `!gh` → shortcut `gh`, empty remaining query
//! - `!` or `! foo` → empty shortcut, which never matches an engine

use serde::Serialize;

/// Prefix marking a shortcut token
pub const SHORTCUT_PREFIX: char = '!';

/// A raw query split into an optional shortcut and the text after it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedQuery {
    /// Original text, used as-is when the shortcut does not resolve
    pub raw_query: String,
    /// Candidate shortcut, without the leading `!`
    pub shortcut: Option<String>,
    /// Text after the first space following the shortcut
    pub remaining: String,
}

impl ParsedQuery {
    /// Parse a raw query string
    pub fn parse(raw: &str) -> Self {
        let (shortcut, remaining) = match raw.strip_prefix(SHORTCUT_PREFIX) {
            Some(rest) => match rest.split_once(' ') {
                Some((token, after)) => (Some(token.to_string()), after.to_string()),
                None => (Some(rest.to_string()), String::new()),
            },
            None => (None, raw.to_string()),
        };

        Self {
            raw_query: raw.to_string(),
            shortcut,
            remaining,
        }
    }

    /// The shortcut, if present and non-empty
    pub fn shortcut(&self) -> Option<&str> {
        self.shortcut.as_deref().filter(|s| !s.is_empty())
    }

    /// Check if the raw query is blank
    pub fn is_empty(&self) -> bool {
        self.raw_query.trim().is_empty()
    }
}
