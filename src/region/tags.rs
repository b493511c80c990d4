//! String tag maps with typed accessors.
//!
//! Target files store region policy as free-form `key -> value` strings.
//! The map is kept as-is (unknown keys survive untouched) and the known
//! keys are read through accessors that define their defaults.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const TAG_RESIZABLE: &str = "resizable";
pub const TAG_IGNORE_HIT: &str = "ignore-hit";
pub const TAG_NAME: &str = "name";
pub const TAG_COMMAND: &str = "command";
pub const TAG_SUBTARGET: &str = "subtarget";

/// A command parsed from a region's `command` tag, e.g. `animate(true)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub name: String,
    pub args: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tags(BTreeMap<String, String>);

impl Tags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Strict boolean read: only `true`/`false` (ASCII case-insensitive) parse.
    fn bool_tag(&self, key: &str) -> Option<bool> {
        let value = self.get(key)?.trim();
        if value.eq_ignore_ascii_case("true") {
            Some(true)
        } else if value.eq_ignore_ascii_case("false") {
            Some(false)
        } else {
            None
        }
    }

    /// Whether the region scales with its target. Defaults to `true`.
    pub fn is_resizable(&self) -> bool {
        self.bool_tag(TAG_RESIZABLE).unwrap_or(true)
    }

    /// Whether shots on the region are ignored. Defaults to `false`.
    pub fn is_ignore_hit(&self) -> bool {
        self.bool_tag(TAG_IGNORE_HIT).unwrap_or(false)
    }

    pub fn name(&self) -> Option<&str> {
        self.get(TAG_NAME)
    }

    pub fn subtarget(&self) -> Option<&str> {
        self.get(TAG_SUBTARGET)
    }

    /// Parse the `command` tag.
    ///
    /// Commands are separated by `;`. Each is either a bare name or
    /// `name(arg,arg,...)`. Empty segments are skipped; a missing closing
    /// parenthesis takes the rest of the segment as arguments.
    pub fn commands(&self) -> Vec<Command> {
        let Some(source) = self.get(TAG_COMMAND) else {
            return Vec::new();
        };

        source
            .split(';')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(parse_command)
            .collect()
    }
}

fn parse_command(segment: &str) -> Command {
    match segment.find('(') {
        Some(open) if open > 0 => {
            let rest = &segment[open + 1..];
            let inner = rest.find(')').map_or(rest, |close| &rest[..close]);
            let args = if inner.is_empty() {
                Vec::new()
            } else {
                inner.split(',').map(|a| a.trim().to_string()).collect()
            };
            Command {
                name: segment[..open].trim().to_string(),
                args,
            }
        }
        _ => Command {
            name: segment.to_string(),
            args: Vec::new(),
        },
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Tags {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
