//! Race and lap identifiers placed into endpoint paths

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// A single path segment such as a race round (`5`, `last`) or a lap number.
///
/// Only ASCII letters and digits are accepted, so a segment can never be
/// empty, contain a separator, or walk up the path with `..`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathSegment(String);

impl PathSegment {
    /// Validates `raw` after trimming surrounding whitespace.
    pub fn new(raw: &str) -> Result<Self, AppError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AppError::invalid_path_segment(
                "identifier cannot be empty",
            ));
        }
        if let Some(bad) = trimmed.chars().find(|c| !c.is_ascii_alphanumeric()) {
            return Err(AppError::invalid_path_segment(format!(
                "'{trimmed}' contains '{bad}'; only letters and digits are allowed"
            )));
        }
        Ok(PathSegment(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PathSegment {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PathSegment::new(s)
    }
}

impl Serialize for PathSegment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for PathSegment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
