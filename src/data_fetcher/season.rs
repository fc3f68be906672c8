//! Season qualifier used to scope endpoint paths to a championship year

use chrono::{Datelike, Local};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::constants::FIRST_SEASON;
use crate::error::AppError;

const CURRENT_TOKEN: &str = "current";

/// A single championship season.
///
/// The "all seasons" case is not a `Season`; endpoints express it as
/// `Option::<Season>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    /// A specific championship year, e.g. 1998
    Year(u16),
    /// Whatever season the API considers to be running
    Current,
}

impl Season {
    /// Creates a season for a specific year, rejecting years outside
    /// `FIRST_SEASON..=current year`.
    pub fn year(year: u16) -> Result<Self, AppError> {
        let latest = current_year();
        if year < FIRST_SEASON {
            return Err(AppError::invalid_season(format!(
                "{year} is before the first championship season ({FIRST_SEASON})"
            )));
        }
        if year > latest {
            return Err(AppError::invalid_season(format!(
                "{year} is in the future (latest season is {latest})"
            )));
        }
        Ok(Season::Year(year))
    }

    /// Renders the year token placed into endpoint paths.
    pub fn render(&self) -> String {
        match self {
            Season::Year(year) => year.to_string(),
            Season::Current => CURRENT_TOKEN.to_string(),
        }
    }

    /// Returns true when the season has finished and its data is final.
    pub fn is_historical(&self) -> bool {
        match self {
            Season::Year(year) => *year < current_year(),
            Season::Current => false,
        }
    }
}

/// Renders an optional season: empty for "all seasons", the year token otherwise.
pub fn render_season(season: Option<&Season>) -> String {
    season.map(Season::render).unwrap_or_default()
}

fn current_year() -> u16 {
    u16::try_from(Local::now().year()).unwrap_or(u16::MAX)
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl FromStr for Season {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case(CURRENT_TOKEN) {
            return Ok(Season::Current);
        }

        let year = trimmed.parse::<u16>().map_err(|_| {
            AppError::invalid_season(format!(
                "'{trimmed}' is neither a year nor '{CURRENT_TOKEN}'"
            ))
        })?;
        Season::year(year)
    }
}

impl Serialize for Season {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.render())
    }
}

impl<'de> Deserialize<'de> for Season {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
