//! Endpoint selection for the Ergast API.
//!
//! Every request the client can make is one [`Endpoint`] variant. A variant
//! resolves to exactly one relative path and, where registered, one
//! [`ResponseType`] naming the shape its body decodes into.
//!
//! # Example
//! ```
//! use f1_ergast::data_fetcher::{Endpoint, ResponseType, Season};
//!
//! let endpoint = Endpoint::LapTimes {
//!     season: Season::Year(2015),
//!     race: "5".parse().unwrap(),
//!     lap: Some("3".parse().unwrap()),
//! };
//! assert_eq!(endpoint.resolve_path(), "/api/f1/2015/5/laps/3.json");
//! assert_eq!(endpoint.response_type().unwrap(), ResponseType::Laps);
//! ```

use std::fmt;

use super::season::{Season, render_season};
use super::segment::PathSegment;
use crate::error::AppError;

/// Prefix shared by every endpoint path
pub const BASE_PATH: &str = "/api/f1";

/// A request against one resource family of the API.
///
/// Families that cannot be queried across all seasons carry a bare
/// [`Season`]; the rest carry `Option<Season>` where `None` means every season.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Circuits(Option<Season>),
    Constructors(Option<Season>),
    ConstructorStandings(Option<Season>),
    Drivers(Option<Season>),
    DriverStandings(Option<Season>),
    LapTimes {
        season: Season,
        race: PathSegment,
        lap: Option<PathSegment>,
    },
    PitStops {
        season: Option<Season>,
        race: PathSegment,
    },
    RaceSchedule(Option<Season>),
    RaceResults(Season),
    RaceStandings(Option<Season>),
    Seasons,
    QualifyingResults(Season),
}

/// Shape a response body must be decoded into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseType {
    Circuits,
    Constructors,
    Laps,
    Seasons,
    PitStops,
    RaceResults,
    RaceSchedule,
    QualifyingResults,
}

impl Endpoint {
    /// Resolves the relative path for this endpoint, always ending in `.json`.
    pub fn resolve_path(&self) -> String {
        match self {
            Endpoint::Circuits(season) => {
                format!("{BASE_PATH}{}/circuits.json", segment(season.as_ref()))
            }
            Endpoint::Constructors(season) => {
                format!("{BASE_PATH}{}/constructors.json", segment(season.as_ref()))
            }
            Endpoint::ConstructorStandings(season) => format!(
                "{BASE_PATH}{}/constructorStandings.json",
                segment(season.as_ref())
            ),
            Endpoint::Drivers(season) => {
                format!("{BASE_PATH}{}/drivers.json", segment(season.as_ref()))
            }
            Endpoint::DriverStandings(season) => format!(
                "{BASE_PATH}{}/driverStandings.json",
                segment(season.as_ref())
            ),
            Endpoint::LapTimes { season, race, lap } => match lap {
                Some(lap) => format!(
                    "{BASE_PATH}{}/{race}/laps/{lap}.json",
                    segment(Some(season))
                ),
                None => format!("{BASE_PATH}{}/{race}/laps.json", segment(Some(season))),
            },
            Endpoint::PitStops { season, race } => format!(
                "{BASE_PATH}{}/{race}/pitstops.json",
                segment(season.as_ref())
            ),
            Endpoint::RaceSchedule(season) => {
                format!("{BASE_PATH}{}.json", segment(season.as_ref()))
            }
            Endpoint::RaceResults(season) => {
                format!("{BASE_PATH}{}/results.json", segment(Some(season)))
            }
            Endpoint::RaceStandings(season) => {
                format!("{BASE_PATH}{}/results.json", segment(season.as_ref()))
            }
            Endpoint::Seasons => format!("{BASE_PATH}/seasons.json"),
            Endpoint::QualifyingResults(season) => {
                format!("{BASE_PATH}{}/qualifying.json", segment(Some(season)))
            }
        }
    }

    /// Looks up the response shape for this endpoint family.
    ///
    /// Constructor standings, drivers, driver standings and race standings
    /// have no registered shape yet and return
    /// [`AppError::MissingTypeMapping`].
    pub fn response_type(&self) -> Result<ResponseType, AppError> {
        match self {
            Endpoint::Circuits(_) => Ok(ResponseType::Circuits),
            Endpoint::Constructors(_) => Ok(ResponseType::Constructors),
            Endpoint::LapTimes { .. } => Ok(ResponseType::Laps),
            Endpoint::Seasons => Ok(ResponseType::Seasons),
            Endpoint::PitStops { .. } => Ok(ResponseType::PitStops),
            Endpoint::RaceResults(_) => Ok(ResponseType::RaceResults),
            Endpoint::RaceSchedule(_) => Ok(ResponseType::RaceSchedule),
            Endpoint::QualifyingResults(_) => Ok(ResponseType::QualifyingResults),
            Endpoint::ConstructorStandings(_)
            | Endpoint::Drivers(_)
            | Endpoint::DriverStandings(_)
            | Endpoint::RaceStandings(_) => Err(AppError::missing_type_mapping(self.name())),
        }
    }

    /// Stable family name, matching the resource names used by the API
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::Circuits(_) => "circuits",
            Endpoint::Constructors(_) => "constructors",
            Endpoint::ConstructorStandings(_) => "constructorStandings",
            Endpoint::Drivers(_) => "drivers",
            Endpoint::DriverStandings(_) => "driverStandings",
            Endpoint::LapTimes { .. } => "lapTimes",
            Endpoint::PitStops { .. } => "pitStops",
            Endpoint::RaceSchedule(_) => "raceSchedule",
            Endpoint::RaceResults(_) => "raceResults",
            Endpoint::RaceStandings(_) => "raceStandings",
            Endpoint::Seasons => "seasons",
            Endpoint::QualifyingResults(_) => "qualifyingResults",
        }
    }

    /// The season this endpoint is scoped to, if any
    pub fn season(&self) -> Option<&Season> {
        match self {
            Endpoint::Circuits(season)
            | Endpoint::Constructors(season)
            | Endpoint::ConstructorStandings(season)
            | Endpoint::Drivers(season)
            | Endpoint::DriverStandings(season)
            | Endpoint::PitStops { season, .. }
            | Endpoint::RaceSchedule(season)
            | Endpoint::RaceStandings(season) => season.as_ref(),
            Endpoint::LapTimes { season, .. }
            | Endpoint::RaceResults(season)
            | Endpoint::QualifyingResults(season) => Some(season),
            Endpoint::Seasons => None,
        }
    }
}

/// `/<token>` for a present season, empty otherwise.
fn segment(season: Option<&Season>) -> String {
    let token = render_season(season);
    if token.is_empty() {
        token
    } else {
        format!("/{token}")
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.resolve_path())
    }
}

impl ResponseType {
    pub fn name(&self) -> &'static str {
        match self {
            ResponseType::Circuits => "Circuits",
            ResponseType::Constructors => "Constructors",
            ResponseType::Laps => "Laps",
            ResponseType::Seasons => "Seasons",
            ResponseType::PitStops => "PitStops",
            ResponseType::RaceResults => "RaceResults",
            ResponseType::RaceSchedule => "RaceSchedule",
            ResponseType::QualifyingResults => "QualifyingResults",
        }
    }
}

impl fmt::Display for ResponseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
