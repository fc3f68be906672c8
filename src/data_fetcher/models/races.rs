//! Race-scoped responses.
//!
//! Schedule, results, qualifying, lap and pit stop queries all answer with a
//! `RaceTable`. Each family has its own race entry that embeds the shared
//! [`Race`] fields and requires its own child list, so a body for one family
//! does not decode as another.

use super::common::{Circuit, Constructor, Driver, Pagination};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RaceData<R> {
    #[serde(flatten)]
    pub pagination: Pagination,
    #[serde(rename = "RaceTable")]
    pub race_table: RaceTable<R>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RaceTable<R> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round: Option<String>,
    #[serde(rename = "Races", default = "Vec::new")]
    pub races: Vec<R>,
}

/// Fields every race entry carries; a schedule entry is just this
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Race {
    pub season: String,
    pub round: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(rename = "raceName")]
    pub race_name: String,
    #[serde(rename = "Circuit")]
    pub circuit: Circuit,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

/// Access to the shared race fields of any race entry
pub trait RaceEntry {
    fn race(&self) -> &Race;
}

impl RaceEntry for Race {
    fn race(&self) -> &Race {
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResultsRace {
    #[serde(flatten)]
    pub race: Race,
    #[serde(rename = "Results")]
    pub results: Vec<RaceResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QualifyingRace {
    #[serde(flatten)]
    pub race: Race,
    #[serde(rename = "QualifyingResults")]
    pub qualifying_results: Vec<QualifyingResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LapsRace {
    #[serde(flatten)]
    pub race: Race,
    #[serde(rename = "Laps")]
    pub laps: Vec<Lap>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PitStopsRace {
    #[serde(flatten)]
    pub race: Race,
    #[serde(rename = "PitStops")]
    pub pit_stops: Vec<PitStop>,
}

macro_rules! race_entry {
    ($($ty:ty),*) => {
        $(impl RaceEntry for $ty {
            fn race(&self) -> &Race {
                &self.race
            }
        })*
    };
}

race_entry!(ResultsRace, QualifyingRace, LapsRace, PitStopsRace);

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RaceResult {
    pub number: String,
    pub position: String,
    #[serde(rename = "positionText")]
    pub position_text: String,
    pub points: String,
    #[serde(rename = "Driver")]
    pub driver: Driver,
    #[serde(rename = "Constructor")]
    pub constructor: Constructor,
    pub grid: String,
    pub laps: String,
    pub status: String,
    #[serde(rename = "Time", default, skip_serializing_if = "Option::is_none")]
    pub time: Option<ResultTime>,
    #[serde(rename = "FastestLap", default, skip_serializing_if = "Option::is_none")]
    pub fastest_lap: Option<FastestLap>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResultTime {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub millis: Option<String>,
    pub time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FastestLap {
    #[serde(default)]
    pub rank: Option<String>,
    pub lap: String,
    #[serde(rename = "Time")]
    pub time: ResultTime,
    #[serde(rename = "AverageSpeed", default, skip_serializing_if = "Option::is_none")]
    pub average_speed: Option<AverageSpeed>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AverageSpeed {
    pub units: String,
    pub speed: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QualifyingResult {
    pub number: String,
    pub position: String,
    #[serde(rename = "Driver")]
    pub driver: Driver,
    #[serde(rename = "Constructor")]
    pub constructor: Constructor,
    #[serde(rename = "Q1", default, skip_serializing_if = "Option::is_none")]
    pub q1: Option<String>,
    #[serde(rename = "Q2", default, skip_serializing_if = "Option::is_none")]
    pub q2: Option<String>,
    #[serde(rename = "Q3", default, skip_serializing_if = "Option::is_none")]
    pub q3: Option<String>,
}

impl QualifyingResult {
    /// Fastest session time the driver reached, Q3 first
    pub fn best_time(&self) -> Option<&str> {
        [&self.q3, &self.q2, &self.q1]
            .into_iter()
            .filter_map(|t| t.as_deref())
            .find(|t| !t.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Lap {
    pub number: String,
    #[serde(rename = "Timings", default)]
    pub timings: Vec<Timing>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Timing {
    #[serde(rename = "driverId")]
    pub driver_id: String,
    pub position: String,
    pub time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PitStop {
    #[serde(rename = "driverId")]
    pub driver_id: String,
    pub lap: String,
    pub stop: String,
    pub time: String,
    pub duration: String,
}

/// Season race calendar
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RaceSchedule {
    #[serde(rename = "MRData")]
    pub data: RaceData<Race>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RaceResults {
    #[serde(rename = "MRData")]
    pub data: RaceData<ResultsRace>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QualifyingResults {
    #[serde(rename = "MRData")]
    pub data: RaceData<QualifyingRace>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Laps {
    #[serde(rename = "MRData")]
    pub data: RaceData<LapsRace>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PitStops {
    #[serde(rename = "MRData")]
    pub data: RaceData<PitStopsRace>,
}

impl<R> RaceData<R> {
    pub fn races(&self) -> &[R] {
        &self.race_table.races
    }
}
