use super::common::Pagination;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Seasons {
    #[serde(rename = "MRData")]
    pub data: SeasonsData,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeasonsData {
    #[serde(flatten)]
    pub pagination: Pagination,
    #[serde(rename = "SeasonTable")]
    pub season_table: SeasonTable,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeasonTable {
    #[serde(rename = "Seasons", default)]
    pub seasons: Vec<SeasonEntry>,
}

/// One row of the season list. Named apart from the path qualifier `Season`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeasonEntry {
    pub season: String,
    pub url: String,
}

impl Seasons {
    pub fn seasons(&self) -> &[SeasonEntry] {
        &self.data.season_table.seasons
    }
}
