//! Turns a response body into the shape named by a [`ResponseType`]

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::error;

use super::endpoint::ResponseType;
use super::models::{
    Circuits, Constructors, Laps, PitStops, QualifyingResults, RaceResults, RaceSchedule, Seasons,
};
use crate::error::AppError;

/// A decoded response body, one variant per [`ResponseType`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ApiResponse {
    Circuits(Circuits),
    Constructors(Constructors),
    Laps(Laps),
    Seasons(Seasons),
    PitStops(PitStops),
    RaceResults(RaceResults),
    RaceSchedule(RaceSchedule),
    QualifyingResults(QualifyingResults),
}

impl ApiResponse {
    /// The tag this response was decoded under
    pub fn response_type(&self) -> ResponseType {
        match self {
            ApiResponse::Circuits(_) => ResponseType::Circuits,
            ApiResponse::Constructors(_) => ResponseType::Constructors,
            ApiResponse::Laps(_) => ResponseType::Laps,
            ApiResponse::Seasons(_) => ResponseType::Seasons,
            ApiResponse::PitStops(_) => ResponseType::PitStops,
            ApiResponse::RaceResults(_) => ResponseType::RaceResults,
            ApiResponse::RaceSchedule(_) => ResponseType::RaceSchedule,
            ApiResponse::QualifyingResults(_) => ResponseType::QualifyingResults,
        }
    }
}

/// Decodes `body` into the shape registered for `response_type`.
///
/// `url` is only used for error context.
pub fn decode_response(
    response_type: ResponseType,
    body: &str,
    url: &str,
) -> Result<ApiResponse, AppError> {
    Ok(match response_type {
        ResponseType::Circuits => ApiResponse::Circuits(parse_body(body, url)?),
        ResponseType::Constructors => ApiResponse::Constructors(parse_body(body, url)?),
        ResponseType::Laps => ApiResponse::Laps(parse_body(body, url)?),
        ResponseType::Seasons => ApiResponse::Seasons(parse_body(body, url)?),
        ResponseType::PitStops => ApiResponse::PitStops(parse_body(body, url)?),
        ResponseType::RaceResults => ApiResponse::RaceResults(parse_body(body, url)?),
        ResponseType::RaceSchedule => ApiResponse::RaceSchedule(parse_body(body, url)?),
        ResponseType::QualifyingResults => {
            ApiResponse::QualifyingResults(parse_body(body, url)?)
        }
    })
}

/// Parses a JSON body, classifying failures as empty, non-JSON or
/// unexpected structure.
pub fn parse_body<T: DeserializeOwned>(body: &str, url: &str) -> Result<T, AppError> {
    serde_json::from_str::<T>(body).map_err(|e| {
        error!("Failed to parse API response: {} (URL: {})", e, url);
        error!(
            "Response text (first 200 chars): {}",
            body.chars().take(200).collect::<String>()
        );

        let trimmed = body.trim_start();
        if trimmed.is_empty() {
            AppError::api_no_data("Response body is empty", url)
        } else if !trimmed.starts_with('{') && !trimmed.starts_with('[') {
            AppError::api_malformed_json("Response is not valid JSON", url)
        } else {
            AppError::api_unexpected_structure(e.to_string(), url)
        }
    })
}
