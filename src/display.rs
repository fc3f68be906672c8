//! Terminal rendering of decoded responses

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io::Write;

use crate::data_fetcher::models::{Pagination, Race, RaceData, RaceEntry};
use crate::data_fetcher::{ApiResponse, Endpoint, ResponseType};
use crate::error::AppError;

const HEADER_COLOR: Color = Color::Cyan;
const DETAIL_COLOR: Color = Color::AnsiValue(231);
const ERROR_COLOR: Color = Color::Red;

/// Shows at most this many detail rows per race to keep lap output readable
const MAX_ROWS_PER_RACE: usize = 20;

fn paging_line(pagination: &Pagination, shown: usize) -> String {
    format!(
        "{} of {} (offset {})",
        shown,
        pagination.total_records(),
        pagination.offset
    )
}

fn race_heading(race: &Race) -> String {
    format!(
        "{} R{} {} - {}, {}",
        race.season, race.round, race.race_name, race.circuit.circuit_name, race.date
    )
}

fn race_lines<R: RaceEntry>(
    data: &RaceData<R>,
    rows: impl Fn(&R) -> Vec<String>,
) -> Vec<String> {
    let races = data.races();
    let mut lines = vec![paging_line(&data.pagination, races.len())];
    for race in races {
        lines.push(race_heading(race.race()));
        let detail = rows(race);
        let hidden = detail.len().saturating_sub(MAX_ROWS_PER_RACE);
        lines.extend(
            detail
                .into_iter()
                .take(MAX_ROWS_PER_RACE)
                .map(|row| format!("  {row}")),
        );
        if hidden > 0 {
            lines.push(format!("  ... {hidden} more"));
        }
    }
    lines
}

/// Builds the plain-text summary for a decoded response.
pub fn summary_lines(response: &ApiResponse) -> Vec<String> {
    match response {
        ApiResponse::Circuits(circuits) => {
            let mut lines = vec![paging_line(
                &circuits.data.pagination,
                circuits.circuits().len(),
            )];
            lines.extend(circuits.circuits().iter().map(|c| {
                format!(
                    "{:<16} {} ({}, {})",
                    c.circuit_id, c.circuit_name, c.location.locality, c.location.country
                )
            }));
            lines
        }
        ApiResponse::Constructors(constructors) => {
            let mut lines = vec![paging_line(
                &constructors.data.pagination,
                constructors.constructors().len(),
            )];
            lines.extend(
                constructors
                    .constructors()
                    .iter()
                    .map(|c| format!("{:<16} {} ({})", c.constructor_id, c.name, c.nationality)),
            );
            lines
        }
        ApiResponse::Seasons(seasons) => {
            let mut lines = vec![paging_line(&seasons.data.pagination, seasons.seasons().len())];
            lines.extend(seasons.seasons().iter().map(|s| s.season.clone()));
            lines
        }
        ApiResponse::RaceSchedule(schedule) => race_lines(&schedule.data, |race| {
            race.time
                .as_ref()
                .map(|time| vec![format!("start {time}")])
                .unwrap_or_default()
        }),
        ApiResponse::RaceResults(results) => race_lines(&results.data, |race| {
            race.results
                .iter()
                .map(|r| {
                    format!(
                        "{:>3} {:<24} {:<16} {:>5} pts  {}",
                        r.position_text,
                        r.driver.full_name(),
                        r.constructor.name,
                        r.points,
                        r.time.as_ref().map_or(r.status.as_str(), |t| t.time.as_str())
                    )
                })
                .collect()
        }),
        ApiResponse::QualifyingResults(qualifying) => race_lines(&qualifying.data, |race| {
            race.qualifying_results
                .iter()
                .map(|q| {
                    format!(
                        "{:>3} {:<24} {:<16} {}",
                        q.position,
                        q.driver.full_name(),
                        q.constructor.name,
                        q.best_time().unwrap_or("-")
                    )
                })
                .collect()
        }),
        ApiResponse::Laps(laps) => race_lines(&laps.data, |race| {
            race.laps
                .iter()
                .flat_map(|lap| {
                    lap.timings.iter().map(move |t| {
                        format!(
                            "lap {:>3}  P{:<3} {:<16} {}",
                            lap.number, t.position, t.driver_id, t.time
                        )
                    })
                })
                .collect()
        }),
        ApiResponse::PitStops(pit_stops) => race_lines(&pit_stops.data, |race| {
            race.pit_stops
                .iter()
                .map(|p| {
                    format!(
                        "lap {:>3}  stop {} {:<16} {}s",
                        p.lap, p.stop, p.driver_id, p.duration
                    )
                })
                .collect()
        }),
    }
}

/// Writes a colored summary of `response` for `endpoint`.
pub fn render_response<W: Write>(
    out: &mut W,
    endpoint: &Endpoint,
    response: &ApiResponse,
) -> Result<(), AppError> {
    queue!(
        out,
        SetForegroundColor(HEADER_COLOR),
        Print(format!("{} [{}]\n", endpoint, response.response_type())),
        SetForegroundColor(DETAIL_COLOR),
    )?;
    for line in summary_lines(response) {
        queue!(out, Print(format!("{line}\n")))?;
    }
    queue!(out, ResetColor)?;
    out.flush()?;
    Ok(())
}

/// Writes the resolved path and response type without fetching anything.
pub fn render_path<W: Write>(
    out: &mut W,
    endpoint: &Endpoint,
    response_type: Result<ResponseType, &AppError>,
) -> Result<(), AppError> {
    match response_type {
        Ok(tag) => queue!(
            out,
            Print(format!("{endpoint} ")),
            SetForegroundColor(HEADER_COLOR),
            Print(format!("{tag}\n")),
            ResetColor
        )?,
        Err(e) => queue!(
            out,
            Print(format!("{endpoint} ")),
            SetForegroundColor(ERROR_COLOR),
            Print(format!("{e}\n")),
            ResetColor
        )?,
    }
    out.flush()?;
    Ok(())
}

/// Writes an error for a single endpoint of a fan-out.
pub fn render_error<W: Write>(
    out: &mut W,
    endpoint: &Endpoint,
    error: &AppError,
) -> Result<(), AppError> {
    queue!(
        out,
        SetForegroundColor(ERROR_COLOR),
        Print(format!("{endpoint}: {error}\n")),
        ResetColor
    )?;
    out.flush()?;
    Ok(())
}
