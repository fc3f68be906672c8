use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};

use crate::data_fetcher::{Endpoint, PathSegment, Season};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Returns true when any config command was requested
pub fn is_config_operation(args: &Args) -> bool {
    args.new_api_domain.is_some() || args.new_log_file_path.is_some() || args.clear_log_file_path
}

/// Formula 1 statistics from the Ergast API
///
/// Each command maps to one API resource. Seasons are given as a year
/// (1950 onwards) or `current`. Repeat `--season` to query several seasons
/// concurrently; leave it out to query across all seasons where the resource
/// allows it.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<EndpointCommand>,

    /// Print the resolved path and response type without contacting the API.
    #[arg(long = "path-only", global = true, help_heading = "Output")]
    pub path_only: bool,

    /// Print the decoded response as pretty JSON instead of a summary.
    #[arg(long = "json", global = true, help_heading = "Output")]
    pub json: bool,

    /// Update API domain in config. Resets to the default domain if no value is given.
    #[arg(
        long = "config",
        help_heading = "Configuration",
        value_name = "API_DOMAIN",
        num_args = 0..=1,
        default_missing_value = ""
    )]
    pub new_api_domain: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also write logs to the terminal.
    #[arg(long = "debug", global = true, help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", global = true, help_heading = "Debug")]
    pub log_file: Option<String>,
}

/// Zero or more seasons; none means all seasons
#[derive(clap::Args, Debug, Clone, PartialEq)]
pub struct OptionalSeasons {
    /// Season year or `current`. Repeat for several seasons.
    #[arg(long = "season", value_name = "SEASON")]
    pub seasons: Vec<Season>,
}

/// At least one season
#[derive(clap::Args, Debug, Clone, PartialEq)]
pub struct RequiredSeasons {
    /// Season year or `current`. Repeat for several seasons.
    #[arg(long = "season", value_name = "SEASON", required = true)]
    pub seasons: Vec<Season>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum EndpointCommand {
    /// Circuits raced on
    Circuits(OptionalSeasons),
    /// Constructors that entered
    Constructors(OptionalSeasons),
    /// Constructor championship standings
    ConstructorStandings(OptionalSeasons),
    /// Drivers that entered
    Drivers(OptionalSeasons),
    /// Driver championship standings
    DriverStandings(OptionalSeasons),
    /// Race calendar
    RaceSchedule(OptionalSeasons),
    /// Race standings
    RaceStandings(OptionalSeasons),
    /// Every championship season
    Seasons,
    /// Race results
    RaceResults(RequiredSeasons),
    /// Qualifying results
    QualifyingResults(RequiredSeasons),
    /// Pit stops for a race
    PitStops {
        #[command(flatten)]
        seasons: OptionalSeasons,
        /// Race round within the season
        #[arg(long = "race", value_name = "ROUND")]
        race: PathSegment,
    },
    /// Lap timings for a race
    LapTimes {
        #[command(flatten)]
        seasons: RequiredSeasons,
        /// Race round within the season
        #[arg(long = "race", value_name = "ROUND")]
        race: PathSegment,
        /// Restrict to a single lap
        #[arg(long = "lap", value_name = "LAP")]
        lap: Option<PathSegment>,
    },
}

/// Expands optional seasons into one entry per season, or a single `None`.
fn optional(seasons: &[Season]) -> Vec<Option<Season>> {
    if seasons.is_empty() {
        vec![None]
    } else {
        seasons.iter().copied().map(Some).collect()
    }
}

impl EndpointCommand {
    /// Builds one endpoint per requested season, in command-line order.
    pub fn endpoints(&self) -> Vec<Endpoint> {
        match self {
            EndpointCommand::Circuits(s) => {
                optional(&s.seasons).into_iter().map(Endpoint::Circuits).collect()
            }
            EndpointCommand::Constructors(s) => optional(&s.seasons)
                .into_iter()
                .map(Endpoint::Constructors)
                .collect(),
            EndpointCommand::ConstructorStandings(s) => optional(&s.seasons)
                .into_iter()
                .map(Endpoint::ConstructorStandings)
                .collect(),
            EndpointCommand::Drivers(s) => {
                optional(&s.seasons).into_iter().map(Endpoint::Drivers).collect()
            }
            EndpointCommand::DriverStandings(s) => optional(&s.seasons)
                .into_iter()
                .map(Endpoint::DriverStandings)
                .collect(),
            EndpointCommand::RaceSchedule(s) => optional(&s.seasons)
                .into_iter()
                .map(Endpoint::RaceSchedule)
                .collect(),
            EndpointCommand::RaceStandings(s) => optional(&s.seasons)
                .into_iter()
                .map(Endpoint::RaceStandings)
                .collect(),
            EndpointCommand::Seasons => vec![Endpoint::Seasons],
            EndpointCommand::RaceResults(s) => {
                s.seasons.iter().copied().map(Endpoint::RaceResults).collect()
            }
            EndpointCommand::QualifyingResults(s) => s
                .seasons
                .iter()
                .copied()
                .map(Endpoint::QualifyingResults)
                .collect(),
            EndpointCommand::PitStops { seasons, race } => optional(&seasons.seasons)
                .into_iter()
                .map(|season| Endpoint::PitStops {
                    season,
                    race: race.clone(),
                })
                .collect(),
            EndpointCommand::LapTimes { seasons, race, lap } => seasons
                .seasons
                .iter()
                .map(|season| Endpoint::LapTimes {
                    season: *season,
                    race: race.clone(),
                    lap: lap.clone(),
                })
                .collect(),
        }
    }
}
