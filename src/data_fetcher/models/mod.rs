pub mod circuits;
pub mod common;
pub mod constructors;
pub mod races;
pub mod seasons;

pub use circuits::{CircuitTable, Circuits, CircuitsData};
pub use common::{Circuit, Constructor, Driver, Location, Pagination};
pub use constructors::{ConstructorTable, Constructors, ConstructorsData};
pub use races::{
    AverageSpeed, FastestLap, Lap, Laps, LapsRace, PitStop, PitStops, PitStopsRace,
    QualifyingRace, QualifyingResult, QualifyingResults, Race, RaceData, RaceEntry, RaceResult,
    RaceResults, RaceSchedule, RaceTable, ResultTime, ResultsRace, Timing,
};
pub use seasons::{SeasonEntry, SeasonTable, Seasons, SeasonsData};
