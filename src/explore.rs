//! Loading, filtering and summarising bikeshare trips.
//!
//! The pipeline for one session is:
//!
//! ```text
//! loader::load_city ─> filter::filter_records ─> stats::{time, station, duration, user}_stats
//!                                             └─> browser::Browser
//! ```

pub mod browser;
pub mod filter;
pub mod loader;
pub mod stats;
pub mod tally;
pub mod types;

pub use browser::{Browser, RawPage};
pub use filter::filter_records;
pub use loader::{load_city, record_set_from_frame};
pub use stats::{
    BirthYearStats, Demographics, DurationStats, StationStats, TimeStats, UserStats,
    duration_stats, station_stats, time_stats, user_stats,
};
pub use types::{City, DayFilter, FilterSelection, MonthFilter, RecordSet, Trip};
