//! # bikeshare - Interactive explorer for US bikeshare trip data
//!
//! Loads the trip records of Chicago, New York City or Washington, narrows them
//! to a month and/or weekday, and reports:
//!
//! - the most frequent month, weekday and start hour
//! - the most popular start station, end station and trip
//! - total and average trip duration
//! - user type counts and, where collected, gender and birth-year statistics
//!
//! followed by an optional page-by-page view of the raw rows.
//!
//! ## Quick Start
//!
//! ```no_run
//! use bikeshare::config::ExplorerConfig;
//! use bikeshare::explore::{self, City, DayFilter, MonthFilter};
//!
//! # fn example() -> bikeshare::error::Result<()> {
//! let config = ExplorerConfig::default();
//! let trips = explore::load_city(City::Chicago, &config)?;
//! let mondays = explore::filter_records(&trips, MonthFilter::All, DayFilter::Only(chrono::Weekday::Mon))?;
//! print!("{}", explore::time_stats(&mondays).render());
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`explore`]: loading, filtering, statistics and raw-row paging
//! - [`controller`]: the interactive prompt-report-browse loop
//! - [`console`]: prompt helpers over any reader/writer
//! - [`config`]: data locations and display settings
//! - [`error`]: error type and result alias

#![warn(clippy::all, rust_2018_idioms)]

pub mod config;
pub mod console;
pub mod controller;
pub mod error;
pub mod explore;
pub mod logging;
pub mod utils;
