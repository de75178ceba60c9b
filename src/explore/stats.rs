//! Descriptive statistics over a filtered [`RecordSet`].
//!
//! Each reporter is split in two: a `*_stats` function that computes a typed
//! summary, and a `render` method that formats it for the console. Summaries
//! over an empty record set hold `None` and render as [`NO_DATA`].

use super::tally::Tally;
use super::types::{City, RecordSet, WEEKDAYS, weekday_name};
use crate::utils::fmt_duration;
use chrono::{Datelike as _, Month, TimeDelta, Timelike as _, Weekday};

pub const NO_DATA: &str = "No data available";

const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

fn or_no_data<T>(value: Option<T>, f: impl FnOnce(T) -> String) -> String {
    value.map_or_else(|| NO_DATA.to_owned(), f)
}

fn render_counts(out: &mut String, counts: &[(String, usize)]) {
    if counts.is_empty() {
        out.push_str(&format!("  {NO_DATA}\n"));
        return;
    }
    let width = counts.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    for (name, count) in counts {
        out.push_str(&format!("  {name:<width$}  {count}\n"));
    }
}

// TIME

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStats {
    pub popular_month: Option<Month>,
    pub popular_day: Option<Weekday>,
    pub popular_hour: Option<u32>,
}

pub fn time_stats(records: &RecordSet) -> TimeStats {
    let trips = records.trips();
    let months: Tally<u32> = trips.iter().map(|t| t.start.month0()).collect();
    let days: Tally<u32> = trips
        .iter()
        .map(|t| t.start.weekday().num_days_from_monday())
        .collect();
    let hours: Tally<u32> = trips.iter().map(|t| t.start.hour()).collect();

    TimeStats {
        popular_month: months
            .mode()
            .and_then(|(m, _)| usize::try_from(m).ok())
            .and_then(|m| MONTHS.get(m).copied()),
        popular_day: days
            .mode()
            .and_then(|(d, _)| usize::try_from(d).ok())
            .and_then(|d| WEEKDAYS.get(d).copied()),
        popular_hour: hours.mode().map(|(h, _)| h),
    }
}

impl TimeStats {
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "Most common month: {}\n",
            or_no_data(self.popular_month, |m| m.name().to_owned())
        ));
        out.push_str(&format!(
            "Most common day: {}\n",
            or_no_data(self.popular_day, |d| weekday_name(d).to_owned())
        ));
        out.push_str(&format!(
            "Most common start hour: {}\n",
            or_no_data(self.popular_hour, |h| h.to_string())
        ));
        out
    }
}

// STATIONS

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub start_station: Option<(String, usize)>,
    pub end_station: Option<(String, usize)>,
    pub trip: Option<(String, usize)>,
}

pub const TRIP_SEPARATOR: &str = " to ";

pub fn station_stats(records: &RecordSet) -> StationStats {
    let trips = records.trips();
    let starts: Tally<&str> = trips
        .iter()
        .filter_map(|t| t.start_station.as_deref())
        .collect();
    let ends: Tally<&str> = trips
        .iter()
        .filter_map(|t| t.end_station.as_deref())
        .collect();
    let pairs: Tally<String> = trips
        .iter()
        .filter_map(|t| {
            let from = t.start_station.as_deref()?;
            let to = t.end_station.as_deref()?;
            Some(format!("{from}{TRIP_SEPARATOR}{to}"))
        })
        .collect();

    StationStats {
        start_station: starts.mode().map(|(s, n)| (s.to_owned(), n)),
        end_station: ends.mode().map(|(s, n)| (s.to_owned(), n)),
        trip: pairs.mode(),
    }
}

impl StationStats {
    pub fn render(&self) -> String {
        let line = |label: &str, value: &Option<(String, usize)>| match value {
            Some((name, count)) => {
                format!("Most common {label} is {name}\nIt appeared {count} times\n")
            }
            None => format!("Most common {label}: {NO_DATA}\n"),
        };
        [
            line("start station", &self.start_station),
            line("end station", &self.end_station),
            line("trip", &self.trip),
        ]
        .join("\n")
    }
}

// DURATIONS

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationStats {
    /// Trips with both a start and an end time.
    pub timed_trips: usize,
    pub total: Option<TimeDelta>,
    pub mean: Option<TimeDelta>,
}

pub fn duration_stats(records: &RecordSet) -> DurationStats {
    let durations: Vec<TimeDelta> = records.trips().iter().filter_map(|t| t.duration()).collect();
    let timed_trips = durations.len();
    if timed_trips == 0 {
        return DurationStats {
            timed_trips,
            total: None,
            mean: None,
        };
    }

    let total = durations
        .iter()
        .fold(TimeDelta::zero(), |acc, d| acc + *d);
    let mean = i64::try_from(timed_trips)
        .ok()
        .map(|n| TimeDelta::milliseconds(total.num_milliseconds() / n));

    DurationStats {
        timed_trips,
        total: Some(total),
        mean,
    }
}

impl DurationStats {
    pub fn render(&self) -> String {
        format!(
            "Total trip time: {}\nAverage trip time: {}\n",
            or_no_data(self.total, fmt_duration),
            or_no_data(self.mean, fmt_duration)
        )
    }
}

// USERS

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Demographics {
    /// The city's source has no gender or birth-year columns.
    NotCollected,
    Collected {
        genders: Vec<(String, usize)>,
        birth_years: Option<BirthYearStats>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub user_types: Vec<(String, usize)>,
    pub demographics: Demographics,
}

pub fn user_stats(records: &RecordSet, city: City) -> UserStats {
    let trips = records.trips();
    let user_types: Tally<&str> = trips
        .iter()
        .filter_map(|t| t.user_type.as_deref())
        .collect();

    let demographics = if city.has_demographics() {
        let genders: Tally<&str> = trips.iter().filter_map(|t| t.gender.as_deref()).collect();
        let years: Tally<i32> = trips.iter().filter_map(|t| t.birth_year).collect();
        let birth_years = years.mode().and_then(|(most_common, _)| {
            let earliest = trips.iter().filter_map(|t| t.birth_year).min()?;
            let most_recent = trips.iter().filter_map(|t| t.birth_year).max()?;
            Some(BirthYearStats {
                earliest,
                most_recent,
                most_common,
            })
        });
        Demographics::Collected {
            genders: owned_counts(&genders),
            birth_years,
        }
    } else {
        Demographics::NotCollected
    };

    UserStats {
        user_types: owned_counts(&user_types),
        demographics,
    }
}

fn owned_counts(tally: &Tally<&str>) -> Vec<(String, usize)> {
    tally
        .ranked()
        .into_iter()
        .map(|(name, count)| (name.to_owned(), count))
        .collect()
}

impl UserStats {
    pub fn render(&self) -> String {
        let mut out = String::from("User types and count:\n");
        render_counts(&mut out, &self.user_types);

        match &self.demographics {
            Demographics::NotCollected => {
                out.push_str("\nGender data was not collected for this city\n");
                out.push_str("\nBirth data was not collected for this city\n");
            }
            Demographics::Collected {
                genders,
                birth_years,
            } => {
                out.push_str("\nGender count:\n");
                render_counts(&mut out, genders);
                match birth_years {
                    Some(years) => out.push_str(&format!(
                        "\nYoungest service user was born in {}.\nWhile the oldest was born in {}.\nThe most common birth year is {}.\n",
                        years.most_recent, years.earliest, years.most_common
                    )),
                    None => out.push_str(&format!("\nBirth year: {NO_DATA}\n")),
                }
            }
        }
        out
    }
}
