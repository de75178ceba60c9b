use chrono::{Month, NaiveDateTime, TimeDelta, Weekday};
use polars::prelude::DataFrame;
use std::fmt;

// SOURCE COLUMNS

pub const START_TIME: &str = "Start Time";
pub const END_TIME: &str = "End Time";
pub const START_STATION: &str = "Start Station";
pub const END_STATION: &str = "End Station";
pub const USER_TYPE: &str = "User Type";
pub const GENDER: &str = "Gender";
pub const BIRTH_YEAR: &str = "Birth Year";

/// Months covered by the datasets, in calendar order.
pub const SELECTABLE_MONTHS: [Month; 6] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
];

pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

// CITIES

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [Self; 3] = [Self::Chicago, Self::NewYorkCity, Self::Washington];

    /// Canonical Title Case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chicago => "Chicago",
            Self::NewYorkCity => "New York City",
            Self::Washington => "Washington",
        }
    }

    /// Case-insensitive lookup by display name.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|city| city.as_str().eq_ignore_ascii_case(name))
    }

    /// Whether the city's source records gender and birth year.
    ///
    /// Washington never collected rider demographics, so its files carry
    /// neither column.
    pub fn has_demographics(&self) -> bool {
        !matches!(self, Self::Washington)
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// FILTERS

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Only(Month),
}

impl MonthFilter {
    /// Accepts "all" or one of the six month names, ignoring case.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.eq_ignore_ascii_case("all") {
            return Some(Self::All);
        }
        SELECTABLE_MONTHS
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(input))
            .map(Self::Only)
    }

    pub fn matches(&self, start: &NaiveDateTime) -> bool {
        use chrono::Datelike as _;
        match self {
            Self::All => true,
            Self::Only(month) => start.month() == month.number_from_month(),
        }
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(month) => f.write_str(month.name()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Only(Weekday),
}

impl DayFilter {
    /// Accepts "all" or a full weekday name, ignoring case.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.eq_ignore_ascii_case("all") {
            return Some(Self::All);
        }
        WEEKDAYS
            .into_iter()
            .find(|d| weekday_name(*d).eq_ignore_ascii_case(input))
            .map(Self::Only)
    }

    pub fn matches(&self, start: &NaiveDateTime) -> bool {
        use chrono::Datelike as _;
        match self {
            Self::All => true,
            Self::Only(day) => start.weekday() == *day,
        }
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(day) => f.write_str(weekday_name(*day)),
        }
    }
}

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSelection {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

// RECORDS

/// One trip, typed from its CSV row.
///
/// `gender` and `birth_year` are always `None` for Washington.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trip {
    /// Zero-based row position in the source file.
    pub row: usize,
    pub start: NaiveDateTime,
    pub end: Option<NaiveDateTime>,
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
}

impl Trip {
    pub fn duration(&self) -> Option<TimeDelta> {
        self.end.map(|end| end - self.start)
    }
}

/// The trips of one city, typed for statistics and kept as loaded for display.
///
/// `frame` holds every source column as text and is row-aligned with `trips`.
#[derive(Debug, Clone)]
pub struct RecordSet {
    city: City,
    frame: DataFrame,
    trips: Vec<Trip>,
}

impl RecordSet {
    pub(crate) fn new(city: City, frame: DataFrame, trips: Vec<Trip>) -> Self {
        debug_assert_eq!(frame.height(), trips.len(), "frame and trips out of step");
        Self { city, frame, trips }
    }

    pub fn city(&self) -> City {
        self.city
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}
