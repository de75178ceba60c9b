use super::types::{DayFilter, MonthFilter, RecordSet};
use crate::error::Result;
use polars::prelude::*;

/// Keeps the trips whose start time falls in the selected month and weekday.
///
/// The two predicates are independent, so applying them in either order gives
/// the same result. Row order is preserved.
///
/// # Errors
///
/// Returns an error if the underlying frame cannot be filtered.
pub fn filter_records(
    records: &RecordSet,
    month: MonthFilter,
    day: DayFilter,
) -> Result<RecordSet> {
    if month == MonthFilter::All && day == DayFilter::All {
        return Ok(records.clone());
    }

    let keep: Vec<bool> = records
        .trips()
        .iter()
        .map(|trip| month.matches(&trip.start) && day.matches(&trip.start))
        .collect();

    let mask = BooleanChunked::from_slice("keep".into(), &keep);
    let frame = records.frame().filter(&mask)?;
    let trips = records
        .trips()
        .iter()
        .zip(&keep)
        .filter(|(_, kept)| **kept)
        .map(|(trip, _)| trip.clone())
        .collect::<Vec<_>>();

    log::info!(
        "Filter month={month} day={day} kept {} of {} {} trips",
        trips.len(),
        records.len(),
        records.city()
    );

    Ok(RecordSet::new(records.city(), frame, trips))
}
