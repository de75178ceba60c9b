//! Reads a city's trip file into a [`RecordSet`].
//!
//! Every CSV column is read as text so the raw browser can show cells exactly
//! as they appear in the source. The columns the statistics need are then typed
//! into [`Trip`] values: timestamps through chrono, birth years as whole years.

use super::types::{
    BIRTH_YEAR, City, END_STATION, END_TIME, GENDER, RecordSet, START_STATION, START_TIME, Trip,
    USER_TYPE,
};
use crate::config::ExplorerConfig;
use crate::error::{BikeshareError, Result};
use chrono::NaiveDateTime;
use polars::prelude::*;
use std::path::Path;

const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Loads the configured source for `city`. No filtering is applied.
///
/// # Errors
///
/// [`BikeshareError::DataUnavailable`] if the file is missing or cannot be parsed
/// as CSV; [`BikeshareError::MissingColumn`] or [`BikeshareError::DataProcessing`]
/// if its contents do not describe trips.
pub fn load_city(city: City, config: &ExplorerConfig) -> Result<RecordSet> {
    let path = config.source_path(city);
    let frame = read_frame(city, &path)?;
    let records = record_set_from_frame(city, frame)?;
    log::info!(
        "Loaded {} trips for {city} from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}

fn read_frame(city: City, path: &Path) -> Result<DataFrame> {
    let unavailable = |reason: String| BikeshareError::DataUnavailable {
        city,
        path: path.to_path_buf(),
        reason,
    };

    if !path.is_file() {
        return Err(unavailable("file not found".to_owned()));
    }

    LazyCsvReader::new(path)
        .with_has_header(true)
        // Zero-length inference reads every column as String.
        .with_infer_schema_length(Some(0))
        .finish()
        .and_then(LazyFrame::collect)
        .map_err(|e| unavailable(e.to_string()))
}

/// Types the trip columns of an all-text frame.
///
/// # Errors
///
/// Fails if a required column is absent or a start time cannot be parsed.
pub fn record_set_from_frame(city: City, frame: DataFrame) -> Result<RecordSet> {
    let starts = text_column(city, &frame, START_TIME)?;
    let ends = text_column(city, &frame, END_TIME)?;
    let start_stations = text_column(city, &frame, START_STATION)?;
    let end_stations = text_column(city, &frame, END_STATION)?;
    let user_types = text_column(city, &frame, USER_TYPE)?;

    let (genders, birth_years) = if city.has_demographics() {
        (
            text_column(city, &frame, GENDER)?,
            text_column(city, &frame, BIRTH_YEAR)?,
        )
    } else {
        (vec![None; frame.height()], vec![None; frame.height()])
    };

    let mut trips = Vec::with_capacity(frame.height());
    let columns = starts
        .into_iter()
        .zip(ends)
        .zip(start_stations)
        .zip(end_stations)
        .zip(user_types)
        .zip(genders)
        .zip(birth_years);

    for (row, ((((((start, end), start_station), end_station), user_type), gender), birth_year)) in
        columns.enumerate()
    {
        let start = start
            .as_deref()
            .and_then(parse_timestamp)
            .ok_or_else(|| {
                BikeshareError::DataProcessing(format!(
                    "{city} row {row}: invalid {START_TIME} {start:?}"
                ))
            })?;

        let end = end.as_deref().and_then(parse_timestamp);
        if end.is_none() {
            log::debug!("{city} row {row}: no usable {END_TIME}, excluded from durations");
        }

        let birth_year = birth_year.as_deref().and_then(|raw| {
            let year = parse_birth_year(raw);
            if year.is_none() {
                log::debug!("{city} row {row}: ignoring {BIRTH_YEAR} {raw:?}");
            }
            year
        });

        trips.push(Trip {
            row,
            start,
            end,
            start_station,
            end_station,
            user_type,
            gender,
            birth_year,
        });
    }

    Ok(RecordSet::new(city, frame, trips))
}

/// Reads a column as trimmed text; empty cells become `None`.
pub(crate) fn cell_text(column: &Column) -> Result<Vec<Option<String>>> {
    let series = column.as_materialized_series().cast(&DataType::String)?;
    let values = series
        .str()?
        .into_iter()
        .map(|cell| {
            cell.map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_owned)
        })
        .collect();
    Ok(values)
}

fn text_column(city: City, frame: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let column = frame
        .column(name)
        .map_err(|_| BikeshareError::MissingColumn {
            city,
            column: name.to_owned(),
        })?;
    cell_text(column)
}

pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

/// Birth years are stored as floats ("1989.0") in the source files.
pub fn parse_birth_year(raw: &str) -> Option<i32> {
    let value = raw.trim().parse::<f64>().ok()?;
    if !value.is_finite() || value < f64::from(i32::MIN) || value > f64::from(i32::MAX) {
        return None;
    }
    Some(value.trunc() as i32)
}
