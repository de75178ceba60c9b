use super::{records_for, row, seven_trips};
use crate::error::Result;
use crate::explore::filter::filter_records;
use crate::explore::types::{City, DayFilter, MonthFilter};
use chrono::{Month, Weekday};

#[test]
fn test_month_filter_keeps_matching_trips() -> Result<()> {
    let records = records_for(
        City::Chicago,
        &[
            row("2017-01-05 09:00:00", "2017-01-05 09:10:00"),
            row("2017-02-10 10:00:00", "2017-02-10 10:20:00"),
            row("2017-01-20 11:00:00", "2017-01-20 11:05:00"),
        ],
    )?;

    let january = filter_records(&records, MonthFilter::Only(Month::January), DayFilter::All)?;
    assert_eq!(january.len(), 2);
    assert_eq!(
        january.trips().iter().map(|t| t.row).collect::<Vec<_>>(),
        vec![0, 2]
    );
    assert_eq!(january.frame().height(), 2);

    let all = filter_records(&records, MonthFilter::All, DayFilter::All)?;
    assert_eq!(all.len(), 3);
    Ok(())
}

#[test]
fn test_all_all_is_identity() -> Result<()> {
    let records = records_for(City::Chicago, &seven_trips())?;
    let filtered = filter_records(&records, MonthFilter::All, DayFilter::All)?;
    assert_eq!(filtered.trips(), records.trips());
    assert!(filtered.frame().equals(records.frame()));
    Ok(())
}

#[test]
fn test_day_filter() -> Result<()> {
    let records = records_for(City::Chicago, &seven_trips())?;
    let mondays = filter_records(&records, MonthFilter::All, DayFilter::Only(Weekday::Mon))?;
    assert_eq!(
        mondays.trips().iter().map(|t| t.row).collect::<Vec<_>>(),
        vec![0, 1, 4, 6]
    );
    Ok(())
}

#[test]
fn test_month_and_day_commute() -> Result<()> {
    let records = records_for(City::Chicago, &seven_trips())?;
    let month = MonthFilter::Only(Month::February);
    let day = DayFilter::Only(Weekday::Wed);

    let month_first = filter_records(
        &filter_records(&records, month, DayFilter::All)?,
        MonthFilter::All,
        day,
    )?;
    let day_first = filter_records(
        &filter_records(&records, MonthFilter::All, day)?,
        month,
        DayFilter::All,
    )?;
    let together = filter_records(&records, month, day)?;

    assert_eq!(month_first.trips(), day_first.trips());
    assert_eq!(month_first.trips(), together.trips());
    assert_eq!(
        together.trips().iter().map(|t| t.row).collect::<Vec<_>>(),
        vec![3, 5]
    );
    Ok(())
}

#[test]
fn test_filter_output_is_ordered_subset() -> Result<()> {
    let records = records_for(City::Chicago, &seven_trips())?;
    let filtered = filter_records(&records, MonthFilter::Only(Month::January), DayFilter::All)?;

    let rows: Vec<usize> = filtered.trips().iter().map(|t| t.row).collect();
    assert!(rows.windows(2).all(|w| w[0] < w[1]), "rows out of order: {rows:?}");
    for trip in filtered.trips() {
        assert_eq!(&records.trips()[trip.row], trip);
    }
    Ok(())
}

#[test]
fn test_frame_stays_aligned_with_trips() -> Result<()> {
    let records = records_for(City::Chicago, &seven_trips())?;
    let filtered = filter_records(&records, MonthFilter::Only(Month::February), DayFilter::All)?;

    let starts = crate::explore::loader::cell_text(filtered.frame().column("Start Time")?)?;
    let expected: Vec<Option<String>> = filtered
        .trips()
        .iter()
        .map(|t| Some(t.start.format("%Y-%m-%d %H:%M:%S").to_string()))
        .collect();
    assert_eq!(starts, expected);
    Ok(())
}

#[test]
fn test_no_matches_gives_empty_set() -> Result<()> {
    let records = records_for(City::Chicago, &seven_trips())?;
    let june = filter_records(&records, MonthFilter::Only(Month::June), DayFilter::All)?;
    assert!(june.is_empty());
    assert_eq!(june.frame().height(), 0);
    assert_eq!(june.city(), City::Chicago);
    Ok(())
}
