use super::{records_for, seven_trips};
use crate::error::Result;
use crate::explore::browser::{Browser, page};
use crate::explore::types::City;

#[test]
fn test_pages_of_five_then_two() -> Result<()> {
    let records = records_for(City::Chicago, &seven_trips())?;
    let mut browser = Browser::new(5);

    let first = browser.next_page(&records)?;
    let second = browser.next_page(&records)?;
    let third = browser.next_page(&records)?;

    assert_eq!(first.len(), 5);
    assert_eq!(second.len(), 2);
    assert!(third.is_empty());
    assert_eq!(browser.offset(), 15);
    Ok(())
}

#[test]
fn test_page_includes_every_column() -> Result<()> {
    let records = records_for(City::Chicago, &seven_trips())?;
    let page = page(&records, 5, 5)?;

    assert_eq!(
        page.headers,
        vec![
            "",
            "Start Time",
            "End Time",
            "Start Station",
            "End Station",
            "User Type",
            "Gender",
            "Birth Year"
        ]
    );
    assert_eq!(page.rows[0][0], "5");
    assert_eq!(page.rows[0][1], "2017-02-08 08:30:00");
    assert_eq!(page.rows[1][0], "6");
    assert_eq!(page.rows[1][7], "1985.0");
    Ok(())
}

#[test]
fn test_page_past_end_is_empty() -> Result<()> {
    let records = records_for(City::Washington, &seven_trips())?;
    let page = page(&records, 40, 5)?;
    assert!(page.is_empty());
    assert_eq!(page.headers.len(), 6);
    Ok(())
}

#[test]
fn test_render_is_fixed_width() -> Result<()> {
    let records = records_for(City::Washington, &seven_trips()[..2])?;
    let text = page(&records, 0, 5)?.render();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 4, "header, rule and two rows: {text}");
    assert!(lines[0].contains("Start Time"));
    assert!(lines[1].starts_with("-  ---"), "got: {}", lines[1]);
    let column = lines[0].find("End Time").unwrap();
    assert_eq!(&lines[2][column..column + 19], "2017-01-02 08:20:00");
    assert_eq!(&lines[3][column..column + 19], "2017-01-02 17:30:00");
    Ok(())
}
