#![expect(clippy::unwrap_used)]

use bikeshare::config::ExplorerConfig;
use bikeshare::console::Console;
use bikeshare::controller::{Explorer, GREETING, RESTART_PROMPT};
use bikeshare::explore::{City, load_city};
use std::path::PathBuf;

fn fixture_config() -> ExplorerConfig {
    ExplorerConfig {
        data_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata"),
        show_timing: false,
        ..Default::default()
    }
}

fn session(config: ExplorerConfig, input: &str) -> String {
    let mut out = Vec::new();
    Explorer::new(config, Console::new(input.as_bytes(), &mut out))
        .run()
        .expect("session should finish cleanly");
    String::from_utf8(out).unwrap()
}

/// Raw-data lines start with the source row index followed by a timestamp.
fn raw_row_count(text: &str) -> usize {
    text.lines()
        .filter(|line| {
            let mut words = line.split_whitespace();
            words.next().is_some_and(|w| w.parse::<usize>().is_ok())
                && words.next().is_some_and(|w| w.starts_with("2017-"))
        })
        .count()
}

#[test]
fn test_fixtures_load() {
    let config = fixture_config();
    assert_eq!(load_city(City::Chicago, &config).unwrap().len(), 7);
    assert_eq!(load_city(City::NewYorkCity, &config).unwrap().len(), 3);
    assert_eq!(load_city(City::Washington, &config).unwrap().len(), 4);
}

#[test]
fn test_full_chicago_session() {
    let text = session(fixture_config(), "Chicago\nall\nall\nyes\nyes\nno\nno\n");

    assert!(text.starts_with(GREETING));
    assert!(text.contains("7 trips in Chicago (month: all, day: all)"));

    assert!(text.contains("Most common month: January"));
    assert!(text.contains("Most common day: Monday"));
    assert!(text.contains("Most common start hour: 8"));

    assert!(text.contains("Most common start station is Canal St & Adams St\nIt appeared 4 times"));
    assert!(text.contains("Most common end station is Clinton St & Washington Blvd"));
    assert!(text.contains(
        "Most common trip is Canal St & Adams St to Clinton St & Washington Blvd\nIt appeared 4 times"
    ));

    assert!(text.contains("Total trip time: 0 days 02:45:00"));
    assert!(text.contains("Average trip time: 0 days 00:23:34.285"));

    assert!(text.contains("User types and count:"));
    assert!(text.contains("Subscriber  5"));
    assert!(text.contains("Customer    2"));
    assert!(text.contains("Gender count:"));
    assert!(text.contains("Male    3"));
    assert!(text.contains("Female  2"));
    assert!(text.contains("Youngest service user was born in 1999."));
    assert!(text.contains("While the oldest was born in 1972."));
    assert!(text.contains("The most common birth year is 1985."));

    assert!(!text.contains("This took"));
    assert_eq!(raw_row_count(&text), 7);
    assert_eq!(text.matches(RESTART_PROMPT).count(), 1);
}

#[test]
fn test_browsing_stops_after_first_page() {
    let text = session(fixture_config(), "chicago\nall\nall\nyes\nno\nno\n");
    assert_eq!(raw_row_count(&text), 5);
    assert!(text.contains("Start Time"));
    assert!(text.contains("Birth Year"));
}

#[test]
fn test_filtered_chicago_session() {
    let text = session(fixture_config(), "chicago\njanuary\nmonday\nyes\nno\n");

    assert!(text.contains("3 trips in Chicago (month: January, day: Monday)"));
    assert!(text.contains("Most common start hour: 8"));
    assert!(text.contains("Total trip time: 0 days 00:40:00"));
    assert_eq!(raw_row_count(&text), 3);
}

#[test]
fn test_washington_has_no_demographics() {
    let text = session(fixture_config(), "washington\nall\nall\nno\nno\n");

    assert!(text.contains("4 trips in Washington"));
    assert!(text.contains("Most common month: June"));
    assert!(text.contains("Gender data was not collected for this city"));
    assert!(text.contains("Birth data was not collected for this city"));
    assert!(!text.contains("Gender count:"));
}

#[test]
fn test_empty_selection_reports_no_data() {
    let text = session(fixture_config(), "new york city\njanuary\nall\nyes\nno\nno\n");

    assert!(text.contains("0 trips in New York City (month: January, day: all)"));
    assert!(text.contains("Most common month: No data available"));
    assert!(text.contains("Total trip time: No data available"));
    assert!(text.contains("Birth year: No data available"));
    assert_eq!(raw_row_count(&text), 0);
}

#[test]
fn test_restart_runs_another_session() {
    let text = session(
        fixture_config(),
        "chicago\nall\nall\nno\nyes\nnew york city\nall\nall\nno\nno\n",
    );

    assert_eq!(text.matches(GREETING).count(), 2);
    assert_eq!(text.matches(RESTART_PROMPT).count(), 2);
    assert!(text.contains("3 trips in New York City"));
}

#[test]
fn test_timing_footer_per_section() {
    let config = ExplorerConfig {
        show_timing: true,
        ..fixture_config()
    };
    let text = session(config, "chicago\nall\nall\nno\nno\n");
    assert_eq!(text.matches("This took").count(), 4);
}

#[test]
fn test_missing_city_file_offers_restart() {
    let mut config = fixture_config();
    config.sources.washington = "no_such_file.csv".to_owned();
    let text = session(config, "washington\nall\nall\nyes\nchicago\nall\nall\nno\nno\n");

    assert!(text.contains("Data for Washington is unavailable"));
    assert!(text.contains("7 trips in Chicago"));
}

#[test]
fn test_input_closing_mid_session_exits_cleanly() {
    let text = session(fixture_config(), "chicago\nall\n");
    assert!(!text.contains("trips in"));
}

#[test]
fn test_non_utf8_answer_reprompts_then_reports() {
    let input: &[u8] = b"Chicag\xf6\nchicago\nall\nall\nno\nno\n";
    let mut out = Vec::new();
    Explorer::new(fixture_config(), Console::new(input, &mut out))
        .run()
        .expect("invalid bytes are just another bad answer");
    let text = String::from_utf8_lossy(&out);
    assert!(text.contains("7 trips in Chicago"));
}
