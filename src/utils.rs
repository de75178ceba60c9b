use chrono::TimeDelta;
use std::time::Duration;

/// Line printed between report sections.
pub const SEPARATOR: &str = "----------------------------------------";

/// Formats a time span as `D days HH:MM:SS`, adding milliseconds when non-zero.
///
/// Negative spans count whole days down and the clock part up, so one minute
/// and one second before zero is `-1 days +23:58:59`.
pub fn fmt_duration(delta: TimeDelta) -> String {
    const DAY_MS: i64 = 86_400_000;
    let total_ms = delta.num_milliseconds();
    let days = total_ms.div_euclid(DAY_MS);
    let clock_ms = total_ms.rem_euclid(DAY_MS);

    let hours = clock_ms / 3_600_000;
    let minutes = clock_ms / 60_000 % 60;
    let seconds = clock_ms / 1_000 % 60;
    let millis = clock_ms % 1_000;

    let sign = if days < 0 { "+" } else { "" };
    let mut out = format!("{days} days {sign}{hours:02}:{minutes:02}:{seconds:02}");
    if millis > 0 {
        out.push_str(&format!(".{millis:03}"));
    }
    out
}

/// Formats a section's computation time for the timing footer.
pub fn fmt_elapsed(elapsed: Duration) -> String {
    format!("This took {:.6} seconds.", elapsed.as_secs_f64())
}
