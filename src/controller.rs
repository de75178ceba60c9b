//! The interactive session: collect filters, report, browse, repeat.

use crate::config::ExplorerConfig;
use crate::console::Console;
use crate::error::{BikeshareError, Result};
use crate::explore::browser::Browser;
use crate::explore::filter::filter_records;
use crate::explore::loader::load_city;
use crate::explore::stats::{duration_stats, station_stats, time_stats, user_stats};
use crate::explore::types::{City, DayFilter, FilterSelection, MonthFilter, RecordSet};
use crate::utils::{SEPARATOR, fmt_elapsed};
use std::io::{BufRead, Write};
use std::time::Instant;

pub const GREETING: &str = "Hello! Let's explore some US bikeshare data!";
pub const CITY_PROMPT: &str =
    "Enter the city you want to see the data for (Chicago, New York City, or Washington):";
pub const MONTH_PROMPT: &str =
    "Enter the month you want to see the data for (January, February, ... June, or all):";
pub const DAY_PROMPT: &str =
    "Enter the day you want to see the data for (Monday, Tuesday, ... Sunday, or all):";
pub const RESTART_PROMPT: &str = "Would you like to restart? Enter yes or no.";

pub struct Explorer<R, W> {
    config: ExplorerConfig,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> Explorer<R, W> {
    pub fn new(config: ExplorerConfig, console: Console<R, W>) -> Self {
        Self { config, console }
    }

    /// Runs sessions until the user declines to restart or input ends.
    ///
    /// A city whose data cannot be loaded ends only the current session; the
    /// user is told why and offered a restart.
    ///
    /// # Errors
    ///
    /// Returns an error if the console cannot be written.
    pub fn run(&mut self) -> Result<()> {
        loop {
            match self.run_once() {
                Ok(()) => {}
                Err(BikeshareError::Aborted) => {
                    log::info!("Input closed, leaving");
                    return Ok(());
                }
                Err(
                    err @ (BikeshareError::DataUnavailable { .. }
                    | BikeshareError::MissingColumn { .. }
                    | BikeshareError::DataProcessing(_)),
                ) => {
                    log::error!("{err}");
                    self.console.say(&format!("\n{err}"))?;
                }
                Err(err) => return Err(err),
            }

            match self.console.confirm(RESTART_PROMPT) {
                Ok(true) => {}
                Ok(false) | Err(BikeshareError::Aborted) => return Ok(()),
                Err(err) => return Err(err),
            }
        }
    }

    fn run_once(&mut self) -> Result<()> {
        let selection = self.get_filters()?;
        let loaded = load_city(selection.city, &self.config)?;
        let records = filter_records(&loaded, selection.month, selection.day)?;
        self.report(&selection, &records)?;
        self.browse(&records)
    }

    /// Prompts for city, month and day, re-asking until each answer is valid.
    ///
    /// # Errors
    ///
    /// [`BikeshareError::Aborted`] if input ends first.
    pub fn get_filters(&mut self) -> Result<FilterSelection> {
        self.console.say(GREETING)?;
        let city = self.console.ask_until(CITY_PROMPT, City::from_name)?;
        let month = self.console.ask_until(MONTH_PROMPT, MonthFilter::parse)?;
        let day = self.console.ask_until(DAY_PROMPT, DayFilter::parse)?;
        self.console.say(SEPARATOR)?;
        Ok(FilterSelection { city, month, day })
    }

    /// Prints every statistics section for `records`.
    ///
    /// # Errors
    ///
    /// Returns an error if the console cannot be written.
    pub fn report(&mut self, selection: &FilterSelection, records: &RecordSet) -> Result<()> {
        self.console.say(&format!(
            "{} trips in {} (month: {}, day: {})",
            records.len(),
            selection.city,
            selection.month,
            selection.day
        ))?;

        self.section("Calculating The Most Frequent Times of Travel...", || {
            time_stats(records).render()
        })?;
        self.section("Calculating The Most Popular Stations and Trip...", || {
            station_stats(records).render()
        })?;
        self.section("Calculating Trip Duration...", || {
            duration_stats(records).render()
        })?;
        self.section("Calculating User Stats...", || {
            user_stats(records, selection.city).render()
        })
    }

    fn section(&mut self, title: &str, compute: impl FnOnce() -> String) -> Result<()> {
        self.console.say(&format!("\n{title}\n"))?;
        let started = Instant::now();
        let body = compute();
        let elapsed = started.elapsed();
        self.console.say(body.trim_end())?;
        if self.config.show_timing {
            self.console.say(&format!("\n{}", fmt_elapsed(elapsed)))?;
        }
        self.console.say(SEPARATOR)
    }

    /// Shows raw rows a page at a time while the user answers "yes".
    ///
    /// # Errors
    ///
    /// [`BikeshareError::Aborted`] if input ends, or a console/frame error.
    pub fn browse(&mut self, records: &RecordSet) -> Result<()> {
        let question = format!(
            "Would you like to see {} lines of raw data? Enter yes or no.",
            self.config.page_size
        );
        let mut browser = Browser::new(self.config.page_size);
        while self.console.confirm(&question)? {
            let page = browser.next_page(records)?;
            log::debug!("Showing {} raw rows ending at offset {}", page.len(), browser.offset());
            if !page.is_empty() {
                self.console.say(page.render().trim_end())?;
            }
        }
        Ok(())
    }
}
