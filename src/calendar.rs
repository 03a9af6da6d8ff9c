use crate::models::MonthNavigation;
use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::Serialize;
use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid month '{0}', expected YYYY-MM")]
pub struct ParseYearMonthError(String);

impl FromStr for YearMonth {
    type Err = ParseYearMonthError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseYearMonthError(value.to_string());
        let (year, month) = value.trim().split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }
        Ok(Self { year, month })
    }
}

/// One day in the month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateCell {
    pub date: NaiveDate,
    pub week: i64,
    pub is_other_month: bool,
    pub is_today: bool,
    pub is_selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarWeek {
    pub week: i64,
    pub cells: Vec<DateCell>,
}

/// Every date from the Sunday on or before the first of `viewed`'s month through the
/// Saturday on or after its last day.
pub fn visible_cells(viewed: NaiveDate, selected: NaiveDate, today: NaiveDate) -> Vec<DateCell> {
    let first = first_of_month(viewed);
    let last = last_of_month(viewed);
    let start = week_start(first);
    let end = week_start(last) + Duration::days(6);
    let year_start = first - Duration::days(first.ordinal0() as i64);

    let mut cells = Vec::with_capacity(42);
    let mut date = start;
    while date <= end {
        cells.push(DateCell {
            date,
            week: week_of_year(week_start(date), year_start),
            is_other_month: date.month() != viewed.month() || date.year() != viewed.year(),
            is_today: date == today,
            is_selected: date == selected,
        });
        date += Duration::days(1);
    }
    cells
}

pub fn weeks(viewed: NaiveDate, selected: NaiveDate, today: NaiveDate) -> Vec<CalendarWeek> {
    visible_cells(viewed, selected, today)
        .chunks(7)
        .map(|chunk| CalendarWeek {
            week: chunk[0].week,
            cells: chunk.to_vec(),
        })
        .collect()
}

/// The month currently displayed. Independent of the selected date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthView {
    viewed: NaiveDate,
}

impl MonthView {
    pub fn new(viewed: NaiveDate) -> Self {
        Self { viewed }
    }

    pub fn viewed(&self) -> NaiveDate {
        self.viewed
    }

    pub fn year_month(&self) -> YearMonth {
        YearMonth::of(self.viewed)
    }

    pub fn label(&self) -> String {
        self.year_month().to_string()
    }

    /// Day of month is clamped, so Jan 31 moves to the last day of February.
    pub fn add(&mut self) {
        if let Some(next) = self.viewed.checked_add_months(Months::new(1)) {
            self.viewed = next;
        }
    }

    pub fn subtract(&mut self) {
        if let Some(previous) = self.viewed.checked_sub_months(Months::new(1)) {
            self.viewed = previous;
        }
    }

    pub fn today(&mut self, today: NaiveDate) {
        self.viewed = today;
    }

    pub fn navigate(&mut self, direction: MonthNavigation, today: NaiveDate) {
        match direction {
            MonthNavigation::Add => self.add(),
            MonthNavigation::Subtract => self.subtract(),
            MonthNavigation::Today => self.today(today),
        }
    }

    pub fn cells(&self, selected: NaiveDate, today: NaiveDate) -> Vec<DateCell> {
        visible_cells(self.viewed, selected, today)
    }

    pub fn weeks(&self, selected: NaiveDate, today: NaiveDate) -> Vec<CalendarWeek> {
        weeks(self.viewed, selected, today)
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.day0() as i64)
}

fn last_of_month(date: NaiveDate) -> NaiveDate {
    match first_of_month(date).checked_add_months(Months::new(1)) {
        Some(next) => next - Duration::days(1),
        None => NaiveDate::MAX,
    }
}

fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

/// Sunday-first week number where week 1 contains January 1 of `year_start`'s year.
/// Weeks past the end of that year keep counting (53) instead of wrapping to 1.
fn week_of_year(sunday: NaiveDate, year_start: NaiveDate) -> i64 {
    let offset = year_start.weekday().num_days_from_sunday() as i64;
    ((sunday - year_start).num_days() + offset).div_euclid(7) + 1
}
