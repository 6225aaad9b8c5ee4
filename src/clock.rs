//! Source of "today" for age calculations.

use chrono::NaiveDate;

pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Local wall-clock date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Whole years between `birthdate` and `today`, counting 365 days per year.
///
/// Leap days are ignored, so this can run ahead of the calendar age near birthdays.
pub fn age_in_years(birthdate: NaiveDate, today: NaiveDate) -> i64 {
    (today - birthdate).num_days().div_euclid(365)
}
