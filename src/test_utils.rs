//! Constructors shared by the unit tests.

use chrono::{NaiveDate, NaiveDateTime};

use crate::FixedClock;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_else(|| panic!("invalid test date {year}-{month}-{day}"))
}

pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    date(year, month, day)
        .and_hms_opt(hour, minute, 0)
        .unwrap_or_else(|| panic!("invalid test time {hour}:{minute}"))
}

pub fn midnight(year: i32, month: u32, day: u32) -> NaiveDateTime {
    at(year, month, day, 0, 0)
}

pub fn clock_at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> FixedClock {
    FixedClock(at(year, month, day, hour, minute))
}
