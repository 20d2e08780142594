use std::fmt::{self, Write as _};

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use tracing::debug;

use crate::{Clock, DATE_LAYOUTS, DATE_TIME_LAYOUTS, HelperError, LAST_WEEKDAY, Result, TIME_LAYOUTS};

/// Returns true when `date` falls on Monday through Friday.
pub fn is_weekday(date: NaiveDateTime) -> bool {
    date.weekday().number_from_monday() <= LAST_WEEKDAY
}

/// Counts the weekdays between two instants.
///
/// A cursor starts at `start` and walks forward one calendar day at a time
/// while at least one whole day separates it from `end`; each cursor day that
/// is a weekday counts. The final partial day is never counted, so instants
/// less than 24 hours apart give 0, and so does `start >= end`.
pub fn weekdays_between(start: NaiveDateTime, end: NaiveDateTime) -> u32 {
    let mut cursor = start;
    let mut days = 0;

    while (end - cursor).num_days() > 0 {
        if is_weekday(cursor) {
            days += 1;
        }
        match cursor.checked_add_signed(TimeDelta::days(1)) {
            Some(next) => cursor = next,
            None => break,
        }
    }

    debug!(%start, %end, days, "counted weekdays");
    days
}

/// Counts the weekdays from `start` up to the clock's current instant.
///
/// # Errors
/// Returns `HelperError::StartInFuture` if `start` is after now.
pub fn weekdays_since<C: Clock>(start: NaiveDateTime, clock: &C) -> Result<u32> {
    let now = clock.now();
    if start > now {
        debug!(%start, %now, "rejected future start date");
        return Err(HelperError::StartInFuture(start));
    }
    Ok(weekdays_between(start, now))
}

/// Counts the weekdays from the clock's current instant up to `end`.
///
/// # Errors
/// Returns `HelperError::EndInPast` if `end` is before now.
pub fn weekdays_until<C: Clock>(end: NaiveDateTime, clock: &C) -> Result<u32> {
    let now = clock.now();
    if now > end {
        debug!(%end, %now, "rejected past end date");
        return Err(HelperError::EndInPast(end));
    }
    Ok(weekdays_between(now, end))
}

/// Returns true if `date` is strictly after now.
pub fn is_in_future<C: Clock>(date: NaiveDateTime, clock: &C) -> bool {
    clock.now() < date
}

/// Returns true if `date` is not in the future. Now itself counts as past.
pub fn is_in_past<C: Clock>(date: NaiveDateTime, clock: &C) -> bool {
    !is_in_future(date, clock)
}

/// Reformats a date string.
///
/// `input` may be `YYYY-MM-DD`, `MM/DD/YYYY`, a `YYYY-MM-DD HH:MM[:SS]`
/// date-time, or RFC 3339. `format` uses strftime syntax; see
/// [`DEFAULT_DATE_FORMAT`](crate::DEFAULT_DATE_FORMAT).
///
/// # Errors
/// Returns `HelperError::UnparseableDate` if `input` matches no layout and
/// `HelperError::InvalidFormat` if `format` cannot be rendered.
pub fn format_date(input: &str, format: &str) -> Result<String> {
    let items = strftime_items(format)?;
    let trimmed = input.trim();

    if let Some(date_time) = parse_date_time(trimmed) {
        return render(date_time.format_with_items(items.iter()), format);
    }
    let date = DATE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDate::parse_from_str(trimmed, layout).ok())
        .ok_or_else(|| HelperError::UnparseableDate(input.to_owned()))?;

    render(date.format_with_items(items.iter()), format)
}

/// Reformats a time string.
///
/// `input` may be `HH:MM`, `HH:MM:SS`, `hh:mm AM`, or any date-time accepted by
/// [`format_date`]. `format` uses strftime syntax; see
/// [`DEFAULT_TIME_FORMAT`](crate::DEFAULT_TIME_FORMAT).
///
/// # Errors
/// Returns `HelperError::UnparseableDate` if `input` matches no layout and
/// `HelperError::InvalidFormat` if `format` cannot be rendered, including date
/// specifiers applied to a bare time.
pub fn format_time(input: &str, format: &str) -> Result<String> {
    let items = strftime_items(format)?;
    let trimmed = input.trim();

    if let Some(date_time) = parse_date_time(trimmed) {
        return render(date_time.format_with_items(items.iter()), format);
    }
    let time = TIME_LAYOUTS
        .iter()
        .find_map(|layout| NaiveTime::parse_from_str(trimmed, layout).ok())
        .ok_or_else(|| HelperError::UnparseableDate(input.to_owned()))?;

    render(time.format_with_items(items.iter()), format)
}

fn parse_date_time(input: &str) -> Option<NaiveDateTime> {
    DATE_TIME_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(input, layout).ok())
        .or_else(|| DateTime::parse_from_rfc3339(input).ok().map(|dt| dt.naive_local()))
}

fn strftime_items(format: &str) -> Result<Vec<Item<'_>>> {
    let items: Vec<Item<'_>> = StrftimeItems::new(format).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(HelperError::InvalidFormat(format.to_owned()));
    }
    Ok(items)
}

// chrono reports a specifier that needs missing fields as a fmt::Error
fn render(formatted: impl fmt::Display, format: &str) -> Result<String> {
    let mut out = String::new();
    write!(out, "{formatted}").map_err(|_| HelperError::InvalidFormat(format.to_owned()))?;
    Ok(out)
}
