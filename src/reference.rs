//! Fixed lookup tables for populating form select boxes.

use std::fmt;

use chrono::Datelike;
use indexmap::IndexMap;
use serde::Serialize;

use crate::{Clock, Month, STATE_PLACEHOLDER_LABEL, prelude::*};

/// A US state (or DC) with its postal abbreviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[display(fmt = "{name} ({code})")]
pub struct UsState {
    pub code: &'static str,
    pub name: &'static str,
}

const fn state(code: &'static str, name: &'static str) -> UsState {
    UsState { code, name }
}

/// The 50 states plus the District of Columbia, in the customary listing order.
pub const US_STATES: [UsState; 51] = [
    state("AL", "Alabama"),
    state("AK", "Alaska"),
    state("AZ", "Arizona"),
    state("AR", "Arkansas"),
    state("CA", "California"),
    state("CO", "Colorado"),
    state("CT", "Connecticut"),
    state("DE", "Delaware"),
    state("DC", "District of Columbia"),
    state("FL", "Florida"),
    state("GA", "Georgia"),
    state("HI", "Hawaii"),
    state("ID", "Idaho"),
    state("IL", "Illinois"),
    state("IN", "Indiana"),
    state("IA", "Iowa"),
    state("KS", "Kansas"),
    state("KY", "Kentucky"),
    state("LA", "Louisiana"),
    state("ME", "Maine"),
    state("MD", "Maryland"),
    state("MA", "Massachusetts"),
    state("MI", "Michigan"),
    state("MN", "Minnesota"),
    state("MS", "Mississippi"),
    state("MO", "Missouri"),
    state("MT", "Montana"),
    state("NE", "Nebraska"),
    state("NV", "Nevada"),
    state("NH", "New Hampshire"),
    state("NJ", "New Jersey"),
    state("NM", "New Mexico"),
    state("NY", "New York"),
    state("NC", "North Carolina"),
    state("ND", "North Dakota"),
    state("OH", "Ohio"),
    state("OK", "Oklahoma"),
    state("OR", "Oregon"),
    state("PA", "Pennsylvania"),
    state("RI", "Rhode Island"),
    state("SC", "South Carolina"),
    state("SD", "South Dakota"),
    state("TN", "Tennessee"),
    state("TX", "Texas"),
    state("UT", "Utah"),
    state("VT", "Vermont"),
    state("VA", "Virginia"),
    state("WA", "Washington"),
    state("WV", "West Virginia"),
    state("WI", "Wisconsin"),
    state("WY", "Wyoming"),
];

/// Returns state code → name in listing order.
///
/// With `with_placeholder`, an empty code labelled "Select..." comes first.
pub fn us_states(with_placeholder: bool) -> IndexMap<&'static str, &'static str> {
    let placeholder = with_placeholder.then_some(("", STATE_PLACEHOLDER_LABEL));
    placeholder
        .into_iter()
        .chain(US_STATES.iter().map(|s| (s.code, s.name)))
        .collect()
}

/// One option of a card-expiry month select box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ExpMonth {
    pub month: Month,
    pub name:  Option<&'static str>,
}

impl fmt::Display for ExpMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name {
            Some(name) => write!(f, "{:02} - {name}", self.month.get()),
            None => write!(f, "{:02}", self.month.get()),
        }
    }
}

/// Months 1 through 12, optionally labelled with their names.
pub fn exp_months(with_name: bool) -> Vec<ExpMonth> {
    Month::all()
        .map(|month| ExpMonth {
            month,
            name: with_name.then(|| month.name()),
        })
        .collect()
}

/// The current calendar year through `years_ahead` years later, inclusive.
pub fn exp_years<C: Clock>(years_ahead: u16, clock: &C) -> Vec<i32> {
    let current = clock.now().year();
    (current..=current + i32::from(years_ahead)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::clock_at;
    use std::collections::HashSet;

    #[test]
    fn test_us_states_without_placeholder() {
        let states = us_states(false);
        assert_eq!(states.len(), 51);
        assert!(!states.contains_key(""));
        assert_eq!(states.get_index(0), Some((&"AL", &"Alabama")));
        assert_eq!(states.get_index(50), Some((&"WY", &"Wyoming")));
        assert_eq!(states["DC"], "District of Columbia");
    }

    #[test]
    fn test_us_states_with_placeholder() {
        let states = us_states(true);
        assert_eq!(states.len(), 52);
        assert_eq!(states.get_index(0), Some((&"", &"Select...")));
        assert_eq!(states.get_index(1), Some((&"AL", &"Alabama")));
    }

    #[test]
    fn test_us_states_codes_unique() {
        let codes: HashSet<&str> = US_STATES.iter().map(|s| s.code).collect();
        assert_eq!(codes.len(), US_STATES.len());
        assert!(US_STATES.iter().all(|s| s.code.len() == 2));
    }

    #[test]
    fn test_us_states_stable_across_calls() {
        assert_eq!(us_states(false), us_states(false));
        let first: Vec<_> = us_states(true).into_iter().collect();
        let second: Vec<_> = us_states(true).into_iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_us_state_display() {
        assert_eq!(US_STATES[4].to_string(), "California (CA)");
    }

    #[test]
    fn test_exp_months() {
        let plain = exp_months(false);
        assert_eq!(plain.len(), 12);
        assert_eq!(plain[0].to_string(), "01");
        assert_eq!(plain[11].to_string(), "12");
        assert!(plain.iter().all(|m| m.name.is_none()));

        let named = exp_months(true);
        assert_eq!(named[0].to_string(), "01 - January");
        assert_eq!(named[8].to_string(), "09 - September");
        assert_eq!(named[8].month.get(), 9);
    }

    #[test]
    fn test_exp_month_serde() {
        let month = exp_months(true)[2];
        let json = serde_json::to_string(&month).unwrap();
        assert_eq!(json, r#"{"month":3,"name":"March"}"#);
    }

    #[test]
    fn test_exp_years() {
        let clock = clock_at(2026, 10, 19, 8, 0);
        assert_eq!(exp_years(3, &clock), vec![2026, 2027, 2028, 2029]);
        assert_eq!(exp_years(0, &clock), vec![2026]);
    }
}
