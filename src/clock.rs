use chrono::{Local, NaiveDateTime};

/// Source of "now" for the date-relative helpers.
///
/// Passing the clock explicitly keeps every helper a pure function of its
/// arguments; tests pin time with [`FixedClock`].
pub trait Clock {
    /// Current wall-clock instant, in local time
    fn now(&self) -> NaiveDateTime;
}

/// Reads the host's local wall clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::at;

    #[test]
    fn test_fixed_clock_is_stable() {
        let clock = FixedClock(at(2024, 3, 15, 9, 30));
        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.now(), at(2024, 3, 15, 9, 30));
    }

    #[test]
    fn test_clock_by_reference() {
        let clock = FixedClock(at(2024, 3, 15, 9, 30));
        let by_ref: &dyn Clock = &clock;
        assert_eq!((&by_ref).now(), clock.now());
    }

    #[test]
    fn test_system_clock_advances() {
        let first = SystemClock.now();
        let second = SystemClock.now();
        assert!(second >= first);
    }
}
