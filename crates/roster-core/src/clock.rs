//! Time source abstraction
//!
//! Renewal classification is relative to "now". Callers pick the source:
//! wall time in production, a pinned instant in tests and reports.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Source of the current instant
pub trait Clock {
    /// Current instant
    fn now(&self) -> DateTime<Utc>;

    /// Current calendar date (UTC)
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Reads the system wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    /// Pin the clock to an instant
    #[inline]
    #[must_use]
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(now)
    }

    /// Pin the clock to midnight UTC of a date
    #[inline]
    #[must_use]
    pub fn at_date(date: NaiveDate) -> Self {
        Self(date.and_time(NaiveTime::MIN).and_utc())
    }
}

impl Clock for FixedClock {
    #[inline]
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
