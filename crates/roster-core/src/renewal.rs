//! Renewal status classification
//!
//! Buckets a renewal date by how many days remain until it, counted at day
//! granularity with the ceiling of the exact difference:
//!
//! | days until renewal | status      |
//! |--------------------|-------------|
//! | `< 0`              | `past_due`  |
//! | `0..=30`           | `due_soon`  |
//! | `31..=90`          | `upcoming`  |
//! | `> 90`             | `renewed`   |
//!
//! Nothing is stored: the status is recomputed from the member's renewal date
//! and the supplied "now" on every call.

use crate::clock::{Clock, SystemClock};
use crate::error::{RosterError, RosterResult};
use crate::types::Member;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Last day offset still counted as due soon
pub const DUE_SOON_DAYS: i64 = 30;
/// Last day offset still counted as upcoming
pub const UPCOMING_DAYS: i64 = 90;

/// Derived renewal lifecycle bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenewalStatus {
    PastDue,
    DueSoon,
    Upcoming,
    Renewed,
}

impl RenewalStatus {
    /// All buckets, most urgent first
    pub const ALL: [RenewalStatus; 4] = [Self::PastDue, Self::DueSoon, Self::Upcoming, Self::Renewed];

    /// Bucket for a whole-day offset from today
    #[must_use]
    pub const fn from_days(days: i64) -> Self {
        if days < 0 {
            Self::PastDue
        } else if days <= DUE_SOON_DAYS {
            Self::DueSoon
        } else if days <= UPCOMING_DAYS {
            Self::Upcoming
        } else {
            Self::Renewed
        }
    }

    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PastDue => "past_due",
            Self::DueSoon => "due_soon",
            Self::Upcoming => "upcoming",
            Self::Renewed => "renewed",
        }
    }
}

impl std::fmt::Display for RenewalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RenewalStatus {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == needle)
            .ok_or_else(|| RosterError::UnknownStatus(s.to_string()))
    }
}

/// Parse an ISO calendar date (`YYYY-MM-DD`) or the UTC date of an RFC 3339
/// timestamp
///
/// # Errors
/// [`RosterError::InvalidDate`] when neither form parses.
pub fn parse_calendar_date(input: &str) -> RosterResult<NaiveDate> {
    let trimmed = input.trim();
    match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        Ok(date) => Ok(date),
        Err(err) => DateTime::parse_from_rfc3339(trimmed)
            .map(|ts| ts.with_timezone(&Utc).date_naive())
            .map_err(|_| RosterError::invalid_date(input, err)),
    }
}

/// Whole days from `now` until midnight UTC of `renewal`, rounded up
#[must_use]
pub fn days_until_renewal(renewal: NaiveDate, now: DateTime<Utc>) -> i64 {
    let renewal_start = renewal.and_time(NaiveTime::MIN).and_utc();
    let millis = (renewal_start - now).num_milliseconds();
    let whole = millis.div_euclid(MILLIS_PER_DAY);
    if millis.rem_euclid(MILLIS_PER_DAY) > 0 {
        whole + 1
    } else {
        whole
    }
}

/// Classify a renewal date against a calendar date
#[inline]
#[must_use]
pub fn classify_renewal_date(renewal: NaiveDate, today: NaiveDate) -> RenewalStatus {
    RenewalStatus::from_days((renewal - today).num_days())
}

/// Classify renewal date text against a calendar date
///
/// # Errors
/// [`RosterError::InvalidDate`] when `renewal` is not a date.
pub fn classify_renewal(renewal: &str, today: NaiveDate) -> RosterResult<RenewalStatus> {
    Ok(classify_renewal_date(parse_calendar_date(renewal)?, today))
}

/// Classify renewal date text against an exact instant
///
/// # Errors
/// [`RosterError::InvalidDate`] when `renewal` is not a date.
pub fn classify_renewal_at(renewal: &str, now: DateTime<Utc>) -> RosterResult<RenewalStatus> {
    let date = parse_calendar_date(renewal)?;
    Ok(RenewalStatus::from_days(days_until_renewal(date, now)))
}

/// A member together with its derived renewal status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberWithRenewalStatus {
    #[serde(flatten)]
    pub member: Member,
    pub renewal_status: RenewalStatus,
}

impl MemberWithRenewalStatus {
    /// Attach the status computed for `today`
    #[must_use]
    pub fn new(member: Member, today: NaiveDate) -> Self {
        let renewal_status = classify_renewal_date(member.renewal_date, today);
        Self {
            member,
            renewal_status,
        }
    }
}

/// Annotate each member with its renewal status for `today`
#[must_use]
pub fn with_renewal_status(members: Vec<Member>, today: NaiveDate) -> Vec<MemberWithRenewalStatus> {
    members
        .into_iter()
        .map(|member| MemberWithRenewalStatus::new(member, today))
        .collect()
}

/// Classifier bound to a time source
#[derive(Debug, Clone, Default)]
pub struct RenewalClassifier<C = SystemClock> {
    clock: C,
}

impl<C: Clock> RenewalClassifier<C> {
    /// Create classifier reading `clock`
    #[inline]
    #[must_use]
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// The underlying clock
    #[inline]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Classify renewal date text against the clock's current instant
    ///
    /// # Errors
    /// [`RosterError::InvalidDate`] when `renewal` is not a date.
    pub fn classify(&self, renewal: &str) -> RosterResult<RenewalStatus> {
        classify_renewal_at(renewal, self.clock.now())
    }

    /// Classify a parsed renewal date against the clock's current instant
    #[must_use]
    pub fn classify_date(&self, renewal: NaiveDate) -> RenewalStatus {
        RenewalStatus::from_days(days_until_renewal(renewal, self.clock.now()))
    }

    /// Annotate a batch of members
    #[must_use]
    pub fn annotate(&self, members: Vec<Member>) -> Vec<MemberWithRenewalStatus> {
        let today = self.clock.today();
        tracing::debug!(count = members.len(), %today, "annotating renewal status");
        with_renewal_status(members, today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::TimeZone;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn buckets_at_each_boundary() {
        let today = day(2025, 1, 1);
        assert_eq!(classify_renewal("2024-12-31", today).unwrap(), RenewalStatus::PastDue);
        assert_eq!(classify_renewal("2025-01-01", today).unwrap(), RenewalStatus::DueSoon);
        assert_eq!(classify_renewal("2025-01-31", today).unwrap(), RenewalStatus::DueSoon);
        assert_eq!(classify_renewal("2025-02-01", today).unwrap(), RenewalStatus::Upcoming);
        assert_eq!(classify_renewal("2025-04-01", today).unwrap(), RenewalStatus::Upcoming);
        assert_eq!(classify_renewal("2025-04-02", today).unwrap(), RenewalStatus::Renewed);
    }

    #[test]
    fn time_of_day_rounds_up_to_same_bucket() {
        let afternoon = Utc.with_ymd_and_hms(2025, 1, 1, 15, 30, 0).unwrap();
        assert_eq!(days_until_renewal(day(2025, 1, 1), afternoon), 0);
        assert_eq!(days_until_renewal(day(2024, 12, 31), afternoon), -1);
        assert_eq!(days_until_renewal(day(2025, 1, 31), afternoon), 30);
        assert_eq!(classify_renewal_at("2025-02-01", afternoon).unwrap(), RenewalStatus::Upcoming);
    }

    #[test]
    fn rfc3339_input_uses_its_date() {
        let parsed = parse_calendar_date("2025-02-01T08:00:00Z").unwrap();
        assert_eq!(parsed, day(2025, 2, 1));
    }

    #[test]
    fn malformed_dates_are_rejected() {
        for input in ["", "2025-13-01", "not a date", "01/02/2025"] {
            let err = classify_renewal(input, day(2025, 1, 1)).unwrap_err();
            assert!(err.is_invalid_date(), "{input} should be rejected");
        }
    }

    #[test]
    fn status_parses_wire_names() {
        assert_eq!("past_due".parse::<RenewalStatus>().unwrap(), RenewalStatus::PastDue);
        assert_eq!("due-soon".parse::<RenewalStatus>().unwrap(), RenewalStatus::DueSoon);
        assert!("overdue".parse::<RenewalStatus>().is_err());
    }

    #[test]
    fn classifier_reads_injected_clock() {
        let classifier = RenewalClassifier::new(FixedClock::at_date(day(2025, 1, 1)));
        assert_eq!(classifier.classify("2025-01-15").unwrap(), RenewalStatus::DueSoon);
        assert_eq!(classifier.classify_date(day(2026, 1, 1)), RenewalStatus::Renewed);
    }
}
