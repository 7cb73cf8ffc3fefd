//! Member table filters
//!
//! Linear-scan filtering over an in-memory roster. Criteria combine with AND;
//! an empty filter matches everything.

use crate::error::{RosterError, RosterResult};
use crate::types::{Member, MemberStatus, MembershipTier};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inclusive calendar date range; either end may be open
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Range bounded on both ends
    #[must_use]
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Check if `date` falls inside the range
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |s| date >= s) && self.end.map_or(true, |e| date <= e)
    }

    fn is_inverted(&self) -> bool {
        matches!((self.start, self.end), (Some(s), Some(e)) if s > e)
    }
}

/// Criteria for narrowing the member table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberFilter {
    /// Case-insensitive substring over name, contact, email and membership id
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub status: Option<MemberStatus>,
    #[serde(default)]
    pub tier: Option<MembershipTier>,
    #[serde(default)]
    pub renewal_date_range: DateRange,
}

impl MemberFilter {
    /// Filter that matches every member
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With search text
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// With required status
    #[must_use]
    pub fn with_status(mut self, status: MemberStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// With required tier
    #[must_use]
    pub fn with_tier(mut self, tier: MembershipTier) -> Self {
        self.tier = Some(tier);
        self
    }

    /// With renewal date window
    #[must_use]
    pub fn with_renewal_range(mut self, range: DateRange) -> Self {
        self.renewal_date_range = range;
        self
    }

    /// Reject filters that can never match
    ///
    /// # Errors
    /// [`RosterError::InvalidFilter`] for a renewal range whose start is after its end.
    pub fn validate(&self) -> RosterResult<()> {
        if self.renewal_date_range.is_inverted() {
            return Err(RosterError::InvalidFilter(
                "renewal date range start is after end".to_string(),
            ));
        }
        Ok(())
    }

    /// Check a single member
    #[must_use]
    pub fn matches(&self, member: &Member) -> bool {
        self.status.map_or(true, |s| member.status == s)
            && self.tier.map_or(true, |t| member.membership_tier == t)
            && self.renewal_date_range.contains(member.renewal_date)
            && self.matches_search(member)
    }

    fn matches_search(&self, member: &Member) -> bool {
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [
            member.business_name.as_str(),
            member.contact_name.as_str(),
            member.email.as_str(),
            member.membership_id.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }

    /// Members matching the filter, in input order
    ///
    /// # Errors
    /// See [`MemberFilter::validate`].
    pub fn apply<'a>(&self, members: &'a [Member]) -> RosterResult<Vec<&'a Member>> {
        self.validate()?;
        let matched: Vec<&Member> = members.iter().filter(|m| self.matches(m)).collect();
        tracing::debug!(total = members.len(), matched = matched.len(), "applied member filter");
        Ok(matched)
    }
}
