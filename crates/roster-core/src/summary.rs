//! Roster and renewal summaries
//!
//! Headline figures shown above the member and renewal tables.

use crate::renewal::{MemberWithRenewalStatus, RenewalStatus};
use crate::types::{Member, MemberStatus, MembershipTier};
use serde::{Deserialize, Serialize};

/// Member counts by lifecycle status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterSummary {
    pub total: usize,
    pub active: usize,
    pub pending: usize,
    pub inactive: usize,
    pub churned: usize,
    /// Sum of prices over active members
    pub active_revenue: u64,
}

impl RosterSummary {
    /// Summarize a member list
    #[must_use]
    pub fn from_members<'a>(members: impl IntoIterator<Item = &'a Member>) -> Self {
        members.into_iter().fold(Self::default(), |mut acc, member| {
            acc.total += 1;
            if member.is_active() {
                acc.active_revenue += u64::from(member.membership_price);
            }
            match member.status {
                MemberStatus::Active => acc.active += 1,
                MemberStatus::Pending => acc.pending += 1,
                MemberStatus::Inactive => acc.inactive += 1,
                MemberStatus::Churned => acc.churned += 1,
            }
            acc
        })
    }
}

/// Member counts by renewal bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenewalSummary {
    pub total: usize,
    pub past_due: usize,
    pub due_soon: usize,
    pub upcoming: usize,
    pub renewed: usize,
    /// Sum of prices over every member, regardless of bucket
    pub estimated_revenue: u64,
}

impl RenewalSummary {
    /// Summarize annotated members
    #[must_use]
    pub fn from_members<'a>(members: impl IntoIterator<Item = &'a MemberWithRenewalStatus>) -> Self {
        members.into_iter().fold(Self::default(), |mut acc, entry| {
            acc.total += 1;
            acc.estimated_revenue += u64::from(entry.member.membership_price);
            match entry.renewal_status {
                RenewalStatus::PastDue => acc.past_due += 1,
                RenewalStatus::DueSoon => acc.due_soon += 1,
                RenewalStatus::Upcoming => acc.upcoming += 1,
                RenewalStatus::Renewed => acc.renewed += 1,
            }
            acc
        })
    }

    /// Count for one bucket
    #[must_use]
    pub fn count(&self, status: RenewalStatus) -> usize {
        match status {
            RenewalStatus::PastDue => self.past_due,
            RenewalStatus::DueSoon => self.due_soon,
            RenewalStatus::Upcoming => self.upcoming,
            RenewalStatus::Renewed => self.renewed,
        }
    }
}

/// Count and revenue for a single tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierLine {
    pub tier: MembershipTier,
    pub members: usize,
    pub revenue: u64,
}

/// Per-tier totals, in tier table order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierBreakdown {
    pub lines: Vec<TierLine>,
}

impl TierBreakdown {
    /// Tally members per tier; tiers without members are listed with zeros
    #[must_use]
    pub fn from_members<'a>(members: impl IntoIterator<Item = &'a Member>) -> Self {
        let mut lines: Vec<TierLine> = MembershipTier::ALL
            .into_iter()
            .map(|tier| TierLine {
                tier,
                members: 0,
                revenue: 0,
            })
            .collect();
        for member in members {
            if let Some(line) = lines.iter_mut().find(|l| l.tier == member.membership_tier) {
                line.members += 1;
                line.revenue += u64::from(member.membership_price);
            }
        }
        Self { lines }
    }

    /// Line for a tier
    #[must_use]
    pub fn get(&self, tier: MembershipTier) -> Option<&TierLine> {
        self.lines.iter().find(|l| l.tier == tier)
    }

    /// Share of members in `tier`, 0.0 for an empty roster
    #[must_use]
    pub fn share(&self, tier: MembershipTier) -> f64 {
        let total: usize = self.lines.iter().map(|l| l.members).sum();
        match (self.get(tier), total) {
            (Some(line), t) if t > 0 => line.members as f64 / t as f64,
            _ => 0.0,
        }
    }
}
