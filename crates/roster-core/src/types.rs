//! Core types for the roster
//!
//! Defines the records the dashboard consumes:
//! - Member identity, profile, location and commercial fields
//! - Membership tiers with their base prices and sampling weights
//! - Prospective-member applications and their review status

use crate::error::RosterError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Sequence-assigned record identifier (1-based)
///
/// Travels as a decimal string, the way the dashboard keys its rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct RecordId(pub u64);

impl RecordId {
    /// Identifier for the zero-based position in a batch
    #[inline]
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self(index as u64 + 1)
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse()
            .map(Self)
            .map_err(|_| RosterError::InvalidRecordId(s.to_string()))
    }
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for RecordId {
    type Error = RosterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Formats `PREFIX-NNNNNN` identifiers, zero-padded to six digits
///
/// Uniqueness within a batch comes from the sequence number, not randomness.
#[inline]
#[must_use]
pub fn sequence_code(prefix: &str, sequence: u64) -> String {
    format!("{prefix}-{sequence:06}")
}

/// Postal address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    /// Two-letter state abbreviation
    pub state: String,
    pub zip_code: String,
}

/// Membership categories, in sampling-table order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MembershipTier {
    /// Pharmacy owner membership (first location)
    Pharmacy,
    StaffPharmacist,
    /// Non-pharmacist owners and managers
    Sustaining,
    Retired,
    Student,
    /// Long-term care division
    LtcDivision,
    /// Priced upon inquiry
    Corporate,
}

impl MembershipTier {
    /// All tiers in sampling-table order
    pub const ALL: [MembershipTier; 7] = [
        Self::Pharmacy,
        Self::StaffPharmacist,
        Self::Sustaining,
        Self::Retired,
        Self::Student,
        Self::LtcDivision,
        Self::Corporate,
    ];

    /// Annual base price in whole dollars
    #[inline]
    #[must_use]
    pub const fn base_price(self) -> u32 {
        match self {
            Self::Pharmacy | Self::Sustaining => 435,
            Self::StaffPharmacist | Self::LtcDivision => 235,
            Self::Retired => 135,
            Self::Student => 35,
            Self::Corporate => 0,
        }
    }

    /// Probability weight used when sampling tiers
    #[inline]
    #[must_use]
    pub const fn weight(self) -> f64 {
        match self {
            Self::Pharmacy => 0.50,
            Self::StaffPharmacist => 0.25,
            Self::Sustaining => 0.10,
            Self::Retired => 0.08,
            Self::Student => 0.05,
            Self::LtcDivision => 0.015,
            Self::Corporate => 0.005,
        }
    }

    /// Wire name (`snake_case`)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pharmacy => "pharmacy",
            Self::StaffPharmacist => "staff_pharmacist",
            Self::Sustaining => "sustaining",
            Self::Retired => "retired",
            Self::Student => "student",
            Self::LtcDivision => "ltc_division",
            Self::Corporate => "corporate",
        }
    }
}

impl std::fmt::Display for MembershipTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MembershipTier {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|tier| tier.as_str() == needle)
            .ok_or_else(|| RosterError::UnknownTier(s.to_string()))
    }
}

/// Member lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberStatus {
    Active,
    Pending,
    Inactive,
    Churned,
}

impl MemberStatus {
    /// All statuses
    pub const ALL: [MemberStatus; 4] = [Self::Active, Self::Pending, Self::Inactive, Self::Churned];

    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Pending => "pending",
            Self::Inactive => "inactive",
            Self::Churned => "churned",
        }
    }
}

impl std::fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MemberStatus {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == needle)
            .ok_or_else(|| RosterError::UnknownStatus(s.to_string()))
    }
}

/// A membership record
///
/// `renewal_date` is not guaranteed to follow `join_date`; synthesized batches
/// draw each date independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: RecordId,
    /// `PREFIX-NNNNNN`, unique within a batch
    pub membership_id: String,
    pub business_name: String,
    pub contact_name: String,
    pub email: String,
    pub business_phone: String,
    pub personal_phone: String,
    pub business_address: Address,
    /// Always in the business address's state
    pub home_address: Address,
    pub membership_tier: MembershipTier,
    /// Whole dollars
    pub membership_price: u32,
    pub status: MemberStatus,
    pub join_date: NaiveDate,
    pub renewal_date: NaiveDate,
    pub last_activity: NaiveDate,
}

impl Member {
    /// Check if member is in good standing
    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == MemberStatus::Active
    }
}

/// Review state of a membership application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    PendingReview,
    UnderReview,
    Approved,
    Rejected,
    RequiresInfo,
}

impl ApplicationStatus {
    /// Whether a reviewer has been assigned at this stage
    #[inline]
    #[must_use]
    pub const fn has_reviewer(self) -> bool {
        matches!(self, Self::UnderReview | Self::Approved | Self::Rejected)
    }

    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PendingReview => "pending_review",
            Self::UnderReview => "under_review",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::RequiresInfo => "requires_info",
        }
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A prospective member's application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: RecordId,
    /// `PREFIX-NNNNNN`, unique within a batch
    pub application_id: String,
    pub business_name: String,
    pub contact_name: String,
    pub email: String,
    pub business_phone: String,
    pub business_address: Address,
    pub requested_tier: MembershipTier,
    pub submitted_date: NaiveDate,
    pub status: ApplicationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
