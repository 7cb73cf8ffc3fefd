//! Testing utilities for the roster workspace
//!
//! Shared fixtures for hand-built members and calendar dates.

#![allow(missing_docs)]

use chrono::NaiveDate;
use roster_core::{sequence_code, Address, Member, MemberStatus, MembershipTier, RecordId};

/// Reference "today" used across the renewal tests
pub const REFERENCE_TODAY: (i32, u32, u32) = (2025, 1, 1);

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn reference_today() -> NaiveDate {
    let (y, m, d) = REFERENCE_TODAY;
    date(y, m, d)
}

pub fn test_address(city: &str, state: &str) -> Address {
    Address {
        street: "100 Main Street".to_string(),
        city: city.to_string(),
        state: state.to_string(),
        zip_code: "22314".to_string(),
    }
}

/// Member #`sequence` with fixed profile fields
pub fn create_test_member(sequence: u64) -> Member {
    Member {
        id: RecordId(sequence),
        membership_id: sequence_code("NCPA", sequence),
        business_name: format!("Riverside Pharmacy {sequence}"),
        contact_name: "Jordan Avery".to_string(),
        email: "jordan.avery@riversidepharmapharmacy.com".to_string(),
        business_phone: "(703) 555-0100".to_string(),
        personal_phone: "(703) 555-0101".to_string(),
        business_address: test_address("Alexandria", "VA"),
        home_address: test_address("Arlington", "VA"),
        membership_tier: MembershipTier::Pharmacy,
        membership_price: MembershipTier::Pharmacy.base_price(),
        status: MemberStatus::Active,
        join_date: date(2018, 5, 14),
        renewal_date: date(2025, 6, 1),
        last_activity: date(2024, 3, 2),
    }
}

pub fn create_member_with(
    sequence: u64,
    tier: MembershipTier,
    price: u32,
    status: MemberStatus,
    renewal_date: NaiveDate,
) -> Member {
    Member {
        membership_tier: tier,
        membership_price: price,
        status,
        renewal_date,
        ..create_test_member(sequence)
    }
}

pub fn create_member_renewing_on(sequence: u64, renewal_date: NaiveDate) -> Member {
    Member {
        renewal_date,
        ..create_test_member(sequence)
    }
}
