use pretty_assertions::assert_eq;
use roster_core::{
    with_renewal_status, DateRange, MemberFilter, MemberStatus, MembershipTier, RenewalStatus,
    RenewalSummary, RosterError, RosterSummary, TierBreakdown,
};
use roster_test_utils::{create_member_with, create_test_member, date, reference_today};

fn sample_roster() -> Vec<roster_core::Member> {
    vec![
        create_member_with(1, MembershipTier::Pharmacy, 435, MemberStatus::Active, date(2024, 12, 1)),
        create_member_with(2, MembershipTier::Pharmacy, 735, MemberStatus::Active, date(2025, 1, 10)),
        create_member_with(3, MembershipTier::Student, 60, MemberStatus::Pending, date(2025, 2, 15)),
        create_member_with(4, MembershipTier::Corporate, 5000, MemberStatus::Inactive, date(2025, 8, 1)),
        create_member_with(5, MembershipTier::Retired, 135, MemberStatus::Churned, date(2024, 7, 4)),
    ]
}

#[test]
fn test_roster_summary_counts_statuses() {
    let summary = RosterSummary::from_members(&sample_roster());
    assert_eq!(
        summary,
        RosterSummary {
            total: 5,
            active: 2,
            pending: 1,
            inactive: 1,
            churned: 1,
            active_revenue: 1170,
        }
    );
}

#[test]
fn test_active_revenue_follows_is_active() {
    let roster = sample_roster();
    let expected: u64 = roster
        .iter()
        .filter(|m| m.is_active())
        .map(|m| u64::from(m.membership_price))
        .sum();
    let summary = RosterSummary::from_members(&roster);
    assert_eq!(summary.active_revenue, expected);
    assert_eq!(summary.active, roster.iter().filter(|m| m.is_active()).count());
    assert!(!roster[2].is_active());
}

#[test]
fn test_renewal_summary_buckets_and_revenue() {
    let annotated = with_renewal_status(sample_roster(), reference_today());
    let summary = RenewalSummary::from_members(&annotated);

    assert_eq!(summary.total, 5);
    assert_eq!(summary.count(RenewalStatus::PastDue), 2);
    assert_eq!(summary.count(RenewalStatus::DueSoon), 1);
    assert_eq!(summary.count(RenewalStatus::Upcoming), 1);
    assert_eq!(summary.count(RenewalStatus::Renewed), 1);
    assert_eq!(summary.estimated_revenue, 435 + 735 + 60 + 5000 + 135);
}

#[test]
fn test_empty_roster_summaries() {
    let empty: Vec<roster_core::Member> = Vec::new();
    assert_eq!(RosterSummary::from_members(&empty), RosterSummary::default());
    let breakdown = TierBreakdown::from_members(&empty);
    assert_eq!(breakdown.lines.len(), MembershipTier::ALL.len());
    assert_eq!(breakdown.share(MembershipTier::Pharmacy), 0.0);
}

#[test]
fn test_tier_breakdown() {
    let breakdown = TierBreakdown::from_members(&sample_roster());
    let pharmacy = breakdown.get(MembershipTier::Pharmacy).unwrap();
    assert_eq!(pharmacy.members, 2);
    assert_eq!(pharmacy.revenue, 1170);
    assert!((breakdown.share(MembershipTier::Pharmacy) - 0.4).abs() < 1e-9);
    assert_eq!(breakdown.get(MembershipTier::LtcDivision).unwrap().members, 0);
}

#[test]
fn test_empty_filter_matches_all() {
    let roster = sample_roster();
    assert_eq!(MemberFilter::new().apply(&roster).unwrap().len(), roster.len());
}

#[test]
fn test_filter_combines_criteria() {
    let roster = sample_roster();
    let filter = MemberFilter::new()
        .with_tier(MembershipTier::Pharmacy)
        .with_status(MemberStatus::Active)
        .with_renewal_range(DateRange::between(date(2025, 1, 1), date(2025, 1, 31)));
    let ids: Vec<&str> = filter
        .apply(&roster)
        .unwrap()
        .iter()
        .map(|m| m.membership_id.as_str())
        .collect();
    assert_eq!(ids, vec!["NCPA-000002"]);
}

#[test]
fn test_search_is_case_insensitive() {
    let roster = vec![create_test_member(1), create_test_member(42)];
    let by_id = MemberFilter::new().with_search("ncpa-000042").apply(&roster).unwrap();
    assert_eq!(by_id.len(), 1);
    let by_contact = MemberFilter::new().with_search("  JORDAN ").apply(&roster).unwrap();
    assert_eq!(by_contact.len(), 2);
    let none = MemberFilter::new().with_search("apothecary").apply(&roster).unwrap();
    assert!(none.is_empty());
}

#[test]
fn test_inverted_range_is_rejected() {
    let filter = MemberFilter::new()
        .with_renewal_range(DateRange::between(date(2025, 6, 1), date(2025, 1, 1)));
    assert!(matches!(filter.apply(&sample_roster()), Err(RosterError::InvalidFilter(_))));
}

#[test]
fn test_open_ended_range() {
    let range = DateRange {
        start: Some(date(2025, 1, 1)),
        end: None,
    };
    assert!(range.contains(date(2030, 1, 1)));
    assert!(!range.contains(date(2024, 12, 31)));
}
