//! Roster Core
//!
//! Membership data model and renewal status classification for the
//! association CRM dashboard.
//!
//! # Core Concepts
//!
//! - [`Member`] / [`Application`]: the records rendered in the member and
//!   application tables
//! - [`RenewalStatus`]: `past_due`, `due_soon`, `upcoming` or `renewed`,
//!   derived from a renewal date and "now"
//! - [`Clock`]: injected time source so classification stays reproducible
//! - [`RosterSummary`] / [`RenewalSummary`]: headline counts and revenue
//! - [`MemberFilter`]: status/tier/search/date-range narrowing
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use roster_core::{classify_renewal, RenewalStatus};
//!
//! let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//! assert_eq!(classify_renewal("2025-01-31", today).unwrap(), RenewalStatus::DueSoon);
//! assert!(classify_renewal("soon", today).is_err());
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod clock;
pub mod error;
pub mod filter;
pub mod renewal;
pub mod summary;
pub mod types;

// Re-exports
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{RosterError, RosterResult};
pub use filter::{DateRange, MemberFilter};
pub use renewal::{
    classify_renewal, classify_renewal_at, classify_renewal_date, days_until_renewal,
    parse_calendar_date, with_renewal_status, MemberWithRenewalStatus, RenewalClassifier,
    RenewalStatus,
};
pub use summary::{RenewalSummary, RosterSummary, TierBreakdown, TierLine};
pub use types::{
    sequence_code, Address, Application, ApplicationStatus, Member, MemberStatus,
    MembershipTier, RecordId,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
