//! Roster Synth
//!
//! Mock membership and application records with realistic, weighted field
//! distributions, for populating the dashboard without a backend.
//!
//! # Example
//!
//! ```rust
//! use roster_synth::Synthesizer;
//!
//! let mut synth = Synthesizer::seeded(42);
//! let members = synth.members(10);
//! assert_eq!(members.len(), 10);
//! assert_eq!(members[0].membership_id, "NCPA-000001");
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod catalog;
pub mod config;
pub mod identity;
pub mod pricing;
pub mod sampling;
pub mod synthesizer;

// Re-exports
pub use config::{
    ConfigError, ConfigResult, DateWindow, SynthConfig, DEFAULT_APPLICATION_COUNT,
    DEFAULT_MEMBER_COUNT,
};
pub use sampling::{Pick, WeightedTable};
pub use synthesizer::{tier_table, Synthesizer};

use chrono::NaiveDate;
use roster_core::{Application, Member, MemberWithRenewalStatus};

/// `count` members from the thread RNG with default configuration
#[must_use]
pub fn generate_members(count: usize) -> Vec<Member> {
    Synthesizer::new(rand::thread_rng(), SynthConfig::default()).members(count)
}

/// `count` applications from the thread RNG with default configuration
#[must_use]
pub fn generate_applications(count: usize) -> Vec<Application> {
    Synthesizer::new(rand::thread_rng(), SynthConfig::default()).applications(count)
}

/// `count` members annotated with renewal status as of `today`
#[must_use]
pub fn generate_members_with_renewal_status(
    count: usize,
    today: NaiveDate,
) -> Vec<MemberWithRenewalStatus> {
    Synthesizer::new(rand::thread_rng(), SynthConfig::default())
        .members_with_renewal_status(count, today)
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
