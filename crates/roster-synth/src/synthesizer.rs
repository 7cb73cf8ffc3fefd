//! Batch record synthesizer
//!
//! Owns an RNG and a [`SynthConfig`]. Records in a batch are numbered from 1;
//! identifiers are formatted from that sequence so they never collide within
//! a batch.

use crate::catalog::{APPLICATION_NOTES, REVIEWERS};
use crate::config::SynthConfig;
use crate::identity;
use crate::pricing;
use crate::sampling::{band, chance, date_in, pick_str, WeightedTable};
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use roster_core::{
    sequence_code, with_renewal_status, Application, ApplicationStatus, Member, MemberStatus,
    MemberWithRenewalStatus, MembershipTier, RecordId,
};

/// Chance an application carries reviewer notes
pub const NOTES_CHANCE: f64 = 0.3;

const MEMBER_STATUS_BANDS: [(f64, MemberStatus); 3] = [
    (0.65, MemberStatus::Active),
    (0.80, MemberStatus::Pending),
    (0.95, MemberStatus::Inactive),
];

const APPLICATION_STATUS_BANDS: [(f64, ApplicationStatus); 4] = [
    (0.40, ApplicationStatus::PendingReview),
    (0.65, ApplicationStatus::UnderReview),
    (0.80, ApplicationStatus::RequiresInfo),
    (0.95, ApplicationStatus::Approved),
];

/// Tier sampling table built from each tier's weight
#[must_use]
pub fn tier_table() -> WeightedTable<MembershipTier> {
    WeightedTable::new(MembershipTier::ALL.into_iter().map(|t| (t, t.weight())))
}

/// Mock record synthesizer
#[derive(Debug)]
pub struct Synthesizer<R = StdRng> {
    rng: R,
    config: SynthConfig,
    tiers: WeightedTable<MembershipTier>,
}

impl Synthesizer<StdRng> {
    /// Default configuration, fixed seed
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed), SynthConfig::default())
    }

    /// Seeded from `config.seed`, or from OS entropy when unset
    #[must_use]
    pub fn from_config(config: SynthConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(rng, config)
    }
}

impl<R: Rng> Synthesizer<R> {
    /// Create synthesizer over any RNG
    #[must_use]
    pub fn new(rng: R, config: SynthConfig) -> Self {
        Self {
            rng,
            config,
            tiers: tier_table(),
        }
    }

    /// Active configuration
    #[inline]
    pub fn config(&self) -> &SynthConfig {
        &self.config
    }

    /// Weighted membership tier
    pub fn tier(&mut self) -> MembershipTier {
        self.tiers.sample(&mut self.rng).unwrap_or(MembershipTier::Pharmacy)
    }

    /// Weighted member status
    pub fn member_status(&mut self) -> MemberStatus {
        band(self.rng.gen(), &MEMBER_STATUS_BANDS, MemberStatus::Churned)
    }

    /// Weighted application status
    pub fn application_status(&mut self) -> ApplicationStatus {
        band(self.rng.gen(), &APPLICATION_STATUS_BANDS, ApplicationStatus::Rejected)
    }

    /// Member at zero-based `index` of a batch
    pub fn member(&mut self, index: usize) -> Member {
        let business_name = identity::business_name(&mut self.rng);
        let membership_tier = self.tier();
        let status = self.member_status();

        let rng = &mut self.rng;
        let membership_price = pricing::quote(membership_tier, rng);

        let join_date = date_in(rng, &self.config.join_dates);
        let renewal_date = date_in(rng, &self.config.renewal_dates);
        let last_activity = date_in(rng, &self.config.activity_dates);

        let contact = identity::person_name(rng);
        let business_address = identity::business_address(rng);
        let home_address = identity::home_address(rng, &business_address);
        let business_phone = identity::phone(rng);
        let personal_phone = identity::phone(rng);
        let email = identity::email_for(rng, &contact, &business_name);

        let id = RecordId::from_index(index);
        Member {
            id,
            membership_id: sequence_code(&self.config.membership_id_prefix, id.0),
            business_name,
            contact_name: contact.full(),
            email,
            business_phone,
            personal_phone,
            business_address,
            home_address,
            membership_tier,
            membership_price,
            status,
            join_date,
            renewal_date,
            last_activity,
        }
    }

    /// `count` members numbered from 1
    pub fn members(&mut self, count: usize) -> Vec<Member> {
        let members: Vec<Member> = (0..count).map(|i| self.member(i)).collect();
        tracing::debug!(count, prefix = %self.config.membership_id_prefix, "synthesized members");
        members
    }

    /// Configured number of members
    pub fn default_members(&mut self) -> Vec<Member> {
        self.members(self.config.member_count)
    }

    /// Application at zero-based `index` of a batch
    pub fn application(&mut self, index: usize) -> Application {
        let rng = &mut self.rng;
        let business_name = identity::business_name(rng);
        let contact = identity::person_name(rng);
        let email = identity::email_for(rng, &contact, &business_name);
        let business_phone = identity::phone(rng);
        let business_address = identity::business_address(rng);

        let requested_tier = self.tier();
        let submitted_date = date_in(&mut self.rng, &self.config.submitted_dates);
        let status = self.application_status();

        let rng = &mut self.rng;
        let reviewed_by = status
            .has_reviewer()
            .then(|| pick_str(rng, REVIEWERS).to_string());
        let notes = chance(rng, NOTES_CHANCE).then(|| pick_str(rng, APPLICATION_NOTES).to_string());

        let id = RecordId::from_index(index);
        Application {
            id,
            application_id: sequence_code(&self.config.application_id_prefix, id.0),
            business_name,
            contact_name: contact.full(),
            email,
            business_phone,
            business_address,
            requested_tier,
            submitted_date,
            status,
            reviewed_by,
            notes,
        }
    }

    /// `count` applications numbered from 1
    pub fn applications(&mut self, count: usize) -> Vec<Application> {
        let applications: Vec<Application> = (0..count).map(|i| self.application(i)).collect();
        tracing::debug!(count, prefix = %self.config.application_id_prefix, "synthesized applications");
        applications
    }

    /// Configured number of applications
    pub fn default_applications(&mut self) -> Vec<Application> {
        self.applications(self.config.application_count)
    }

    /// `count` members annotated with their renewal status as of `today`
    pub fn members_with_renewal_status(
        &mut self,
        count: usize,
        today: NaiveDate,
    ) -> Vec<MemberWithRenewalStatus> {
        with_renewal_status(self.members(count), today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    fn zero_rng_synth() -> Synthesizer<StepRng> {
        Synthesizer::new(StepRng::new(0, 0), SynthConfig::default())
    }

    #[test]
    fn all_zero_draws_pick_first_of_everything() {
        let mut synth = zero_rng_synth();
        let member = synth.member(0);

        assert_eq!(member.membership_id, "NCPA-000001");
        assert_eq!(member.business_name, "Smith Pharmacy");
        assert_eq!(member.membership_tier, MembershipTier::Pharmacy);
        // zero draw passes the multi-location gate with one extra location
        assert_eq!(member.membership_price, 435 + 150);
        assert_eq!(member.status, MemberStatus::Active);
        assert_eq!(member.join_date, synth.config().join_dates.start);
        assert_eq!(member.renewal_date, synth.config().renewal_dates.start);
        assert_eq!(member.contact_name, "James Smith");
        assert_eq!(member.email, "james.smith@smithpharmacypharmacy.com");
        assert_eq!(member.business_phone, "(000) 000-0000");
        assert_eq!(member.home_address.city, member.business_address.city);
    }

    #[test]
    fn all_zero_application_is_pending_with_notes() {
        let mut synth = zero_rng_synth();
        let app = synth.application(4);
        assert_eq!(app.application_id, "APP-000005");
        assert_eq!(app.status, ApplicationStatus::PendingReview);
        assert_eq!(app.reviewed_by, None);
        assert_eq!(app.notes.as_deref(), Some(APPLICATION_NOTES[0]));
    }

    #[test]
    fn record_draws_go_through_single_field_draws() {
        let member = Synthesizer::seeded(9).member(0);
        let mut replay = Synthesizer::seeded(9);
        identity::business_name(&mut replay.rng);
        assert_eq!(replay.tier(), member.membership_tier);
        assert_eq!(replay.member_status(), member.status);

        let mut zero = zero_rng_synth();
        assert_eq!(zero.tier(), MembershipTier::Pharmacy);
        assert_eq!(zero.member_status(), MemberStatus::Active);
        assert_eq!(zero.application_status(), ApplicationStatus::PendingReview);
    }

    #[test]
    fn zero_count_is_empty() {
        let mut synth = Synthesizer::seeded(1);
        assert!(synth.members(0).is_empty());
        assert!(synth.applications(0).is_empty());
    }

    #[test]
    fn custom_prefix_flows_into_ids() {
        let config = SynthConfig::new().with_membership_prefix("RX").with_seed(3);
        let mut synth = Synthesizer::from_config(config);
        let members = synth.members(2);
        assert_eq!(members[1].membership_id, "RX-000002");
    }
}
