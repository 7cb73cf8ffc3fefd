//! Tier price overrides
//!
//! Starting from [`MembershipTier::base_price`], some tiers get a surcharge or
//! a replacement price. Each override is gated by its own draw.

use crate::sampling::chance;
use rand::seq::SliceRandom;
use rand::Rng;
use roster_core::MembershipTier;

/// Surcharge per additional pharmacy location
pub const ADDITIONAL_LOCATION_FEE: u32 = 150;
/// Chance a pharmacy member has extra locations
pub const MULTI_LOCATION_CHANCE: f64 = 0.3;
/// Corporate memberships are priced at one of these
pub const CORPORATE_PRICES: [u32; 4] = [2500, 5000, 7500, 10000];
/// Chance a student prepaid several years
pub const STUDENT_BUNDLE_CHANCE: f64 = 0.4;
/// Chance a sustaining member prepaid several years
pub const SUSTAINING_BUNDLE_CHANCE: f64 = 0.3;

/// Multi-year prepaid bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MultiYearBundle {
    pub years: u8,
    pub price: u32,
}

pub const STUDENT_BUNDLES: [MultiYearBundle; 3] = [
    MultiYearBundle { years: 2, price: 60 },
    MultiYearBundle { years: 3, price: 80 },
    MultiYearBundle { years: 4, price: 100 },
];

pub const SUSTAINING_BUNDLES: [MultiYearBundle; 2] = [
    MultiYearBundle { years: 2, price: 720 },
    MultiYearBundle { years: 3, price: 1045 },
];

/// Final price for `tier` after overrides
pub fn quote<R: Rng + ?Sized>(tier: MembershipTier, rng: &mut R) -> u32 {
    let base = tier.base_price();
    match tier {
        MembershipTier::Pharmacy if chance(rng, MULTI_LOCATION_CHANCE) => {
            let extra: u32 = rng.gen_range(1..=3);
            base + extra * ADDITIONAL_LOCATION_FEE
        }
        MembershipTier::Corporate => CORPORATE_PRICES.choose(rng).copied().unwrap_or(base),
        MembershipTier::Student if chance(rng, STUDENT_BUNDLE_CHANCE) => bundle_price(rng, &STUDENT_BUNDLES, base),
        MembershipTier::Sustaining if chance(rng, SUSTAINING_BUNDLE_CHANCE) => {
            bundle_price(rng, &SUSTAINING_BUNDLES, base)
        }
        _ => base,
    }
}

fn bundle_price<R: Rng + ?Sized>(rng: &mut R, bundles: &[MultiYearBundle], base: u32) -> u32 {
    bundles.choose(rng).map_or(base, |b| b.price)
}

/// Every price `quote` can return for `tier`
#[must_use]
pub fn possible_prices(tier: MembershipTier) -> Vec<u32> {
    let base = tier.base_price();
    match tier {
        MembershipTier::Pharmacy => (0..=3).map(|n| base + n * ADDITIONAL_LOCATION_FEE).collect(),
        MembershipTier::Corporate => CORPORATE_PRICES.to_vec(),
        MembershipTier::Student => std::iter::once(base)
            .chain(STUDENT_BUNDLES.iter().map(|b| b.price))
            .collect(),
        MembershipTier::Sustaining => std::iter::once(base)
            .chain(SUSTAINING_BUNDLES.iter().map(|b| b.price))
            .collect(),
        _ => vec![base],
    }
}
