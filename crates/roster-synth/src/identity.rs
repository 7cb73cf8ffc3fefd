//! Business and contact identity generation

use crate::catalog::{
    CITIES, EMAIL_DOMAIN_SUFFIXES, FIRST_NAMES, LAST_NAMES, PHARMACY_PREFIXES, PHARMACY_TYPES,
    PHONE_MASK, STATES, STREET_NAMES, STREET_SUFFIXES, ZIP_MASK,
};
use crate::sampling::{band, chance, fill_mask, pick_str};
use rand::Rng;
use roster_core::Address;

/// Longest business-name fragment kept in an email domain
pub const DOMAIN_STEM_LEN: usize = 15;
/// Chance a home address is in the same city as the business
pub const SAME_CITY_CHANCE: f64 = 0.7;

/// Shape of a synthesized business name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamePattern {
    /// `{lastname} {type}`
    Surname,
    /// `{prefix} {type}`
    Prefixed,
    /// `{lastname} & {lastname} {type}`
    Partnership,
    /// `{city} {type}`
    CityBased,
}

impl NamePattern {
    /// Four equal bands over one draw
    #[must_use]
    pub fn from_draw(draw: f64) -> Self {
        band(
            draw,
            &[(0.25, Self::Surname), (0.50, Self::Prefixed), (0.75, Self::Partnership)],
            Self::CityBased,
        )
    }
}

/// Random business name
pub fn business_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let pattern = NamePattern::from_draw(rng.gen());
    let lead = match pattern {
        NamePattern::Surname => pick_str(rng, LAST_NAMES).to_string(),
        NamePattern::Prefixed => pick_str(rng, PHARMACY_PREFIXES).to_string(),
        NamePattern::Partnership => {
            let first = pick_str(rng, LAST_NAMES);
            let second = pick_str(rng, LAST_NAMES);
            format!("{first} & {second}")
        }
        NamePattern::CityBased => pick_str(rng, CITIES).to_string(),
    };
    format!("{lead} {}", pick_str(rng, PHARMACY_TYPES))
}

/// A contact person's name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName {
    pub first: String,
    pub last: String,
}

impl PersonName {
    /// `First Last`
    #[must_use]
    pub fn full(&self) -> String {
        format!("{} {}", self.first, self.last)
    }
}

/// Random contact name
pub fn person_name<R: Rng + ?Sized>(rng: &mut R) -> PersonName {
    PersonName {
        first: pick_str(rng, FIRST_NAMES).to_string(),
        last: pick_str(rng, LAST_NAMES).to_string(),
    }
}

/// Lowercased business name with everything but `[a-z0-9]` removed,
/// cut to [`DOMAIN_STEM_LEN`] characters
#[must_use]
pub fn domain_stem(business_name: &str) -> String {
    business_name
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .take(DOMAIN_STEM_LEN)
        .collect()
}

/// `first.last@{stem}{suffix}`
pub fn email_for<R: Rng + ?Sized>(rng: &mut R, person: &PersonName, business_name: &str) -> String {
    let suffix = pick_str(rng, EMAIL_DOMAIN_SUFFIXES);
    format!(
        "{}.{}@{}{suffix}",
        person.first.to_lowercase(),
        person.last.to_lowercase(),
        domain_stem(business_name)
    )
}

/// Random phone number
pub fn phone<R: Rng + ?Sized>(rng: &mut R) -> String {
    fill_mask(rng, PHONE_MASK)
}

fn street<R: Rng + ?Sized>(rng: &mut R) -> String {
    let number: u32 = rng.gen_range(1..=9999);
    format!("{number} {} {}", pick_str(rng, STREET_NAMES), pick_str(rng, STREET_SUFFIXES))
}

/// Random business address
pub fn business_address<R: Rng + ?Sized>(rng: &mut R) -> Address {
    Address {
        street: street(rng),
        city: pick_str(rng, CITIES).to_string(),
        state: pick_str(rng, STATES).to_string(),
        zip_code: fill_mask(rng, ZIP_MASK),
    }
}

/// Home address in the business's state, usually the same city
pub fn home_address<R: Rng + ?Sized>(rng: &mut R, business: &Address) -> Address {
    let street = street(rng);
    let city = if chance(rng, SAME_CITY_CHANCE) {
        business.city.clone()
    } else {
        pick_str(rng, CITIES).to_string()
    };
    Address {
        street,
        city,
        state: business.state.clone(),
        zip_code: fill_mask(rng, ZIP_MASK),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn pattern_bands_are_equal_quarters() {
        assert_eq!(NamePattern::from_draw(0.0), NamePattern::Surname);
        assert_eq!(NamePattern::from_draw(0.25), NamePattern::Prefixed);
        assert_eq!(NamePattern::from_draw(0.5), NamePattern::Partnership);
        assert_eq!(NamePattern::from_draw(0.75), NamePattern::CityBased);
        assert_eq!(NamePattern::from_draw(0.999), NamePattern::CityBased);
    }

    #[test]
    fn domain_stem_strips_and_truncates() {
        assert_eq!(domain_stem("Smith & Jones Community Pharmacy"), "smithjonescommu");
        assert_eq!(domain_stem("Oak Rx"), "oakrx");
        assert_eq!(domain_stem("24/7 Care"), "247care");
    }

    #[test]
    fn email_uses_contact_and_business() {
        let mut rng = StdRng::seed_from_u64(1);
        let person = PersonName {
            first: "Maria".to_string(),
            last: "Lopez".to_string(),
        };
        let email = email_for(&mut rng, &person, "Village Apothecary");
        let (local, domain) = email.split_once('@').unwrap();
        assert_eq!(local, "maria.lopez");
        assert!(domain.starts_with("villageapotheca"));
        assert!(EMAIL_DOMAIN_SUFFIXES.iter().any(|s| domain.ends_with(s)));
    }

    #[test]
    fn home_address_shares_state() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..100 {
            let business = business_address(&mut rng);
            let home = home_address(&mut rng, &business);
            assert_eq!(home.state, business.state);
            assert_eq!(home.zip_code.len(), 5);
        }
    }
}
