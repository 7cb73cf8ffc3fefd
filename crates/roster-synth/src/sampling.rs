//! Weighted discrete sampling primitives
//!
//! Every weighted choice takes exactly one uniform draw in `[0, 1)` and walks
//! a cumulative table, so a seeded RNG reproduces the same outcomes.

use crate::config::DateWindow;
use chrono::{Duration, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;

/// Result of a cumulative-table lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pick<T> {
    /// Draw landed inside a band
    Matched(T),
    /// Draw exceeded the final cumulative bound; last entry returned
    Fallback(T),
}

impl<T> Pick<T> {
    /// The chosen outcome
    #[inline]
    pub fn into_inner(self) -> T {
        match self {
            Self::Matched(v) | Self::Fallback(v) => v,
        }
    }
}

/// Outcomes with probability weights, walked as cumulative sums
#[derive(Debug, Clone)]
pub struct WeightedTable<T> {
    entries: Vec<(T, f64)>,
}

impl<T: Copy> WeightedTable<T> {
    /// Build table; entries keep their order
    #[must_use]
    pub fn new(entries: impl IntoIterator<Item = (T, f64)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Sum of weights
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w).sum()
    }

    /// Look up a uniform draw
    ///
    /// The first entry whose cumulative weight reaches `draw` wins. When
    /// rounding leaves the cumulative sum short of `draw`, the last entry is
    /// returned as [`Pick::Fallback`]. `None` only for an empty table.
    #[must_use]
    pub fn pick(&self, draw: f64) -> Option<Pick<T>> {
        let mut cumulative = 0.0;
        for &(value, weight) in &self.entries {
            cumulative += weight;
            if draw <= cumulative {
                return Some(Pick::Matched(value));
            }
        }
        self.entries.last().map(|&(value, _)| Pick::Fallback(value))
    }

    /// Draw once from `rng` and look it up
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<T> {
        let draw: f64 = rng.gen();
        match self.pick(draw)? {
            Pick::Matched(value) => Some(value),
            Pick::Fallback(value) => {
                tracing::trace!(draw, total = self.total_weight(), "weighted draw fell through to last entry");
                Some(value)
            }
        }
    }
}

/// Map a draw onto ascending exclusive upper bounds; `otherwise` above the last
#[must_use]
pub fn band<T: Copy>(draw: f64, bands: &[(f64, T)], otherwise: T) -> T {
    bands
        .iter()
        .find(|(upper, _)| draw < *upper)
        .map_or(otherwise, |&(_, value)| value)
}

/// True with probability `p`, using one uniform draw
#[inline]
pub fn chance<R: Rng + ?Sized>(rng: &mut R, p: f64) -> bool {
    rng.gen::<f64>() < p
}

/// Uniform element of a non-empty list; `""` for an empty one
#[inline]
pub fn pick_str<R: Rng + ?Sized>(rng: &mut R, items: &[&'static str]) -> &'static str {
    items.choose(rng).copied().unwrap_or_default()
}

/// Uniform day inside an inclusive window
pub fn date_in<R: Rng + ?Sized>(rng: &mut R, window: &DateWindow) -> NaiveDate {
    let span = window.span_days().max(0);
    window.start + Duration::days(rng.gen_range(0..=span))
}

/// Replace each `#` in `mask` with a random digit
pub fn fill_mask<R: Rng + ?Sized>(rng: &mut R, mask: &str) -> String {
    mask.chars()
        .map(|c| {
            if c == '#' {
                char::from(b'0' + rng.gen_range(0..10u8))
            } else {
                c
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn pick_walks_cumulative_weights() {
        let table = WeightedTable::new([('a', 0.5), ('b', 0.3), ('c', 0.2)]);
        assert_eq!(table.pick(0.0), Some(Pick::Matched('a')));
        assert_eq!(table.pick(0.5), Some(Pick::Matched('a')));
        assert_eq!(table.pick(0.51), Some(Pick::Matched('b')));
        assert_eq!(table.pick(0.99), Some(Pick::Matched('c')));
    }

    #[test]
    fn short_table_falls_back_to_last_entry() {
        let table = WeightedTable::new([('a', 0.4), ('b', 0.4)]);
        assert_eq!(table.pick(0.9), Some(Pick::Fallback('b')));
        assert_eq!(table.pick(0.9).map(Pick::into_inner), Some('b'));
    }

    #[test]
    fn empty_table_yields_nothing() {
        let table: WeightedTable<char> = WeightedTable::new([]);
        assert_eq!(table.pick(0.3), None);
    }

    #[test]
    fn band_uses_exclusive_upper_bounds() {
        let bands = [(0.65, 1), (0.80, 2), (0.95, 3)];
        assert_eq!(band(0.0, &bands, 4), 1);
        assert_eq!(band(0.65, &bands, 4), 2);
        assert_eq!(band(0.949, &bands, 4), 3);
        assert_eq!(band(0.95, &bands, 4), 4);
    }

    #[test]
    fn dates_stay_in_window() {
        let mut rng = StdRng::seed_from_u64(11);
        let window = DateWindow::ymd((2024, 1, 1), (2024, 1, 3));
        for _ in 0..200 {
            assert!(window.contains(date_in(&mut rng, &window)));
        }
        let single = DateWindow::ymd((2024, 2, 29), (2024, 2, 29));
        assert_eq!(date_in(&mut rng, &single), single.start);
    }

    #[test]
    fn mask_keeps_punctuation() {
        let mut rng = StdRng::seed_from_u64(3);
        let phone = fill_mask(&mut rng, "(###) ###-####");
        assert_eq!(phone.len(), 14);
        assert!(phone.starts_with('('));
        assert_eq!(&phone[4..6], ") ");
        assert_eq!(phone.chars().filter(char::is_ascii_digit).count(), 10);
    }
}
