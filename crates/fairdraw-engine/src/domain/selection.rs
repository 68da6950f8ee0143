//! Weighted intra-class outcome selection.

use std::num::NonZeroU64;

use fairdraw_core::rng::RandomSource;

use super::classes::OutcomeCategory;

/// Picks one category with probability proportional to its weight.
///
/// Returns `None` when the list is empty or every weight is zero. Otherwise
/// a roll in `1..=total` is matched against running cumulative weights, so a
/// zero-weight category can never be hit while a sibling is positive.
pub fn select_weighted_outcome<'a>(
    categories: &'a [OutcomeCategory],
    rng: &mut dyn RandomSource,
) -> Option<&'a OutcomeCategory> {
    let total: u64 = categories.iter().map(|c| u64::from(c.weight)).sum();
    let total = NonZeroU64::new(total)?;

    let roll = rng.next_uniform_u64(total);
    let mut cumulative = 0_u64;
    for category in categories {
        cumulative += u64::from(category.weight);
        if roll <= cumulative {
            return Some(category);
        }
    }

    // Unreachable with integer weights and an inclusive roll.
    categories.last()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::domain::generators::XorShift64;
    use fairdraw_test_support::{ConstantSource, SequenceSource};

    fn pool(weights: &[(&str, u32)]) -> Vec<OutcomeCategory> {
        weights
            .iter()
            .map(|(label, weight)| OutcomeCategory::new(*label, *weight))
            .collect()
    }

    #[test]
    fn test_empty_pool_yields_no_selection() {
        let mut rng = ConstantSource(3);
        assert!(select_weighted_outcome(&[], &mut rng).is_none());
    }

    #[test]
    fn test_all_zero_weights_yield_no_selection() {
        let mut rng = ConstantSource(3);
        let categories = pool(&[("A", 0)]);
        assert!(select_weighted_outcome(&categories, &mut rng).is_none());
        let categories = pool(&[("A", 0), ("B", 0)]);
        assert!(select_weighted_outcome(&categories, &mut rng).is_none());
    }

    #[test]
    fn test_no_randomness_consumed_for_degenerate_pool() {
        let mut rng = SequenceSource::new(vec![]);
        assert!(select_weighted_outcome(&pool(&[("A", 0)]), &mut rng).is_none());
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn test_roll_maps_onto_cumulative_ranges() {
        // Weights 1,2,3 cover rolls 1 | 2-3 | 4-6; raw word r rolls r % 6 + 1.
        let categories = pool(&[("Common", 1), ("Uncommon", 2), ("Rare", 3)]);
        let mut rng = SequenceSource::new(vec![0, 1, 2, 3, 4, 5]);
        let labels: Vec<&str> = (0..6)
            .map(|_| {
                select_weighted_outcome(&categories, &mut rng)
                    .unwrap()
                    .label
                    .as_str()
            })
            .collect();
        assert_eq!(
            labels,
            vec!["Common", "Uncommon", "Uncommon", "Rare", "Rare", "Rare"]
        );
    }

    #[test]
    fn test_zero_weight_category_is_never_selected() {
        let categories = pool(&[("Ghost", 0), ("Real", 4), ("Phantom", 0)]);
        let mut rng = XorShift64::new(17);
        for _ in 0..10_000 {
            let picked = select_weighted_outcome(&categories, &mut rng).unwrap();
            assert_eq!(picked.label, "Real");
        }
    }

    #[test]
    fn test_weights_converge_to_proportions() {
        let categories = pool(&[("A", 1), ("B", 2), ("C", 3)]);
        let mut rng = XorShift64::new(0x5EED);
        let draws = 100_000_u32;
        let mut counts: HashMap<&str, u32> = HashMap::new();
        for _ in 0..draws {
            let picked = select_weighted_outcome(&categories, &mut rng).unwrap();
            *counts.entry(picked.label.as_str()).or_default() += 1;
        }

        for (label, weight) in [("A", 1.0), ("B", 2.0), ("C", 3.0)] {
            let observed = f64::from(counts[label]) / f64::from(draws);
            let expected = weight / 6.0;
            assert!(
                (observed - expected).abs() < 0.01,
                "{label}: observed {observed}, expected {expected}"
            );
        }
    }

    #[test]
    fn test_large_weights_do_not_overflow() {
        let categories = pool(&[("A", u32::MAX), ("B", u32::MAX)]);
        let mut rng = ConstantSource(u64::from(u32::MAX));
        let picked = select_weighted_outcome(&categories, &mut rng).unwrap();
        assert_eq!(picked.label, "B");
    }
}
