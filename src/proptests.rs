use crate::heights::HeightList;
use crate::parser::parse;
use crate::skyline::Skyline;
use crate::water::compute_trapped_water;
use proptest::prelude::*;

fn heights() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0u32..50, 0..64)
}

/// Quadratic reference: scan both sides of every column.
fn brute_force(elevations: &[u32]) -> Vec<u32> {
    (0..elevations.len())
        .map(|i| {
            let left = elevations[..=i].iter().copied().max().unwrap_or(0);
            let right = elevations[i..].iter().copied().max().unwrap_or(0);
            left.min(right).saturating_sub(elevations[i])
        })
        .collect()
}

proptest! {
    #[test]
    fn prop_matches_brute_force(e in heights()) {
        let profile = compute_trapped_water(&e);
        prop_assert_eq!(profile.water_at, brute_force(&e));
    }
}

proptest! {
    #[test]
    fn prop_total_is_sum(e in heights()) {
        let profile = compute_trapped_water(&e);
        prop_assert_eq!(profile.total, profile.water_at.iter().sum::<u32>());
        prop_assert_eq!(profile.water_at.len(), e.len());
    }
}

proptest! {
    #[test]
    fn prop_boundaries_are_dry(e in heights()) {
        let skyline = Skyline::new(e);
        let profile = compute_trapped_water(skyline.as_slice());
        let max = skyline.max_elevation().unwrap_or(0);
        for (i, &w) in profile.water_at.iter().enumerate() {
            if skyline.is_on_boundary(i) {
                prop_assert_eq!(w, 0);
            }
            prop_assert!(w <= max);
            let elevation = skyline.get_elevation(i).unwrap_or(0);
            prop_assert!(elevation + w <= max);
        }
    }
}

proptest! {
    #[test]
    fn prop_idempotent(e in heights()) {
        prop_assert_eq!(compute_trapped_water(&e), compute_trapped_water(&e));
    }
}

proptest! {
    #[test]
    fn prop_reversal_symmetry(e in heights()) {
        let skyline = Skyline::new(e);
        let forward = compute_trapped_water(skyline.as_slice());
        let backward = compute_trapped_water(skyline.reversed().as_slice());

        let mut expected = forward.water_at.clone();
        expected.reverse();
        prop_assert_eq!(backward.water_at, expected);
        prop_assert_eq!(backward.total, forward.total);
    }
}

proptest! {
    #[test]
    fn prop_monotone_holds_nothing(mut e in heights(), descending in any::<bool>()) {
        e.sort_unstable();
        if descending {
            e.reverse();
        }
        let profile = compute_trapped_water(&e);
        prop_assert_eq!(profile.total, 0);
        prop_assert!(profile.water_at.iter().all(|&w| w == 0));
    }
}

proptest! {
    #[test]
    fn prop_two_or_fewer_hold_nothing(e in prop::collection::vec(0u32..1000, 0..=2)) {
        prop_assert_eq!(compute_trapped_water(&e).total, 0);
    }
}

proptest! {
    #[test]
    fn prop_integral_reals_agree(e in heights()) {
        let reals: Vec<f64> = e.iter().map(|&h| f64::from(h)).collect();
        let exact = compute_trapped_water(&e);
        let float = compute_trapped_water(&reals);
        prop_assert_eq!(float.total, f64::from(exact.total));
    }
}

proptest! {
    #[test]
    fn prop_parser_keeps_valid_values(e in heights(), noise in "[a-z]{1,4}") {
        let mut text = String::new();
        for h in &e {
            text.push_str(&format!(" {} ,{},", h, noise));
        }
        let result = parse(&text);
        let expected: Vec<f64> = e.iter().map(|&h| f64::from(h)).collect();
        prop_assert_eq!(result.elevations, expected);
        prop_assert_eq!(result.had_invalid, !e.is_empty());
    }
}

proptest! {
    #[test]
    fn prop_height_list_text_round_trip(values in prop::collection::vec(0.0f64..1e6, 0..32)) {
        let list = HeightList::from_values(values);
        let reparsed = parse(&list.to_text());
        prop_assert_eq!(reparsed.elevations.as_slice(), list.as_slice());
        prop_assert!(!reparsed.had_invalid);
    }
}
