use itertools::Itertools;
use num::ToPrimitive;
use proptest::prelude::*;

use crate::{
    cycle::Cycle,
    invariants::Parity,
    permutation::{CycleOrder, Permutation},
    solve, solve_with, SolveOptions,
};

/// Up to five cycles over `1..=n`, each a shuffled subset of the domain.
fn cycle_lists() -> impl Strategy<Value = Vec<Vec<usize>>> {
    (1usize..=9).prop_flat_map(|n| {
        prop::collection::vec(
            prop::sample::subsequence((1..=n).collect::<Vec<_>>(), 1..=n).prop_shuffle(),
            1..5,
        )
    })
}

/// A permutation of `1..=n` given by its image table.
fn image_tables() -> impl Strategy<Value = Vec<usize>> {
    (1usize..=9).prop_flat_map(|n| Just((1..=n).collect::<Vec<_>>()).prop_shuffle())
}

fn notation(cycles: &[Vec<usize>]) -> String {
    cycles
        .iter()
        .map(|c| format!("({})", c.iter().join(",")))
        .collect()
}

/// Applies the written cycles to `x` one after another, rightmost first.
fn apply_written(cycles: &[Vec<usize>], x: usize) -> usize {
    cycles.iter().rev().fold(x, |x, c| match c.iter().position(|&e| e == x) {
        Some(i) => c[(i + 1) % c.len()],
        None => x,
    })
}

proptest! {
    #[test]
    fn mapping_is_a_bijection(cycles in cycle_lists()) {
        let s = solve(&notation(&cycles)).unwrap();
        let n = cycles.iter().flatten().copied().max().unwrap();
        prop_assert_eq!(s.degree(), n);
        let mut images = s.mapping.images().to_vec();
        images.sort_unstable();
        prop_assert_eq!(images, (1..=n).collect::<Vec<_>>());
    }

    #[test]
    fn mapping_matches_right_to_left_application(cycles in cycle_lists()) {
        let s = solve(&notation(&cycles)).unwrap();
        for (i, image) in s.mapping.pairs() {
            prop_assert_eq!(image, apply_written(&cycles, i));
        }
    }

    #[test]
    fn left_to_right_is_the_reversed_product(cycles in cycle_lists()) {
        let options = SolveOptions::default().with_order(CycleOrder::FirstFirst);
        let forward = solve_with(&notation(&cycles), &options).unwrap();
        let reversed: Vec<_> = cycles.iter().rev().cloned().collect();
        let backward = solve(&notation(&reversed)).unwrap();
        prop_assert_eq!(forward.mapping, backward.mapping);
    }

    #[test]
    fn disjoint_cycles_round_trip(cycles in cycle_lists()) {
        let s = solve(&notation(&cycles)).unwrap();
        prop_assert_eq!(&s.disjoint.to_permutation(), &s.mapping);

        // any order of the disjoint cycles gives the same product
        let written: Vec<Cycle> = s.disjoint.iter().rev().cloned().collect();
        prop_assert_eq!(Permutation::from_cycles(&written).unwrap(), s.mapping.clone());

        let mut all = s.disjoint.iter().flat_map(|c| c.elements().to_vec()).collect_vec();
        all.sort_unstable();
        prop_assert_eq!(all, (1..=s.degree()).collect::<Vec<_>>());
    }

    #[test]
    fn decomposing_disjoint_cycles_is_idempotent(images in image_tables()) {
        let p = Permutation::try_from_images(images).unwrap();
        let d = p.disjoint_cycles();
        let rotated: Vec<Vec<usize>> = d
            .iter()
            .map(|c| {
                let mut e = c.elements().to_vec();
                let half = e.len() / 2;
                e.rotate_left(half);
                e
            })
            .collect();
        let again = solve(&notation(&rotated)).unwrap();
        prop_assert_eq!(&again.disjoint, &d);
        let canonical = again
            .disjoint
            .iter()
            .zip(&rotated)
            .all(|(c, r)| c == &Cycle::new(r.clone()).unwrap().canonical());
        prop_assert!(canonical);
    }

    #[test]
    fn order_is_the_least_period(cycles in cycle_lists()) {
        let s = solve(&notation(&cycles)).unwrap();
        let order = s.order.to_usize().unwrap();
        prop_assert!(s.mapping.pow(order).is_identity());
        for k in 1..order {
            prop_assert!(!s.mapping.pow(k).is_identity());
        }
    }

    #[test]
    fn transposition_count_matches_parity(cycles in cycle_lists()) {
        let s = solve(&notation(&cycles)).unwrap();
        let expected: usize = s.disjoint.lengths().map(|l| l - 1).sum();
        prop_assert_eq!(s.transpositions.len(), expected);
        prop_assert_eq!(Parity::of_count(s.transpositions.len()), s.parity);
        prop_assert_eq!(s.mapping.sign(), s.parity.sign());

        // the factorization, read right to left, rebuilds the mapping
        let rebuilt = (1..=s.degree())
            .map(|i| {
                s.transpositions
                    .iter()
                    .rev()
                    .fold(i, |x, t| t.to_cycle().image(x))
            })
            .collect_vec();
        prop_assert_eq!(rebuilt.as_slice(), s.mapping.images());
    }

    #[test]
    fn inverse_composes_to_identity(cycles in cycle_lists()) {
        let s = solve(&notation(&cycles)).unwrap();
        prop_assert!(s.mapping.compose(&s.inverse).is_identity());
        prop_assert!(s.inverse.compose(&s.mapping).is_identity());
        for (i, j) in s.mapping.pairs() {
            prop_assert_eq!(s.inverse.image(j), i);
        }
    }
}
