//! Order, parity and transposition factorization, read off the disjoint cycles.

use std::fmt;

use num::{BigUint, Integer, One};

use crate::{
    cycle::{Cycle, Transposition},
    disjoint::DisjointCycles,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    /// Parity of `sum(len - 1)` over every cycle, repeated lengths included.
    ///
    /// ```
    /// use permsolve::{invariants::Parity, permutation::Permutation};
    ///
    /// // (1,2)(3,4): two transpositions
    /// let p = Permutation::try_from_images(vec![2, 1, 4, 3]).unwrap();
    /// assert_eq!(Parity::of(&p.disjoint_cycles()), Parity::Even);
    /// ```
    pub fn of(disjoint: &DisjointCycles) -> Self {
        let transpositions: usize = disjoint.lengths().map(|len| len - 1).sum();
        Self::of_count(transpositions)
    }

    /// Parity of a product of `count` transpositions.
    pub fn of_count(count: usize) -> Self {
        if count % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }

    pub fn sign(self) -> i8 {
        match self {
            Parity::Even => 1,
            Parity::Odd => -1,
        }
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parity::Even => write!(f, "Even"),
            Parity::Odd => write!(f, "Odd"),
        }
    }
}

/// LCM of the cycle lengths; 1 for the identity.
pub fn order(disjoint: &DisjointCycles) -> BigUint {
    disjoint
        .lengths()
        .map(BigUint::from)
        .fold(BigUint::one(), |acc, len| acc.lcm(&len))
}

/// Pivot factorization of each cycle, concatenated in cycle order.
pub fn transpositions(disjoint: &DisjointCycles) -> Vec<Transposition> {
    disjoint.iter().flat_map(Cycle::transpositions).collect()
}
