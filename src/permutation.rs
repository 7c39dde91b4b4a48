//! # Permutations of {1, ..., n}
//!
//! This module provides the [`Permutation`] struct: a total bijection of the
//! domain `{1, ..., n}` of the symmetric group Sn.
//!
//! ## Key Features:
//!
//! - **Representation**: a `Permutation` stores its image table (`map[i - 1]`
//!   is the image of `i`) together with the inverse table, so both directions
//!   are a lookup.
//! - **Construction**:
//!   - Identity: `Permutation::id(n)`.
//!   - From an image table, checked to be a bijection:
//!     `Permutation::try_from_images(vec![...])`.
//!   - From one cycle, fixing everything else in `{1..n}`:
//!     `Permutation::from_cycle(&cycle, n)`.
//!   - From possibly overlapping cycles with a composition convention:
//!     `Permutation::from_cycles_ordered(&cycles, order)`, or
//!     `Permutation::from_cycles(&cycles)` for the usual right-to-left reading.
//! - **Basic Operations**: `inverse`, `compose`, `pow`, `is_identity`.
//! - **Invariants**: `disjoint_cycles`, `transpositions`, `order`, `parity`,
//!   `sign`.

use std::{fmt, ops::Index, str::FromStr};

use log::{debug, trace};
use num::BigUint;

use crate::{
    cycle::{Cycle, Transposition},
    disjoint::DisjointCycles,
    error::{DomainError, SolveError},
    invariants::{self, Parity},
    parser::parse_cycles,
    solve::DEFAULT_MAX_DEGREE,
};

/// A permutation of `1..=n`.
///
/// # Examples
///
/// ```
/// use permsolve::permutation::Permutation;
///
/// // 1->2, 2->3, 3->1
/// let p = Permutation::try_from_images(vec![2, 3, 1]).unwrap();
/// assert_eq!(p.image(3), 1);
/// assert_eq!(p.inverse().image(1), 3);
/// assert_eq!(p[2], 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Permutation {
    map: Vec<usize>,
    inv: Vec<usize>,
}

/// Implement ordering comparisons for permutations based on their image table.
impl PartialOrd for Permutation {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.map.partial_cmp(&other.map)
    }
}

/// Specifies the direction for reading cycle compositions
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CycleOrder {
    /// Apply rightmost cycles first: (a b)(c d) applies (c d) then (a b)
    #[default]
    LastFirst,
    /// Apply leftmost cycles first: (a b)(c d) applies (a b) then (c d)
    FirstFirst,
}

impl Permutation {
    // --------------------------------------------------------------------------------------------
    // Basic Constructors and Accessors
    // --------------------------------------------------------------------------------------------

    /// Creates the identity permutation of `{1..n}`.
    ///
    /// ```
    /// # use permsolve::permutation::Permutation;
    /// let p = Permutation::id(4);
    /// assert!(p.is_identity());
    /// assert_eq!(p.images(), &[1, 2, 3, 4]);
    /// ```
    pub fn id(n: usize) -> Self {
        Permutation {
            map: (1..=n).collect(),
            inv: (1..=n).collect(),
        }
    }

    /// Builds the inverse table of an image table already known to be a bijection.
    pub(crate) fn from_images_unchecked(map: Vec<usize>) -> Self {
        let mut inv = vec![0; map.len()];
        for (i, &j) in map.iter().enumerate() {
            inv[j - 1] = i + 1;
        }
        Permutation { map, inv }
    }

    /// Creates a permutation from its image table: `images[i - 1]` is where `i` goes.
    ///
    /// Fails with [`SolveError::InvariantViolation`] unless every value of
    /// `1..=images.len()` appears exactly once.
    ///
    /// ```
    /// # use permsolve::permutation::Permutation;
    /// assert!(Permutation::try_from_images(vec![2, 1]).is_ok());
    /// assert!(Permutation::try_from_images(vec![2, 2]).is_err());
    /// assert!(Permutation::try_from_images(vec![1, 3]).is_err());
    /// ```
    pub fn try_from_images(images: Vec<usize>) -> Result<Self, SolveError> {
        let n = images.len();
        let mut seen = vec![false; n];
        for (i, &to) in images.iter().enumerate() {
            if to == 0 || to > n {
                return Err(SolveError::InvariantViolation(format!(
                    "{} is sent to {to}, outside 1..={n}",
                    i + 1
                )));
            }
            if std::mem::replace(&mut seen[to - 1], true) {
                return Err(SolveError::InvariantViolation(format!(
                    "{to} is the image of more than one element"
                )));
            }
        }
        Ok(Self::from_images_unchecked(images))
    }

    /// The generator of a single cycle over `{1..n}`: each element of the
    /// cycle goes to its successor, everything else is fixed.
    ///
    /// # Panics
    ///
    /// Panics if `n` is smaller than the largest element of `cycle`.
    ///
    /// ```
    /// # use permsolve::{cycle::Cycle, permutation::Permutation};
    /// let c = Cycle::new(vec![3, 1]).unwrap();
    /// let g = Permutation::from_cycle(&c, 4);
    /// assert_eq!(g.images(), &[3, 2, 1, 4]);
    /// ```
    pub fn from_cycle(cycle: &Cycle, n: usize) -> Self {
        assert!(
            cycle.max_element() <= n,
            "cycle {cycle} does not fit in a domain of size {n}"
        );
        let mut map: Vec<usize> = (1..=n).collect();
        let elements = cycle.elements();
        for (i, &from) in elements.iter().enumerate() {
            map[from - 1] = elements[(i + 1) % elements.len()];
        }
        Self::from_images_unchecked(map)
    }

    /// Creates the product of `cycles` over `{1..n}`, `n` being the largest
    /// element named, reading the product in the given `order`.
    ///
    /// Fails with [`DomainError::DegreeTooLarge`] above
    /// [`DEFAULT_MAX_DEGREE`]; see [`Permutation::from_cycles_bounded`].
    pub fn from_cycles_ordered(cycles: &[Cycle], order: CycleOrder) -> Result<Self, SolveError> {
        Self::from_cycles_bounded(cycles, order, DEFAULT_MAX_DEGREE)
    }

    /// Like [`Permutation::from_cycles_ordered`], rejecting any cycle that
    /// names an element above `max_degree` before a table is allocated.
    ///
    /// The cycles are applied one at a time to a single running table, so
    /// memory stays at two tables of size `n` however many cycles are given.
    ///
    /// ```
    /// # use permsolve::{cycle::Cycle, error::{DomainError, SolveError}, permutation::{CycleOrder, Permutation}};
    /// let cycles = [Cycle::new(vec![1, 12]).unwrap()];
    /// assert_eq!(
    ///     Permutation::from_cycles_bounded(&cycles, CycleOrder::LastFirst, 10),
    ///     Err(SolveError::Domain(DomainError::DegreeTooLarge { degree: 12, max: 10 }))
    /// );
    /// ```
    pub fn from_cycles_bounded(
        cycles: &[Cycle],
        order: CycleOrder,
        max_degree: usize,
    ) -> Result<Self, SolveError> {
        let n = cycles
            .iter()
            .map(Cycle::max_element)
            .max()
            .ok_or(DomainError::Empty)?;
        if n > max_degree {
            return Err(DomainError::DegreeTooLarge {
                degree: n,
                max: max_degree,
            }
            .into());
        }

        let mut p = Permutation::id(n);
        match order {
            CycleOrder::LastFirst => cycles.iter().rev().for_each(|c| p.then_cycle(c)),
            CycleOrder::FirstFirst => cycles.iter().for_each(|c| p.then_cycle(c)),
        }
        trace!("{} cycle(s) applied over 1..={n}", cycles.len());

        let p = Self::try_from_images(p.map)?;
        debug!("composed mapping {p}");
        Ok(p)
    }

    /// Replaces `self` by `cycle ∘ self`, touching only the entries whose
    /// image lies on `cycle`.
    fn then_cycle(&mut self, cycle: &Cycle) {
        let elements = cycle.elements();
        let sources: Vec<usize> = elements.iter().map(|&x| self.preimage(x)).collect();
        for (k, &source) in sources.iter().enumerate() {
            let to = elements[(k + 1) % elements.len()];
            self.map[source - 1] = to;
            self.inv[to - 1] = source;
        }
    }

    /// Creates a permutation from cycles using right-to-left reading order (default).
    /// Equivalent to `from_cycles_ordered(cycles, CycleOrder::LastFirst)`.
    ///
    /// ```
    /// # use permsolve::{cycle::Cycle, permutation::Permutation};
    /// let cycles = [Cycle::new(vec![1, 2, 3]).unwrap(), Cycle::new(vec![2, 3]).unwrap()];
    /// let p = Permutation::from_cycles(&cycles).unwrap();
    /// assert_eq!(p.images(), &[2, 1, 3]);
    /// ```
    pub fn from_cycles(cycles: &[Cycle]) -> Result<Self, SolveError> {
        Self::from_cycles_ordered(cycles, CycleOrder::LastFirst)
    }

    /// The size `n` of the domain.
    pub fn degree(&self) -> usize {
        self.map.len()
    }

    /// Where `i` is sent.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in `1..=n`.
    pub fn image(&self, i: usize) -> usize {
        self.map[i - 1]
    }

    /// The element sent to `i`.
    pub fn preimage(&self, i: usize) -> usize {
        self.inv[i - 1]
    }

    /// Images of `1, 2, ..., n`, in that order.
    pub fn images(&self) -> &[usize] {
        &self.map
    }

    /// `(i, image of i)` for ascending `i`.
    pub fn pairs(&self) -> impl ExactSizeIterator<Item = (usize, usize)> + '_ {
        self.map.iter().enumerate().map(|(i, &j)| (i + 1, j))
    }

    // --------------------------------------------------------------------------------------------
    // Basic Operations
    // --------------------------------------------------------------------------------------------

    /// Returns the inverse of the permutation.
    ///
    /// ```
    /// # use permsolve::permutation::Permutation;
    /// let p = Permutation::try_from_images(vec![2, 3, 1]).unwrap();
    /// assert_eq!(p.inverse().images(), &[3, 1, 2]);
    /// ```
    pub fn inverse(&self) -> Self {
        Permutation {
            map: self.inv.clone(),
            inv: self.map.clone(),
        }
    }

    /// Composes `self` with another permutation `other`, returning a new permutation:
    /// `(self ∘ other)(i) = self(other(i))`.
    ///
    /// # Panics
    ///
    /// Panics if the degrees differ.
    pub fn compose(&self, other: &Self) -> Self {
        assert_eq!(
            self.degree(),
            other.degree(),
            "cannot compose permutations of different degree"
        );
        let map = other.map.iter().map(|&i| self.map[i - 1]).collect();
        Self::from_images_unchecked(map)
    }

    /// Checks if this permutation is the identity permutation (i.e., does nothing).
    pub fn is_identity(&self) -> bool {
        self.map.iter().enumerate().all(|(i, &m)| i + 1 == m)
    }

    /// Computes the k-th power of the permutation (composition with itself k times).
    /// For k = 0, it returns the identity of the same size.
    ///
    /// ```
    /// # use permsolve::permutation::Permutation;
    /// let p = Permutation::try_from_images(vec![2, 3, 1]).unwrap();
    /// assert_eq!(p.pow(2).images(), &[3, 1, 2]);
    /// assert!(p.pow(3).is_identity());
    /// ```
    pub fn pow(&self, k: usize) -> Self {
        let mut result = Permutation::id(self.degree());
        let mut base = self.clone();
        let mut exp = k;

        while exp > 0 {
            if exp % 2 == 1 {
                result = result.compose(&base);
            }
            base = base.compose(&base);
            exp /= 2;
        }
        result
    }

    // --------------------------------------------------------------------------------------------
    // Cycles and Invariants
    // --------------------------------------------------------------------------------------------

    /// The disjoint cycles of `self`, fixed points included.
    pub fn disjoint_cycles(&self) -> DisjointCycles {
        DisjointCycles::decompose(self)
    }

    /// Returns the list of transpositions for `self`, by decomposing it into cycles
    /// and then converting each cycle to transpositions.
    ///
    /// ```
    /// # use permsolve::{cycle::Transposition, permutation::Permutation};
    /// let p = Permutation::try_from_images(vec![3, 1, 2, 4]).unwrap();
    /// assert_eq!(
    ///     p.transpositions(),
    ///     vec![Transposition::new(1, 2), Transposition::new(1, 3)]
    /// );
    /// ```
    pub fn transpositions(&self) -> Vec<Transposition> {
        invariants::transpositions(&self.disjoint_cycles())
    }

    /// The smallest `k > 0` with `self.pow(k)` the identity.
    pub fn order(&self) -> BigUint {
        invariants::order(&self.disjoint_cycles())
    }

    pub fn parity(&self) -> Parity {
        Parity::of(&self.disjoint_cycles())
    }

    /// Returns the sign (+1 or -1) of the permutation,
    /// indicating whether it is an even (+1) or odd (-1) permutation.
    ///
    /// ```
    /// # use permsolve::permutation::Permutation;
    /// let p = Permutation::try_from_images(vec![2, 1, 4, 3]).unwrap();
    /// assert_eq!(p.sign(), 1); // even
    ///
    /// let q = Permutation::try_from_images(vec![3, 2, 1]).unwrap();
    /// assert_eq!(q.sign(), -1); // odd
    /// ```
    pub fn sign(&self) -> i8 {
        self.parity().sign()
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // cycle notation, then one-line notation
        write!(f, "{} [", self.disjoint_cycles())?;
        for (i, &x) in self.map.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{x}")?;
        }
        write!(f, "]")
    }
}

/// Reads a product of cycles, right to left, with the default degree cap.
///
/// ```
/// # use permsolve::permutation::Permutation;
/// let p: Permutation = "(1,2)(2,3)".parse().unwrap();
/// assert_eq!(p.images(), &[2, 3, 1]);
/// ```
impl FromStr for Permutation {
    type Err = SolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_cycles(&parse_cycles(s)?)
    }
}

impl Index<usize> for Permutation {
    type Output = usize;

    /// The image of `i`, for `i` in `1..=n`.
    fn index(&self, i: usize) -> &Self::Output {
        &self.map[i - 1]
    }
}
