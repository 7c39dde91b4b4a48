//! # Disjoint-cycle decomposition
//!
//! Every permutation of `{1..n}` splits `{1..n}` into orbits, and on each
//! orbit it acts as a single cycle. [`DisjointCycles`] records those cycles
//! in order of their smallest element, each one starting at that element.
//!
//! Orbits are traced from every starting point `1, 2, ..., n` in turn. The
//! elements already lying on a recorded orbit are tracked in a bitset, so a
//! starting point on a known orbit (a rotation of a cycle already found) is
//! skipped, and the walk stops once all `n` elements are covered.

use std::fmt;

use bitvec::vec::BitVec;
use log::{debug, trace};

use crate::{cycle::Cycle, permutation::Permutation};

/// The disjoint cycles of a permutation, fixed points included.
///
/// # Examples
///
/// ```
/// use permsolve::{disjoint::DisjointCycles, permutation::Permutation};
///
/// let p = Permutation::try_from_images(vec![3, 2, 1, 5, 4]).unwrap();
/// let d = DisjointCycles::decompose(&p);
/// assert_eq!(d.len(), 3);
/// assert_eq!(d.to_string(), "(1,3)(4,5)");
/// assert_eq!(d.lengths().collect::<Vec<_>>(), vec![2, 1, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisjointCycles {
    cycles: Vec<Cycle>,
    degree: usize,
}

impl DisjointCycles {
    pub fn decompose(p: &Permutation) -> Self {
        let n = p.degree();
        let mut covered: BitVec = BitVec::repeat(false, n);
        let mut assigned = 0;
        let mut cycles = Vec::new();

        for start in 1..=n {
            if assigned == n {
                break;
            }
            if covered[start - 1] {
                continue;
            }

            let mut orbit = vec![start];
            covered.set(start - 1, true);
            let mut j = p.image(start);
            while j != start {
                covered.set(j - 1, true);
                orbit.push(j);
                j = p.image(j);
            }
            trace!("orbit of {start}: {orbit:?}");

            assigned += orbit.len();
            cycles.push(Cycle::from_orbit(orbit));
        }

        debug!(
            "{} orbit(s) over 1..={n}, {} non-trivial",
            cycles.len(),
            cycles.iter().filter(|c| c.len() > 1).count()
        );
        DisjointCycles { cycles, degree: n }
    }

    /// All cycles, 1-cycles included.
    pub fn cycles(&self) -> &[Cycle] {
        &self.cycles
    }

    /// Cycles moving at least two elements.
    pub fn non_trivial(&self) -> impl Iterator<Item = &Cycle> + '_ {
        self.cycles.iter().filter(|c| c.len() > 1)
    }

    /// The elements fixed by the permutation.
    pub fn fixed_points(&self) -> impl Iterator<Item = usize> + '_ {
        self.cycles
            .iter()
            .filter(|c| c.len() == 1)
            .map(|c| c.elements()[0])
    }

    pub fn lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.cycles.iter().map(Cycle::len)
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn len(&self) -> usize {
        self.cycles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cycles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cycle> {
        self.cycles.iter()
    }

    /// Multiplies the cycles back together.
    ///
    /// Disjoint cycles commute, so no composition order is involved.
    pub fn to_permutation(&self) -> Permutation {
        let mut map: Vec<usize> = (1..=self.degree).collect();
        for cycle in &self.cycles {
            for &x in cycle.elements() {
                map[x - 1] = cycle.image(x);
            }
        }
        Permutation::from_images_unchecked(map)
    }
}

impl<'a> IntoIterator for &'a DisjointCycles {
    type Item = &'a Cycle;
    type IntoIter = std::slice::Iter<'a, Cycle>;

    fn into_iter(self) -> Self::IntoIter {
        self.cycles.iter()
    }
}

/// Non-trivial cycles only; the identity shows as `()`.
impl fmt::Display for DisjointCycles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for cycle in self.non_trivial() {
            write!(f, "{cycle}")?;
            first = false;
        }
        if first {
            write!(f, "()")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use similar_asserts::assert_eq;

    use super::*;
    use crate::parser::parse_cycles;

    fn elements(d: &DisjointCycles) -> Vec<Vec<usize>> {
        d.iter().map(|c| c.elements().to_vec()).collect()
    }

    fn mapping(input: &str) -> Permutation {
        Permutation::from_cycles(&parse_cycles(input).unwrap()).unwrap()
    }

    #[test]
    fn golden_decomposition() {
        let d = DisjointCycles::decompose(&mapping("(1,4,5,6,7,8)(7,9,10,3,2,1)"));
        assert_eq!(elements(&d), vec![vec![1, 8], vec![2, 4, 5, 6, 7, 9, 10, 3]]);
        assert_eq!(d.to_string(), "(1,8)(2,4,5,6,7,9,10,3)");
        assert_eq!(d.fixed_points().count(), 0);
    }

    #[test]
    fn repeated_cycle_lengths_are_all_found() {
        // two 2-cycles and a 3-cycle: stopping after one orbit per distinct
        // length would lose (3,4)
        let d = DisjointCycles::decompose(&mapping("(1,2)(3,4)(5,6,7)"));
        assert_eq!(
            elements(&d),
            vec![vec![1, 2], vec![3, 4], vec![5, 6, 7]]
        );
    }

    #[test]
    fn fixed_points_are_kept_but_not_displayed() {
        let d = DisjointCycles::decompose(&mapping("(2,4)"));
        assert_eq!(elements(&d), vec![vec![1], vec![2, 4], vec![3]]);
        assert_eq!(d.fixed_points().collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(d.non_trivial().count(), 1);
        assert_eq!(d.to_string(), "(2,4)");
    }

    #[test]
    fn identity_displays_as_empty_cycle() {
        let d = DisjointCycles::decompose(&Permutation::id(3));
        assert_eq!(d.len(), 3);
        assert_eq!(d.to_string(), "()");
    }

    #[test]
    fn orbits_partition_the_domain() {
        let d = DisjointCycles::decompose(&mapping("(1,5,2)(3,6)(2,6,4)"));
        let mut all: Vec<usize> = d.iter().flat_map(|c| c.elements().to_vec()).collect();
        all.sort_unstable();
        assert_eq!(all, (1..=6).collect::<Vec<_>>());
        let firsts: Vec<usize> = d.iter().map(|c| c.elements()[0]).collect();
        assert!(firsts.windows(2).all(|w| w[0] < w[1]));
        assert!(d.iter().all(|c| c.elements()[0] == c.smallest()));
    }

    #[test]
    fn round_trip() {
        let p = mapping("(1,4,5,6,7,8)(7,9,10,3,2,1)");
        assert_eq!(p.disjoint_cycles().to_permutation(), p);
    }
}
