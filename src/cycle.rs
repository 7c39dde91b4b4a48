//! # Cycles and transpositions
//!
//! A [`Cycle`] is an ordered list of pairwise-distinct positive integers
//! `(a1, a2, ..., ak)` sending `a1 -> a2 -> ... -> ak -> a1`. A
//! [`Transposition`] is the special case `k = 2`, produced when a cycle is
//! factored around a fixed pivot.
//!
//! Both render in the comma-separated notation they are parsed from, e.g.
//! `(1,4,5)`.

use std::fmt;

use itertools::Itertools;

use crate::error::DomainError;

/// Writes `items` as `(a,b,c)`.
pub(crate) fn write_tuple<I>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    write!(f, "({})", items.into_iter().join(","))
}

/// A single cycle over positive integers.
///
/// # Examples
///
/// ```
/// use permsolve::cycle::Cycle;
///
/// let c = Cycle::new(vec![1, 4, 5]).unwrap();
/// assert_eq!(c.image(4), 5);
/// assert_eq!(c.image(5), 1);
/// assert_eq!(c.image(2), 2);
/// assert_eq!(c.to_string(), "(1,4,5)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<usize>", into = "Vec<usize>"))]
pub struct Cycle {
    elements: Vec<usize>,
}

impl Cycle {
    /// Builds a cycle, rejecting empty lists, zero and repeated elements.
    pub fn new(elements: Vec<usize>) -> Result<Self, DomainError> {
        if elements.is_empty() {
            return Err(DomainError::Empty);
        }
        if let Some(offset) = elements.iter().position(|&x| x == 0) {
            return Err(DomainError::NonPositive { value: 0, offset });
        }
        if let Some(&element) = elements.iter().duplicates().next() {
            return Err(DomainError::RepeatedElement { element });
        }
        Ok(Cycle { elements })
    }

    /// An orbit traced from a bijection is already a valid cycle.
    pub(crate) fn from_orbit(elements: Vec<usize>) -> Self {
        debug_assert!(!elements.is_empty());
        Cycle { elements }
    }

    pub fn elements(&self) -> &[usize] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Always false, cycles hold at least one element.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn max_element(&self) -> usize {
        self.elements.iter().copied().max().unwrap_or(0)
    }

    pub fn smallest(&self) -> usize {
        self.elements.iter().copied().min().unwrap_or(0)
    }

    pub fn contains(&self, x: usize) -> bool {
        self.elements.contains(&x)
    }

    /// Where this cycle sends `x`; elements outside the cycle are fixed.
    pub fn image(&self, x: usize) -> usize {
        match self.elements.iter().position(|&e| e == x) {
            Some(i) => self.elements[(i + 1) % self.elements.len()],
            None => x,
        }
    }

    /// The same cycle rotated so that it starts at its smallest element.
    ///
    /// ```
    /// # use permsolve::cycle::Cycle;
    /// let c = Cycle::new(vec![4, 2, 7]).unwrap();
    /// assert_eq!(c.canonical().elements(), &[2, 7, 4]);
    /// ```
    pub fn canonical(&self) -> Self {
        let start = self
            .elements
            .iter()
            .position_min()
            .unwrap_or_default();
        let mut elements = self.elements.clone();
        elements.rotate_left(start);
        Cycle { elements }
    }

    /// Factors the cycle as a product of transpositions sharing its first
    /// element as pivot.
    ///
    /// `(a1, a2, ..., ak) = (a1, ak)(a1, ak-1)...(a1, a2)`, read right to left.
    ///
    /// ```
    /// # use permsolve::cycle::{Cycle, Transposition};
    /// let c = Cycle::new(vec![1, 3, 2]).unwrap();
    /// assert_eq!(
    ///     c.transpositions(),
    ///     vec![Transposition::new(1, 2), Transposition::new(1, 3)]
    /// );
    /// ```
    pub fn transpositions(&self) -> Vec<Transposition> {
        let pivot = self.elements[0];
        self.elements[1..]
            .iter()
            .rev()
            .map(|&x| Transposition::new(pivot, x))
            .collect()
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tuple(f, &self.elements)
    }
}

impl TryFrom<Vec<usize>> for Cycle {
    type Error = DomainError;

    fn try_from(elements: Vec<usize>) -> Result<Self, Self::Error> {
        Cycle::new(elements)
    }
}

impl From<Cycle> for Vec<usize> {
    fn from(cycle: Cycle) -> Self {
        cycle.elements
    }
}

/// A swap `(pivot, other)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transposition {
    pub pivot: usize,
    pub other: usize,
}

impl Transposition {
    pub fn new(pivot: usize, other: usize) -> Self {
        Transposition { pivot, other }
    }

    pub fn to_cycle(self) -> Cycle {
        Cycle {
            elements: vec![self.pivot, self.other],
        }
    }
}

impl fmt::Display for Transposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tuple(f, [self.pivot, self.other])
    }
}
