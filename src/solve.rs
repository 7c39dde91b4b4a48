//! The whole pipeline for one input: parse, compose, decompose, then read
//! off the invariants and the inverse.

use log::{debug, info};
use num::BigUint;

use crate::{
    cycle::{Cycle, Transposition},
    disjoint::DisjointCycles,
    error::SolveError,
    invariants::{self, Parity},
    parser::parse_cycles,
    permutation::{CycleOrder, Permutation},
};

/// Largest degree accepted by default.
pub const DEFAULT_MAX_DEGREE: usize = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveOptions {
    /// How a product of cycles is read.
    pub order: CycleOrder,
    /// Inputs naming an element above this are rejected before any table is built.
    pub max_degree: usize,
}

impl Default for SolveOptions {
    fn default() -> Self {
        SolveOptions {
            order: CycleOrder::default(),
            max_degree: DEFAULT_MAX_DEGREE,
        }
    }
}

impl SolveOptions {
    pub fn with_order(mut self, order: CycleOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_max_degree(mut self, max_degree: usize) -> Self {
        self.max_degree = max_degree;
        self
    }
}

/// Everything derived from one permutation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// The cycles as written.
    pub cycles: Vec<Cycle>,
    pub mapping: Permutation,
    pub disjoint: DisjointCycles,
    pub transpositions: Vec<Transposition>,
    pub order: BigUint,
    pub parity: Parity,
    pub inverse: Permutation,
}

impl Solution {
    /// Runs the stages after parsing on already-built cycles.
    pub fn from_cycles(cycles: Vec<Cycle>, options: &SolveOptions) -> Result<Self, SolveError> {
        let mapping = Permutation::from_cycles_bounded(&cycles, options.order, options.max_degree)?;
        let degree = mapping.degree();
        let disjoint = DisjointCycles::decompose(&mapping);
        let transpositions = invariants::transpositions(&disjoint);
        let order = invariants::order(&disjoint);
        let parity = Parity::of(&disjoint);
        debug_assert_eq!(parity, Parity::of_count(transpositions.len()));
        let inverse = mapping.inverse();

        info!("S{degree}: {disjoint}, order {order}, {parity}");
        Ok(Solution {
            cycles,
            mapping,
            disjoint,
            transpositions,
            order,
            parity,
            inverse,
        })
    }

    pub fn degree(&self) -> usize {
        self.mapping.degree()
    }
}

/// Solves `input` with the default options: right-to-left composition.
///
/// # Examples
///
/// ```
/// use permsolve::{invariants::Parity, solve};
///
/// let s = solve("(1,2,3)").unwrap();
/// assert_eq!(s.mapping.images(), &[2, 3, 1]);
/// assert_eq!(s.disjoint.to_string(), "(1,2,3)");
/// assert_eq!(s.order.to_string(), "3");
/// assert_eq!(s.parity, Parity::Even);
/// assert_eq!(s.inverse.images(), &[3, 1, 2]);
/// ```
pub fn solve(input: &str) -> Result<Solution, SolveError> {
    solve_with(input, &SolveOptions::default())
}

pub fn solve_with(input: &str, options: &SolveOptions) -> Result<Solution, SolveError> {
    debug!("solving {input:?} with {options:?}");
    let cycles = parse_cycles(input)?;
    Solution::from_cycles(cycles, options)
}
