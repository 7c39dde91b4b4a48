//! Text rendering of a [`Solution`].
//!
//! Mappings are written as two rows, the domain `(1,2,...,n)` above the
//! images. Cycles and transpositions are written in cycle notation.

use std::fmt;

use crate::{
    cycle::write_tuple,
    permutation::Permutation,
    solve::Solution,
};

/// A printable view of a [`Solution`].
///
/// ```
/// use permsolve::{report::Report, solve};
///
/// let s = solve("(2,3)").unwrap();
/// let text = Report::new(&s).to_string();
/// assert!(text.contains("Disjoint Cycles:\n(2,3)\n"));
///
/// let text = Report::new(&s).show_fixed_points(true).to_string();
/// assert!(text.contains("Disjoint Cycles:\n(1)(2,3)\n"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    solution: &'a Solution,
    show_fixed_points: bool,
}

impl<'a> Report<'a> {
    pub fn new(solution: &'a Solution) -> Self {
        Report {
            solution,
            show_fixed_points: false,
        }
    }

    /// Also list 1-cycles in the disjoint decomposition.
    pub fn show_fixed_points(mut self, show: bool) -> Self {
        self.show_fixed_points = show;
        self
    }

    fn write_mapping(f: &mut fmt::Formatter<'_>, p: &Permutation) -> fmt::Result {
        write_tuple(f, 1..=p.degree())?;
        writeln!(f)?;
        write_tuple(f, p.images())
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.solution;

        writeln!(f, "Final Mapping:")?;
        Self::write_mapping(f, &s.mapping)?;
        writeln!(f)?;

        writeln!(f, "\nDisjoint Cycles:")?;
        if self.show_fixed_points {
            for cycle in &s.disjoint {
                write!(f, "{cycle}")?;
            }
        } else {
            write!(f, "{}", s.disjoint)?;
        }
        writeln!(f)?;

        writeln!(f, "\nTranspositions:")?;
        if s.transpositions.is_empty() {
            write!(f, "()")?;
        }
        for t in &s.transpositions {
            write!(f, "{t}")?;
        }
        writeln!(f)?;

        writeln!(f, "\nOrder: {}", s.order)?;
        writeln!(f, "Parity: {}", s.parity)?;

        writeln!(f, "\nInverse:")?;
        Self::write_mapping(f, &s.inverse)
    }
}
