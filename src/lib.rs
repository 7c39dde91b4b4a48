//! # permsolve
//!
//! Structural invariants of a single permutation of the symmetric group Sn,
//! given as a product of (not necessarily disjoint) cycles such as
//! `(1,4,5,6,7,8)(7,9,10,3,2,1)`.
//!
//! The pipeline runs forward only:
//!
//! 1. [`parser`] reads the cycles in the order they are written,
//! 2. [`permutation`] composes them into one mapping over `{1..n}`, the
//!    rightmost cycle applied first,
//! 3. [`disjoint`] splits that mapping into disjoint cycles,
//! 4. [`invariants`] reads off order, parity and a transposition factorization,
//! 5. [`Permutation::inverse`] gives the inverse mapping.
//!
//! [`solve()`] runs all of it and returns a [`Solution`]; [`report`] renders one
//! as text.
//!
//! ```
//! let s = permsolve::solve("(1,4,5,6,7,8)(7,9,10,3,2,1)").unwrap();
//! assert_eq!(s.disjoint.to_string(), "(1,8)(2,4,5,6,7,9,10,3)");
//! assert_eq!(s.order.to_string(), "8");
//! ```

pub mod cycle;
pub mod disjoint;
pub mod error;
pub mod invariants;
pub mod parser;
pub mod permutation;
pub mod report;
pub mod solve;

#[cfg(test)]
mod tests;

pub use error::{DomainError, SolveError};
pub use parser::ParseError;
pub use permutation::{CycleOrder, Permutation};
pub use solve::{solve, solve_with, Solution, SolveOptions};
