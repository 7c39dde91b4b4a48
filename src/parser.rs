//! # Cycle notation parser
//!
//! Reads a product of cycles written as parenthesised, comma-separated lists
//! of integers with nothing between them, e.g. `(1,4,5,6,7,8)(7,9,10,3,2,1)`.
//! Whitespace is removed before anything else, so `"( 1, 2 )( 3 4 )"` reads
//! as `(1,2)(34)`.
//!
//! Syntax errors are reported as [`ParseError`]; well-formed input naming
//! something that is not a cycle over positive integers is reported as a
//! [`DomainError`]. Offsets are character offsets into the original input.

use log::{debug, trace};
use thiserror::Error;

use crate::{
    cycle::Cycle,
    error::{DomainError, SolveError},
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected `{found}` at offset {offset}, expected {expected}")]
    UnexpectedChar {
        found: char,
        offset: usize,
        expected: &'static str,
    },

    #[error("cycle opened at offset {offset} is never closed")]
    Unclosed { offset: usize },

    #[error("empty cycle at offset {offset}")]
    EmptyCycle { offset: usize },

    #[error("missing element at offset {offset}")]
    EmptyElement { offset: usize },

    #[error("`{token}` at offset {offset} is not an integer")]
    InvalidInteger { token: String, offset: usize },
}

/// Non-whitespace characters of the input, each with its original offset.
struct Cursor {
    chars: Vec<(usize, char)>,
    pos: usize,
}

impl Cursor {
    fn new(input: &str) -> Self {
        Cursor {
            chars: input
                .chars()
                .enumerate()
                .filter(|(_, c)| !c.is_whitespace())
                .collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<(usize, char)> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<(usize, char)> {
        let next = self.peek();
        if next.is_some() {
            self.pos += 1;
        }
        next
    }

    fn end_offset(&self) -> usize {
        self.chars.last().map(|&(o, _)| o + 1).unwrap_or(0)
    }

    /// Reads one element up to, not including, the next `,` or `)`.
    fn element(&mut self, open: usize) -> Result<(i64, usize), ParseError> {
        let start = self.peek().map(|(o, _)| o).unwrap_or(self.end_offset());
        let mut token = String::new();
        loop {
            match self.peek() {
                None => return Err(ParseError::Unclosed { offset: open }),
                Some((_, ',' | ')')) => break,
                Some((offset, '(')) => {
                    return Err(ParseError::UnexpectedChar {
                        found: '(',
                        offset,
                        expected: "an integer, `,` or `)`",
                    })
                }
                Some((_, c)) => {
                    token.push(c);
                    self.pos += 1;
                }
            }
        }
        if token.is_empty() {
            return Err(ParseError::EmptyElement { offset: start });
        }
        token
            .parse::<i64>()
            .map(|value| (value, start))
            .map_err(|_| ParseError::InvalidInteger {
                token,
                offset: start,
            })
    }

    /// Reads one `( ... )` group; the cursor sits on the opening parenthesis.
    fn cycle(&mut self) -> Result<Cycle, SolveError> {
        let Some((open, _)) = self.bump() else {
            return Err(DomainError::Empty.into());
        };
        if let Some((offset, ')')) = self.peek() {
            return Err(ParseError::EmptyCycle { offset }.into());
        }

        let mut elements = Vec::new();
        loop {
            let (value, offset) = self.element(open)?;
            let element = usize::try_from(value)
                .ok()
                .filter(|&e| e > 0)
                .ok_or(DomainError::NonPositive { value, offset })?;
            elements.push(element);

            match self.bump() {
                Some((_, ',')) => continue,
                Some((_, ')')) => break,
                _ => return Err(ParseError::Unclosed { offset: open }.into()),
            }
        }
        trace!("cycle at offset {open}: {elements:?}");
        Ok(Cycle::new(elements)?)
    }
}

/// Parses cycle notation into cycles, in the order they are written.
///
/// # Examples
///
/// ```
/// use permsolve::parser::parse_cycles;
///
/// let cycles = parse_cycles("(1,4,5)(7, 9, 10)").unwrap();
/// assert_eq!(cycles.len(), 2);
/// assert_eq!(cycles[1].elements(), &[7, 9, 10]);
/// ```
pub fn parse_cycles(input: &str) -> Result<Vec<Cycle>, SolveError> {
    let mut cursor = Cursor::new(input);
    let mut cycles = Vec::new();

    while let Some((offset, c)) = cursor.peek() {
        if c != '(' {
            return Err(ParseError::UnexpectedChar {
                found: c,
                offset,
                expected: "`(`",
            }
            .into());
        }
        cycles.push(cursor.cycle()?);
    }

    if cycles.is_empty() {
        return Err(DomainError::Empty.into());
    }
    debug!("parsed {} cycle(s) from {input:?}", cycles.len());
    Ok(cycles)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_err(input: &str) -> SolveError {
        parse_cycles(input).unwrap_err()
    }

    #[test]
    fn keeps_written_order() {
        let cycles = parse_cycles("(1,4,5,6,7,8)(7,9,10,3,2,1)").unwrap();
        let elements: Vec<_> = cycles.iter().map(|c| c.elements().to_vec()).collect();
        assert_eq!(
            elements,
            vec![vec![1, 4, 5, 6, 7, 8], vec![7, 9, 10, 3, 2, 1]]
        );
    }

    #[test]
    fn whitespace_is_stripped_everywhere() {
        let cycles = parse_cycles("  ( 1 , 2 )\n(3 4)\t").unwrap();
        assert_eq!(cycles[0].elements(), &[1, 2]);
        assert_eq!(cycles[1].elements(), &[34]);
    }

    #[test]
    fn single_element_cycle() {
        let cycles = parse_cycles("(1)").unwrap();
        assert_eq!(cycles[0].elements(), &[1]);
    }

    #[test]
    fn explicit_plus_sign_is_an_integer() {
        let cycles = parse_cycles("(+1,2)").unwrap();
        assert_eq!(cycles[0].elements(), &[1, 2]);
    }

    #[test]
    fn empty_input_is_a_domain_error() {
        assert_eq!(parse_err(""), SolveError::Domain(DomainError::Empty));
        assert_eq!(parse_err("  \n"), SolveError::Domain(DomainError::Empty));
    }

    #[test]
    fn unbalanced_parentheses() {
        assert_eq!(
            parse_err("(1,2"),
            SolveError::Parse(ParseError::Unclosed { offset: 0 })
        );
        assert_eq!(
            parse_err("(1,2)(3"),
            SolveError::Parse(ParseError::Unclosed { offset: 5 })
        );
        assert_eq!(
            parse_err("(1,2))"),
            SolveError::Parse(ParseError::UnexpectedChar {
                found: ')',
                offset: 5,
                expected: "`(`"
            })
        );
        assert_eq!(
            parse_err("(1,(2))"),
            SolveError::Parse(ParseError::UnexpectedChar {
                found: '(',
                offset: 3,
                expected: "an integer, `,` or `)`"
            })
        );
    }

    #[test]
    fn empty_cycle_and_missing_elements() {
        assert_eq!(
            parse_err("(1,2)()"),
            SolveError::Parse(ParseError::EmptyCycle { offset: 6 })
        );
        assert_eq!(
            parse_err("(1,,2)"),
            SolveError::Parse(ParseError::EmptyElement { offset: 3 })
        );
        assert_eq!(
            parse_err("(1,)"),
            SolveError::Parse(ParseError::EmptyElement { offset: 3 })
        );
    }

    #[test]
    fn text_around_cycles_is_rejected() {
        assert!(matches!(
            parse_err("p=(1,2)"),
            SolveError::Parse(ParseError::UnexpectedChar { found: 'p', .. })
        ));
        assert!(matches!(
            parse_err("(1,2);"),
            SolveError::Parse(ParseError::UnexpectedChar { found: ';', .. })
        ));
    }

    #[test]
    fn non_integer_tokens() {
        assert_eq!(
            parse_err("(1,a)"),
            SolveError::Parse(ParseError::InvalidInteger {
                token: "a".into(),
                offset: 3
            })
        );
        assert!(matches!(
            parse_err("(1,2.5)"),
            SolveError::Parse(ParseError::InvalidInteger { .. })
        ));
        assert!(matches!(
            parse_err("(1,99999999999999999999999)"),
            SolveError::Parse(ParseError::InvalidInteger { .. })
        ));
    }

    #[test]
    fn non_positive_elements() {
        assert_eq!(
            parse_err("(1, -3)"),
            SolveError::Domain(DomainError::NonPositive {
                value: -3,
                offset: 4
            })
        );
        assert_eq!(
            parse_err("(0,1)"),
            SolveError::Domain(DomainError::NonPositive {
                value: 0,
                offset: 1
            })
        );
    }

    #[test]
    fn repeated_element_within_a_cycle() {
        assert_eq!(
            parse_err("(1,2,1)"),
            SolveError::Domain(DomainError::RepeatedElement { element: 1 })
        );
        // repeats across cycles are fine
        assert!(parse_cycles("(1,2)(2,1)").is_ok());
    }
}
