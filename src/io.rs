//! Reading reorder problems from text, and writing out the results
//!
//! The input format is a flat list of whitespace-separated integers:
//!
//! ```text
//! n q
//! [v_1 v_2 ... v_n]
//! l_1 r_1
//! ...
//! l_q r_q
//! ```
//!
//! The initial values are optional. When they're missing, the sequence is `1, 2, ..., n`. Whether
//! they're present is decided by the number of tokens after the header: `n + 2q` means yes, `2q`
//! means no, and anything else is an error. A default sequence too large to allocate is rejected
//! with [`ParseError::SequenceTooLong`].
//!
//! Each `(l, r)` pair is a 1-indexed inclusive range, applied in order with
//! [`PositionalTree::move_range_to_front`].

use crate::{Error, PositionalTree};
use std::io::{self, Write};
use std::str::FromStr;

/// A parsed reorder problem: the initial sequence and the requests to apply to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub values: Vec<i64>,
    pub queries: Vec<(usize, usize)>,
}

/// Errors from [`parse_input`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("expected a header with the sequence length and query count")]
    MissingHeader,
    #[error("invalid integer {token:?}")]
    InvalidInteger { token: String },
    /// The number of tokens after the header fits neither layout. Counts too large to represent
    /// saturate at `usize::MAX`.
    #[error("expected {without_values} or {with_values} tokens after the header, found {found}")]
    TokenCount {
        without_values: usize,
        with_values: usize,
        found: usize,
    },
    #[error("a default sequence of length {len} can't be allocated")]
    SequenceTooLong { len: usize },
}

/// Parses a full problem from `text`
///
/// ```
/// use hyperion::io::{parse_input, Input};
///
/// let input = parse_input("3 1\n3 3\n").unwrap();
/// assert_eq!(input, Input { values: vec![1, 2, 3], queries: vec![(3, 3)] });
/// ```
pub fn parse_input(text: &str) -> Result<Input, ParseError> {
    let mut tokens = text.split_ascii_whitespace();

    let (n, q) = match (tokens.next(), tokens.next()) {
        (Some(n), Some(q)) => (parse_token::<usize>(n)?, parse_token::<usize>(q)?),
        _ => return Err(ParseError::MissingHeader),
    };

    let rest: Vec<&str> = tokens.collect();
    let without_values = q.saturating_mul(2);
    let with_values = without_values.saturating_add(n);

    let values = if rest.len() == with_values {
        rest[..n]
            .iter()
            .map(|t| parse_token::<i64>(t))
            .collect::<Result<Vec<_>, _>>()?
    } else if rest.len() == without_values {
        default_sequence(n)?
    } else {
        return Err(ParseError::TokenCount {
            without_values,
            with_values,
            found: rest.len(),
        });
    };

    let pairs = &rest[rest.len() - 2 * q..];
    let queries: Vec<(usize, usize)> = pairs
        .chunks_exact(2)
        .map(|pair| Ok((parse_token(pair[0])?, parse_token(pair[1])?)))
        .collect::<Result<_, ParseError>>()?;

    debug_println!("parsed {} values and {} queries", values.len(), queries.len());
    Ok(Input { values, queries })
}

/// Returns `1, 2, ..., n`, failing instead of aborting if there isn't room for it
fn default_sequence(n: usize) -> Result<Vec<i64>, ParseError> {
    let too_long = || ParseError::SequenceTooLong { len: n };

    let last = i64::try_from(n).map_err(|_| too_long())?;
    let mut values = Vec::new();
    values.try_reserve_exact(n).map_err(|_| too_long())?;
    values.extend(1..=last);
    Ok(values)
}

fn parse_token<T: FromStr>(token: &str) -> Result<T, ParseError> {
    token.parse().map_err(|_| ParseError::InvalidInteger {
        token: token.to_owned(),
    })
}

/// Builds the initial tree and applies every query in order
///
/// Stops at the first query that fails, returning its error.
pub fn solve(input: Input) -> Result<PositionalTree<i64>, Error> {
    let mut tree = PositionalTree::build(input.values);
    for (left, right) in input.queries {
        tree.move_range_to_front(left, right)?;
    }
    Ok(tree)
}

/// Writes the elements of `tree` separated by single spaces, followed by a newline
pub fn write_sequence<W, T>(mut writer: W, tree: &PositionalTree<T>) -> io::Result<()>
where
    W: Write,
    T: std::fmt::Display,
{
    writeln!(writer, "{tree}")
}
