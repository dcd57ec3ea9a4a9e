//! Parsing human move input.
//!
//! Two spellings are accepted: a zero-based `row col` pair (`1 2`, `1,2`)
//! and a board label with a letter row and a one-based column (`B3`,
//! `b 3`). Anything else is refused here, before the engine sees it.

use noughts_engine::Coord;
use tracing::instrument;

/// Why a line of input is not a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InputError {
    /// Nothing was typed.
    #[display("Please enter a move, e.g. \"1 1\" or \"B2\".")]
    Empty,

    /// Input did not match either accepted form.
    #[display("Invalid input {_0:?}. Enter two integers from 0 to 2, or a label like B2.")]
    Malformed(#[error(not(source))] String),

    /// Well-formed, but names a cell off the board.
    #[display("Out of range. Use rows 0-2 (or A-C) and columns 0-2 (or 1-3).")]
    OutOfRange,
}

/// Parses one line of human input into zero-based `(row, col)`.
///
/// # Errors
///
/// Returns [`InputError`] when the line is empty, malformed, or off the
/// board.
#[instrument(ret, level = "debug")]
pub fn parse_move(line: &str) -> Result<(usize, usize), InputError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }

    let tokens: Vec<&str> = trimmed
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect();

    let coords = match tokens.as_slice() {
        [row, col] if starts_with_letter(row) => parse_label(row, col),
        [row, col] => parse_numeric(row, col),
        [label] if starts_with_letter(label) && label.len() > 1 => {
            let (row, col) = label.split_at(1);
            parse_label(row, col)
        }
        _ => None,
    };

    let (row, col) = coords.ok_or_else(|| InputError::Malformed(trimmed.to_string()))?;
    if row > 2 || col > 2 {
        return Err(InputError::OutOfRange);
    }
    Ok((row, col))
}

/// Board label for a cell, e.g. `(1, 2)` is `B3`.
pub fn label(coord: Coord) -> String {
    let letter = ['A', 'B', 'C'][coord.row()];
    format!("{}{}", letter, coord.col() + 1)
}

fn starts_with_letter(token: &str) -> bool {
    token.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
}

fn parse_numeric(row: &str, col: &str) -> Option<(usize, usize)> {
    Some((row.parse().ok()?, col.parse().ok()?))
}

fn parse_label(row: &str, col: &str) -> Option<(usize, usize)> {
    let mut letters = row.chars();
    let letter = letters.next()?.to_ascii_uppercase();
    if letters.next().is_some() || !letter.is_ascii_uppercase() {
        return None;
    }
    let row = usize::from(letter as u8 - b'A');

    let col: usize = col.parse().ok()?;
    // One-based: column 0 becomes an impossible index, caught by the range check.
    let col = col.checked_sub(1).unwrap_or(usize::MAX);
    Some((row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_pairs() {
        assert_eq!(parse_move("0 0"), Ok((0, 0)));
        assert_eq!(parse_move("  2   1 \n"), Ok((2, 1)));
        assert_eq!(parse_move("1,2"), Ok((1, 2)));
        assert_eq!(parse_move("1, 2"), Ok((1, 2)));
    }

    #[test]
    fn test_labels() {
        assert_eq!(parse_move("A1"), Ok((0, 0)));
        assert_eq!(parse_move("b2"), Ok((1, 1)));
        assert_eq!(parse_move("C 3"), Ok((2, 2)));
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(parse_move("3 0"), Err(InputError::OutOfRange));
        assert_eq!(parse_move("0 7"), Err(InputError::OutOfRange));
        assert_eq!(parse_move("D1"), Err(InputError::OutOfRange));
        assert_eq!(parse_move("A4"), Err(InputError::OutOfRange));
        assert_eq!(parse_move("A0"), Err(InputError::OutOfRange));
    }

    #[test]
    fn test_malformed() {
        assert_eq!(parse_move(""), Err(InputError::Empty));
        assert_eq!(parse_move("   "), Err(InputError::Empty));
        assert!(matches!(parse_move("hello"), Err(InputError::Malformed(_))));
        assert!(matches!(parse_move("1"), Err(InputError::Malformed(_))));
        assert!(matches!(parse_move("1 2 3"), Err(InputError::Malformed(_))));
        assert!(matches!(parse_move("-1 0"), Err(InputError::Malformed(_))));
        assert!(matches!(parse_move("x y"), Err(InputError::Malformed(_))));
        assert!(matches!(parse_move("AB 1"), Err(InputError::Malformed(_))));
    }

    #[test]
    fn test_label_round_trip() {
        assert_eq!(label(Coord::ALL[0]), "A1");
        assert_eq!(label(Coord::ALL[5]), "B3");
        for coord in Coord::ALL {
            assert_eq!(parse_move(&label(coord)), Ok((coord.row(), coord.col())));
        }
    }

    #[test]
    fn test_input_error_has_no_source() {
        use std::error::Error;

        let err = InputError::Malformed("zz".to_string());
        assert!(err.source().is_none());
        assert!(err.to_string().contains("\"zz\""));
    }
}
