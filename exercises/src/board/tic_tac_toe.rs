//! Winner detection on an N×N tic-tac-toe board.
//!
//! Lines are scanned rows first, then columns, then the main diagonal and
//! finally the anti-diagonal. A line wins when none of its cells are empty
//! and every cell holds the same symbol; the first winning line decides.
//! Incomplete boards are evaluated as they stand.

use std::fmt;

use tracing::debug;

use crate::error::BoardError;

/// `None` marks an empty square.
pub type Cell = Option<char>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(char),
    NoWinner,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner(symbol) => write!(f, "{symbol}"),
            Outcome::NoWinner => f.write_str("NO WINNER"),
        }
    }
}

pub fn tic_tac_toe(board: &[Vec<Cell>]) -> Outcome {
    let size = board.len();
    // missing cells in a ragged row read as empty
    let cell = |r: usize, c: usize| board.get(r).and_then(|row| row.get(c)).copied().flatten();

    let rows = (0..size).map(|r| line_winner((0..size).map(|c| cell(r, c))));
    let cols = (0..size).map(|c| line_winner((0..size).map(|r| cell(r, c))));
    let diagonals = [
        line_winner((0..size).map(|i| cell(i, i))),
        line_winner((0..size).map(|i| cell(i, size - 1 - i))),
    ];

    rows.chain(cols)
        .chain(diagonals)
        .flatten()
        .next()
        .map_or(Outcome::NoWinner, Outcome::Winner)
}

fn line_winner(mut line: impl Iterator<Item = Cell>) -> Option<char> {
    let first = line.next()??;
    line.all(|c| c == Some(first)).then_some(first)
}

/// Build a board from string cells: `""` is empty, anything else must be a
/// single symbol. Rejects boards that are empty or not square.
pub fn parse_board<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<Vec<Vec<Cell>>, BoardError> {
    let size = rows.len();
    if size == 0 {
        return Err(BoardError::Empty);
    }

    let mut board = Vec::with_capacity(size);
    for (r, row) in rows.iter().enumerate() {
        if row.len() != size {
            debug!(row = r, len = row.len(), size, "board is not square");
            return Err(BoardError::NotSquare {
                row: r,
                len: row.len(),
                size,
            });
        }
        let parsed = row
            .iter()
            .enumerate()
            .map(|(c, raw)| parse_cell(r, c, raw.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        board.push(parsed);
    }
    Ok(board)
}

fn parse_cell(row: usize, col: usize, raw: &str) -> Result<Cell, BoardError> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Ok(None),
        (Some(symbol), None) => Ok(Some(symbol)),
        _ => {
            debug!(row, col, cell = raw, "board cell holds more than one symbol");
            Err(BoardError::InvalidCell {
                row,
                col,
                cell: raw.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: &[&[&str]]) -> Vec<Vec<Cell>> {
        let owned: Vec<Vec<&str>> = rows.iter().map(|r| r.to_vec()).collect();
        parse_board(&owned).unwrap()
    }

    #[test]
    fn row_win() {
        let b = board(&[&["X", "X", "X"], &["O", "O", ""], &["", "", "O"]]);
        assert_eq!(tic_tac_toe(&b), Outcome::Winner('X'));
        assert_eq!(tic_tac_toe(&b).to_string(), "X");
    }

    #[test]
    fn column_win() {
        let b = board(&[&["O", "X", ""], &["O", "X", ""], &["O", "", "X"]]);
        assert_eq!(tic_tac_toe(&b), Outcome::Winner('O'));
    }

    #[test]
    fn diagonal_wins() {
        let main = board(&[&["X", "O", ""], &["O", "X", ""], &["", "", "X"]]);
        assert_eq!(tic_tac_toe(&main), Outcome::Winner('X'));

        let anti = board(&[&["X", "X", "O"], &["", "O", ""], &["O", "", "X"]]);
        assert_eq!(tic_tac_toe(&anti), Outcome::Winner('O'));
    }

    #[test]
    fn rows_take_precedence_over_columns() {
        let b = board(&[&["O", "O", "O"], &["X", "", "O"], &["X", "", "O"]]);
        assert_eq!(tic_tac_toe(&b), Outcome::Winner('O'));
        let b = board(&[&["X", "O", ""], &["X", "O", ""], &["X", "O", ""]]);
        // both columns 0 and 1 are full; column 0 is scanned first
        assert_eq!(tic_tac_toe(&b), Outcome::Winner('X'));
    }

    #[test]
    fn empty_and_drawn_boards_have_no_winner() {
        let empty = board(&[&["", "", ""], &["", "", ""], &["", "", ""]]);
        assert_eq!(tic_tac_toe(&empty).to_string(), "NO WINNER");

        let drawn = board(&[&["X", "O", "X"], &["X", "O", "O"], &["O", "X", "X"]]);
        assert_eq!(tic_tac_toe(&drawn), Outcome::NoWinner);
    }

    #[test]
    fn four_by_four() {
        let b = board(&[
            &["X", "O", "", "X"],
            &["O", "X", "X", ""],
            &["", "X", "O", ""],
            &["X", "O", "", "O"],
        ]);
        assert_eq!(tic_tac_toe(&b), Outcome::Winner('X'));
    }

    #[test]
    fn degenerate_boards_do_not_panic() {
        assert_eq!(tic_tac_toe(&[]), Outcome::NoWinner);
        let ragged = vec![vec![Some('X'), Some('X')], vec![Some('X')]];
        assert_eq!(tic_tac_toe(&ragged), Outcome::Winner('X'));
    }

    #[test]
    fn parse_rejects_malformed_boards() {
        let none: Vec<Vec<&str>> = Vec::new();
        assert_eq!(parse_board(&none), Err(BoardError::Empty));
        assert_eq!(
            parse_board(&[vec!["X", "O"], vec!["X"]]),
            Err(BoardError::NotSquare { row: 1, len: 1, size: 2 })
        );
        assert_eq!(
            parse_board(&[vec!["XO"]]),
            Err(BoardError::InvalidCell { row: 0, col: 0, cell: "XO".into() })
        );
    }
}
