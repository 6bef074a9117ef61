//! Error types for inputs that fall outside an exercise's contract.
//!
//! The exercises themselves report "no result" through sentinels
//! (`Outcome::NoWinner`, `route::UNREACHABLE`); these enums only cover
//! inputs that would otherwise index out of bounds or divide by zero.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CipherError {
    #[error("scytale shift must be positive")]
    ZeroShift,
    #[error("ciphertext length {len} is not a multiple of shift {shift}")]
    MisalignedLength { len: usize, shift: usize },
    #[error("key {0:?} must be one or more letters A-Z")]
    InvalidKey(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("board has no rows")]
    Empty,
    #[error("row {row} has {len} cells, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },
    #[error("cell ({row}, {col}) holds {cell:?}, expected one symbol or an empty string")]
    InvalidCell {
        row: usize,
        col: usize,
        cell: String,
    },
}

#[derive(Debug, Error)]
pub enum RouteError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("leg {from} -> {to} is listed more than once")]
    DuplicateLeg { from: String, to: String },
}

#[derive(Debug, Error)]
pub enum GraphError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
