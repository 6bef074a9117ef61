//! # Exercises Crate
//!
//! Standalone exercise solutions organized by category.
//!
//! ## Modules
//!
//! - `finance` – Payroll and investment arithmetic (savings, material waste, simple interest)
//! - `cipher` – Letter shifts, Caesar, Vigenère and Scytale ciphers
//! - `graph` – Social-graph relationships and circular-route ETA
//! - `board` – Tic-tac-toe winner detection on N×N boards
//! - `error` – Errors for inputs outside an exercise's contract
//!
//! ---
//!
//! ## Usage Example
//!
//! ```rust
//! use exercises::cipher::{caesar_cipher, scytale_cipher, scytale_decipher};
//!
//! assert_eq!(caesar_cipher("HELLO WORLD", 3), "KHOOR ZRUOG");
//!
//! let encoded = scytale_cipher("HELLOWORLD", 3).unwrap();
//! assert_eq!(scytale_decipher(&encoded, 3).unwrap(), "HELLOWORLD__");
//! ```
//!
//! ---
//!
//! Every function is pure; nothing here holds state between calls.

pub mod board;
pub mod cipher;
pub mod computation_map;
pub mod error;
pub mod finance;
pub mod graph;

pub use error::{BoardError, CipherError, GraphError, RouteError};
