pub mod tic_tac_toe;

pub use tic_tac_toe::{parse_board, tic_tac_toe, Cell, Outcome};
