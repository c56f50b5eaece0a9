//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). They hold no state, so the
//! engine and the search oracle share them.

pub mod tie;
pub mod win;

pub use tie::{is_full, is_tie};
pub use win::{WIN_COMBINATIONS, WinCombination, check_win};
