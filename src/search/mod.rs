//! Search module for the computer opponent
//!
//! Contains the full-depth minimax searcher with alpha-beta pruning.

pub mod minimax;

pub use minimax::{SearchResult, SearchStats, Searcher, DRAW_SCORE, LOSS_SCORE, WIN_SCORE};
