// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand evaluator.
//!
//! Evaluator for five cards Poker hands. A [Hand] is classified into a
//! [HandRank] when it is created, and two hands are compared by rank first and
//! then by their cards ranks ordered by how many times each rank appears in the
//! hand, so that for example a full house compares its three of a kind before
//! its pair:
//!
//! ```
//! # use showdown_eval::*;
//! let h1 = "KH KD KC 2S 2D".parse::<Hand>().unwrap();
//! let h2 = "QH QD QC AS AD".parse::<Hand>().unwrap();
//! assert_eq!(h1.rank(), HandRank::FullHouse);
//! assert!(h1.value() > h2.value());
//! ```
//!
//! The [analyze_hands] function takes ten cards, builds a hand with the first
//! five and one with the last five and reports the winner:
//!
//! ```
//! # use showdown_eval::*;
//! let winner = analyze_hands("AH TD 5C 9S JS 3D 7H 5S JC 5H").unwrap();
//! assert_eq!(winner, Winner::Right);
//! assert_eq!(winner.to_string(), "right");
//! ```
//!
//! An ace always ranks above a king, so the five high straight (ace, deuce,
//! trey, four, five) is not a straight for this evaluator.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use thiserror::Error;

pub mod analyze;
pub mod hand;

pub use analyze::{Showdown, Winner, analyze_hands, showdown};
pub use hand::{Hand, HandRank, HandValue, RankCount, compare};

// Reexport cards types.
pub use showdown_cards::{Card, ParseCardError, Rank, Suit};

/// Hand evaluation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A card token could not be parsed.
    #[error(transparent)]
    InvalidCard(#[from] ParseCardError),
    /// A hand doesn't have exactly five cards.
    #[error("a hand must have 5 cards, got {0}")]
    InvalidHand(usize),
    /// The input doesn't have exactly ten cards.
    #[error("expected 10 cards for two hands, got {0}")]
    InvalidInput(usize),
}

/// Result type for hand evaluation.
pub type Result<T> = std::result::Result<T, Error>;
