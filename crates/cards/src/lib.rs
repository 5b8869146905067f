// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let ad = Card::new(Rank::Ace, Suit::Diamonds);
//! assert_eq!(ah.rank(), ad.rank());
//! ```
//!
//! or to parse them from two characters tokens, a rank symbol (`2`-`9`, `T`,
//! `J`, `Q`, `K`, `A`) followed by a suit symbol. Only the upper case suit
//! symbols `C`, `D`, `H` and `S` are accepted, any other suit character is a
//! [ParseCardError::Suit] error:
//!
//! ```
//! # use showdown_cards::{Card, ParseCardError, Rank, Suit};
//! let td = "TD".parse::<Card>().unwrap();
//! assert_eq!(td, Card::new(Rank::Ten, Suit::Diamonds));
//! assert_eq!(td.to_string(), "TD");
//!
//! assert_eq!("1D".parse::<Card>(), Err(ParseCardError::Rank('1')));
//! assert_eq!("TX".parse::<Card>(), Err(ParseCardError::Suit('X')));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, ParseCardError, Rank, Suit};
