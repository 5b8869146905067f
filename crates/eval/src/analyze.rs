// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Two hands showdown.
use log::debug;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use crate::{Card, Error, Hand, Result, compare};

/// The showdown winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    /// The left hand is stronger.
    Left,
    /// The right hand is stronger.
    Right,
    /// The hands have the same strength.
    Neither,
}

impl Winner {
    /// The winner given the ordering of the left hand relative to the right hand.
    pub fn from_ordering(ord: Ordering) -> Self {
        match ord {
            Ordering::Greater => Winner::Left,
            Ordering::Less => Winner::Right,
            Ordering::Equal => Winner::Neither,
        }
    }

    /// The winner label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Winner::Left => "left",
            Winner::Right => "right",
            Winner::Neither => "neither",
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The result of a showdown between two hands.
#[derive(Debug, Clone)]
pub struct Showdown {
    /// The hand made by the first five cards.
    pub left: Hand,
    /// The hand made by the last five cards.
    pub right: Hand,
    /// The stronger hand.
    pub winner: Winner,
}

/// Builds two hands from ten whitespace separated cards and compares them.
///
/// The first five cards are the left hand and the last five the right hand. The
/// same card may appear in both hands.
pub fn showdown(input: &str) -> Result<Showdown> {
    let tokens = input.split_whitespace().collect::<Vec<_>>();
    if tokens.len() != 2 * Hand::SIZE {
        return Err(Error::InvalidInput(tokens.len()));
    }

    let cards = tokens
        .into_iter()
        .map(str::parse)
        .collect::<std::result::Result<Vec<Card>, _>>()?;

    let (left, right) = cards.split_at(Hand::SIZE);
    let left = Hand::new(left)?;
    let right = Hand::new(right)?;
    let winner = Winner::from_ordering(compare(&left, &right));

    debug!(
        "Showdown {left} ({}) vs {right} ({}) winner {winner}",
        left.rank(),
        right.rank()
    );

    Ok(Showdown {
        left,
        right,
        winner,
    })
}

/// Returns the winner for ten whitespace separated cards, see [showdown].
pub fn analyze_hands(input: &str) -> Result<Winner> {
    showdown(input).map(|s| s.winner)
}
