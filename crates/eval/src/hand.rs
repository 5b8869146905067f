// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand classification and comparison.
//!
//! A [Hand] computes its ranks histogram, flush and straight flags and its
//! [HandRank] once when it is created. Hands are compared through their
//! [HandValue], the hand rank followed by the distinct cards ranks sorted by
//! count and then by rank, both in descending order:
//!
//! ```text
//!   KH KD KC 2S 2D  => FullHouse  [K, 2]
//!   KH KD 9C 2S 2D  => TwoPair    [K, 2, 9]
//!   AH JD 9C 5S 2D  => HighCard   [A, J, 9, 5, 2]
//! ```
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt, str::FromStr};

use crate::{Card, Error, Rank, Result};

/// The hand category, from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
}

impl HandRank {
    /// The category value, 0 for high card up to 8 for a straight flush.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Classifies a hand given its sorted histogram and flags.
    ///
    /// The checks order matters: a flush is stronger than a straight but weaker
    /// than a full house.
    fn classify(histogram: &[RankCount], flush: bool, straight: bool) -> HandRank {
        let distinct = histogram.len();
        let largest = histogram[0].count;

        if flush && straight {
            HandRank::StraightFlush
        } else if distinct == 2 && largest == 4 {
            HandRank::FourOfAKind
        } else if distinct == 2 && largest == 3 {
            HandRank::FullHouse
        } else if flush {
            HandRank::Flush
        } else if straight {
            HandRank::Straight
        } else if distinct == 3 && largest == 3 {
            HandRank::ThreeOfAKind
        } else if distinct == 3 && largest == 2 {
            HandRank::TwoPair
        } else if distinct == 4 && largest == 2 {
            HandRank::OnePair
        } else {
            HandRank::HighCard
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        };

        write!(f, "{rank}")
    }
}

/// The number of cards with a given rank in a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RankCount {
    /// The cards rank.
    pub rank: Rank,
    /// How many cards have this rank, at most 4 unless a card is repeated.
    pub count: u8,
}

impl RankCount {
    /// Orders by count descending then by rank descending.
    fn by_count_then_rank(a: &RankCount, b: &RankCount) -> Ordering {
        b.count.cmp(&a.count).then_with(|| b.rank.cmp(&a.rank))
    }
}

/// The value used to compare hands.
///
/// Values are compared by rank first, if the ranks are equal the distinct cards
/// ranks are compared position by position until one differs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandValue {
    rank: HandRank,
    ranks: Vec<Rank>,
}

impl HandValue {
    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The tie break ranks, sorted by count and then by rank.
    pub fn ranks(&self) -> &[Rank] {
        &self.ranks
    }
}

impl Ord for HandValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.ranks.iter().cmp(other.ranks.iter()))
    }
}

impl PartialOrd for HandValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A five cards hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    cards: [Card; Hand::SIZE],
    histogram: Vec<RankCount>,
    flush: bool,
    straight: bool,
    value: HandValue,
}

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = 5;

    /// Creates a hand from five cards.
    ///
    /// The same card may be given more than once, it is counted like any other
    /// card with that rank and suit.
    pub fn new(cards: &[Card]) -> Result<Hand> {
        let cards: [Card; Hand::SIZE] = cards
            .try_into()
            .map_err(|_| Error::InvalidHand(cards.len()))?;

        let mut counts = AHashMap::<Rank, u8>::with_capacity(Hand::SIZE);
        for card in &cards {
            *counts.entry(card.rank()).or_default() += 1;
        }

        let mut histogram = counts
            .into_iter()
            .map(|(rank, count)| RankCount { rank, count })
            .collect::<Vec<_>>();
        histogram.sort_by(RankCount::by_count_then_rank);

        let flush = cards.iter().all(|c| c.suit() == cards[0].suit());

        // With five distinct ranks sorted high to low a range of 4 means the
        // ranks are contiguous, an ace is always high.
        let straight = histogram.len() == Hand::SIZE
            && histogram[0].rank.value() - histogram[Hand::SIZE - 1].rank.value() == 4;

        let value = HandValue {
            rank: HandRank::classify(&histogram, flush, straight),
            ranks: histogram.iter().map(|rc| rc.rank).collect(),
        };

        Ok(Hand {
            cards,
            histogram,
            flush,
            straight,
            value,
        })
    }

    /// The hand cards in the order they were given.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The ranks histogram sorted by count and then by rank, both descending.
    pub fn histogram(&self) -> &[RankCount] {
        &self.histogram
    }

    /// Checks if all cards have the same suit.
    pub fn is_flush(&self) -> bool {
        self.flush
    }

    /// Checks if the cards have five contiguous ranks.
    pub fn is_straight(&self) -> bool {
        self.straight
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.value.rank
    }

    /// The value used to compare this hand with other hands.
    pub fn value(&self) -> &HandValue {
        &self.value
    }
}

impl FromStr for Hand {
    type Err = Error;

    /// Parses five whitespace separated cards like `AH TD 5C 9S JS`.
    fn from_str(s: &str) -> Result<Self> {
        let cards = s
            .split_whitespace()
            .map(str::parse)
            .collect::<std::result::Result<Vec<Card>, _>>()?;
        Hand::new(&cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }

        Ok(())
    }
}

/// Compares two hands, a greater ordering means `h1` is the stronger hand.
pub fn compare(h1: &Hand, h2: &Hand) -> Ordering {
    h1.value().cmp(h2.value())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Suit;
    use rand::seq::SliceRandom;

    fn hand(s: &str) -> Hand {
        s.parse().unwrap()
    }

    fn ranks(s: &str) -> Vec<Rank> {
        s.chars().map(|c| Rank::from_char(c).unwrap()).collect()
    }

    #[test]
    fn hand_ranks() {
        assert_eq!(hand("AH TD 5C 9S JS").rank(), HandRank::HighCard);
        assert_eq!(hand("3D 7H 5S JC 5H").rank(), HandRank::OnePair);
        assert_eq!(hand("KD KH 2S 2C 9H").rank(), HandRank::TwoPair);
        assert_eq!(hand("7D 7H 7S 2C 9H").rank(), HandRank::ThreeOfAKind);
        assert_eq!(hand("AH KD JC QS TS").rank(), HandRank::Straight);
        assert_eq!(hand("2H 9H JH 4H KH").rank(), HandRank::Flush);
        assert_eq!(hand("3D 3H 3S JC JH").rank(), HandRank::FullHouse);
        assert_eq!(hand("8D 8H 8S 8C JH").rank(), HandRank::FourOfAKind);
        assert_eq!(hand("9S TS JS QS KS").rank(), HandRank::StraightFlush);
    }

    #[test]
    fn hand_rank_values() {
        assert_eq!(HandRank::HighCard.value(), 0);
        assert_eq!(HandRank::Straight.value(), 4);
        assert_eq!(HandRank::StraightFlush.value(), 8);
        assert!(HandRank::Flush > HandRank::Straight);
        assert!(HandRank::FullHouse > HandRank::Flush);
        assert_eq!(HandRank::ThreeOfAKind.to_string(), "Three of a Kind");
    }

    #[test]
    fn hand_flags() {
        let h = hand("9S TS JS QS KS");
        assert!(h.is_flush());
        assert!(h.is_straight());

        let h = hand("2H 9H JH 4H KH");
        assert!(h.is_flush());
        assert!(!h.is_straight());

        let h = hand("6C 2D 3H 5S 4S");
        assert!(!h.is_flush());
        assert!(h.is_straight());
        assert_eq!(h.rank(), HandRank::Straight);

        // A pair is never a straight.
        let h = hand("6C 2D 3H 6S 4S");
        assert!(!h.is_straight());
        assert_eq!(h.rank(), HandRank::OnePair);
    }

    #[test]
    fn ace_is_always_high() {
        let h = hand("AC 2D 3H 4S 5S");
        assert!(!h.is_straight());
        assert_eq!(h.rank(), HandRank::HighCard);

        let h = hand("AH 2H 3H 4H 5H");
        assert!(!h.is_straight());
        assert_eq!(h.rank(), HandRank::Flush);

        let h = hand("TD JD QD KD AD");
        assert_eq!(h.rank(), HandRank::StraightFlush);
    }

    #[test]
    fn hand_histogram() {
        let h = hand("2S KD 9H KH 2C");
        let histogram = h
            .histogram()
            .iter()
            .map(|rc| (rc.rank, rc.count))
            .collect::<Vec<_>>();
        assert_eq!(
            histogram,
            vec![(Rank::King, 2), (Rank::Deuce, 2), (Rank::Nine, 1)]
        );
        assert_eq!(h.histogram().iter().map(|rc| rc.count).sum::<u8>(), 5);

        assert_eq!(hand("3D 3H JC 3S JH").value().ranks(), ranks("3J"));
        assert_eq!(hand("3D JH JC 3S JS").value().ranks(), ranks("J3"));
        assert_eq!(hand("AH TD 5C 9S JS").value().ranks(), ranks("AJT95"));
        assert_eq!(hand("3D 7H 5S JC 5H").value().ranks(), ranks("5J73"));
    }

    #[test]
    fn hand_to_string() {
        let h = hand("AH  TD 5C\t9S JS");
        assert_eq!(h.to_string(), "AH TD 5C 9S JS");
        assert_eq!(h.cards()[1], Card::new(Rank::Ten, Suit::Diamonds));
    }

    #[test]
    fn hand_errors() {
        assert_eq!("AH TD 5C 9S".parse::<Hand>(), Err(Error::InvalidHand(4)));
        assert_eq!(
            "AH TD 5C 9S JS 2C".parse::<Hand>(),
            Err(Error::InvalidHand(6))
        );
        assert_eq!("".parse::<Hand>(), Err(Error::InvalidHand(0)));
        assert_eq!(
            "AH TD 5C 9S 1S".parse::<Hand>(),
            Err(Error::InvalidCard(crate::ParseCardError::Rank('1')))
        );
    }

    #[test]
    fn repeated_cards() {
        let h = hand("AH AH KD QC JS");
        assert_eq!(h.rank(), HandRank::OnePair);
        assert_eq!(h.value().ranks(), ranks("AKQJ"));
        assert_eq!(compare(&h, &hand("AD AC KS QH JH")), Ordering::Equal);

        let h = hand("AH AH AH AH AH");
        assert_eq!(h.histogram(), &[RankCount { rank: Rank::Ace, count: 5 }]);
        assert_eq!(h.rank(), HandRank::Flush);
    }

    #[test]
    fn compare_by_rank() {
        // Weakest to strongest.
        let hands = [
            hand("AH KD JC 9S 8S"),
            hand("2D 2H 3S 4C 5H"),
            hand("2D 2H 3S 3C 4H"),
            hand("2D 2H 2S 3C 4H"),
            hand("2D 3H 4S 5C 6H"),
            hand("2H 3H 4H 5H 7H"),
            hand("2D 2H 2S 3C 3H"),
            hand("2D 2H 2S 2C 3H"),
            hand("2H 3H 4H 5H 6H"),
        ];

        for (i, h1) in hands.iter().enumerate() {
            assert_eq!(h1.rank().value() as usize, i);
            for (j, h2) in hands.iter().enumerate() {
                assert_eq!(compare(h1, h2), i.cmp(&j), "{h1} vs {h2}");
            }
        }
    }

    #[test]
    fn compare_full_house() {
        // Same three of a kind, compare the pairs.
        let h1 = hand("QH QD QC 2S 2D");
        let h2 = hand("QH QD QS 3S 3D");
        assert_eq!(compare(&h1, &h2), Ordering::Less);

        // Three of a kind before the pair.
        let h1 = hand("3D 3H 3S 2C 2H");
        let h2 = hand("2D 2H 2S AC AH");
        assert_eq!(compare(&h1, &h2), Ordering::Greater);
    }

    #[test]
    fn compare_four_of_a_kind() {
        let h1 = hand("9H 9D 9C 9S 2D");
        let h2 = hand("8H 8D 8C 8S AD");
        assert_eq!(compare(&h1, &h2), Ordering::Greater);

        let h1 = hand("9H 9D 9C 9S 2D");
        let h2 = hand("9H 9D 9C 9S 3D");
        assert_eq!(compare(&h1, &h2), Ordering::Less);
    }

    #[test]
    fn compare_flush() {
        let h1 = hand("AH JH 9H 5H 3H");
        let h2 = hand("AD JD 9D 5D 4D");
        assert_eq!(h1.rank(), HandRank::Flush);
        assert_eq!(h2.rank(), HandRank::Flush);
        assert_eq!(compare(&h1, &h2), Ordering::Less);

        let h1 = hand("KC QC 9C 5C 3C");
        let h2 = hand("QS JS 9S 5S 3S");
        assert_eq!(compare(&h1, &h2), Ordering::Greater);
    }

    #[test]
    fn compare_three_of_a_kind() {
        let h1 = hand("7D 7H 7S AC 2H");
        let h2 = hand("8D 8H 8S 3C 2C");
        assert_eq!(compare(&h1, &h2), Ordering::Less);

        // Same three of a kind, compare the kickers.
        let h1 = hand("7D 7H 7S AC 2H");
        let h2 = hand("7C 7H 7S KC QH");
        assert_eq!(compare(&h1, &h2), Ordering::Greater);
    }

    #[test]
    fn compare_two_pair() {
        let h1 = hand("KH KD 2C 2S 9D");
        let h2 = hand("KS KC 3C 3S 5D");
        assert_eq!(compare(&h1, &h2), Ordering::Less);
        assert_eq!(compare(&h2, &h1), Ordering::Greater);

        // Same pairs, compare the kicker.
        let h1 = hand("KH KD 2C 2S 9D");
        let h2 = hand("KS KC 2D 2H 8D");
        assert_eq!(compare(&h1, &h2), Ordering::Greater);
    }

    #[test]
    fn compare_kickers() {
        let h1 = hand("AH TD JH 3S JS");
        let h2 = hand("AD TH 9S JC JD");
        assert_eq!(compare(&h1, &h2), Ordering::Less);

        let h1 = hand("AH KD 9C 5S 3S");
        let h2 = hand("AD KH 9S 5C 2D");
        assert_eq!(compare(&h1, &h2), Ordering::Greater);

        // A king high straight loses to an ace high straight.
        let h1 = hand("QD KH TS JC 9H");
        let h2 = hand("AH KD JC QS TS");
        assert_eq!(compare(&h1, &h2), Ordering::Less);
    }

    #[test]
    fn compare_equal() {
        let h1 = hand("AH TD 5C 9S JS");
        let h2 = hand("AD 5H TS 9C JH");
        assert_eq!(compare(&h1, &h2), Ordering::Equal);
        assert_eq!(compare(&h1, &h1), Ordering::Equal);
        assert_eq!(h1.value(), h2.value());
        assert_ne!(h1, h2);
    }

    #[test]
    fn cards_order_is_irrelevant() {
        let mut rng = rand::rng();
        let others = [
            hand("KH KD 2C 2S 9D"),
            hand("AH TD 5C 9S JS"),
            hand("3D 3H 3S JC JH"),
        ];

        for s in ["KS KC 3C 3S 5D", "2H 9H JH 4H KH", "6C 2D 3H 5S 4S"] {
            let h = hand(s);
            let mut cards = h.cards().to_vec();

            for _ in 0..20 {
                cards.shuffle(&mut rng);
                let shuffled = Hand::new(&cards).unwrap();
                assert_eq!(shuffled.value(), h.value());
                assert_eq!(shuffled.histogram(), h.histogram());

                for other in &others {
                    assert_eq!(compare(&shuffled, other), compare(&h, other));
                    assert_eq!(compare(other, &shuffled), compare(&h, other).reverse());
                }
            }
        }
    }

    #[test]
    fn all_hands_ranks() {
        let deck = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        let n = deck.len();
        let mut counts = [0usize; 9];

        for c1 in 0..n {
            for c2 in (c1 + 1)..n {
                for c3 in (c2 + 1)..n {
                    for c4 in (c3 + 1)..n {
                        for c5 in (c4 + 1)..n {
                            let cards = [deck[c1], deck[c2], deck[c3], deck[c4], deck[c5]];
                            let h = Hand::new(&cards).unwrap();
                            counts[h.rank() as usize] += 1;
                        }
                    }
                }
            }
        }

        assert_eq!(counts.iter().sum::<usize>(), 2_598_960);

        // The five high straights count as high card or flush hands.
        assert_eq!(counts[HandRank::HighCard as usize], 1_303_560);
        assert_eq!(counts[HandRank::OnePair as usize], 1_098_240);
        assert_eq!(counts[HandRank::TwoPair as usize], 123_552);
        assert_eq!(counts[HandRank::ThreeOfAKind as usize], 54_912);
        assert_eq!(counts[HandRank::Straight as usize], 9_180);
        assert_eq!(counts[HandRank::Flush as usize], 5_112);
        assert_eq!(counts[HandRank::FullHouse as usize], 3_744);
        assert_eq!(counts[HandRank::FourOfAKind as usize], 624);
        assert_eq!(counts[HandRank::StraightFlush as usize], 36);
    }
}
