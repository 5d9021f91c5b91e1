use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

use super::basic::{Card, Rank, Suit};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandError {
    #[error("invalid card format: {0}")]
    InvalidCardFormat(String),
    #[error("invalid hand size: expected 5 cards, got {0}")]
    InvalidHandSize(usize),
}

/// Classification of a five-card hand. The discriminants are the comparison
/// ordinals: a higher value always beats a lower one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Kind {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl PartialOrd for Kind {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Kind {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (*self as u8).cmp(&(*other as u8))
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Kind::HighCard => "High Card",
                Kind::Pair => "Pair",
                Kind::TwoPair => "Two Pair",
                Kind::ThreeOfAKind => "Three of a Kind",
                Kind::Straight => "Straight",
                Kind::Flush => "Flush",
                Kind::FullHouse => "Full House",
                Kind::FourOfAKind => "Four of a Kind",
                Kind::StraightFlush => "Straight Flush",
            }
        )
    }
}

/// How `Hand::is_two_pair` behaves. `LegacyStub` (the default) keeps the
/// predicate answering `false`, so two-pair hands classify as `Pair`;
/// `Detect` enables real detection. The rule is fixed at construction so
/// switching it never touches call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum TwoPairRule {
    #[default]
    LegacyStub,
    Detect,
}

/// An immutable five-card poker hand.
///
/// All predicates and `kind()` are pure queries over the card multiset;
/// the order cards were given in only shows through `cards()` and `Display`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Hand {
    cards: [Card; 5],
    two_pair_rule: TwoPairRule,
}

impl Hand {
    /// Parse a whitespace-separated string of five card tokens,
    /// e.g. `"5C TD AH QS 2D"`. Uses the default (legacy stub) two-pair rule.
    ///
    /// Duplicate cards are not rejected; callers wanting a strict deck
    /// model must check for themselves.
    pub fn from_string(s: &str) -> Result<Self, HandError> {
        Self::from_string_with_rule(s, TwoPairRule::default())
    }

    /// Same as [`Hand::from_string`] with an explicit two-pair rule.
    pub fn from_string_with_rule(s: &str, rule: TwoPairRule) -> Result<Self, HandError> {
        let mut cards = Vec::with_capacity(5);
        for token in s.split_whitespace() {
            cards.push(Card::from_string(token)?);
        }

        let cards: [Card; 5] = cards
            .try_into()
            .map_err(|v: Vec<Card>| HandError::InvalidHandSize(v.len()))?;

        Ok(Self {
            cards,
            two_pair_rule: rule,
        })
    }

    /// Build a hand from already-constructed cards.
    pub fn from_cards(cards: [Card; 5]) -> Self {
        Self {
            cards,
            two_pair_rule: TwoPairRule::default(),
        }
    }

    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    /// The five ranks, sorted ascending.
    pub fn ranks(&self) -> Vec<Rank> {
        let mut ranks: Vec<Rank> = self.cards.iter().map(|c| c.rank()).collect();
        ranks.sort();
        ranks
    }

    /// The five suits, sorted.
    pub fn suits(&self) -> Vec<Suit> {
        let mut suits: Vec<Suit> = self.cards.iter().map(|c| c.suit()).collect();
        suits.sort();
        suits
    }

    fn rank_counts(&self) -> HashMap<Rank, usize> {
        let mut counts = HashMap::new();
        for card in &self.cards {
            *counts.entry(card.rank()).or_insert(0) += 1;
        }
        counts
    }

    /// True iff some rank appears at least `n` times in the hand.
    ///
    /// For `"TD TC TH 7C 7D"` this holds for n = 2 and n = 3 (three tens,
    /// two sevens) and fails for n = 4. The "at least" semantics make the
    /// predicate monotonic in `n`: `has_n_kind(1)` is trivially true for
    /// any hand.
    pub fn has_n_kind(&self, n: usize) -> bool {
        self.rank_counts().values().any(|&count| count >= n)
    }

    /// Two disjoint pairs of equal rank.
    ///
    /// Under [`TwoPairRule::LegacyStub`] (the default) this always returns
    /// false and two-pair hands fall through to `Kind::Pair`.
    /// [`TwoPairRule::Detect`] enables the real check.
    pub fn is_two_pair(&self) -> bool {
        match self.two_pair_rule {
            TwoPairRule::LegacyStub => false,
            TwoPairRule::Detect => {
                self.rank_counts()
                    .values()
                    .filter(|&&count| count >= 2)
                    .count()
                    >= 2
            }
        }
    }

    /// Five consecutive ranks, with the ace allowed low for the wheel
    /// (A-2-3-4-5). A hand containing a pair is never a straight.
    pub fn is_straight(&self) -> bool {
        let ranks = self.ranks();

        // Wheel: sorted poker order puts the ace last.
        if ranks == [Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Ace] {
            return true;
        }

        let distinct = ranks.windows(2).all(|w| w[0] != w[1]);
        let span = ranks[4] as u8 - ranks[0] as u8;
        distinct && span == 4
    }

    /// All five cards share one suit.
    pub fn is_flush(&self) -> bool {
        self.cards.iter().all(|card| card.suit() == self.cards[0].suit())
    }

    /// Classify the hand. Exactly one `Kind` applies; precedence resolves
    /// hands that satisfy several predicates (a straight flush is both a
    /// straight and a flush, a four of a kind also has a pair).
    pub fn kind(&self) -> Kind {
        if self.is_straight() && self.is_flush() {
            Kind::StraightFlush
        } else if self.has_n_kind(4) {
            Kind::FourOfAKind
        } else if self.has_n_kind(3) && self.has_n_kind(2) {
            // Quads were ruled out above, so a triple plus a pair here
            // means a genuine 3+2 split.
            Kind::FullHouse
        } else if self.is_flush() {
            Kind::Flush
        } else if self.is_straight() {
            Kind::Straight
        } else if self.has_n_kind(3) {
            Kind::ThreeOfAKind
        } else if self.is_two_pair() {
            Kind::TwoPair
        } else if self.has_n_kind(2) {
            Kind::Pair
        } else {
            Kind::HighCard
        }
    }

    /// Order two hands by kind alone. Hands of the same kind compare
    /// `Equal` even when their cards differ; in-kind tie-breaking (high
    /// card between two flushes, etc.) is out of scope.
    pub fn compare(&self, other: &Hand) -> std::cmp::Ordering {
        self.kind().cmp(&other.kind())
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}
