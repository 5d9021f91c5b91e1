// Integration tests exercising the public API end to end.

use pokerhand::{Card, Hand, HandError, Kind, TwoPairRule};
use std::cmp::Ordering;

#[test]
fn classifies_well_known_hands() {
    let cases = [
        ("5D 6H 7C 8D 9D", Kind::Straight),
        ("5C 6D 7H 8S 9C", Kind::Straight),
        ("AC 2D 3H 4S 5C", Kind::Straight),
        ("TD TC TH 7C 7D", Kind::FullHouse),
        ("TD JD QD KD AD", Kind::StraightFlush),
        ("2C 2D 2H 2S 9C", Kind::FourOfAKind),
    ];
    for (s, expected) in cases {
        let hand = Hand::from_string(s).unwrap();
        assert_eq!(hand.kind(), expected, "hand {s}");
    }
}

#[test]
fn malformed_input_fails_atomically() {
    assert_eq!(
        Hand::from_string("XX 2C 3D 4H 5S"),
        Err(HandError::InvalidCardFormat("XX".to_string()))
    );
    assert_eq!(
        Hand::from_string("2C 3D 4H 5S"),
        Err(HandError::InvalidHandSize(4))
    );
    assert_eq!(
        Hand::from_string("2C 3D 4H 5S 6C 7D"),
        Err(HandError::InvalidHandSize(6))
    );
}

#[test]
fn hand_errors_render_readable_messages() {
    assert_eq!(
        HandError::InvalidCardFormat("XX".to_string()).to_string(),
        "invalid card format: XX"
    );
    assert_eq!(
        HandError::InvalidHandSize(4).to_string(),
        "invalid hand size: expected 5 cards, got 4"
    );
}

#[test]
fn comparison_is_by_kind_only() {
    let royal = Hand::from_string("TD JD QD KD AD").unwrap();
    let wheel_flush = Hand::from_string("AD 2D 3D 4D 5D").unwrap();
    let quads = Hand::from_string("2C 2D 2H 2S 9C").unwrap();

    assert_eq!(royal.compare(&quads), Ordering::Greater);
    assert_eq!(quads.compare(&royal), Ordering::Less);
    // Same kind, different cards: Equal. Preserved limitation, not a bug.
    assert_eq!(royal.compare(&wheel_flush), Ordering::Equal);
}

#[test]
fn two_pair_rule_is_opt_in() {
    let stub = Hand::from_string("TD TH 7C 7D 2S").unwrap();
    assert_eq!(stub.kind(), Kind::Pair);

    let detect = Hand::from_string_with_rule("TD TH 7C 7D 2S", TwoPairRule::Detect).unwrap();
    assert_eq!(detect.kind(), Kind::TwoPair);
}

#[test]
fn serde_round_trips_cards_and_hands() {
    let card = Card::from_string("KH").unwrap();
    let json = serde_json::to_string(&card).unwrap();
    assert_eq!(serde_json::from_str::<Card>(&json).unwrap(), card);

    let hand = Hand::from_string("TD TC TH 7C 7D").unwrap();
    let json = serde_json::to_string(&hand).unwrap();
    let back: Hand = serde_json::from_str(&json).unwrap();
    assert_eq!(back, hand);
    assert_eq!(back.kind(), Kind::FullHouse);
}

#[test]
fn every_single_card_hand_from_the_deck_classifies() {
    // kind() is total: no five-card selection panics or fails.
    let deck = Card::all_cards();
    for chunk in deck.chunks_exact(5) {
        let hand = Hand::from_cards([chunk[0], chunk[1], chunk[2], chunk[3], chunk[4]]);
        let kind = hand.kind();
        assert!(kind >= Kind::HighCard && kind <= Kind::StraightFlush);
    }
}
