use holdem_env::cards::{Card, Rank, Suit};
use holdem_env::hand::{compare_hands, evaluate, rank, Category};

fn card(rank: Rank, suit: Suit) -> Card {
    Card { suit, rank }
}

#[test]
fn royal_flush_tops_the_categories() {
    let cards = [
        card(Rank::Ace, Suit::Hearts),
        card(Rank::King, Suit::Hearts),
        card(Rank::Queen, Suit::Hearts),
        card(Rank::Jack, Suit::Hearts),
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Two, Suit::Clubs),
        card(Rank::Three, Suit::Diamonds),
    ];
    let strength = evaluate(&cards);
    assert_eq!(strength.category, Category::StraightFlush);
    assert_eq!(strength.kickers[0], 14);
}

#[test]
fn wheel_straight_uses_the_five_high() {
    let cards = [
        card(Rank::Ace, Suit::Hearts),
        card(Rank::Two, Suit::Spades),
        card(Rank::Three, Suit::Clubs),
        card(Rank::Four, Suit::Diamonds),
        card(Rank::Five, Suit::Hearts),
        card(Rank::Nine, Suit::Clubs),
        card(Rank::King, Suit::Diamonds),
    ];
    let strength = evaluate(&cards);
    assert_eq!(strength.category, Category::Straight);
    assert_eq!(strength.kickers[0], 5);
}

#[test]
fn quads_beat_a_full_house() {
    let quads = evaluate(&[
        card(Rank::Ace, Suit::Clubs),
        card(Rank::Ace, Suit::Diamonds),
        card(Rank::Ace, Suit::Hearts),
        card(Rank::Ace, Suit::Spades),
        card(Rank::King, Suit::Clubs),
        card(Rank::Queen, Suit::Diamonds),
        card(Rank::Two, Suit::Hearts),
    ]);
    let full_house = evaluate(&[
        card(Rank::King, Suit::Clubs),
        card(Rank::King, Suit::Diamonds),
        card(Rank::King, Suit::Hearts),
        card(Rank::Queen, Suit::Clubs),
        card(Rank::Queen, Suit::Diamonds),
        card(Rank::Two, Suit::Hearts),
        card(Rank::Three, Suit::Spades),
    ]);
    assert_eq!(compare_hands(&quads, &full_house), std::cmp::Ordering::Greater);
}

#[test]
fn five_card_hands_evaluate_too() {
    let strength = evaluate(&[
        card(Rank::Nine, Suit::Hearts),
        card(Rank::Nine, Suit::Clubs),
        card(Rank::Four, Suit::Diamonds),
        card(Rank::Seven, Suit::Spades),
        card(Rank::King, Suit::Hearts),
    ]);
    assert_eq!(strength.category, Category::OnePair);
    assert_eq!(strength.kickers[0], 9);
    assert_eq!(strength.kickers[1], 13);
}

#[test]
fn lower_rank_means_stronger_hand() {
    let board = [
        card(Rank::Two, Suit::Clubs),
        card(Rank::Seven, Suit::Diamonds),
        card(Rank::Jack, Suit::Hearts),
        card(Rank::Queen, Suit::Spades),
        card(Rank::Four, Suit::Clubs),
    ];
    let top_pair = rank(
        [card(Rank::Queen, Suit::Hearts), card(Rank::Ace, Suit::Diamonds)],
        &board,
    );
    let underpair = rank(
        [card(Rank::Nine, Suit::Hearts), card(Rank::Nine, Suit::Spades)],
        &board,
    );
    let air = rank(
        [card(Rank::Five, Suit::Hearts), card(Rank::Six, Suit::Diamonds)],
        &board,
    );
    assert!(top_pair < underpair);
    assert!(underpair < air);
}

#[test]
fn equal_hands_tie_by_rank() {
    // both hole cards play the board straight
    let board = [
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Jack, Suit::Clubs),
        card(Rank::Queen, Suit::Diamonds),
        card(Rank::King, Suit::Spades),
        card(Rank::Ace, Suit::Clubs),
    ];
    let a = rank(
        [card(Rank::Two, Suit::Clubs), card(Rank::Three, Suit::Clubs)],
        &board,
    );
    let b = rank(
        [card(Rank::Two, Suit::Diamonds), card(Rank::Three, Suit::Hearts)],
        &board,
    );
    assert_eq!(a, b);
}

#[test]
fn three_card_boards_rank_fine() {
    let board = [
        card(Rank::Ace, Suit::Clubs),
        card(Rank::Seven, Suit::Diamonds),
        card(Rank::Two, Suit::Hearts),
    ];
    let paired = rank(
        [card(Rank::Ace, Suit::Hearts), card(Rank::King, Suit::Spades)],
        &board,
    );
    let unpaired = rank(
        [card(Rank::Queen, Suit::Hearts), card(Rank::Jack, Suit::Spades)],
        &board,
    );
    assert!(paired < unpaired);
}

#[test]
fn third_pair_can_out_kick_a_single() {
    // three pairs on seven cards: the best spare pair rank is the kicker
    let strength = evaluate(&[
        card(Rank::Queen, Suit::Clubs),
        card(Rank::Queen, Suit::Diamonds),
        card(Rank::Jack, Suit::Hearts),
        card(Rank::Jack, Suit::Spades),
        card(Rank::Nine, Suit::Clubs),
        card(Rank::Nine, Suit::Diamonds),
        card(Rank::Eight, Suit::Hearts),
    ]);
    assert_eq!(strength.category, Category::TwoPair);
    assert_eq!(strength.kickers[..3], [12, 11, 9]);
}
