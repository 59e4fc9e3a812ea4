use holdem_env::engine::{blind_level, TableConfig, TexasHoldem, BLIND_LEVELS};
use holdem_env::errors::EngineError;

fn table(n_seats: usize) -> TexasHoldem {
    let mut t = TexasHoldem::new(TableConfig {
        n_seats,
        seed: Some(7),
        ..TableConfig::default()
    });
    for seat in 0..n_seats {
        t.add_player(seat, 2_500, seat == 0).unwrap();
    }
    t
}

#[test]
fn duplicate_seat_is_rejected() {
    let mut t = TexasHoldem::new(TableConfig {
        n_seats: 3,
        ..TableConfig::default()
    });
    t.add_player(0, 2_500, false).unwrap();
    assert_eq!(
        t.add_player(0, 2_500, false).unwrap_err(),
        EngineError::DuplicatePlayer { seat: 0 }
    );
}

#[test]
fn second_agent_is_rejected() {
    let mut t = TexasHoldem::new(TableConfig {
        n_seats: 3,
        ..TableConfig::default()
    });
    t.add_player(0, 2_500, true).unwrap();
    assert_eq!(t.add_player(1, 2_500, true).unwrap_err(), EngineError::AgentExists);
    assert_eq!(t.agent_seat(), Some(0));
}

#[test]
fn out_of_range_seat_is_rejected() {
    let mut t = TexasHoldem::new(TableConfig {
        n_seats: 2,
        ..TableConfig::default()
    });
    assert_eq!(
        t.add_player(2, 2_500, false).unwrap_err(),
        EngineError::InvalidSeat { seat: 2, n_seats: 2 }
    );
}

#[test]
fn reset_needs_two_players() {
    let mut t = TexasHoldem::new(TableConfig {
        n_seats: 4,
        ..TableConfig::default()
    });
    t.add_player(0, 2_500, true).unwrap();
    assert!(matches!(
        t.reset().unwrap_err(),
        EngineError::HandNotPlayable { .. }
    ));
}

#[test]
fn removed_player_frees_the_seat() {
    let mut t = table(2);
    t.remove_player(1).unwrap();
    assert!(matches!(
        t.reset().unwrap_err(),
        EngineError::HandNotPlayable { .. }
    ));
    // the seat can be re-occupied afterwards
    t.add_player(1, 1_000, false).unwrap();
    assert!(t.reset().is_ok());
    // removing an empty seat is a no-op
    t.remove_player(1).unwrap();
    t.remove_player(1).unwrap();
}

#[test]
fn heads_up_blind_posting() {
    let mut t = table(2);
    let (_, state) = t.reset().unwrap();
    // button posts the small blind and acts first
    assert_eq!(state.button, Some(0));
    assert_eq!(state.to_act, Some(0));
    assert_eq!(state.seats[0].current_bet, 10);
    assert_eq!(state.seats[1].current_bet, 25);
    assert_eq!(state.total_pot, 35);
    assert_eq!(state.to_call, 25);
    assert_eq!(state.last_raise, 25);
    assert_eq!(state.min_raise, 50);
    assert_eq!(t.blinds(), (10, 25));
    assert_eq!(t.hands_played(), 1);
}

#[test]
fn three_way_blind_posting() {
    let mut t = table(3);
    let (_, state) = t.reset().unwrap();
    // small blind sits clockwise from the button, big blind after it,
    // and the button is first to act three-way
    assert_eq!(state.button, Some(0));
    assert_eq!(state.to_act, Some(0));
    assert_eq!(state.seats[0].current_bet, 0);
    assert_eq!(state.seats[1].current_bet, 10);
    assert_eq!(state.seats[2].current_bet, 25);
    assert_eq!(state.total_pot, 35);
}

#[test]
fn big_blind_keeps_the_option() {
    let (_, state) = table(2).reset().unwrap();
    assert!(!state.seats[0].acted_this_round);
    assert!(!state.seats[1].acted_this_round);
}

#[test]
fn button_advances_one_live_seat_per_hand() {
    let mut t = table(3);
    for expected in [0, 1, 2, 0, 1] {
        t.reset().unwrap();
        assert_eq!(t.button(), Some(expected));
    }

    let mut hu = table(2);
    for expected in [0, 1, 0, 1] {
        hu.reset().unwrap();
        assert_eq!(hu.button(), Some(expected));
    }
}

#[test]
fn button_skips_sitting_out_seats() {
    let mut t = table(4);
    t.set_sitting_out(1, true);
    t.reset().unwrap();
    assert_eq!(t.button(), Some(0));
    t.reset().unwrap();
    assert_eq!(t.button(), Some(2));
}

#[test]
fn blind_schedule_is_fixed() {
    assert_eq!(BLIND_LEVELS.len(), 13);
    assert_eq!(blind_level(0), (10, 25));
    // level 9 looks like a typo in the published schedule (every other big
    // blind stays within 6x the small blind) but is preserved verbatim
    assert_eq!(blind_level(9), (500, 10000));
    assert_eq!(blind_level(12), (1000, 2000));
    // indexes past the table clamp to the top level
    assert_eq!(blind_level(100), (1000, 2000));
}

#[test]
fn advancing_blinds_raises_the_stakes() {
    let mut t = table(2);
    t.advance_blinds();
    let (_, state) = t.reset().unwrap();
    assert_eq!((state.small_blind, state.big_blind), (25, 50));
    assert_eq!(state.seats[0].current_bet, 25);
    assert_eq!(state.seats[1].current_bet, 50);
    for _ in 0..50 {
        t.advance_blinds();
    }
    let (_, state) = t.reset().unwrap();
    assert_eq!((state.small_blind, state.big_blind), (1000, 2000));
}
