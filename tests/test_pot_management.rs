use holdem_env::engine::{TableConfig, TexasHoldem};
use holdem_env::pot::PotLedger;
use holdem_env::seat::Seat;

fn bettor(seat_id: usize, stack_left: u32, bet: u32, in_hand: bool) -> Seat {
    let mut seat = Seat::occupied(seat_id, stack_left + bet);
    seat.reset_hand();
    seat.declare_action(bet);
    seat.in_hand = in_hand;
    seat
}

#[test]
fn matched_bets_stay_in_one_layer() {
    let mut seats = vec![bettor(0, 1_500, 1_000, true), bettor(1, 1_500, 1_000, true)];
    let mut pot = PotLedger::new(2);
    pot.sweep_street(&mut seats, 2_000);
    assert_eq!(pot.layers(), &[2_000, 0]);
    assert!(seats.iter().all(|s| s.current_bet == 0));
    assert_eq!(seats[0].last_sidepot, 0);
    assert_eq!(seats[1].last_sidepot, 0);
}

#[test]
fn short_all_in_caps_the_layer() {
    let mut seats = vec![
        bettor(0, 0, 500, true), // all-in for 500
        bettor(1, 800, 1_000, true),
        bettor(2, 900, 1_000, true),
    ];
    assert!(seats[0].all_in);
    let mut pot = PotLedger::new(3);
    pot.sweep_street(&mut seats, 2_500);
    // 500 from everyone forms the capped layer, the residue plays on above it
    assert_eq!(pot.layers(), &[1_500, 1_000, 0]);
    assert_eq!(seats[0].last_sidepot, 0);
    assert_eq!(seats[1].last_sidepot, 1);
    assert_eq!(seats[2].last_sidepot, 1);
}

#[test]
fn folded_chips_join_the_open_layer() {
    let mut seats = vec![
        bettor(0, 0, 400, true), // all-in
        bettor(1, 2_000, 1_000, true),
        bettor(2, 2_440, 60, false), // folded after posting a blind
    ];
    let mut pot = PotLedger::new(3);
    pot.sweep_street(&mut seats, 1_460);
    assert_eq!(pot.layers(), &[860, 600, 0]);
}

#[test]
fn all_contributors_folded_sweeps_flat() {
    // everyone who still has chips in front folded this street
    let mut seats = vec![
        bettor(0, 2_490, 10, false),
        bettor(1, 2_475, 25, false),
        bettor(2, 2_450, 0, true),
    ];
    let mut pot = PotLedger::new(3);
    pot.sweep_street(&mut seats, 35);
    assert_eq!(pot.layers(), &[35, 0, 0]);
}

#[test]
fn four_player_partial_all_in_builds_side_pots() {
    // 100bb / 100bb / 40bb / 100bb stacks, all-in splitting the pot per the
    // short stack's coverage
    let mut t = TexasHoldem::new(TableConfig {
        n_seats: 4,
        all_in_equity_reward: true,
        seed: Some(21),
        debug: true,
        ..TableConfig::default()
    });
    t.add_player(0, 2_500, true).unwrap();
    t.add_player(1, 2_500, false).unwrap();
    t.add_player(2, 1_000, false).unwrap();
    t.add_player(3, 2_500, false).unwrap();

    let (_, state) = t.reset().unwrap();
    assert_eq!(state.button, Some(0));
    assert_eq!(state.seats[1].current_bet, 10);
    assert_eq!(state.seats[2].current_bet, 25);
    assert_eq!(state.to_act, Some(3));

    // under the gun bets 50bb, leaving 50bb behind
    t.step_wire([2, 1_250]).unwrap();
    assert_eq!(t.to_call(), 1_250);
    // button flats
    t.step_wire([1, 0]).unwrap();
    // small blind lets it go
    t.step_wire([3, 0]).unwrap();
    // big blind calls for its remaining 40bb and is all-in in a side pot
    let result = t.step_wire([1, 0]).unwrap();
    assert!(!result.terminal);

    let state = t.full_state();
    assert!(state.seats[2].all_in);
    assert!(state.seats[2].acted_this_round);
    assert!(!state.seats[1].in_hand);
    assert_eq!(state.total_pot, 3_510);
    assert_eq!(t.side_pots().iter().sum::<u32>(), 3_510);
    // 1000 x 3 callers plus the dead small blind, then 250 x 2 above it
    assert_eq!(&t.side_pots()[..2], &[3_010, 500]);
    assert_eq!(state.seats[0].last_sidepot, 1);
    assert_eq!(state.seats[2].last_sidepot, 0);
    assert_eq!(state.seats[3].last_sidepot, 1);
    assert_eq!(state.to_act, Some(3));

    // the flop checks through to a shove and a fold
    t.step_wire([2, 1_250]).unwrap();
    // the shove is not yet swept into the layers
    assert_eq!(
        t.side_pots().iter().sum::<u32>(),
        t.total_pot() - 1_250
    );
    let result = t.step_wire([3, 0]).unwrap();
    assert!(result.terminal);
    assert_eq!(result.info.money_won, -1_250);

    let state = t.full_state();
    assert_eq!(state.total_pot, 4_760);
    assert_eq!(t.side_pots().iter().sum::<u32>(), 0);
    // every chip ends up behind a surviving stack
    let stacks: u32 = state.seats.iter().map(|s| s.stack).sum();
    assert_eq!(stacks, 8_500);
    assert_eq!(state.seats[0].stack, 1_250);
    assert_eq!(state.seats[1].stack, 2_490);
    assert_eq!(state.seats[2].stack + state.seats[3].stack, 4_760);

    let rewards = t.hand_rewards();
    assert_eq!(rewards[1], 0.0);
    assert!((rewards.iter().sum::<f64>() - 1.4).abs() < 1e-9);
    assert!((rewards[0] - (-50.0)).abs() < 1e-9);
}
