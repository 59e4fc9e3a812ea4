use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::cards::{pad_indices, Card};
use crate::deck::Deck;
use crate::equity::EquityEstimator;
use crate::errors::EngineError;
use crate::hand;
use crate::logger::{ActionRecord, HandRecord};
use crate::pot::PotLedger;
use crate::seat::{Action, ActionKind, Seat};

/// Betting streets of a hand, in order. `Showdown` is terminal.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Street {
    NotStarted,
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
}

impl Street {
    fn next(self) -> Street {
        match self {
            Street::NotStarted => Street::Preflop,
            Street::Preflop => Street::Flop,
            Street::Flop => Street::Turn,
            Street::Turn => Street::River,
            Street::River | Street::Showdown => Street::Showdown,
        }
    }
}

/// Fixed blind schedule as `(small_blind, big_blind)` pairs. Level 9 jumps
/// to a 20x big blind; the schedule is kept verbatim anyway so existing
/// training runs stay comparable.
pub const BLIND_LEVELS: [(u32, u32); 13] = [
    (10, 25),
    (25, 50),
    (50, 100),
    (75, 150),
    (100, 200),
    (150, 300),
    (200, 400),
    (300, 600),
    (400, 800),
    (500, 10000),
    (600, 1200),
    (800, 1600),
    (1000, 2000),
];

/// Blinds for a schedule index; indexes past the table clamp to the top
/// level.
pub fn blind_level(index: usize) -> (u32, u32) {
    BLIND_LEVELS[index.min(BLIND_LEVELS.len() - 1)]
}

/// Seed used when the configuration does not pin one explicitly.
pub const DEFAULT_SEED: u64 = 0xA1A2_A3A4;

// domain separator so equity sampling gets its own stream off the one seed
const EQUITY_STREAM: u64 = 0x9E37_79B9_7F4A_7C15;

/// Table construction parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableConfig {
    /// Number of seats at the table (2..=10 make sense)
    pub n_seats: usize,
    /// Upper bound accepted for wire-encoded raise amounts
    pub max_limit: u32,
    /// Split all-in pots by Monte-Carlo equity instead of dealing the
    /// remaining board and comparing ranks
    pub all_in_equity_reward: bool,
    /// Monte-Carlo trials per equity estimate
    pub equity_steps: usize,
    /// Restore every stack to its buy-in at the start of each hand
    pub autoreset_stacks: bool,
    /// Run chip-conservation checks after every step
    pub debug: bool,
    /// RNG seed for the deck and the equity sampler
    pub seed: Option<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            n_seats: 6,
            max_limit: 100_000,
            all_in_equity_reward: false,
            equity_steps: 100,
            autoreset_stacks: true,
            debug: false,
            seed: None,
        }
    }
}

/// What the learning agent sees each step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Observation {
    /// Monte-Carlo win probability of the agent's hand, 0..=1
    pub equity: f64,
    /// Agent chips behind
    pub stack: u32,
    /// Chips committed this hand across all seats
    pub total_pot: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StepInfo {
    /// Agent chip delta for the hand, blinds included; 0 until terminal
    pub money_won: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepResult {
    pub observation: Observation,
    /// Agent stack change in big blinds; 0 on non-terminal steps
    pub reward: f64,
    pub terminal: bool,
    pub info: StepInfo,
}

/// Per-seat slice of the debug snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeatState {
    pub current_bet: u32,
    pub stack: u32,
    pub in_hand: bool,
    pub acted_this_round: bool,
    pub all_in: bool,
    pub last_sidepot: usize,
    pub seat_id: usize,
    /// Hole cards as dense indices, `-1` when undealt
    pub hole: [i32; 2],
}

/// Full table snapshot for testing and debugging; not shown to the agent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableState {
    pub button: Option<usize>,
    pub small_blind: u32,
    pub big_blind: u32,
    pub total_pot: u32,
    pub last_raise: u32,
    pub min_raise: u32,
    pub to_call: u32,
    pub to_act: Option<usize>,
    /// Community cards as dense indices padded with `-1` to five slots
    pub community: [i32; 5],
    pub seats: Vec<SeatState>,
}

/// No-limit hold'em cash-game engine.
///
/// Owns the seats, the pot ledger, the deck and the board. `reset` starts a
/// hand (button rotation, blinds, hole cards); `step` applies one action
/// for the seat holding the action and advances streets, side pots and the
/// showdown. All randomness flows from the configured seed, so replaying
/// the same seed and action sequence reproduces every transition exactly.
#[derive(Debug)]
pub struct TexasHoldem {
    config: TableConfig,
    seats: Vec<Seat>,
    registered: Vec<bool>,
    deck: Deck,
    equity: EquityEstimator,
    equity_rng: ChaCha20Rng,
    pot: PotLedger,
    community: Vec<Card>,
    dead_cards: Vec<Card>,
    street: Street,
    button: Option<usize>,
    blind_level_index: usize,
    small_blind: u32,
    big_blind: u32,
    total_pot: u32,
    to_call: u32,
    last_raise: u32,
    current_bet_level: u32,
    to_act: Option<usize>,
    last_actor: Option<usize>,
    agent_seat: Option<usize>,
    hands_played: u64,
    actions: Vec<ActionRecord>,
    rewards: Vec<f64>,
}

impl TexasHoldem {
    pub fn new(config: TableConfig) -> Self {
        assert!(config.n_seats >= 2, "a table needs at least two seats");
        let seed = config.seed.unwrap_or(DEFAULT_SEED);
        let deck = Deck::new_with_seed(seed);
        // equity sampling must not disturb the deck order
        let equity_rng = ChaCha20Rng::seed_from_u64(seed ^ EQUITY_STREAM);
        let (small_blind, big_blind) = blind_level(0);
        let n = config.n_seats;
        Self {
            equity: EquityEstimator::new(config.equity_steps),
            equity_rng,
            deck,
            seats: (0..n).map(Seat::empty_seat).collect(),
            registered: vec![false; n],
            pot: PotLedger::new(n),
            community: Vec::with_capacity(5),
            dead_cards: Vec::new(),
            street: Street::NotStarted,
            button: None,
            blind_level_index: 0,
            small_blind,
            big_blind,
            total_pot: 0,
            to_call: 0,
            last_raise: 0,
            current_bet_level: 0,
            to_act: None,
            last_actor: None,
            agent_seat: None,
            hands_played: 0,
            actions: Vec::new(),
            rewards: vec![0.0; n],
            config,
        }
    }

    /// Seat a player with the given buy-in. At most one seat may register
    /// as the learning agent over the engine's lifetime.
    pub fn add_player(
        &mut self,
        seat_id: usize,
        stack: u32,
        is_agent: bool,
    ) -> Result<(), EngineError> {
        if seat_id >= self.seats.len() {
            return Err(EngineError::InvalidSeat {
                seat: seat_id,
                n_seats: self.seats.len(),
            });
        }
        if self.registered[seat_id] {
            return Err(EngineError::DuplicatePlayer { seat: seat_id });
        }
        if !self.seats[seat_id].empty {
            return Err(EngineError::SeatOccupied { seat: seat_id });
        }
        if is_agent {
            if self.agent_seat.is_some() {
                return Err(EngineError::AgentExists);
            }
            self.agent_seat = Some(seat_id);
        }
        self.seats[seat_id] = Seat::occupied(seat_id, stack);
        self.registered[seat_id] = true;
        Ok(())
    }

    /// Empty a seat. Removing an unoccupied seat is a no-op; removing the
    /// agent seat clears the agent registration.
    pub fn remove_player(&mut self, seat_id: usize) -> Result<(), EngineError> {
        if seat_id >= self.seats.len() {
            return Err(EngineError::InvalidSeat {
                seat: seat_id,
                n_seats: self.seats.len(),
            });
        }
        if self.seats[seat_id].empty {
            return Ok(());
        }
        self.seats[seat_id] = Seat::empty_seat(seat_id);
        self.registered[seat_id] = false;
        if self.agent_seat == Some(seat_id) {
            self.agent_seat = None;
        }
        Ok(())
    }

    /// Mark a seat as sitting out; it is skipped from the next hand on.
    pub fn set_sitting_out(&mut self, seat_id: usize, sitting_out: bool) {
        if let Some(seat) = self.seats.get_mut(seat_id) {
            seat.sitting_out = sitting_out;
        }
    }

    /// Bump the blind schedule one level (clamped at the top).
    pub fn advance_blinds(&mut self) {
        self.blind_level_index = (self.blind_level_index + 1).min(BLIND_LEVELS.len() - 1);
    }

    /// Begin a new hand: rotate the button, post blinds, deal hole cards.
    pub fn reset(&mut self) -> Result<(Observation, TableState), EngineError> {
        self.begin_hand();
        let (sb, bb) = blind_level(self.blind_level_index);
        self.small_blind = sb;
        self.big_blind = bb;

        if self.in_hand_seats().len() < 2 {
            return Err(EngineError::HandNotPlayable {
                reason: "fewer than two playable seats",
            });
        }
        self.hands_played += 1;
        self.reset_street_state();

        let sb_seat = self.first_to_act().expect("two playable seats");
        self.to_act = Some(sb_seat);
        self.last_actor = Some(sb_seat);
        self.post_blind_for(sb_seat, sb);
        self.advance_to_act();
        let bb_seat = self.to_act.expect("big blind seat");
        self.post_blind_for(bb_seat, bb);
        self.advance_to_act();

        self.to_call = self.big_blind;
        self.last_raise = self.big_blind;
        self.deal_next_street();

        Ok((self.agent_observation(), self.full_state()))
    }

    /// Apply one action for the seat currently holding the action.
    pub fn step(&mut self, action: Action) -> Result<StepResult, EngineError> {
        let cur = self.to_act.ok_or(EngineError::HandNotPlayable {
            reason: "no hand in progress",
        })?;
        if self.street == Street::Showdown {
            return Err(EngineError::ShowdownAlreadyResolved);
        }
        let players = self.in_hand_seats();
        if players.len() <= 1 {
            return Err(EngineError::HandNotPlayable {
                reason: "fewer than two seats left in the hand",
            });
        }
        if players.iter().all(|&s| self.seats[s].all_in) {
            return Err(EngineError::HandNotPlayable {
                reason: "every seat left in the hand is all-in",
            });
        }
        assert!(
            !self.seats[cur].all_in,
            "the action can never rest on an all-in seat"
        );

        let min_raise = self.min_raise_for(cur);
        let (kind, absolute) = self.seats[cur].validate_action(self.to_call, min_raise, action)?;

        self.actions.push(ActionRecord {
            seat: cur,
            street: self.street,
            action,
        });
        self.apply_bet(cur, absolute);

        if kind == ActionKind::Raise {
            // a raise re-opens the round for everyone who can still act
            for seat in &mut self.seats {
                if seat.seat_id != cur && seat.in_hand && !seat.all_in {
                    seat.acted_this_round = false;
                }
            }
        }
        self.advance_to_act();
        if kind == ActionKind::Fold {
            if let Some(hole) = self.seats[cur].hole {
                self.dead_cards.extend_from_slice(&hole);
            }
            self.seats[cur].in_hand = false;
        }

        let players = self.in_hand_seats();
        let not_acted: Vec<usize> = players
            .iter()
            .copied()
            .filter(|&s| !self.seats[s].acted_this_round)
            .collect();
        let all_in_count = players.iter().filter(|&&s| self.seats[s].all_in).count();
        let all_but_one_all_in = all_in_count + 1 >= players.len();

        let street_done = not_acted.is_empty()
            || (not_acted.len() == 1
                && self.seats[not_acted[0]].current_bet >= self.to_call
                && all_but_one_all_in);
        let showdown_forced = players.len() > 1 && all_but_one_all_in && street_done;

        if showdown_forced {
            if self.config.all_in_equity_reward {
                self.street = Street::Showdown;
            } else {
                while self.street < Street::Showdown {
                    self.deal_next_street();
                }
            }
        }
        if street_done {
            self.resolve_street();
        }

        let terminal = self.street == Street::Showdown || players.len() == 1;
        if terminal {
            self.resolve_hand(&players);
        }
        if self.config.debug {
            self.check_conservation(terminal);
        }
        Ok(self.step_result(terminal))
    }

    /// Decode and apply a wire-encoded `[action_id, amount]` pair.
    pub fn step_wire(&mut self, wire: [i64; 2]) -> Result<StepResult, EngineError> {
        let action = Action::from_wire(wire, self.config.max_limit)?;
        self.step(action)
    }

    pub fn current_player_id(&self) -> Option<usize> {
        self.to_act
    }

    pub fn to_call(&self) -> u32 {
        self.to_call
    }

    /// Smallest legal raise-to amount for the seat holding the action. The
    /// acting seat's full stack caps the requirement, so a covering shove is
    /// always legal even when it falls short of a full raise.
    pub fn min_raise(&self) -> u32 {
        match self.to_act {
            Some(seat) => self.min_raise_for(seat),
            None => (self.current_bet_level + self.last_raise).max(self.current_bet_level + 1),
        }
    }

    pub fn street(&self) -> Street {
        self.street
    }

    pub fn total_pot(&self) -> u32 {
        self.total_pot
    }

    pub fn blinds(&self) -> (u32, u32) {
        (self.small_blind, self.big_blind)
    }

    pub fn button(&self) -> Option<usize> {
        self.button
    }

    pub fn agent_seat(&self) -> Option<usize> {
        self.agent_seat
    }

    pub fn hands_played(&self) -> u64 {
        self.hands_played
    }

    pub fn community_cards(&self) -> &[Card] {
        &self.community
    }

    pub fn side_pots(&self) -> &[u32] {
        self.pot.layers()
    }

    /// Per-seat terminal rewards of the last finished hand, in big blinds.
    /// Their sum equals `(posted_sb + posted_bb) / big_blind` every hand.
    pub fn hand_rewards(&self) -> &[f64] {
        &self.rewards
    }

    /// Record of the current or just-finished hand, suitable for a
    /// [`crate::logger::HandLogger`].
    pub fn hand_record(&self) -> HandRecord {
        HandRecord {
            hand_id: format!("{:06}", self.hands_played),
            seed: self.config.seed,
            actions: self.actions.clone(),
            board: self.community.clone(),
            net_chips: self
                .seats
                .iter()
                .map(|s| s.stack as i64 - (s.hand_starting_stack + s.blind_paid) as i64)
                .collect(),
            rewards: self.rewards.clone(),
            winners: self
                .seats
                .iter()
                .filter(|s| s.stack > s.hand_starting_stack + s.blind_paid)
                .map(|s| s.seat_id)
                .collect(),
            ts: None,
            meta: None,
        }
    }

    pub fn full_state(&self) -> TableState {
        TableState {
            button: self.button,
            small_blind: self.small_blind,
            big_blind: self.big_blind,
            total_pot: self.total_pot,
            last_raise: self.last_raise,
            min_raise: self.min_raise(),
            to_call: self.to_call,
            to_act: self.to_act,
            community: pad_indices::<5>(&self.community),
            seats: self
                .seats
                .iter()
                .map(|s| SeatState {
                    current_bet: s.current_bet,
                    stack: s.stack,
                    in_hand: s.in_hand,
                    acted_this_round: s.acted_this_round,
                    all_in: s.all_in,
                    last_sidepot: s.last_sidepot,
                    seat_id: s.seat_id,
                    hole: match &s.hole {
                        Some(cards) => pad_indices::<2>(cards),
                        None => pad_indices::<2>(&[]),
                    },
                })
                .collect(),
        }
    }

    fn begin_hand(&mut self) {
        self.street = Street::NotStarted;
        let autoreset = self.config.autoreset_stacks;
        for seat in &mut self.seats {
            if seat.empty {
                continue;
            }
            if autoreset && !seat.sitting_out {
                seat.stack = seat.starting_stack;
            }
            seat.reset_hand();
        }
        self.community.clear();
        self.dead_cards.clear();
        self.pot.reset();
        self.total_pot = 0;
        self.to_act = None;
        self.last_actor = None;
        self.actions.clear();
        self.rewards = vec![0.0; self.seats.len()];
        self.deck.shuffle();

        if self.seats.iter().any(|s| s.in_hand) {
            let n = self.seats.len();
            let start = self.button.map(|b| b + 1).unwrap_or(0);
            for i in 0..n {
                let s = (start + i) % n;
                if self.seats[s].in_hand {
                    self.button = Some(s);
                    break;
                }
            }
        }
    }

    fn reset_street_state(&mut self) {
        for seat in &mut self.seats {
            if seat.empty {
                continue;
            }
            seat.current_bet = 0;
            if !seat.all_in {
                seat.acted_this_round = false;
            }
        }
        self.to_call = 0;
        self.last_raise = 0;
        self.current_bet_level = 0;
    }

    fn post_blind_for(&mut self, seat: usize, blind: u32) {
        let posted = self.seats[seat].stack.min(blind);
        self.apply_bet(seat, posted);
        self.seats[seat].post_blind(posted);
    }

    /// Raise the seat's street commitment to `absolute` and fold the move
    /// into the table-level bet tracking.
    fn apply_bet(&mut self, seat: usize, absolute: u32) {
        self.current_bet_level = self.current_bet_level.max(absolute);
        let previous = self.seats[seat].current_bet;
        let last_bet = self
            .last_actor
            .map(|l| self.seats[l].current_bet)
            .unwrap_or(0);
        self.seats[seat].declare_action(absolute);

        self.total_pot += absolute - previous;
        self.to_call = self.to_call.max(absolute);
        if self.to_call > 0 {
            self.to_call = self.to_call.max(self.big_blind);
        }
        self.last_raise = self.last_raise.max(absolute.saturating_sub(last_bet));
    }

    fn min_raise_for(&self, seat: usize) -> u32 {
        let capped = (self.current_bet_level + self.last_raise).min(self.seats[seat].max_bet());
        capped.max(self.current_bet_level + 1)
    }

    fn in_hand_seats(&self) -> Vec<usize> {
        self.seats
            .iter()
            .filter(|s| s.in_hand)
            .map(|s| s.seat_id)
            .collect()
    }

    /// First seat to act on a street: the button itself for a heads-up
    /// preflop, otherwise the first live non-all-in seat clockwise from it.
    /// Falls back to the button anchor when everyone left is all-in (the
    /// hand is over at that point and the pointer is cosmetic).
    fn first_to_act(&self) -> Option<usize> {
        let button = self.button?;
        let n = self.seats.len();
        if self.street == Street::NotStarted && self.in_hand_seats().len() == 2 {
            return Some(button);
        }
        for i in 1..=n {
            let s = (button + i) % n;
            if self.seats[s].in_hand && !self.seats[s].all_in {
                return Some(s);
            }
        }
        Some(button)
    }

    fn advance_to_act(&mut self) {
        let cur = match self.to_act {
            Some(c) => c,
            None => return,
        };
        self.last_actor = Some(cur);
        let n = self.seats.len();
        let mut next = cur;
        for i in 1..=n {
            let s = (cur + i) % n;
            if self.seats[s].in_hand && !self.seats[s].all_in {
                next = s;
                break;
            }
        }
        self.to_act = Some(next);
    }

    fn deal_next_street(&mut self) {
        match self.street {
            Street::NotStarted => {
                for i in 0..self.seats.len() {
                    if self.seats[i].in_hand {
                        let cards = self.deck.draw(2);
                        assert_eq!(cards.len(), 2, "deck exhausted while dealing");
                        self.seats[i].hole = Some([cards[0], cards[1]]);
                    }
                }
            }
            Street::Preflop => {
                self.community = self.deck.draw(3);
                assert_eq!(self.community.len(), 3, "deck exhausted on the flop");
            }
            Street::Flop | Street::Turn => {
                let card = self.deck.draw_one().expect("deck exhausted on a street");
                self.community.push(card);
            }
            Street::River | Street::Showdown => {}
        }
        self.street = self.street.next();
    }

    /// Close the street: park the action for the next street, sweep the
    /// bets into pot layers and, unless the hand is over, deal on.
    fn resolve_street(&mut self) {
        self.to_act = self.first_to_act();
        self.pot.sweep_street(&mut self.seats, self.total_pot);
        if self.street < Street::Showdown && self.in_hand_seats().len() > 1 {
            self.reset_street_state();
            self.deal_next_street();
        }
    }

    fn resolve_hand(&mut self, players: &[usize]) {
        if players.len() == 1 {
            // everyone else folded
            self.seats[players[0]].refund(self.total_pot);
            for k in 0..self.pot.layers().len() {
                self.pot.drain_layer(k);
            }
        } else if self.config.all_in_equity_reward && self.community.len() < 5 {
            self.distribute_by_equity(players);
        } else {
            self.distribute_by_rank(players);
        }

        let bb = f64::from(self.big_blind);
        self.rewards = self
            .seats
            .iter()
            .map(|s| {
                if s.empty {
                    0.0
                } else {
                    (s.stack as i64 - s.hand_starting_stack as i64) as f64 / bb
                }
            })
            .collect();
    }

    /// Standard showdown: rank every live hand against the full board and
    /// split each layer among the seats tying the best (lowest) rank.
    fn distribute_by_rank(&mut self, players: &[usize]) {
        for &s in players {
            let hole = self.seats[s].hole.expect("live seat holds cards");
            self.seats[s].hand_rank = Some(hand::rank(hole, &self.community));
        }
        for k in 0..self.pot.layers().len() {
            if self.pot.layers()[k] == 0 {
                continue;
            }
            let eligible = self.layer_eligible(players, k);
            let best = eligible
                .iter()
                .map(|&s| self.seats[s].hand_rank.expect("ranked above"))
                .min()
                .expect("layer has an eligible seat");
            let winners: Vec<usize> = eligible
                .into_iter()
                .filter(|&s| self.seats[s].hand_rank == Some(best))
                .collect();

            let pot_k = self.pot.drain_layer(k);
            let share = pot_k / winners.len() as u32;
            for &w in &winners {
                self.seats[w].refund(share);
            }
            let remainder = pot_k - share * winners.len() as u32;
            if remainder > 0 {
                let earliest = self.earliest_from_button(&winners);
                self.seats[earliest].refund(remainder);
            }
        }
    }

    /// All-in showdown on a short board: split each layer by Monte-Carlo
    /// equity instead of dealing the remaining community cards.
    fn distribute_by_equity(&mut self, players: &[usize]) {
        for k in 0..self.pot.layers().len() {
            if self.pot.layers()[k] == 0 {
                continue;
            }
            let eligible = self.layer_eligible(players, k);
            let pot_k = self.pot.drain_layer(k);
            if eligible.len() == 1 {
                self.seats[eligible[0]].refund(pot_k);
                continue;
            }
            let hands: Vec<[Card; 2]> = eligible
                .iter()
                .map(|&s| self.seats[s].hole.expect("live seat holds cards"))
                .collect();
            let equities = self.equity.equities_for(
                &mut self.equity_rng,
                &hands,
                &self.community,
                self.deck.remaining_cards(),
                &self.dead_cards,
            );

            let mut remaining = pot_k;
            for (&s, &eq) in eligible.iter().zip(equities.iter()) {
                let share = ((f64::from(pot_k) * eq).round() as u32).min(remaining);
                self.seats[s].refund(share);
                remaining -= share;
            }
            if remaining > 0 {
                let earliest = self.earliest_from_button(&eligible);
                self.seats[earliest].refund(remaining);
            }
        }
    }

    fn layer_eligible(&self, players: &[usize], k: usize) -> Vec<usize> {
        let eligible: Vec<usize> = players
            .iter()
            .copied()
            .filter(|&s| self.seats[s].last_sidepot >= k)
            .collect();
        if eligible.is_empty() {
            // only reachable through an all-folded sweep; the live seats
            // inherit the orphaned chips
            players.to_vec()
        } else {
            eligible
        }
    }

    fn earliest_from_button(&self, candidates: &[usize]) -> usize {
        let n = self.seats.len();
        let button = self.button.unwrap_or(0);
        for i in 1..=n {
            let s = (button + i) % n;
            if candidates.contains(&s) {
                return s;
            }
        }
        candidates[0]
    }

    fn agent_observation(&mut self) -> Observation {
        let (equity, stack) = match self.agent_seat {
            Some(a) => {
                let hole = self.seats[a].hole;
                let stack = self.seats[a].stack;
                let eq = match hole {
                    Some(cards) => self.equity.solo_equity(
                        &mut self.equity_rng,
                        cards,
                        self.seats.len(),
                        &self.community,
                        self.deck.remaining_cards(),
                    ),
                    None => 0.0,
                };
                (eq, stack)
            }
            None => (0.0, 0),
        };
        Observation {
            equity,
            stack,
            total_pot: self.total_pot,
        }
    }

    fn step_result(&mut self, terminal: bool) -> StepResult {
        let observation = self.agent_observation();
        let (reward, money_won) = match self.agent_seat {
            Some(a) if terminal => {
                let seat = &self.seats[a];
                let delta = seat.stack as i64 - seat.hand_starting_stack as i64;
                (
                    delta as f64 / f64::from(self.big_blind),
                    delta - i64::from(seat.blind_paid),
                )
            }
            _ => (0.0, 0),
        };
        StepResult {
            observation,
            reward,
            terminal,
            info: StepInfo { money_won },
        }
    }

    /// Chip conservation: stacks plus the outstanding pot always add up to
    /// the stacks the hand started from.
    fn check_conservation(&self, terminal: bool) {
        let stacks: i64 = self.seats.iter().map(|s| i64::from(s.stack)).sum();
        let started: i64 = self
            .seats
            .iter()
            .filter(|s| !s.empty)
            .map(|s| i64::from(s.hand_starting_stack) + i64::from(s.blind_paid))
            .sum();
        let outstanding = if terminal {
            0
        } else {
            i64::from(self.total_pot)
        };
        assert_eq!(stacks + outstanding, started, "chips leaked");
        if !terminal {
            let street_bets: u32 = self.seats.iter().map(|s| s.current_bet).sum();
            assert_eq!(
                self.pot.total() + street_bets,
                self.total_pot,
                "pot layers out of sync"
            );
        }
    }
}
