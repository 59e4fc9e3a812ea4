use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::EngineError;

/// A betting decision for the seat currently holding the action.
///
/// `Raise.to` is the *absolute* commitment for the street, not an increment:
/// raising "to 100" from a current bet of 40 moves 60 chips.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Pass the action without betting (only when nothing is owed)
    Check,
    /// Match the current bet level
    Call,
    /// Raise the street commitment to the given absolute amount
    Raise { to: u32 },
    /// Forfeit the hand
    Fold,
}

impl Action {
    /// Decode the `[action_id, amount]` wire form: 0 check, 1 call,
    /// 2 raise, 3 fold. The amount is only read for raises and must lie in
    /// `0..=max_limit`; the other actions ignore it entirely.
    pub fn from_wire(wire: [i64; 2], max_limit: u32) -> Result<Action, EngineError> {
        match wire[0] {
            0 => Ok(Action::Check),
            1 => Ok(Action::Call),
            2 => {
                let amount = wire[1];
                if amount < 0 || amount > i64::from(max_limit) {
                    return Err(EngineError::InvalidAction {
                        reason: format!("raise amount {amount} outside 0..={max_limit}"),
                    });
                }
                Ok(Action::Raise { to: amount as u32 })
            }
            3 => Ok(Action::Fold),
            other => Err(EngineError::InvalidAction {
                reason: format!("unknown action id {other}"),
            }),
        }
    }
}

/// What a validated action turned out to be once stack and bet level were
/// taken into account.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ActionKind {
    Check,
    Call,
    Raise,
    Fold,
}

/// One fixed position at the table.
///
/// A seat starts empty, is populated by `add_player` and cleared by
/// `remove_player`; all per-hand state is reset by [`Seat::reset_hand`].
#[derive(Debug, Clone)]
pub struct Seat {
    pub seat_id: usize,
    /// Chips remaining behind
    pub stack: u32,
    /// Configured buy-in, restored on reset when auto-reset is enabled
    pub starting_stack: u32,
    /// Stack at the start of the hand, minus any blind posted; terminal
    /// reward is `(stack - hand_starting_stack) / big_blind`
    pub hand_starting_stack: u32,
    pub hole: Option<[Card; 2]>,
    /// Chips committed on the current street
    pub current_bet: u32,
    /// Highest side-pot layer this seat is eligible for
    pub last_sidepot: usize,
    /// Chips actually posted as a forced blind this hand
    pub blind_paid: u32,
    /// Evaluator result, set at showdown; lower is stronger
    pub hand_rank: Option<u32>,
    pub empty: bool,
    pub sitting_out: bool,
    /// Has not folded and was not busted at hand start
    pub in_hand: bool,
    pub all_in: bool,
    pub acted_this_round: bool,
}

impl Seat {
    pub fn empty_seat(seat_id: usize) -> Self {
        Self {
            seat_id,
            stack: 0,
            starting_stack: 0,
            hand_starting_stack: 0,
            hole: None,
            current_bet: 0,
            last_sidepot: 0,
            blind_paid: 0,
            hand_rank: None,
            empty: true,
            sitting_out: false,
            in_hand: false,
            all_in: false,
            acted_this_round: false,
        }
    }

    pub fn occupied(seat_id: usize, stack: u32) -> Self {
        Self {
            stack,
            starting_stack: stack,
            hand_starting_stack: stack,
            empty: false,
            ..Self::empty_seat(seat_id)
        }
    }

    /// The most this seat can have committed on the street: what is already
    /// in front of it plus everything behind.
    pub fn max_bet(&self) -> u32 {
        self.current_bet + self.stack
    }

    /// Clears per-hand state and snapshots the stack. The seat plays the
    /// coming hand only if it is occupied, not sitting out, and has chips.
    pub fn reset_hand(&mut self) {
        self.hole = None;
        self.current_bet = 0;
        self.last_sidepot = 0;
        self.blind_paid = 0;
        self.hand_rank = None;
        self.all_in = false;
        self.acted_this_round = false;
        self.hand_starting_stack = self.stack;
        self.in_hand = !self.empty && !self.sitting_out && self.stack > 0;
    }

    /// Checks an action against the current bet level and raise minimum,
    /// returning what kind of move it is and the absolute street commitment
    /// it produces. Engine state is untouched; illegal moves surface as
    /// [`EngineError::InvalidAction`].
    pub fn validate_action(
        &self,
        to_call: u32,
        min_raise: u32,
        action: Action,
    ) -> Result<(ActionKind, u32), EngineError> {
        let to_call = to_call.min(self.max_bet());
        let owing = to_call.saturating_sub(self.current_bet);

        if owing == 0 {
            match action {
                Action::Check => Ok((ActionKind::Check, self.current_bet)),
                Action::Raise { to } => self.validate_raise(to, min_raise),
                _ => Err(EngineError::InvalidAction {
                    reason: format!("{action:?} not allowed, must check (0) or raise (2)"),
                }),
            }
        } else {
            match action {
                Action::Check => Err(EngineError::InvalidAction {
                    reason: format!("cannot check facing a bet of {to_call}"),
                }),
                Action::Call => Ok((ActionKind::Call, to_call)),
                Action::Raise { to } => self.validate_raise(to, min_raise),
                Action::Fold => Ok((ActionKind::Fold, self.current_bet)),
            }
        }
    }

    fn validate_raise(&self, to: u32, min_raise: u32) -> Result<(ActionKind, u32), EngineError> {
        if to < min_raise {
            return Err(EngineError::InvalidAction {
                reason: format!("raise to {to} below minimum {min_raise}"),
            });
        }
        if to > self.max_bet() {
            return Err(EngineError::InvalidAction {
                reason: format!("raise to {to} above maximum {}", self.max_bet()),
            });
        }
        Ok((ActionKind::Raise, to))
    }

    /// Moves chips so the street commitment becomes `absolute_bet` and marks
    /// the seat as having acted. Validation must already have capped the
    /// amount at [`Seat::max_bet`].
    pub fn declare_action(&mut self, absolute_bet: u32) {
        self.acted_this_round = true;
        if absolute_bet == 0 {
            return;
        }
        self.stack -= absolute_bet - self.current_bet;
        self.current_bet = absolute_bet;
        if self.stack == 0 {
            self.all_in = true;
        }
    }

    /// Records a forced blind. The blind is deducted from the hand-start
    /// snapshot so that the terminal reward treats it as already spent, and
    /// the seat keeps its option to act when the action comes back around.
    pub fn post_blind(&mut self, amount: u32) {
        self.hand_starting_stack -= amount;
        self.blind_paid = amount;
        self.acted_this_round = false;
    }

    pub fn refund(&mut self, amount: u32) {
        self.stack += amount;
    }
}
