//! # holdem-env: No-Limit Hold'em Betting Engine
//!
//! A deterministic No-Limit Texas Hold'em cash-game engine built as a
//! turn-based episode environment for reinforcement-learning research.
//! Handles seat rotation, blind posting, action validation, street
//! progression, layered side pots and showdown resolution, with
//! reproducible RNG so any `(seed, actions)` pair replays exactly.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and integer codec
//! - [`deck`] - Deterministic deck shuffling with ChaCha20 RNG
//! - [`engine`] - Table state machine: reset/step, streets, showdown
//! - [`seat`] - Seat state, actions, and betting validation
//! - [`pot`] - Layered side-pot accounting
//! - [`hand`] - Poker hand evaluation and numeric ranking
//! - [`equity`] - Monte-Carlo pot-equity estimation
//! - [`logger`] - Hand-record serialization to JSONL
//! - [`errors`] - Error types for table operations
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_env::engine::{TableConfig, TexasHoldem};
//! use holdem_env::seat::Action;
//!
//! let mut table = TexasHoldem::new(TableConfig {
//!     n_seats: 2,
//!     seed: Some(42),
//!     ..TableConfig::default()
//! });
//! table.add_player(0, 2500, true).unwrap();
//! table.add_player(1, 2500, false).unwrap();
//!
//! let (observation, state) = table.reset().unwrap();
//! assert_eq!(state.to_act, Some(0)); // button acts first heads-up
//! assert!(observation.equity > 0.0);
//!
//! // the button folds its small blind
//! let result = table.step(Action::Fold).unwrap();
//! assert!(result.terminal);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! All randomness (deck shuffles and equity roll-outs) derives from the
//! configured seed:
//!
//! ```rust
//! use holdem_env::deck::Deck;
//!
//! // Same seed produces same shuffle
//! let deck1 = Deck::new_with_seed(42);
//! let deck2 = Deck::new_with_seed(42);
//! // deck1 and deck2 will have identical card order
//! ```
//!
//! ## Action Validation
//!
//! Actions are validated against the current bet level and raise minimum
//! before any state changes:
//!
//! ```rust
//! use holdem_env::seat::{Action, Seat};
//!
//! let seat = Seat::occupied(0, 1000);
//! let to_call = 50;
//! let min_raise = 100;
//!
//! match seat.validate_action(to_call, min_raise, Action::Call) {
//!     Ok((kind, absolute)) => println!("valid: {:?} to {}", kind, absolute),
//!     Err(e) => println!("invalid action: {}", e),
//! }
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod equity;
pub mod errors;
pub mod hand;
pub mod logger;
pub mod pot;
pub mod seat;
