use rand::seq::SliceRandom;
use rand_chacha::ChaCha20Rng;

use crate::cards::Card;
use crate::hand;

/// Monte-Carlo pot-equity estimator.
///
/// Every estimate runs `n_evaluations` roll-outs against an explicit RNG
/// stream; two calls with identical inputs and identically seeded RNGs
/// return identical numbers, so seeded replays stay byte-exact.
#[derive(Debug, Clone)]
pub struct EquityEstimator {
    n_evaluations: usize,
}

impl EquityEstimator {
    pub fn new(n_evaluations: usize) -> Self {
        assert!(n_evaluations > 0, "equity estimation needs at least one trial");
        Self { n_evaluations }
    }

    /// Equity of each shown-down hand against the others.
    ///
    /// Per trial the board is completed to five cards from `deck` (minus
    /// any `dead` cards), every hand is ranked, and the win is split evenly
    /// among the tied best hands. The result sums to 1 within 1e-6.
    pub fn equities_for(
        &self,
        rng: &mut ChaCha20Rng,
        hands: &[[Card; 2]],
        community: &[Card],
        deck: &[Card],
        dead: &[Card],
    ) -> Vec<f64> {
        assert!(!hands.is_empty());
        let mut pool: Vec<Card> = deck
            .iter()
            .copied()
            .filter(|c| !dead.contains(c))
            .collect();
        let missing = 5 - community.len();
        let mut board = community.to_vec();
        let mut victories = vec![0.0f64; hands.len()];

        for _ in 0..self.n_evaluations {
            board.truncate(community.len());
            let (fill, _) = pool.partial_shuffle(rng, missing);
            board.extend_from_slice(fill);

            let ranks: Vec<u32> = hands.iter().map(|&h| hand::rank(h, &board)).collect();
            let best = *ranks.iter().min().expect("at least one hand");
            let winners = ranks.iter().filter(|&&r| r == best).count() as f64;
            for (i, &r) in ranks.iter().enumerate() {
                if r == best {
                    victories[i] += 1.0 / winners;
                }
            }
        }

        let n = self.n_evaluations as f64;
        let equities: Vec<f64> = victories.iter().map(|v| v / n).collect();
        debug_assert!((equities.iter().sum::<f64>() - 1.0).abs() < 1e-6);
        equities
    }

    /// Equity of a single hand against `n_players - 1` unseen opponents.
    ///
    /// Per trial the opponents' hole cards and the rest of the board are
    /// dealt from `deck` without replacement; ties split the win share.
    pub fn solo_equity(
        &self,
        rng: &mut ChaCha20Rng,
        hole: [Card; 2],
        n_players: usize,
        community: &[Card],
        deck: &[Card],
    ) -> f64 {
        let n_opponents = n_players.saturating_sub(1);
        let mut pool: Vec<Card> = deck.to_vec();
        let missing = 5 - community.len();
        let need = missing + 2 * n_opponents;
        let mut board = community.to_vec();
        let mut victories = 0.0f64;

        for _ in 0..self.n_evaluations {
            board.truncate(community.len());
            let (sampled, _) = pool.partial_shuffle(rng, need);
            let sampled = sampled.to_vec();
            board.extend_from_slice(&sampled[..missing]);

            let my_rank = hand::rank(hole, &board);
            let mut best = my_rank;
            let mut ties = 1usize;
            for opp in sampled[missing..].chunks_exact(2) {
                let r = hand::rank([opp[0], opp[1]], &board);
                match r.cmp(&best) {
                    std::cmp::Ordering::Less => {
                        best = r;
                        ties = 1;
                    }
                    std::cmp::Ordering::Equal => ties += 1,
                    std::cmp::Ordering::Greater => {}
                }
            }
            if my_rank == best {
                victories += 1.0 / ties as f64;
            }
        }

        victories / self.n_evaluations as f64
    }
}
