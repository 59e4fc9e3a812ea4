use crate::seat::Seat;

/// Layered pot ledger. Layer `k` is contested by every seat whose
/// `last_sidepot >= k`; a new layer opens whenever an all-in seat caps the
/// amount the others can win from it.
#[derive(Debug, Clone)]
pub struct PotLedger {
    layers: Vec<u32>,
    current: usize,
}

impl PotLedger {
    pub fn new(n_seats: usize) -> Self {
        Self {
            layers: vec![0; n_seats],
            current: 0,
        }
    }

    pub fn reset(&mut self) {
        for layer in &mut self.layers {
            *layer = 0;
        }
        self.current = 0;
    }

    pub fn layers(&self) -> &[u32] {
        &self.layers
    }

    pub fn total(&self) -> u32 {
        self.layers.iter().sum()
    }

    /// Empties layer `k`, returning its chips. Used while paying out.
    pub fn drain_layer(&mut self, k: usize) -> u32 {
        std::mem::take(&mut self.layers[k])
    }

    /// Folds every outstanding street bet into the layer structure at the
    /// end of a street. Afterwards all `current_bet`s are zero and the
    /// ledger total equals `total_pot`.
    ///
    /// Per pass, the smallest bet among seats still in the hand sets the
    /// slice each contributor owes the open layer; when that smallest bet
    /// belonged to an all-in seat the layer is capped and a new one opens
    /// for the residuals. Bets from seats that already folded simply join
    /// whatever layer is open.
    pub fn sweep_street(&mut self, seats: &mut [Seat], total_pot: u32) {
        self.sweep_layer(seats);
        assert_eq!(self.total(), total_pot, "pot ledger out of balance");
    }

    fn sweep_layer(&mut self, seats: &mut [Seat]) {
        if self.current == self.layers.len() {
            self.layers.push(0);
        }
        let contributors: Vec<usize> = seats
            .iter()
            .filter(|s| s.current_bet > 0)
            .map(|s| s.seat_id)
            .collect();
        if contributors.is_empty() {
            return;
        }

        let live_min = contributors
            .iter()
            .filter(|&&i| seats[i].in_hand)
            .map(|&i| seats[i].current_bet)
            .min();
        let slice = match live_min {
            Some(m) => m,
            None => {
                // everyone still owing chips has folded this street
                for &i in &contributors {
                    self.layers[self.current] += seats[i].current_bet;
                    seats[i].current_bet = 0;
                }
                return;
            }
        };

        let caps_layer = contributors
            .iter()
            .any(|&i| seats[i].current_bet == slice && seats[i].all_in);

        for &i in &contributors {
            let take = slice.min(seats[i].current_bet);
            self.layers[self.current] += take;
            seats[i].current_bet -= take;
            seats[i].last_sidepot = self.current;
        }

        if caps_layer {
            self.current += 1;
            self.sweep_layer(seats);
        }
    }
}
