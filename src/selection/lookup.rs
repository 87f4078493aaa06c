use num::BigUint;

use crate::error::SelectionError;
use crate::primitives::{Coin, Coins};

/// With this many coins or fewer a failed lookup reports the balance as
/// insufficient rather than the coins as too small.
const FEW_COINS: usize = 3;

impl Coins {
    /// Removes and returns the first coin, by position, whose balance is at
    /// least `amount`. The collection is left untouched on failure.
    pub fn take_coin_no_less(&mut self, amount: &BigUint) -> Result<Coin, SelectionError> {
        if let Some(index) = self.iter().position(|coin| coin.balance >= *amount) {
            return Ok(self.remove(index));
        }
        if self.len() <= FEW_COINS {
            return Err(SelectionError::InsufficientBalance {
                remaining: self.len(),
            });
        }
        Err(SelectionError::CoinsNotMatchRequest {
            required: amount.clone(),
        })
    }
}
