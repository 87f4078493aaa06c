//! Greedy coin selection.
//!
//! Coins are ordered according to a [`PickPolicy`] and accumulated until
//! their sum reaches the requested amount. This is not a subset-sum solver:
//! it never backtracks and does not try to minimize the number of coins.

use clap::ValueEnum;
use num::{BigUint, Zero};
use tracing::debug;

use crate::error::SelectionError;
use crate::primitives::{Coin, Coins};

mod gas;
mod lookup;


pub use gas::pick_with_fee;

/// Order in which coins are accumulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum PickPolicy {
    /// Smallest balances first
    #[default]
    SmallestFirst,
    /// Largest balances first
    LargestFirst,
    /// Keep the order the coins were given in
    InputOrder,
}

impl PickPolicy {
    /// Positions of `coins` in the order they should be visited.
    ///
    /// Both sorts are stable, equal balances keep their input order.
    fn order(self, coins: &[Coin]) -> Vec<usize> {
        let mut indices = (0..coins.len()).collect::<Vec<_>>();
        match self {
            PickPolicy::InputOrder => {}
            PickPolicy::SmallestFirst => {
                indices.sort_by(|&a, &b| coins[a].balance.cmp(&coins[b].balance))
            }
            PickPolicy::LargestFirst => {
                indices.sort_by(|&a, &b| coins[b].balance.cmp(&coins[a].balance))
            }
        }
        indices
    }
}

/// Selects coins from `coins` until their balances sum to at least `amount`.
///
/// The first coin is always taken before the target is checked, so a zero
/// `amount` over a non-empty collection still yields one coin.
pub fn pick(
    coins: &[Coin],
    amount: &BigUint,
    policy: PickPolicy,
) -> Result<Coins, SelectionError> {
    if coins.is_empty() && amount.is_zero() {
        return Ok(Coins::new());
    }

    let mut selected = Coins::new();
    let mut total = BigUint::zero();
    for index in policy.order(coins) {
        let coin = &coins[index];
        total += &coin.balance;
        selected.push(coin.clone());
        if total >= *amount {
            debug!(
                ?policy,
                %amount,
                %total,
                count = selected.len(),
                "selected coins"
            );
            return Ok(selected);
        }
    }

    Err(SelectionError::NeedMoreObjects {
        required: amount.clone(),
        available: total,
    })
}

impl Coins {
    /// See [`pick`].
    pub fn pick_coins(
        &self,
        amount: &BigUint,
        policy: PickPolicy,
    ) -> Result<Coins, SelectionError> {
        pick(self, amount, policy)
    }
}
