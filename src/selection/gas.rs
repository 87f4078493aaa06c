use num::{BigUint, Zero};
use tracing::trace;

use super::{PickPolicy, pick};
use crate::error::SelectionError;
use crate::primitives::{Coin, Coins};

/// Selects coins covering `amount`, plus one separate coin covering
/// `gas_amount`.
///
/// The gas coin is the smallest coin with a balance of at least `gas_amount`,
/// whatever the policy. It is taken out of the pool before the spend
/// selection runs, so it never appears in the returned coins. A zero
/// `gas_amount` reserves nothing.
pub fn pick_with_fee(
    coins: &[Coin],
    amount: &BigUint,
    gas_amount: &BigUint,
    policy: PickPolicy,
) -> Result<(Coins, Option<Coin>), SelectionError> {
    if amount.is_zero() && gas_amount.is_zero() {
        return Ok((Coins::new(), None));
    }
    if gas_amount.is_zero() {
        return pick(coins, amount, policy).map(|selected| (selected, None));
    }
    if coins.is_empty() {
        return Err(SelectionError::NeedMoreObjects {
            required: amount + gas_amount,
            available: BigUint::zero(),
        });
    }

    // Tightest fit; on ties the first one seen wins.
    let mut gas_index: Option<usize> = None;
    for (index, coin) in coins.iter().enumerate() {
        if coin.balance < *gas_amount {
            continue;
        }
        match gas_index {
            Some(best) if coins[best].balance <= coin.balance => {}
            _ => gas_index = Some(index),
        }
    }
    let gas_index = gas_index.ok_or_else(|| SelectionError::CoinsNotMatchRequest {
        required: gas_amount.clone(),
    })?;
    let gas_coin = &coins[gas_index];
    trace!(
        coin = %gas_coin.coin_object_id,
        balance = %gas_coin.balance,
        "reserved gas coin"
    );

    let remaining = coins
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != gas_index)
        .map(|(_, coin)| coin.clone())
        .collect::<Vec<_>>();
    let selected = pick(&remaining, amount, policy)?;
    Ok((selected, Some(gas_coin.clone())))
}

impl Coins {
    /// See [`pick_with_fee`].
    pub fn pick_with_gas(
        &self,
        amount: &BigUint,
        gas_amount: &BigUint,
        policy: PickPolicy,
    ) -> Result<(Coins, Option<Coin>), SelectionError> {
        pick_with_fee(self, amount, gas_amount, policy)
    }
}
