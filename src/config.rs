use std::str::FromStr;

use anyhow::Context as _;
use clap::Args;
use num::BigUint;

use crate::primitives::{Coin, Coins};
use crate::selection::{PickPolicy, pick_with_fee};

/// Selection settings for applications embedding the selector.
///
/// Flatten this into an application's own `clap::Parser` with
/// `#[command(flatten)]`. Every option can also be given through the
/// environment.
#[derive(Args, Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionConfig {
    /// Order in which coins are accumulated to cover a spend.
    #[arg(long, env, value_enum, default_value_t = PickPolicy::SmallestFirst)]
    pub pick_policy: PickPolicy,

    /// Amount a single reserved gas coin must cover. `0` disables the reservation.
    #[arg(long, env, value_parser = parse_big_uint, default_value = "0")]
    pub gas_budget: BigUint,
}

impl SelectionConfig {
    /// Runs the gas-aware selection with the configured policy and budget.
    pub fn select(
        &self,
        coins: &[Coin],
        amount: &BigUint,
    ) -> anyhow::Result<(Coins, Option<Coin>)> {
        pick_with_fee(coins, amount, &self.gas_budget, self.pick_policy)
            .with_context(|| format!("failed to select coins for {amount}"))
    }
}

pub fn parse_big_uint(s: &str) -> Result<BigUint, String> {
    BigUint::from_str(s.trim()).map_err(|_| {
        format!(
            "Invalid amount: {}, amounts must be non-negative decimal integers",
            s
        )
    })
}
