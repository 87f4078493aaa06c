use std::collections::BTreeMap;

use num::BigUint;

use super::Coin;

/// Per coin type summary of an owner's coins.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Balance {
    pub coin_type: String,
    pub coin_object_count: u64,
    pub total_balance: BigUint,
    /// Locked amounts keyed by the epoch they unlock at.
    pub locked_balance: BTreeMap<BigUint, BigUint>,
}

impl Balance {
    /// Summarizes the coins of `coin_type`. Coins of other types are skipped.
    pub fn from_coins(coin_type: &str, coins: &[Coin]) -> Self {
        let mut balance = Balance {
            coin_type: coin_type.to_string(),
            ..Default::default()
        };
        for coin in coins.iter().filter(|coin| coin.coin_type == coin_type) {
            balance.coin_object_count += 1;
            balance.total_balance += &coin.balance;
            if let Some(epoch) = &coin.locked_until_epoch {
                *balance.locked_balance.entry(epoch.clone()).or_default() += &coin.balance;
            }
        }
        balance
    }
}

/// Total supply of a coin type.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Supply {
    pub value: BigUint,
}
