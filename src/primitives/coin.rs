use std::ops::Deref;

use num::{BigUint, ToPrimitive};

use super::{Digest, ObjectId, ObjectRef, TransactionDigest};
use crate::error::PrimitiveError;

/// A coin object as reported by the ledger. Selection only looks at
/// `balance`, everything else is carried along untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coin {
    pub coin_type: String,
    pub coin_object_id: ObjectId,
    pub version: BigUint,
    pub digest: Digest,
    pub balance: BigUint,
    pub locked_until_epoch: Option<BigUint>,
    pub previous_transaction: TransactionDigest,
}

impl Coin {
    /// The reference used to spend this coin in a transaction.
    pub fn reference(&self) -> Result<ObjectRef, PrimitiveError> {
        let version = self
            .version
            .to_u64()
            .ok_or_else(|| PrimitiveError::VersionOverflow(self.version.clone()))?;
        Ok(ObjectRef::new(self.coin_object_id, version, self.digest))
    }

    pub fn is_locked_at(&self, epoch: &BigUint) -> bool {
        self.locked_until_epoch
            .as_ref()
            .is_some_and(|until| until > epoch)
    }
}

/// An ordered collection of coins. No ordering or uniqueness is assumed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Coins(Vec<Coin>);

impl Coins {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Sum of all balances.
    pub fn total_balance(&self) -> BigUint {
        self.0.iter().map(|coin| &coin.balance).sum()
    }

    pub fn references(&self) -> Result<Vec<ObjectRef>, PrimitiveError> {
        self.0.iter().map(Coin::reference).collect()
    }

    pub fn push(&mut self, coin: Coin) {
        self.0.push(coin);
    }

    pub(crate) fn remove(&mut self, index: usize) -> Coin {
        self.0.remove(index)
    }

    pub fn into_inner(self) -> Vec<Coin> {
        self.0
    }
}

impl Deref for Coins {
    type Target = [Coin];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Coin>> for Coins {
    fn from(coins: Vec<Coin>) -> Self {
        Self(coins)
    }
}

impl From<&[Coin]> for Coins {
    fn from(coins: &[Coin]) -> Self {
        Self(coins.to_vec())
    }
}

impl From<Coins> for Vec<Coin> {
    fn from(coins: Coins) -> Self {
        coins.0
    }
}

impl FromIterator<Coin> for Coins {
    fn from_iter<I: IntoIterator<Item = Coin>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Coins {
    type Item = Coin;
    type IntoIter = std::vec::IntoIter<Coin>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Coins {
    type Item = &'a Coin;
    type IntoIter = std::slice::Iter<'a, Coin>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
