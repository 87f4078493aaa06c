//! Coin selection for object-based ledgers, where a spendable balance is a
//! collection of indivisible coin objects.

pub mod config;
pub mod error;
pub mod primitives;
pub mod selection;

pub use config::SelectionConfig;
pub use error::{PrimitiveError, SelectionError};
pub use primitives::{
    Balance, Coin, Coins, Digest, ObjectId, ObjectRef, Supply, TransactionDigest,
};
pub use selection::{PickPolicy, pick, pick_with_fee};
