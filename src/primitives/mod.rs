mod balance;
mod coin;
mod object;

pub use balance::*;
pub use coin::*;
pub use object::*;

#[cfg(test)]
pub(crate) use coin::test_utils;
