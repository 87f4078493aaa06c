use num::BigUint;

/// Failures of the coin selection routines.
///
/// Each variant is a distinct condition. `NeedMoreObjects` is an aggregate
/// shortfall, `CoinsNotMatchRequest` means no single coin is large enough.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    /// The coins together do not reach the requested amount (insufficient
    /// funds)
    #[error("you should get more coins and try again (need {required}, have {available})")]
    NeedMoreObjects {
        required: BigUint,
        available: BigUint,
    },
    /// No single coin has a balance of at least `required`
    #[error("coins not match request: no single coin covers {required}")]
    CoinsNotMatchRequest { required: BigUint },
    /// Too few coins left to look for a large enough one
    #[error("insufficient balance: only {remaining} coins left")]
    InsufficientBalance { remaining: usize },
}

impl SelectionError {
    /// The amount still missing for a `NeedMoreObjects` failure.
    pub fn shortfall(&self) -> Option<BigUint> {
        match self {
            SelectionError::NeedMoreObjects {
                required,
                available,
            } if available < required => Some(required - available),
            SelectionError::NeedMoreObjects { .. } => Some(BigUint::default()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrimitiveError {
    #[error("invalid object id: {0}")]
    InvalidObjectId(String),
    #[error("invalid digest: {0}")]
    InvalidDigest(String),
    /// Object versions are `u64` on the wire
    #[error("object version {0} does not fit in 64 bits")]
    VersionOverflow(BigUint),
}
