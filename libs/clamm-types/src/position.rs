use soroban_sdk::{contracttype, Address};

/// Identity of a position: one owner's liquidity over one tick range.
///
/// Used directly as the storage key, so equal triples always resolve to the
/// same entry and distinct triples never share one.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PositionKey {
    pub owner: Address,
    pub tick_lower: i32,
    pub tick_upper: i32,
}

impl PositionKey {
    pub fn identity_of(owner: Address, tick_lower: i32, tick_upper: i32) -> Self {
        Self {
            owner,
            tick_lower,
            tick_upper,
        }
    }
}

/// Position info stored in pool contract
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PositionInfo {
    /// Liquidity in this position
    pub liquidity: u128,
}

impl PositionInfo {
    pub fn new() -> Self {
        Self::default()
    }
}
