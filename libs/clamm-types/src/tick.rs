use soroban_sdk::contracttype;

/// Information stored for each tick that has ever been referenced by a position
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TickInfo {
    /// True once liquidity has been added at this tick; never reset
    pub initialized: bool,
    /// Total liquidity referencing this tick
    pub liquidity: u128,
}

impl TickInfo {
    pub fn new() -> Self {
        Self::default()
    }
}
