//! Events for the pooled staking ledger

use odra::prelude::*;
use odra::casper_types::U512;

/// Event emitted when a participant deposits into the pool
#[odra::event]
pub struct Deposited {
    /// Address of the depositor
    pub staker: Address,
    /// Amount deposited
    pub amount: U512,
    /// Depositor's stake after the deposit
    pub stake_balance: U512,
}

/// Event emitted when the team distributes rewards
#[odra::event]
pub struct RewardsDistributed {
    /// Address of the team
    pub team: Address,
    /// Amount sent in by the team
    pub amount: U512,
    /// Part of `amount` credited to stakers
    pub attributed: U512,
    /// Rounding dust left unattributed in the pool
    pub remainder: U512,
    /// Total stake after the distribution
    pub total_stake: U512,
}

/// Event emitted when a participant withdraws their stake
#[odra::event]
pub struct Withdraw {
    /// Address of the staker
    pub staker: Address,
    /// Amount paid out
    pub amount: U512,
}
