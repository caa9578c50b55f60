//! Pooled staking ledger
//!
//! Participants deposit native tokens into a shared pool. The team
//! periodically sends in rewards, which are split between the current
//! stakers pro rata. A withdrawal pays out the full stake including
//! every reward accrued while it was outstanding.

pub mod staking_ledger;
pub mod errors;
pub mod events;


pub use staking_ledger::StakingLedger;
pub use errors::{ErrorKind, LedgerError};
pub use events::*;
