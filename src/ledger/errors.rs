//! Error definitions for the pooled staking ledger
use odra::prelude::*;

/// Custom errors for the StakingLedger contract
#[odra::odra_error]
pub enum LedgerError {
    /// The team cannot deposit
    TeamCannotDeposit = 300,

    /// Only the team can distribute
    OnlyTeamCanDistribute = 301,

    /// No stakers for distribution
    NoStakersForDistribution = 302,

    /// Nothing to withdraw
    NothingToWithdraw = 303,

    /// Zero amount not allowed
    ZeroAmount = 304,

    /// Overflow error
    Overflow = 305,

    /// Underflow error
    Underflow = 306,

    /// Division by zero
    DivisionByZero = 307,

    /// Locked - reentrancy guard
    Locked = 308,

    /// Contract was not initialized
    NotInitialized = 309,
}

/// Broad classification of a [`LedgerError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller lacks the identity required by the entry point
    Forbidden,
    /// The call makes no sense given the current ledger state
    InvalidState,
    /// An amount is zero or out of range
    InvalidArgument,
}

impl LedgerError {
    /// Error kind reported to callers alongside the reason
    pub fn kind(&self) -> ErrorKind {
        match self {
            LedgerError::TeamCannotDeposit | LedgerError::OnlyTeamCanDistribute => {
                ErrorKind::Forbidden
            }
            LedgerError::NoStakersForDistribution
            | LedgerError::NothingToWithdraw
            | LedgerError::Locked
            | LedgerError::NotInitialized
            | LedgerError::Underflow
            | LedgerError::DivisionByZero => ErrorKind::InvalidState,
            LedgerError::ZeroAmount | LedgerError::Overflow => ErrorKind::InvalidArgument,
        }
    }

    /// Human readable reason
    pub fn reason(&self) -> &'static str {
        match self {
            LedgerError::TeamCannotDeposit => "The team cannot deposit",
            LedgerError::OnlyTeamCanDistribute => "Only the team can distribute",
            LedgerError::NoStakersForDistribution => "No stakers for distribution",
            LedgerError::NothingToWithdraw => "Nothing to withdraw",
            LedgerError::ZeroAmount => "Amount must be greater than zero",
            LedgerError::Overflow => "Amount too large for the pool",
            LedgerError::Underflow => "Ledger balance underflow",
            LedgerError::DivisionByZero => "Division by zero",
            LedgerError::Locked => "Reentrant call rejected",
            LedgerError::NotInitialized => "Ledger is not initialized",
        }
    }
}
