//! Mathematical utilities for the pooled staking ledger
//! Implements safe math operations and pro-rata reward splitting
use alloc::vec::Vec;
use odra::casper_types::U512;
use crate::ledger::errors::LedgerError;

/// Safe math operations for U512
pub struct SafeMath;

impl SafeMath {
    /// Safe addition with overflow check
    pub fn add(a: U512, b: U512) -> Result<U512, LedgerError> {
        a.checked_add(b).ok_or(LedgerError::Overflow)
    }

    /// Safe subtraction with underflow check
    pub fn sub(a: U512, b: U512) -> Result<U512, LedgerError> {
        a.checked_sub(b).ok_or(LedgerError::Underflow)
    }

    /// Safe multiplication with overflow check
    pub fn mul(a: U512, b: U512) -> Result<U512, LedgerError> {
        a.checked_mul(b).ok_or(LedgerError::Overflow)
    }

    /// Safe division with zero check
    pub fn div(a: U512, b: U512) -> Result<U512, LedgerError> {
        if b.is_zero() {
            return Err(LedgerError::DivisionByZero);
        }
        Ok(a / b)
    }
}

/// Reward split calculations
pub struct ShareMath;

impl ShareMath {
    /// Share of `amount` owed to `stake` out of `total`, rounded down:
    /// floor(amount * stake / total)
    ///
    /// With amount = q * total + r the result is q * stake + floor(r * stake / total).
    /// The only wide product is r * stake < total * stake, which fits in 512 bits
    /// for any pool holding less than 2^256 motes.
    pub fn pro_rata(amount: U512, stake: U512, total: U512) -> Result<U512, LedgerError> {
        if total.is_zero() {
            return Err(LedgerError::NoStakersForDistribution);
        }

        let whole = SafeMath::div(amount, total)?;
        let rest = amount % total;

        let whole_part = SafeMath::mul(whole, stake)?;
        let rest_part = SafeMath::div(SafeMath::mul(rest, stake)?, total)?;

        SafeMath::add(whole_part, rest_part)
    }

    /// Split `amount` across `stakes` against the frozen denominator `total`.
    /// Returns the per-stake shares, in input order, and the undistributed remainder.
    pub fn split(
        amount: U512,
        stakes: &[U512],
        total: U512,
    ) -> Result<(Vec<U512>, U512), LedgerError> {
        let mut shares = Vec::with_capacity(stakes.len());
        let mut attributed = U512::zero();

        for stake in stakes {
            let share = Self::pro_rata(amount, *stake, total)?;
            attributed = SafeMath::add(attributed, share)?;
            shares.push(share);
        }

        let remainder = SafeMath::sub(amount, attributed)?;
        Ok((shares, remainder))
    }
}
