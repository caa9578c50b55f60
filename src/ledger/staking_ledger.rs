//! Staking Ledger - Pooled native token staking with team-funded rewards
//!
//! Participants deposit native tokens; the team distributes rewards that are
//! credited to every current staker in proportion to their share of the pool.
//! A withdrawal pays out the whole stake, principal and rewards together.

use odra::prelude::*;
use odra::casper_types::U512;
use odra::List;
use super::errors::LedgerError;
use super::events::*;
use crate::math::{SafeMath, ShareMath};

/// Staking Ledger contract
#[odra::module(
    events = [Deposited, RewardsDistributed, Withdraw],
    errors = LedgerError
)]
pub struct StakingLedger {
    /// Team address, the only one allowed to distribute
    team: Var<Address>,
    /// Stake per participant (principal plus attributed rewards)
    stakes: Mapping<Address, U512>,
    /// Participants holding a non-zero stake
    stakers: List<Address>,
    /// 1-based index of each participant in `stakers`, 0 if absent
    staker_positions: Mapping<Address, u32>,
    /// Sum of all stakes
    total_stake: Var<U512>,
    /// Everything the ledger holds: stakes plus unattributed remainder
    total_pool: Var<U512>,
    /// Reentrancy lock
    locked: Var<bool>,
}

#[odra::module]
impl StakingLedger {
    /// Initialize the ledger with the team address
    pub fn init(&mut self, team: Address) {
        self.team.set(team);
        self.total_stake.set(U512::zero());
        self.total_pool.set(U512::zero());
        self.locked.set(false);
    }

    // ========================================
    // Staking Functions
    // ========================================

    /// Deposit the attached tokens into the caller's stake
    #[odra(payable)]
    pub fn deposit(&mut self) {
        let caller = self.env().caller();
        if caller == self.get_team() {
            self.env().revert(LedgerError::TeamCannotDeposit);
        }

        let amount = self.env().attached_value();
        if amount.is_zero() {
            self.env().revert(LedgerError::ZeroAmount);
        }

        let stake = self.stake_of(caller);
        let new_stake = self.safe(SafeMath::add(stake, amount));
        let new_total_stake = self.safe(SafeMath::add(self.get_total_stake_balance(), amount));
        let new_total_pool = self.safe(SafeMath::add(self.get_total_pool_balance(), amount));

        if stake.is_zero() {
            self.add_staker(caller);
        }
        self.stakes.set(&caller, new_stake);
        self.total_stake.set(new_total_stake);
        self.total_pool.set(new_total_pool);

        self.env().emit_event(Deposited {
            staker: caller,
            amount,
            stake_balance: new_stake,
        });
    }

    /// Distribute the attached tokens to all current stakers
    ///
    /// Every staker receives floor(amount * stake / total_stake), with
    /// `total_stake` taken before any share is credited. The rounding
    /// remainder stays in the pool and is never attributed to anyone.
    #[odra(payable)]
    pub fn distribute(&mut self) {
        let caller = self.env().caller();
        let team = self.get_team();
        if caller != team {
            self.env().revert(LedgerError::OnlyTeamCanDistribute);
        }

        let total_stake = self.get_total_stake_balance();
        if total_stake.is_zero() {
            self.env().revert(LedgerError::NoStakersForDistribution);
        }

        let amount = self.env().attached_value();
        if amount.is_zero() {
            self.env().revert(LedgerError::ZeroAmount);
        }

        // Compute every share before touching any stake
        let count = self.stakers.len();
        let mut participants = Vec::with_capacity(count as usize);
        let mut stakes = Vec::with_capacity(count as usize);
        for i in 0..count {
            if let Some(staker) = self.stakers.get(i) {
                stakes.push(self.stake_of(staker));
                participants.push(staker);
            }
        }
        let (shares, remainder) = self.safe(ShareMath::split(amount, &stakes, total_stake));
        let attributed = self.safe(SafeMath::sub(amount, remainder));
        let new_total_stake = self.safe(SafeMath::add(total_stake, attributed));
        let new_total_pool = self.safe(SafeMath::add(self.get_total_pool_balance(), amount));

        for ((staker, stake), share) in participants.iter().zip(stakes).zip(shares) {
            if share.is_zero() {
                continue;
            }
            self.stakes.set(staker, stake + share);
        }
        self.total_stake.set(new_total_stake);
        self.total_pool.set(new_total_pool);

        self.env().emit_event(RewardsDistributed {
            team,
            amount,
            attributed,
            remainder,
            total_stake: new_total_stake,
        });
    }

    /// Withdraw the caller's whole stake
    pub fn withdraw(&mut self) {
        self.lock();

        let caller = self.env().caller();
        let amount = self.stake_of(caller);
        if amount.is_zero() {
            self.env().revert(LedgerError::NothingToWithdraw);
        }

        let new_total_stake = self.safe(SafeMath::sub(self.get_total_stake_balance(), amount));
        let new_total_pool = self.safe(SafeMath::sub(self.get_total_pool_balance(), amount));

        // Zero the stake before paying out
        self.stakes.set(&caller, U512::zero());
        self.remove_staker(caller);
        self.total_stake.set(new_total_stake);
        self.total_pool.set(new_total_pool);

        self.env().transfer_tokens(&caller, &amount);

        self.env().emit_event(Withdraw {
            staker: caller,
            amount,
        });

        self.unlock();
    }

    // ========================================
    // View Functions
    // ========================================

    /// Everything held by the ledger, including unattributed remainder
    pub fn get_total_pool_balance(&self) -> U512 {
        self.total_pool.get_or_default()
    }

    /// Sum of all participant stakes
    pub fn get_total_stake_balance(&self) -> U512 {
        self.total_stake.get_or_default()
    }

    /// Stake of a participant, zero if it never deposited or has withdrawn
    pub fn stake_of(&self, staker: Address) -> U512 {
        self.stakes.get(&staker).unwrap_or_default()
    }

    /// Stake of the caller
    pub fn get_deposit_stake(&self) -> U512 {
        self.stake_of(self.env().caller())
    }

    pub fn get_team(&self) -> Address {
        self.team.get_or_revert_with(LedgerError::NotInitialized)
    }

    pub fn get_staker_count(&self) -> u32 {
        self.stakers.len()
    }

    /// Rounding dust kept by the pool and owed to no one
    pub fn get_undistributed_remainder(&self) -> U512 {
        self.get_total_pool_balance()
            .checked_sub(self.get_total_stake_balance())
            .unwrap_or_default()
    }

    // ========================================
    // Internal Functions
    // ========================================

    fn add_staker(&mut self, staker: Address) {
        if self.staker_positions.get(&staker).unwrap_or_default() != 0 {
            return;
        }
        self.stakers.push(staker);
        self.staker_positions.set(&staker, self.stakers.len());
    }

    /// Swap-remove the staker from the enumerable set
    fn remove_staker(&mut self, staker: Address) {
        let position = self.staker_positions.get(&staker).unwrap_or_default();
        if position == 0 {
            return;
        }

        let last = self.stakers.pop().unwrap_or_revert_with(&self.env(), LedgerError::Underflow);
        if last != staker {
            self.stakers.replace(position - 1, last);
            self.staker_positions.set(&last, position);
        }
        self.staker_positions.set(&staker, 0);
    }

    fn safe<T>(&self, result: Result<T, LedgerError>) -> T {
        result.unwrap_or_else(|error| self.env().revert(error))
    }

    /// Reentrancy lock
    fn lock(&mut self) {
        if self.locked.get_or_default() {
            self.env().revert(LedgerError::Locked);
        }
        self.locked.set(true);
    }

    /// Reentrancy unlock
    fn unlock(&mut self) {
        self.locked.set(false);
    }
}
