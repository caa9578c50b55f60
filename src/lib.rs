#![cfg_attr(not(test), no_std)]
#![cfg_attr(not(test), no_main)]
extern crate alloc;

pub mod math;

// Pooled staking ledger
pub mod ledger;
