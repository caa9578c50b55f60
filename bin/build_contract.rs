//! Binary for building WASM contracts from odra modules.
#![doc = "Binary for building WASM contracts from odra modules."]

#[allow(unused_imports)]
use pooled_staking_contracts;

fn main() {
    // Entry point for the Odra build system; compilation of the ledger
    // contract to WASM is handled by odra-build
}
