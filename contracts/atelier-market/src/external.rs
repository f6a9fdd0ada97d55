// External contract interfaces for cross-contract calls
//
// `#[ext_contract]` generates helper structs that the compiler flags as
// dead_code even though they are used at runtime for cross-contract calls.
#![allow(dead_code)]

use near_sdk::json_types::U128;
use near_sdk::{ext_contract, AccountId, NearToken};

use crate::constants::GAS_FOR_FT_TRANSFER;

/// NEP-141 surface the marketplace drives for payouts and withdrawals.
#[ext_contract(ext_ft)]
pub trait FungibleToken {
    fn ft_transfer(&mut self, receiver_id: AccountId, amount: U128, memo: Option<String>);
}

/// Fire-and-forget payout; scheduled after the current call's state is
/// final, so a malicious asset contract observes fully-updated bookkeeping.
pub(crate) fn ft_transfer_to(asset: &AccountId, receiver_id: &AccountId, amount: u128) {
    if amount == 0 {
        return;
    }
    let _ = ext_ft::ext(asset.clone())
        .with_attached_deposit(NearToken::from_yoctonear(1))
        .with_static_gas(GAS_FOR_FT_TRANSFER)
        .ft_transfer(receiver_id.clone(), U128(amount), None);
}
