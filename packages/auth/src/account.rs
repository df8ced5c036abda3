use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use cosmwasm_std::{Addr, Binary};

use crate::coin::Coins;

#[derive(Error, Debug, PartialEq)]
pub enum AccountError {
    #[error("Account address is already set and cannot be overwritten")]
    AddressAlreadySet {},
}

/// The capability set every account answers, vesting or not.
///
/// Getters never have side effects. All setters besides [`set_address`]
/// are plain assignments; the address is the account's identity and may
/// only be written while still blank.
///
/// [`set_address`]: Account::set_address
pub trait Account {
    fn address(&self) -> &Addr;
    fn set_address(&mut self, address: Addr) -> Result<(), AccountError>;

    /// Blank until the first signed transaction delivers it.
    fn pubkey(&self) -> Option<&Binary>;
    fn set_pubkey(&mut self, pubkey: Binary);

    fn coins(&self) -> &Coins;
    fn set_coins(&mut self, coins: Coins);

    /// Replay protection across account pruning; set once by the keeper.
    fn account_number(&self) -> u64;
    fn set_account_number(&mut self, account_number: u64);

    /// Replay protection; increased monotonically by the caller.
    fn sequence(&self) -> u64;
    fn set_sequence(&mut self, sequence: u64);
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct BaseAccount {
    address: Addr,
    coins: Coins,
    public_key: Option<Binary>,
    account_number: u64,
    sequence: u64,
}

impl BaseAccount {
    pub fn new(address: Addr) -> Self {
        BaseAccount {
            address,
            ..Default::default()
        }
    }
}

impl Default for BaseAccount {
    fn default() -> Self {
        BaseAccount {
            address: Addr::unchecked(""),
            coins: Coins::default(),
            public_key: None,
            account_number: 0,
            sequence: 0,
        }
    }
}

impl Account for BaseAccount {
    fn address(&self) -> &Addr {
        &self.address
    }

    fn set_address(&mut self, address: Addr) -> Result<(), AccountError> {
        if !self.address.as_str().is_empty() {
            return Err(AccountError::AddressAlreadySet {});
        }
        self.address = address;
        Ok(())
    }

    fn pubkey(&self) -> Option<&Binary> {
        self.public_key.as_ref()
    }

    fn set_pubkey(&mut self, pubkey: Binary) {
        self.public_key = Some(pubkey);
    }

    fn coins(&self) -> &Coins {
        &self.coins
    }

    fn set_coins(&mut self, coins: Coins) {
        self.coins = coins;
    }

    fn account_number(&self) -> u64 {
        self.account_number
    }

    fn set_account_number(&mut self, account_number: u64) {
        self.account_number = account_number;
    }

    fn sequence(&self) -> u64 {
        self.sequence
    }

    fn set_sequence(&mut self, sequence: u64) {
        self.sequence = sequence;
    }
}
