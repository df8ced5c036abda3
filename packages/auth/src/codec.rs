use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use cosmwasm_std::{Addr, Binary, Timestamp};
use vela_store::KvStore;

use crate::account::{Account, AccountError, BaseAccount};
use crate::coin::Coins;
use crate::vesting::{ContinuousVestingAccount, DelayedVestingAccount, VestingAccount};

pub const TYPE_BASE_ACCOUNT: &str = "cosmos-sdk/BaseAccount";
pub const TYPE_CONTINUOUS_VESTING_ACCOUNT: &str = "cosmos-sdk/ContinuousVestingAccount";
pub const TYPE_DELAYED_VESTING_ACCOUNT: &str = "cosmos-sdk/DelayedVestingAccount";

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("{0}")]
    Serde(#[from] serde_json::Error),

    #[error("Account type is not registered: {type_tag}")]
    UnregisteredType { type_tag: String },
}

/// Any account the state machine knows how to persist.
#[derive(Clone, Debug, PartialEq)]
pub enum AccountKind {
    Base(BaseAccount),
    Continuous(ContinuousVestingAccount),
    Delayed(DelayedVestingAccount),
}

impl AccountKind {
    /// Stable tag identifying the concrete type on the wire.
    pub fn type_tag(&self) -> &'static str {
        match self {
            AccountKind::Base(_) => TYPE_BASE_ACCOUNT,
            AccountKind::Continuous(_) => TYPE_CONTINUOUS_VESTING_ACCOUNT,
            AccountKind::Delayed(_) => TYPE_DELAYED_VESTING_ACCOUNT,
        }
    }

    pub fn as_vesting(&self) -> Option<&dyn VestingAccount> {
        match self {
            AccountKind::Base(_) => None,
            AccountKind::Continuous(account) => Some(account),
            AccountKind::Delayed(account) => Some(account),
        }
    }

    pub fn as_vesting_mut(&mut self) -> Option<&mut dyn VestingAccount> {
        match self {
            AccountKind::Base(_) => None,
            AccountKind::Continuous(account) => Some(account),
            AccountKind::Delayed(account) => Some(account),
        }
    }

    /// Spendable coins at the given block time. A base account has no
    /// schedule, so its whole balance is spendable.
    pub fn spendable_coins(&self, block_time: Timestamp) -> Coins {
        match self.as_vesting() {
            Some(vesting) => vesting.spendable_coins(block_time),
            None => self.coins().clone(),
        }
    }

    fn as_account(&self) -> &dyn Account {
        match self {
            AccountKind::Base(account) => account,
            AccountKind::Continuous(account) => account,
            AccountKind::Delayed(account) => account,
        }
    }

    fn as_account_mut(&mut self) -> &mut dyn Account {
        match self {
            AccountKind::Base(account) => account,
            AccountKind::Continuous(account) => account,
            AccountKind::Delayed(account) => account,
        }
    }
}

impl Account for AccountKind {
    fn address(&self) -> &Addr {
        self.as_account().address()
    }

    fn set_address(&mut self, address: Addr) -> Result<(), AccountError> {
        self.as_account_mut().set_address(address)
    }

    fn pubkey(&self) -> Option<&Binary> {
        self.as_account().pubkey()
    }

    fn set_pubkey(&mut self, pubkey: Binary) {
        self.as_account_mut().set_pubkey(pubkey)
    }

    fn coins(&self) -> &Coins {
        self.as_account().coins()
    }

    fn set_coins(&mut self, coins: Coins) {
        self.as_account_mut().set_coins(coins)
    }

    fn account_number(&self) -> u64 {
        self.as_account().account_number()
    }

    fn set_account_number(&mut self, account_number: u64) {
        self.as_account_mut().set_account_number(account_number)
    }

    fn sequence(&self) -> u64 {
        self.as_account().sequence()
    }

    fn set_sequence(&mut self, sequence: u64) {
        self.as_account_mut().set_sequence(sequence)
    }
}

impl From<BaseAccount> for AccountKind {
    fn from(account: BaseAccount) -> Self {
        AccountKind::Base(account)
    }
}

impl From<ContinuousVestingAccount> for AccountKind {
    fn from(account: ContinuousVestingAccount) -> Self {
        AccountKind::Continuous(account)
    }
}

impl From<DelayedVestingAccount> for AccountKind {
    fn from(account: DelayedVestingAccount) -> Self {
        AccountKind::Delayed(account)
    }
}

/// The persisted form: a type tag naming the concrete account, and its
/// fields. Every field is part of consensus state, including the vesting
/// ledgers.
#[derive(Serialize, Deserialize)]
struct Envelope {
    #[serde(rename = "type")]
    type_tag: String,
    value: Value,
}

pub type AccountDecoder = fn(Value) -> Result<AccountKind, CodecError>;

/// Maps wire type tags to decoders. Built explicitly at startup and handed
/// to whatever serializes accounts; there is no process-global registration.
pub struct AccountRegistry {
    decoders: BTreeMap<String, AccountDecoder>,
}

impl AccountRegistry {
    pub fn new() -> Self {
        AccountRegistry {
            decoders: BTreeMap::new(),
        }
    }

    /// A registry with the three standard account types.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(TYPE_BASE_ACCOUNT, |value| {
            Ok(AccountKind::Base(serde_json::from_value(value)?))
        });
        registry.register(TYPE_CONTINUOUS_VESTING_ACCOUNT, |value| {
            Ok(AccountKind::Continuous(serde_json::from_value(value)?))
        });
        registry.register(TYPE_DELAYED_VESTING_ACCOUNT, |value| {
            Ok(AccountKind::Delayed(serde_json::from_value(value)?))
        });
        registry
    }

    pub fn register(&mut self, type_tag: impl Into<String>, decoder: AccountDecoder) {
        self.decoders.insert(type_tag.into(), decoder);
    }

    pub fn is_registered(&self, type_tag: &str) -> bool {
        self.decoders.contains_key(type_tag)
    }

    pub fn encode(&self, account: &AccountKind) -> Result<Binary, CodecError> {
        let type_tag = account.type_tag();
        if !self.is_registered(type_tag) {
            return Err(CodecError::UnregisteredType {
                type_tag: type_tag.to_owned(),
            });
        }

        let value = match account {
            AccountKind::Base(account) => serde_json::to_value(account)?,
            AccountKind::Continuous(account) => serde_json::to_value(account)?,
            AccountKind::Delayed(account) => serde_json::to_value(account)?,
        };
        let bytes = serde_json::to_vec(&Envelope {
            type_tag: type_tag.to_owned(),
            value,
        })?;
        Ok(Binary::from(bytes))
    }

    pub fn decode(&self, bytes: &[u8]) -> Result<AccountKind, CodecError> {
        let envelope: Envelope = serde_json::from_slice(bytes)?;
        let decoder = self
            .decoders
            .get(&envelope.type_tag)
            .ok_or_else(|| CodecError::UnregisteredType {
                type_tag: envelope.type_tag.clone(),
            })?;
        decoder(envelope.value)
    }
}

impl Default for AccountRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

pub const ACCOUNT_KEY_PREFIX: &[u8] = b"account:";

/// Address-keyed account persistence on top of a raw key-value store.
pub struct AccountStore<'a> {
    registry: &'a AccountRegistry,
}

impl<'a> AccountStore<'a> {
    pub fn new(registry: &'a AccountRegistry) -> Self {
        AccountStore { registry }
    }

    fn key(address: &Addr) -> Vec<u8> {
        let mut key = ACCOUNT_KEY_PREFIX.to_vec();
        key.extend_from_slice(address.as_str().as_bytes());
        key
    }

    pub fn get(
        &self,
        store: &dyn KvStore,
        address: &Addr,
    ) -> Result<Option<AccountKind>, CodecError> {
        store
            .get(&Self::key(address))
            .map(|bytes| self.registry.decode(&bytes))
            .transpose()
    }

    pub fn set(&self, store: &mut dyn KvStore, account: &AccountKind) -> Result<(), CodecError> {
        let bytes = self.registry.encode(account)?;
        store.set(&Self::key(account.address()), bytes.as_slice());
        Ok(())
    }

    pub fn remove(&self, store: &mut dyn KvStore, address: &Addr) {
        store.delete(&Self::key(address));
    }
}
