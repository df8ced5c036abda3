mod account;
mod codec;
mod coin;
mod time;
mod vesting;

pub use account::{Account, AccountError, BaseAccount};
pub use codec::{
    AccountDecoder, AccountKind, AccountRegistry, AccountStore, CodecError, ACCOUNT_KEY_PREFIX,
    TYPE_BASE_ACCOUNT, TYPE_CONTINUOUS_VESTING_ACCOUNT, TYPE_DELAYED_VESTING_ACCOUNT,
};
pub use coin::{CoinError, Coins};
pub use time::Expiration;
pub use vesting::{
    BaseVestingAccount, ContinuousVestingAccount, DelayedVestingAccount, VestingAccount,
    VestingError,
};
