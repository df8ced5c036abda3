use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use cosmwasm_std::{Addr, Binary, Coin, Decimal, Timestamp, Uint128, Uint256};

use crate::account::{Account, AccountError, BaseAccount};
use crate::coin::{CoinError, Coins};
use crate::time::Expiration;

#[derive(Error, Debug, PartialEq)]
pub enum VestingError {
    #[error("{0}")]
    Coin(#[from] CoinError),

    #[error("Vesting end time must be after start time")]
    InvalidSchedule {},

    #[error("Base balance of {denom} does not cover the delegated amount")]
    InsufficientBalance { denom: String },
}

/// An account whose balance unlocks over time. Locked coins cannot be spent,
/// but they may be delegated out to stakers; the tracking operations keep the
/// three ledgers (base balance, delegated vesting, delegated free) consistent
/// while doing so.
pub trait VestingAccount: Account {
    /// Coins unlocked by the schedule at the given block time.
    fn vested_coins(&self, block_time: Timestamp) -> Coins;

    /// Coins still locked at the given block time.
    fn vesting_coins(&self, block_time: Timestamp) -> Coins;

    /// Coins the account may send to other accounts at the given block time.
    fn spendable_coins(&self, block_time: Timestamp) -> Coins;

    /// Records a delegation decided by the staking module, splitting it into
    /// the vesting and free ledgers and debiting the base balance.
    fn track_delegation(
        &mut self,
        block_time: Timestamp,
        amount: &Coins,
    ) -> Result<(), VestingError>;

    /// Records coins returned by a staker, replenishing the free ledger
    /// before the vesting one and crediting the base balance.
    fn track_undelegation(&mut self, amount: &Coins) -> Result<(), VestingError>;
}

/// State shared by every vesting account variant. The schedule variants embed
/// this value and drive the shared accounting with their own `vesting(t)`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct BaseVestingAccount {
    pub base_account: BaseAccount,
    /// Coins locked when the account was created. Immutable afterwards.
    original_vesting: Coins,
    /// Portion of already vested coins currently delegated out.
    delegated_free: Coins,
    /// Portion of still locked coins currently delegated out.
    delegated_vesting: Coins,
    /// When the whole original vesting amount is unlocked.
    end_time: Expiration,
}

impl BaseVestingAccount {
    pub fn new(base_account: BaseAccount, original_vesting: Coins, end_time: Expiration) -> Self {
        BaseVestingAccount {
            base_account,
            original_vesting,
            delegated_free: Coins::default(),
            delegated_vesting: Coins::default(),
            end_time,
        }
    }

    pub fn original_vesting(&self) -> &Coins {
        &self.original_vesting
    }

    pub fn delegated_free(&self) -> &Coins {
        &self.delegated_free
    }

    pub fn delegated_vesting(&self) -> &Coins {
        &self.delegated_vesting
    }

    pub fn end_time(&self) -> Expiration {
        self.end_time
    }

    /// Spendable portion of the base balance given the coins still vesting.
    ///
    /// Locked coins that were delegated no longer sit in the base balance,
    /// so the effective lock per denom is `vesting - delegated_vesting`,
    /// clamped at zero. The result never exceeds the base balance.
    pub fn spendable_coins(&self, vesting: &Coins) -> Coins {
        let mut spendable = Vec::new();

        for coin in self.base_account.coins().iter() {
            let still_locked = vesting
                .amount_of(&coin.denom)
                .saturating_sub(self.delegated_vesting.amount_of(&coin.denom));
            let amount = coin.amount.saturating_sub(still_locked);

            if !amount.is_zero() {
                spendable.push(Coin {
                    denom: coin.denom.clone(),
                    amount,
                });
            }
        }

        // base balance iteration preserves the normal form
        Coins::new_unchecked(spendable)
    }

    /// Splits a delegation between the vesting and free ledgers.
    ///
    /// Per denom, the part still locked and present in the base balance goes
    /// to `delegated_vesting`, the remainder to `delegated_free`, and the
    /// base balance is debited by the full amount. A denom whose base
    /// balance does not cover the request fails the whole operation; nothing
    /// is recorded in that case.
    pub fn track_delegation(
        &mut self,
        vesting: &Coins,
        amount: &Coins,
    ) -> Result<(), VestingError> {
        let mut base_coins = self.base_account.coins().clone();
        let mut delegated_vesting = self.delegated_vesting.clone();
        let mut delegated_free = self.delegated_free.clone();

        for coin in amount.iter() {
            if base_coins.amount_of(&coin.denom) < coin.amount {
                return Err(VestingError::InsufficientBalance {
                    denom: coin.denom.clone(),
                });
            }

            let still_locked = vesting
                .amount_of(&coin.denom)
                .saturating_sub(delegated_vesting.amount_of(&coin.denom));
            let to_vesting = still_locked.min(coin.amount);
            let to_free = coin.amount - to_vesting;

            if !to_vesting.is_zero() {
                delegated_vesting = delegated_vesting.add(&Coins::from(Coin {
                    denom: coin.denom.clone(),
                    amount: to_vesting,
                }))?;
            }
            if !to_free.is_zero() {
                delegated_free = delegated_free.add(&Coins::from(Coin {
                    denom: coin.denom.clone(),
                    amount: to_free,
                }))?;
            }

            base_coins = base_coins.sub(&Coins::from(coin.clone()))?;
        }

        self.base_account.set_coins(base_coins);
        self.delegated_vesting = delegated_vesting;
        self.delegated_free = delegated_free;
        Ok(())
    }

    /// Unwinds a delegation, draining `delegated_free` before
    /// `delegated_vesting` and crediting the base balance.
    ///
    /// Undelegating more than was delegated fails with the arithmetic error
    /// of the vesting ledger; no field is touched in that case.
    pub fn track_undelegation(&mut self, amount: &Coins) -> Result<(), VestingError> {
        let mut base_coins = self.base_account.coins().clone();
        let mut delegated_vesting = self.delegated_vesting.clone();
        let mut delegated_free = self.delegated_free.clone();

        for coin in amount.iter() {
            let from_free = delegated_free.amount_of(&coin.denom).min(coin.amount);
            let from_vesting = coin.amount - from_free;

            if !from_free.is_zero() {
                delegated_free = delegated_free.sub(&Coins::from(Coin {
                    denom: coin.denom.clone(),
                    amount: from_free,
                }))?;
            }
            if !from_vesting.is_zero() {
                delegated_vesting = delegated_vesting.sub(&Coins::from(Coin {
                    denom: coin.denom.clone(),
                    amount: from_vesting,
                }))?;
            }

            base_coins = base_coins.add(&Coins::from(coin.clone()))?;
        }

        self.base_account.set_coins(base_coins);
        self.delegated_vesting = delegated_vesting;
        self.delegated_free = delegated_free;
        Ok(())
    }
}

impl Account for BaseVestingAccount {
    fn address(&self) -> &Addr {
        self.base_account.address()
    }

    fn set_address(&mut self, address: Addr) -> Result<(), AccountError> {
        self.base_account.set_address(address)
    }

    fn pubkey(&self) -> Option<&Binary> {
        self.base_account.pubkey()
    }

    fn set_pubkey(&mut self, pubkey: Binary) {
        self.base_account.set_pubkey(pubkey)
    }

    fn coins(&self) -> &Coins {
        self.base_account.coins()
    }

    fn set_coins(&mut self, coins: Coins) {
        self.base_account.set_coins(coins)
    }

    fn account_number(&self) -> u64 {
        self.base_account.account_number()
    }

    fn set_account_number(&mut self, account_number: u64) {
        self.base_account.set_account_number(account_number)
    }

    fn sequence(&self) -> u64 {
        self.base_account.sequence()
    }

    fn set_sequence(&mut self, sequence: u64) {
        self.base_account.set_sequence(sequence)
    }
}

/// Unlocks coins linearly between a start and an end instant.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ContinuousVestingAccount {
    pub base_vesting: BaseVestingAccount,
    start_time: Expiration,
}

impl ContinuousVestingAccount {
    /// Creates the account with its whole balance locked on the schedule.
    pub fn new(
        address: Addr,
        original_vesting: Coins,
        start_time: Expiration,
        end_time: Expiration,
    ) -> Result<Self, VestingError> {
        if end_time <= start_time {
            return Err(VestingError::InvalidSchedule {});
        }

        let mut base_account = BaseAccount::new(address);
        base_account.set_coins(original_vesting.clone());

        Ok(ContinuousVestingAccount {
            base_vesting: BaseVestingAccount::new(base_account, original_vesting, end_time),
            start_time,
        })
    }

    pub fn start_time(&self) -> Expiration {
        self.start_time
    }
}

/// Keeps the whole balance locked until the end instant, then unlocks it in
/// one step.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct DelayedVestingAccount {
    pub base_vesting: BaseVestingAccount,
}

impl DelayedVestingAccount {
    /// Creates the account with its whole balance locked until `end_time`.
    pub fn new(address: Addr, original_vesting: Coins, end_time: Expiration) -> Self {
        let mut base_account = BaseAccount::new(address);
        base_account.set_coins(original_vesting.clone());

        DelayedVestingAccount {
            base_vesting: BaseVestingAccount::new(base_account, original_vesting, end_time),
        }
    }
}

/// Rounds `amount * ratio` to the nearest integer, half away from zero.
///
/// `Uint128 * Decimal` in cosmwasm truncates; consensus requires the
/// rounded variant, so the product is widened and rounded explicitly.
fn mul_ratio_rounded(amount: Uint128, ratio: Decimal) -> Uint128 {
    let fractional: Uint256 = Decimal::one().atomics().into();
    let numerator = amount.full_mul(ratio.atomics());
    let rounded = (numerator + fractional / Uint256::from(2u32)) / fractional;
    // callers only pass ratios below one, so the rounded product fits
    Uint128::try_from(rounded).unwrap_or(amount)
}

impl VestingAccount for ContinuousVestingAccount {
    fn vested_coins(&self, block_time: Timestamp) -> Coins {
        // a start time in the future means nothing has unlocked yet
        if block_time.seconds() <= self.start_time.seconds() {
            return Coins::default();
        }
        if self.base_vesting.end_time().is_expired_time(block_time) {
            return self.base_vesting.original_vesting().clone();
        }

        let elapsed = block_time.seconds() - self.start_time.seconds();
        let period = self.base_vesting.end_time().seconds() - self.start_time.seconds();
        let ratio = Decimal::from_ratio(elapsed, period);

        let vested = self
            .base_vesting
            .original_vesting()
            .iter()
            .map(|coin| Coin {
                denom: coin.denom.clone(),
                amount: mul_ratio_rounded(coin.amount, ratio),
            })
            .filter(|coin| !coin.amount.is_zero())
            .collect();

        Coins::new_unchecked(vested)
    }

    fn vesting_coins(&self, block_time: Timestamp) -> Coins {
        // vested never exceeds the original vesting amount
        self.base_vesting
            .original_vesting()
            .sub(&self.vested_coins(block_time))
            .unwrap_or_default()
    }

    fn spendable_coins(&self, block_time: Timestamp) -> Coins {
        self.base_vesting
            .spendable_coins(&self.vesting_coins(block_time))
    }

    fn track_delegation(
        &mut self,
        block_time: Timestamp,
        amount: &Coins,
    ) -> Result<(), VestingError> {
        let vesting = self.vesting_coins(block_time);
        self.base_vesting.track_delegation(&vesting, amount)
    }

    fn track_undelegation(&mut self, amount: &Coins) -> Result<(), VestingError> {
        self.base_vesting.track_undelegation(amount)
    }
}

impl VestingAccount for DelayedVestingAccount {
    fn vested_coins(&self, block_time: Timestamp) -> Coins {
        if self.base_vesting.end_time().is_expired_time(block_time) {
            self.base_vesting.original_vesting().clone()
        } else {
            Coins::default()
        }
    }

    fn vesting_coins(&self, block_time: Timestamp) -> Coins {
        self.base_vesting
            .original_vesting()
            .sub(&self.vested_coins(block_time))
            .unwrap_or_default()
    }

    fn spendable_coins(&self, block_time: Timestamp) -> Coins {
        self.base_vesting
            .spendable_coins(&self.vesting_coins(block_time))
    }

    fn track_delegation(
        &mut self,
        block_time: Timestamp,
        amount: &Coins,
    ) -> Result<(), VestingError> {
        let vesting = self.vesting_coins(block_time);
        self.base_vesting.track_delegation(&vesting, amount)
    }

    fn track_undelegation(&mut self, amount: &Coins) -> Result<(), VestingError> {
        self.base_vesting.track_undelegation(amount)
    }
}

impl Account for ContinuousVestingAccount {
    fn address(&self) -> &Addr {
        self.base_vesting.address()
    }

    fn set_address(&mut self, address: Addr) -> Result<(), AccountError> {
        self.base_vesting.set_address(address)
    }

    fn pubkey(&self) -> Option<&Binary> {
        self.base_vesting.pubkey()
    }

    fn set_pubkey(&mut self, pubkey: Binary) {
        self.base_vesting.set_pubkey(pubkey)
    }

    fn coins(&self) -> &Coins {
        self.base_vesting.coins()
    }

    fn set_coins(&mut self, coins: Coins) {
        self.base_vesting.set_coins(coins)
    }

    fn account_number(&self) -> u64 {
        self.base_vesting.account_number()
    }

    fn set_account_number(&mut self, account_number: u64) {
        self.base_vesting.set_account_number(account_number)
    }

    fn sequence(&self) -> u64 {
        self.base_vesting.sequence()
    }

    fn set_sequence(&mut self, sequence: u64) {
        self.base_vesting.set_sequence(sequence)
    }
}

impl Account for DelayedVestingAccount {
    fn address(&self) -> &Addr {
        self.base_vesting.address()
    }

    fn set_address(&mut self, address: Addr) -> Result<(), AccountError> {
        self.base_vesting.set_address(address)
    }

    fn pubkey(&self) -> Option<&Binary> {
        self.base_vesting.pubkey()
    }

    fn set_pubkey(&mut self, pubkey: Binary) {
        self.base_vesting.set_pubkey(pubkey)
    }

    fn coins(&self) -> &Coins {
        self.base_vesting.coins()
    }

    fn set_coins(&mut self, coins: Coins) {
        self.base_vesting.set_coins(coins)
    }

    fn account_number(&self) -> u64 {
        self.base_vesting.account_number()
    }

    fn set_account_number(&mut self, account_number: u64) {
        self.base_vesting.set_account_number(account_number)
    }

    fn sequence(&self) -> u64 {
        self.base_vesting.sequence()
    }

    fn set_sequence(&mut self, sequence: u64) {
        self.base_vesting.set_sequence(sequence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use assert_matches::assert_matches;
    use cosmwasm_std::coin;

    const ADDR: &str = "recipient";

    fn coins(list: Vec<Coin>) -> Coins {
        Coins::new(list).unwrap()
    }

    fn atom(amount: u128) -> Coins {
        coins(vec![coin(amount, "atom")])
    }

    /// 100 atom vesting linearly from t=0 to t=100.
    fn continuous_account() -> ContinuousVestingAccount {
        ContinuousVestingAccount::new(
            Addr::unchecked(ADDR),
            atom(100),
            Expiration::from_seconds(0),
            Expiration::from_seconds(100),
        )
        .unwrap()
    }

    fn at(seconds: u64) -> Timestamp {
        Timestamp::from_seconds(seconds)
    }

    /// Sum of the three ledgers for one denom; conserved by tracking calls.
    fn total_of(account: &BaseVestingAccount, denom: &str) -> Uint128 {
        account.coins().amount_of(denom)
            + account.delegated_vesting().amount_of(denom)
            + account.delegated_free().amount_of(denom)
    }

    #[test]
    fn rejects_degenerate_schedule() {
        let err = ContinuousVestingAccount::new(
            Addr::unchecked(ADDR),
            atom(100),
            Expiration::from_seconds(100),
            Expiration::from_seconds(100),
        )
        .unwrap_err();
        assert_eq!(err, VestingError::InvalidSchedule {});

        let err = ContinuousVestingAccount::new(
            Addr::unchecked(ADDR),
            atom(100),
            Expiration::from_seconds(100),
            Expiration::from_seconds(50),
        )
        .unwrap_err();
        assert_eq!(err, VestingError::InvalidSchedule {});
    }

    #[test]
    fn continuous_vesting_boundaries() {
        let account = continuous_account();

        assert_eq!(account.vested_coins(at(0)), Coins::default());
        assert_eq!(account.vesting_coins(at(0)), atom(100));

        assert_eq!(account.vested_coins(at(100)), atom(100));
        assert_eq!(account.vesting_coins(at(100)), Coins::default());

        // stays fully vested forever after
        assert_eq!(account.vested_coins(at(100_000)), atom(100));
    }

    #[test]
    fn continuous_vesting_interpolates() {
        let account = continuous_account();

        assert_eq!(account.vested_coins(at(1)), atom(1));
        assert_eq!(account.vested_coins(at(50)), atom(50));
        assert_eq!(account.vested_coins(at(99)), atom(99));
        assert_eq!(account.vesting_coins(at(50)), atom(50));
    }

    #[test]
    fn vesting_scalar_rounds_half_away_from_zero() {
        let account = ContinuousVestingAccount::new(
            Addr::unchecked(ADDR),
            atom(100),
            Expiration::from_seconds(0),
            Expiration::from_seconds(3),
        )
        .unwrap();

        // 100 * 1/3 = 33.33.. and 100 * 2/3 = 66.66..
        assert_eq!(account.vested_coins(at(1)), atom(33));
        assert_eq!(account.vested_coins(at(2)), atom(67));

        let one = ContinuousVestingAccount::new(
            Addr::unchecked(ADDR),
            atom(1),
            Expiration::from_seconds(0),
            Expiration::from_seconds(2),
        )
        .unwrap();

        // the exact half rounds up
        assert_eq!(one.vested_coins(at(1)), atom(1));
    }

    #[test]
    fn vested_is_monotone() {
        let account = continuous_account();

        let mut previous = Uint128::zero();
        for seconds in 0..=110 {
            let vested = account.vested_coins(at(seconds)).amount_of("atom");
            assert!(vested >= previous, "vested decreased at t={}", seconds);
            previous = vested;
        }
        assert_eq!(previous, Uint128::new(100));
    }

    #[test]
    fn spendable_mid_vesting() {
        let account = continuous_account();
        assert_eq!(account.spendable_coins(at(50)), atom(50));
    }

    #[test]
    fn spendable_is_bounded_by_base_balance() {
        let mut account = continuous_account();
        account.track_delegation(at(50), &atom(40)).unwrap();

        for seconds in 0..=110 {
            let spendable = account.spendable_coins(at(seconds)).amount_of("atom");
            assert!(spendable <= account.coins().amount_of("atom"));
        }
    }

    #[test]
    fn delegating_locked_coins_fills_the_vesting_ledger() {
        let mut account = continuous_account();

        account.track_delegation(at(50), &atom(40)).unwrap();

        assert_eq!(account.base_vesting.delegated_vesting(), &atom(40));
        assert!(account.base_vesting.delegated_free().is_zero());
        assert_eq!(account.coins(), &atom(60));
        assert_eq!(account.spendable_coins(at(50)), atom(50));
    }

    #[test]
    fn delegating_beyond_vesting_spills_into_free() {
        let mut account = continuous_account();
        account.track_delegation(at(50), &atom(40)).unwrap();

        account.track_delegation(at(50), &atom(30)).unwrap();

        assert_eq!(account.base_vesting.delegated_vesting(), &atom(50));
        assert_eq!(account.base_vesting.delegated_free(), &atom(20));
        assert_eq!(account.coins(), &atom(30));
    }

    #[test]
    fn undelegating_drains_free_before_vesting() {
        let mut account = continuous_account();
        account.track_delegation(at(50), &atom(40)).unwrap();
        account.track_delegation(at(50), &atom(30)).unwrap();

        account.track_undelegation(&atom(25)).unwrap();

        assert!(account.base_vesting.delegated_free().is_zero());
        assert_eq!(account.base_vesting.delegated_vesting(), &atom(45));
        assert_eq!(account.coins(), &atom(55));
    }

    #[test]
    fn everything_is_spendable_after_end_time() {
        let account = continuous_account();
        assert_eq!(account.spendable_coins(at(150)), atom(100));
    }

    #[test]
    fn delayed_schedule_steps_at_end_time() {
        let account = DelayedVestingAccount::new(
            Addr::unchecked(ADDR),
            atom(100),
            Expiration::from_seconds(100),
        );

        assert_eq!(account.vesting_coins(at(99)), atom(100));
        assert_eq!(account.spendable_coins(at(99)), Coins::default());

        assert_eq!(account.vesting_coins(at(100)), Coins::default());
        assert_eq!(account.spendable_coins(at(100)), atom(100));
    }

    #[test]
    fn delayed_account_delegates_from_locked_balance() {
        let mut account = DelayedVestingAccount::new(
            Addr::unchecked(ADDR),
            atom(100),
            Expiration::from_seconds(100),
        );

        account.track_delegation(at(10), &atom(60)).unwrap();

        assert_eq!(account.base_vesting.delegated_vesting(), &atom(60));
        assert!(account.base_vesting.delegated_free().is_zero());
        assert_eq!(account.coins(), &atom(40));
    }

    #[test]
    fn underfunded_delegation_fails_without_touching_state() {
        let mut account = ContinuousVestingAccount::new(
            Addr::unchecked(ADDR),
            coins(vec![coin(100, "atom"), coin(50, "btc")]),
            Expiration::from_seconds(0),
            Expiration::from_seconds(100),
        )
        .unwrap();
        let before = account.clone();

        // atom is covered but btc is not, so nothing may be recorded
        let err = account
            .track_delegation(at(50), &coins(vec![coin(40, "atom"), coin(60, "btc")]))
            .unwrap_err();

        assert_eq!(
            err,
            VestingError::InsufficientBalance {
                denom: "btc".to_owned()
            }
        );
        assert_eq!(account, before);
    }

    #[test]
    fn over_undelegation_fails_without_touching_state() {
        let mut account = continuous_account();
        account.track_delegation(at(50), &atom(40)).unwrap();
        let before = account.clone();

        let err = account.track_undelegation(&atom(41)).unwrap_err();
        assert_matches!(err, VestingError::Coin(CoinError::NegativeResult { .. }));
        assert_eq!(account, before);

        let err = account
            .track_undelegation(&coins(vec![coin(5, "btc")]))
            .unwrap_err();
        assert_matches!(err, VestingError::Coin(CoinError::NegativeResult { .. }));
        assert_eq!(account, before);
    }

    #[test]
    fn tracking_conserves_the_per_denom_total() {
        let mut account = ContinuousVestingAccount::new(
            Addr::unchecked(ADDR),
            coins(vec![coin(100, "atom"), coin(50, "btc")]),
            Expiration::from_seconds(0),
            Expiration::from_seconds(100),
        )
        .unwrap();

        account
            .track_delegation(at(20), &coins(vec![coin(30, "atom"), coin(10, "btc")]))
            .unwrap();
        account.track_delegation(at(60), &atom(50)).unwrap();
        account.track_undelegation(&atom(15)).unwrap();
        account
            .track_undelegation(&coins(vec![coin(5, "btc")]))
            .unwrap();

        assert_eq!(total_of(&account.base_vesting, "atom"), Uint128::new(100));
        assert_eq!(total_of(&account.base_vesting, "btc"), Uint128::new(50));
    }

    #[test]
    fn delegated_total_never_exceeds_original_vesting() {
        let mut account = continuous_account();

        account.track_delegation(at(10), &atom(90)).unwrap();
        account.track_undelegation(&atom(30)).unwrap();
        account.track_delegation(at(90), &atom(40)).unwrap();

        let delegated = account.base_vesting.delegated_vesting().amount_of("atom")
            + account.base_vesting.delegated_free().amount_of("atom");
        assert!(delegated <= Uint128::new(100));
    }

    #[test]
    fn delegation_round_trip_restores_base_balance() {
        let mut account = continuous_account();
        account.track_delegation(at(30), &atom(25)).unwrap();

        let base_before = account.coins().clone();
        let delegated_before = account.base_vesting.delegated_vesting().amount_of("atom")
            + account.base_vesting.delegated_free().amount_of("atom");

        account.track_delegation(at(60), &atom(50)).unwrap();
        account.track_undelegation(&atom(50)).unwrap();

        assert_eq!(account.coins(), &base_before);
        let delegated_after = account.base_vesting.delegated_vesting().amount_of("atom")
            + account.base_vesting.delegated_free().amount_of("atom");
        assert_eq!(delegated_after, delegated_before);
    }

    #[test]
    fn delegation_is_time_dependent() {
        // the same two amounts recorded at different times split differently
        let mut early = continuous_account();
        early.track_delegation(at(10), &atom(50)).unwrap();
        assert_eq!(early.base_vesting.delegated_vesting(), &atom(50));

        let mut late = continuous_account();
        late.track_delegation(at(90), &atom(50)).unwrap();
        assert_eq!(late.base_vesting.delegated_vesting(), &atom(10));
        assert_eq!(late.base_vesting.delegated_free(), &atom(40));
    }
}
