use std::collections::BTreeMap;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use cosmwasm_std::{Coin, OverflowError, Uint128};

#[derive(Error, Debug, PartialEq)]
pub enum CoinError {
    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("Subtracting {denom} would drop its amount below zero")]
    NegativeResult { denom: String },

    #[error("Duplicated denom in coin list: {denom}")]
    DuplicateDenom { denom: String },
}

/// A normalized multi-denomination balance: denoms are unique and sorted,
/// every amount is strictly positive. The empty list is the valid zero.
///
/// All arithmetic preserves this normal form, so two balances holding the
/// same amounts always compare equal.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(try_from = "Vec<Coin>", into = "Vec<Coin>")]
pub struct Coins(Vec<Coin>);

impl Coins {
    /// Normalizes the given coins: zero amounts are stripped and the rest is
    /// sorted by denom. A denom appearing twice is rejected rather than
    /// merged, as repeated denoms in input usually indicate a caller bug.
    pub fn new(coins: Vec<Coin>) -> Result<Self, CoinError> {
        let mut coins: Vec<Coin> = coins
            .into_iter()
            .filter(|coin| !coin.amount.is_zero())
            .collect();
        coins.sort_by(|left, right| left.denom.cmp(&right.denom));

        for pair in coins.windows(2) {
            if pair[0].denom == pair[1].denom {
                return Err(CoinError::DuplicateDenom {
                    denom: pair[0].denom.clone(),
                });
            }
        }

        Ok(Coins(coins))
    }

    /// Builds coins from a vector already in normal form. Callers must only
    /// pass vectors derived from an existing `Coins` value.
    pub(crate) fn new_unchecked(coins: Vec<Coin>) -> Self {
        debug_assert!(
            coins
                .windows(2)
                .all(|pair| pair[0].denom < pair[1].denom),
            "coins are not sorted by unique denom"
        );
        debug_assert!(coins.iter().all(|coin| !coin.amount.is_zero()));
        Coins(coins)
    }

    /// Amount of the given denom, zero if absent.
    pub fn amount_of(&self, denom: &str) -> Uint128 {
        match self
            .0
            .binary_search_by(|coin| coin.denom.as_str().cmp(denom))
        {
            Ok(idx) => self.0[idx].amount,
            Err(_) => Uint128::zero(),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coin> {
        self.0.iter()
    }

    /// Denom-wise sum of two balances.
    pub fn add(&self, other: &Coins) -> Result<Coins, CoinError> {
        let mut merged: BTreeMap<String, Uint128> = self
            .0
            .iter()
            .map(|coin| (coin.denom.clone(), coin.amount))
            .collect();

        for coin in other.iter() {
            let amount = merged.entry(coin.denom.clone()).or_default();
            *amount = amount.checked_add(coin.amount)?;
        }

        Ok(Self::from_map(merged))
    }

    /// Denom-wise difference. Fails if any denom of `other` exceeds what this
    /// balance holds; subtracting a zero amount (in particular of an absent
    /// denom) is a no-op.
    pub fn sub(&self, other: &Coins) -> Result<Coins, CoinError> {
        let mut merged: BTreeMap<String, Uint128> = self
            .0
            .iter()
            .map(|coin| (coin.denom.clone(), coin.amount))
            .collect();

        for coin in other.iter() {
            if coin.amount.is_zero() {
                continue;
            }
            let amount = merged.entry(coin.denom.clone()).or_default();
            *amount = amount
                .checked_sub(coin.amount)
                .map_err(|_| CoinError::NegativeResult {
                    denom: coin.denom.clone(),
                })?;
        }

        Ok(Self::from_map(merged))
    }

    fn from_map(merged: BTreeMap<String, Uint128>) -> Coins {
        // BTreeMap iteration is sorted by denom; zero entries are stripped
        Coins(
            merged
                .into_iter()
                .filter(|(_, amount)| !amount.is_zero())
                .map(|(denom, amount)| Coin { denom, amount })
                .collect(),
        )
    }
}

impl TryFrom<Vec<Coin>> for Coins {
    type Error = CoinError;

    fn try_from(coins: Vec<Coin>) -> Result<Self, Self::Error> {
        Coins::new(coins)
    }
}

impl From<Coin> for Coins {
    fn from(coin: Coin) -> Self {
        if coin.amount.is_zero() {
            Coins::default()
        } else {
            Coins(vec![coin])
        }
    }
}

impl From<Coins> for Vec<Coin> {
    fn from(coins: Coins) -> Self {
        coins.0
    }
}

impl<'a> IntoIterator for &'a Coins {
    type Item = &'a Coin;
    type IntoIter = std::slice::Iter<'a, Coin>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Coins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, coin) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}{}", coin.amount, coin.denom)?;
        }
        Ok(())
    }
}
