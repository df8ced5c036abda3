use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::Timestamp;

/// A point in time with second precision, used for vesting schedule bounds.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, JsonSchema, Debug)]
pub struct Expiration(Timestamp);

impl Expiration {
    pub fn at_timestamp(timestamp: Timestamp) -> Self {
        Self(timestamp)
    }

    pub fn from_seconds(seconds: u64) -> Self {
        Self(Timestamp::from_seconds(seconds))
    }

    pub fn is_expired_time(&self, timestamp: Timestamp) -> bool {
        timestamp >= self.0
    }

    pub fn time(&self) -> Timestamp {
        self.0
    }

    pub fn seconds(&self) -> u64 {
        self.0.seconds()
    }
}

impl From<Expiration> for Timestamp {
    fn from(expiration: Expiration) -> Timestamp {
        expiration.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expired_exactly_at_its_instant() {
        let expiration = Expiration::from_seconds(10);
        assert!(!expiration.is_expired_time(Timestamp::from_seconds(9)));
        assert!(expiration.is_expired_time(Timestamp::from_seconds(10)));
        assert!(expiration.is_expired_time(Timestamp::from_seconds(11)));
    }

    #[test]
    fn ordered_by_instant() {
        assert!(Expiration::from_seconds(1) < Expiration::from_seconds(2));
        assert_eq!(Expiration::from_seconds(3).seconds(), 3);
    }
}
