//! Per-tier slot quotas and balances for bonus-skill accounting.

use serde::{Deserialize, Serialize};

use super::tier::Tier;

/// How many bonus skills of each tier a class grants.
///
/// Fields default to zero so partial configuration like `{ "expert": 1 }`
/// parses as expected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierQuota {
    #[serde(default)]
    pub trained: u8,
    #[serde(default)]
    pub expert: u8,
    #[serde(default)]
    pub master: u8,
}

impl TierQuota {
    pub fn new(trained: u8, expert: u8, master: u8) -> Self {
        Self {
            trained,
            expert,
            master,
        }
    }

    /// Returns the quota for a single tier.
    pub fn get(&self, tier: Tier) -> u8 {
        match tier {
            Tier::Trained => self.trained,
            Tier::Expert => self.expert,
            Tier::Master => self.master,
        }
    }

    /// True if no tier grants any slot.
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// Signed per-tier remainder after subtracting selected bonus skills
/// from a quota.
///
/// Positive means slots remain unfilled; negative means over-selection.
/// Values are never clamped, so the validator can distinguish the two.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotBalance {
    pub trained: i32,
    pub expert: i32,
    pub master: i32,
}

impl SlotBalance {
    pub fn new(trained: i32, expert: i32, master: i32) -> Self {
        Self {
            trained,
            expert,
            master,
        }
    }

    /// Returns the remainder for a single tier.
    pub fn get(&self, tier: Tier) -> i32 {
        match tier {
            Tier::Trained => self.trained,
            Tier::Expert => self.expert,
            Tier::Master => self.master,
        }
    }

    /// Sets the remainder for a single tier.
    pub fn set(&mut self, tier: Tier, value: i32) {
        match tier {
            Tier::Trained => self.trained = value,
            Tier::Expert => self.expert = value,
            Tier::Master => self.master = value,
        }
    }

    /// True if every tier is exactly filled.
    pub fn is_settled(&self) -> bool {
        *self == Self::default()
    }

    /// True if any tier has more selections than its quota allows.
    pub fn any_overfilled(&self) -> bool {
        Tier::all().iter().any(|tier| self.get(*tier) < 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quota_get_exhaustive() {
        let quota = TierQuota::new(2, 1, 0);
        assert_eq!(quota.get(Tier::Trained), 2);
        assert_eq!(quota.get(Tier::Expert), 1);
        assert_eq!(quota.get(Tier::Master), 0);
    }

    #[test]
    fn test_quota_is_zero() {
        assert!(TierQuota::default().is_zero());
        assert!(!TierQuota::new(0, 1, 0).is_zero());
    }

    #[test]
    fn test_quota_partial_json_defaults_to_zero() {
        let quota: TierQuota = serde_json::from_str(r#"{ "expert": 1 }"#).unwrap();
        assert_eq!(quota, TierQuota::new(0, 1, 0));
    }

    #[test]
    fn test_balance_settled() {
        assert!(SlotBalance::default().is_settled());
        assert!(!SlotBalance::new(1, 0, 0).is_settled());
        assert!(!SlotBalance::new(0, -1, 0).is_settled());
    }

    #[test]
    fn test_balance_overfilled() {
        assert!(!SlotBalance::new(1, 0, 0).any_overfilled());
        assert!(SlotBalance::new(0, 0, -2).any_overfilled());
    }

    #[test]
    fn test_balance_set_get() {
        let mut balance = SlotBalance::default();
        balance.set(Tier::Expert, -1);
        assert_eq!(balance.get(Tier::Expert), -1);
        assert_eq!(balance.get(Tier::Trained), 0);
    }

    #[test]
    fn test_balance_serde_roundtrip() {
        let balance = SlotBalance::new(1, 0, -1);
        let json = serde_json::to_string(&balance).unwrap();
        let parsed: SlotBalance = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, balance);
    }
}
