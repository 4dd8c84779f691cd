use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Name used when registration leaves the name blank.
pub const DEFAULT_NAME: &str = "Player";

/// Storage key of the persisted player record.
pub const PLAYER_KEY: &str = "nike_player";

/// The single registered player: a display name and a dracma balance.
///
/// Balance arithmetic floors at zero and saturates at `u64::MAX`, so no
/// mutation can leave the balance negative. Persistence and presenter
/// notification live one level up, in [`crate::session::Session`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    balance: u64,
}

impl Player {
    pub fn new(name: &str, balance: u64) -> Self {
        Self {
            name: normalize_name(name),
            balance,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> u64 {
        self.balance
    }

    pub fn credit(&mut self, amount: u64) {
        self.balance = self.balance.saturating_add(amount);
    }

    pub fn debit(&mut self, amount: u64) {
        self.balance = self.balance.saturating_sub(amount);
    }

    pub fn set_balance(&mut self, amount: u64) {
        self.balance = amount;
    }

    /// True iff `0 < amount <= balance`.
    pub fn can_afford(&self, amount: i64) -> bool {
        amount > 0 && (amount as u64) <= self.balance
    }

    pub fn to_record(&self) -> PlayerRecord {
        PlayerRecord {
            name: self.name.clone(),
            balance: self.balance,
        }
    }

    /// Rebuilds a player from a raw stored value.
    ///
    /// Returns `None` unless the value is a JSON object. Inside the object the
    /// fields are coerced rather than rejected: a missing or blank name takes
    /// the default and an unusable balance reads as 0.
    pub fn from_stored(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let name = obj.get("name").and_then(Value::as_str).unwrap_or("");
        let balance = obj
            .get("balance")
            .or_else(|| obj.get("dracmas"))
            .map(coerce_value)
            .unwrap_or(0);
        Some(Self::new(name, balance))
    }
}

/// Serialized form of a player, as written to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    #[serde(alias = "dracmas")]
    pub balance: u64,
}

pub fn normalize_name(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        DEFAULT_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Parses the leading integer of `input` and clamps it to `>= 0`.
///
/// `"250"` gives 250, `"12.9"` gives 12, `"-5"` gives 0 and anything without
/// leading digits gives 0.
pub fn coerce_amount(input: &str) -> u64 {
    leading_int(input).map(|v| v.max(0) as u64).unwrap_or(0)
}

/// Leading-integer parse: optional sign, then digits, rest ignored.
pub fn leading_int(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude: i64 = digits[..end].parse().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

fn coerce_value(value: &Value) -> u64 {
    match value {
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                u
            } else if let Some(f) = n.as_f64() {
                if f.is_finite() && f > 0.0 {
                    f.trunc() as u64
                } else {
                    0
                }
            } else {
                0
            }
        }
        Value::String(s) => coerce_amount(s),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn blank_name_falls_back_to_default() {
        assert_eq!(Player::new("   ", 0).name(), DEFAULT_NAME);
        assert_eq!(Player::new("  Ana ", 0).name(), "Ana");
    }

    #[test]
    fn debit_clamps_at_zero() {
        let mut p = Player::new("Ana", 30);
        p.debit(50);
        assert_eq!(p.balance(), 0);
    }

    #[test]
    fn credit_saturates() {
        let mut p = Player::new("Ana", u64::MAX - 1);
        p.credit(10);
        assert_eq!(p.balance(), u64::MAX);
    }

    #[test]
    fn leading_int_parses_like_a_lenient_form_field() {
        assert_eq!(leading_int("42"), Some(42));
        assert_eq!(leading_int(" 42abc"), Some(42));
        assert_eq!(leading_int("-7"), Some(-7));
        assert_eq!(leading_int("12.9"), Some(12));
        assert_eq!(leading_int("abc"), None);
        assert_eq!(leading_int(""), None);
        assert_eq!(leading_int("-"), None);
    }

    #[test]
    fn coerce_amount_never_goes_negative() {
        assert_eq!(coerce_amount("-100"), 0);
        assert_eq!(coerce_amount("oops"), 0);
        assert_eq!(coerce_amount("1500"), 1500);
    }

    #[test]
    fn from_stored_accepts_legacy_field_and_coerces() {
        let p = Player::from_stored(&json!({"name": "Ana", "dracmas": "77"})).unwrap();
        assert_eq!(p.balance(), 77);

        let p = Player::from_stored(&json!({"name": "Ana", "balance": -3})).unwrap();
        assert_eq!(p.balance(), 0);

        let p = Player::from_stored(&json!({"balance": 12.8})).unwrap();
        assert_eq!(p.name(), DEFAULT_NAME);
        assert_eq!(p.balance(), 12);
    }

    #[test]
    fn from_stored_rejects_non_objects() {
        assert!(Player::from_stored(&json!([1, 2])).is_none());
        assert!(Player::from_stored(&json!("Ana")).is_none());
        assert!(Player::from_stored(&json!(null)).is_none());
    }
}
