//! Field values and raw-input coercion.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The value stored for a field.
///
/// Raw widget input that holds no digits becomes [`FieldValue::NotANumber`].
/// The sentinel is kept as-is in the record and rendered as `NaN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<i64>", into = "Option<i64>")]
pub enum FieldValue {
    /// An integer value. Not range-checked.
    Int(i64),
    /// Input that did not parse as a number.
    NotANumber,
}

impl FieldValue {
    /// Coerce raw widget input with decimal `parseInt` rules.
    ///
    /// Leading whitespace is skipped, one optional sign is accepted, then the
    /// longest run of ASCII digits is read. Trailing text is ignored.
    pub fn coerce(raw: &str) -> Self {
        let s = raw.trim_start();
        let (negative, rest) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits_len == 0 {
            return FieldValue::NotANumber;
        }

        match rest[..digits_len].parse::<i64>() {
            Ok(n) if negative => FieldValue::Int(-n),
            Ok(n) => FieldValue::Int(n),
            Err(_) => FieldValue::NotANumber,
        }
    }

    /// The integer, if this is not the sentinel.
    pub fn as_int(self) -> Option<i64> {
        match self {
            FieldValue::Int(n) => Some(n),
            FieldValue::NotANumber => None,
        }
    }

    /// Returns true for the not-a-number sentinel.
    pub fn is_nan(self) -> bool {
        matches!(self, FieldValue::NotANumber)
    }

    /// Collapse to an on/off flag: non-zero integers are 1, zero and the
    /// sentinel are 0.
    pub fn to_toggle(self) -> Self {
        match self {
            FieldValue::Int(0) | FieldValue::NotANumber => FieldValue::Int(0),
            FieldValue::Int(_) => FieldValue::Int(1),
        }
    }

    /// The single seed character for this value, saturated into `0..=9`.
    pub fn seed_digit(self) -> char {
        let n = self.as_int().unwrap_or(0).clamp(0, 9);
        // n is in 0..=9 after the clamp
        char::from(b'0' + n as u8)
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Int(0)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Int(n)
    }
}

impl From<Option<i64>> for FieldValue {
    fn from(v: Option<i64>) -> Self {
        v.map_or(FieldValue::NotANumber, FieldValue::Int)
    }
}

impl From<FieldValue> for Option<i64> {
    fn from(v: FieldValue) -> Self {
        v.as_int()
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Int(n) => write!(f, "{n}"),
            FieldValue::NotANumber => f.write_str("NaN"),
        }
    }
}
