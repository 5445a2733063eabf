use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::NumerologyError;

/// Sum of the decimal digits of `n`, one pass.
pub fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// At most two digit-sum passes: values above 9 are summed once, and the
/// result is summed once more if it is still above 9.
///
/// This is not a full reduction: `199 -> 19 -> 10`. The one-pass
/// `29 -> 11` result comes from [`digit_sum`] or [`Reduction::SinglePass`];
/// `digital_root(29)` is 2.
pub fn digital_root(n: u32) -> u32 {
    Reduction::TwoPass.apply(n)
}

/// How far a total is reduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Reduction {
    /// One digit-sum pass (`29 -> 11`).
    SinglePass,
    #[default]
    TwoPass,
    /// Repeat until a single digit remains.
    Full,
}

impl Reduction {
    pub fn apply(&self, n: u32) -> u32 {
        self.trace(n).1
    }

    /// Returns `(first_pass, value)`; `first_pass` is `None` when `n <= 9`.
    pub fn trace(&self, n: u32) -> (Option<u32>, u32) {
        if n <= 9 {
            return (None, n);
        }

        let first = digit_sum(n);
        let value = match self {
            Reduction::SinglePass => first,
            Reduction::TwoPass if first > 9 => digit_sum(first),
            Reduction::TwoPass => first,
            Reduction::Full => {
                let mut value = first;
                while value > 9 {
                    value = digit_sum(value);
                }
                value
            }
        };
        (Some(first), value)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Reduction::SinglePass => "single-pass",
            Reduction::TwoPass => "two-pass",
            Reduction::Full => "full",
        }
    }
}

impl fmt::Display for Reduction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Reduction {
    type Err = NumerologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single-pass" => Ok(Reduction::SinglePass),
            "two-pass" => Ok(Reduction::TwoPass),
            "full" => Ok(Reduction::Full),
            other => Err(NumerologyError::InvalidConfigValueError {
                field: "calculation.reduction".to_string(),
                value: other.to_string(),
                reason: "Valid values: single-pass, two-pass, full".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_values_unchanged() {
        for n in 0..=9 {
            assert_eq!(digital_root(n), n);
            assert_eq!(Reduction::SinglePass.apply(n), n);
            assert_eq!(Reduction::Full.apply(n), n);
        }
    }

    #[test]
    fn test_single_pass_stops_after_one_sum() {
        assert_eq!(digit_sum(29), 11);
        assert_eq!(Reduction::SinglePass.apply(29), 11);
        assert_eq!(Reduction::SinglePass.trace(29), (Some(11), 11));
    }

    #[test]
    fn test_two_pass() {
        assert_eq!(digital_root(31), 4);
        assert_eq!(digital_root(29), 2);
        assert_eq!(digital_root(39), 3);
        assert_eq!(Reduction::TwoPass.trace(49), (Some(13), 4));
        // 兩次加總後仍可能大於 9
        assert_eq!(digital_root(199), 10);
    }

    #[test]
    fn test_full_reduction() {
        assert_eq!(Reduction::Full.apply(199), 1);
        assert_eq!(Reduction::Full.apply(9_999_999), 9);
    }

    #[test]
    fn test_parse_reduction() {
        assert_eq!("full".parse::<Reduction>().unwrap(), Reduction::Full);
        assert_eq!(Reduction::default(), Reduction::TwoPass);
        assert!("master".parse::<Reduction>().is_err());
    }
}
