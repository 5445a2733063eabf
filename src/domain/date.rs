use crate::utils::error::{NumerologyError, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Accepted input layouts, tried in order.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%B %d, %Y"];

/// A calendar birth date with a four-digit (or shorter) positive year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            NumerologyError::InvalidDate {
                input: format!("{:04}-{:02}-{:02}", year, month, day),
                reason: "no such calendar day".to_string(),
            }
        })?;
        Self::try_from(date)
    }

    /// 解析失敗時回傳 InvalidDate，不再默默改用今天的日期
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(NumerologyError::validation(
                "birth_date",
                "Birth date is required",
            ));
        }

        let date = DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
            .ok_or_else(|| NumerologyError::InvalidDate {
                input: trimmed.to_string(),
                reason: "expected YYYY-MM-DD, MM/DD/YYYY or 'Month D, YYYY'".to_string(),
            })?;

        tracing::debug!("Parsed birth date '{}' as {}", trimmed, date);
        Self::try_from(date)
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Always in `1..=9999`.
    pub fn year(&self) -> u32 {
        self.0.year() as u32
    }

    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }

    /// `M/D/YYYY`, the layout used by the calculation grid.
    pub fn grid_format(&self) -> String {
        format!("{}/{}/{}", self.month(), self.day(), self.year())
    }

    /// `January 15, 1985`
    pub fn long_format(&self) -> String {
        self.0.format("%B %-d, %Y").to_string()
    }
}

impl TryFrom<NaiveDate> for BirthDate {
    type Error = NumerologyError;

    fn try_from(date: NaiveDate) -> Result<Self> {
        if !(1..=9999).contains(&date.year()) {
            return Err(NumerologyError::InvalidDate {
                input: date.to_string(),
                reason: "year must be between 1 and 9999".to_string(),
            });
        }
        Ok(Self(date))
    }
}

impl TryFrom<String> for BirthDate {
    type Error = NumerologyError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<BirthDate> for String {
    fn from(date: BirthDate) -> Self {
        date.to_string()
    }
}

impl FromStr for BirthDate {
    type Err = NumerologyError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
