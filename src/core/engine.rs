use crate::core::letters::{breakdown, is_consonant, is_vowel, letter_value, upper_letters};
use crate::core::reduction::{digit_sum, Reduction};
use crate::domain::date::BirthDate;
use crate::domain::model::{
    KarmicDebt, NumerologyProfile, PersonInput, Score, ScoreKind, YearForecast,
};
use crate::utils::error::Result;
use crate::utils::validation::validate_range;

pub const MIN_REFERENCE_YEAR: u32 = 1;
pub const MAX_REFERENCE_YEAR: u32 = 9999;

pub const KARMIC_DEBT_NUMBERS: [u32; 4] = [13, 14, 16, 19];

pub fn has_karmic_debt(values: &[u32]) -> bool {
    values.iter().any(|v| KARMIC_DEBT_NUMBERS.contains(v))
}

/// 過去一年為 0 時換成 9；當年為 9 時下一年回到 1
pub fn year_forecast(personal_year: u32) -> YearForecast {
    YearForecast {
        past_year: match personal_year.saturating_sub(1) {
            0 => 9,
            past => past,
        },
        current_year: personal_year,
        next_year: if personal_year == 9 {
            1
        } else {
            personal_year + 1
        },
    }
}

/// Pure numerology arithmetic. Holds only the reduction setting.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumerologyEngine {
    reduction: Reduction,
}

impl NumerologyEngine {
    pub fn new(reduction: Reduction) -> Self {
        Self { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    fn score(&self, kind: ScoreKind, total: u32) -> Score {
        let (first_pass, value) = self.reduction.trace(total);
        Score {
            kind,
            total,
            first_pass,
            value,
        }
    }

    fn letter_sum<F>(name_parts: &[&str], keep: F) -> u32
    where
        F: Fn(char) -> bool,
    {
        name_parts
            .iter()
            .flat_map(|part| upper_letters(part))
            .filter(|c| keep(*c))
            .map(letter_value)
            .sum()
    }

    /// month + day + digit sum of the year
    pub fn compute_life_path(&self, date: &BirthDate) -> Score {
        let total = date.month() + date.day() + digit_sum(date.year());
        self.score(ScoreKind::LifePath, total)
    }

    pub fn compute_expression(&self, name_parts: &[&str]) -> Score {
        let total = Self::letter_sum(name_parts, |_| true);
        self.score(ScoreKind::Expression, total)
    }

    pub fn compute_soul_urge(&self, name_parts: &[&str]) -> Score {
        let total = Self::letter_sum(name_parts, is_vowel);
        self.score(ScoreKind::SoulUrge, total)
    }

    pub fn compute_destiny(&self, name_parts: &[&str]) -> Score {
        let total = Self::letter_sum(name_parts, is_consonant);
        self.score(ScoreKind::Destiny, total)
    }

    /// month + day + the full reference year (not digit-summed)
    ///
    /// `current_year` must be in `1..=9999`.
    pub fn compute_personal_year(&self, date: &BirthDate, current_year: u32) -> Result<Score> {
        validate_range(
            "reference_year",
            current_year,
            MIN_REFERENCE_YEAR,
            MAX_REFERENCE_YEAR,
        )?;
        let total = date.month() + date.day() + current_year;
        Ok(self.score(ScoreKind::PersonalYear, total))
    }

    /// Karmic debts among the unreduced and first-pass sums of Life Path,
    /// Expression and Destiny.
    pub fn karmic_debts(&self, scores: &[&Score]) -> Vec<KarmicDebt> {
        let mut debts = Vec::new();
        for score in scores {
            for number in score.intermediates() {
                if has_karmic_debt(&[number]) {
                    let debt = KarmicDebt {
                        source: score.kind,
                        number,
                    };
                    if !debts.contains(&debt) {
                        debts.push(debt);
                    }
                }
            }
        }
        debts
    }

    pub fn calculate(&self, input: &PersonInput, reference_year: u32) -> Result<NumerologyProfile> {
        let personal_year = self.compute_personal_year(&input.birth_date, reference_year)?;
        let parts = input.name_parts();

        let life_path = self.compute_life_path(&input.birth_date);
        let expression = self.compute_expression(&parts);
        let soul_urge = self.compute_soul_urge(&parts);
        let destiny = self.compute_destiny(&parts);

        let karmic_debts = self.karmic_debts(&[&life_path, &expression, &destiny]);
        if !karmic_debts.is_empty() {
            tracing::debug!("Karmic debt numbers found: {:?}", karmic_debts);
        }

        tracing::debug!(
            "Calculated profile for '{}': LP {} / EX {} / SU {} / DE {} / PY {}",
            input.full_name(),
            life_path.value,
            expression.value,
            soul_urge.value,
            destiny.value,
            personal_year.value
        );

        Ok(NumerologyProfile {
            input: input.clone(),
            reference_year,
            breakdowns: parts.iter().map(|part| breakdown(part)).collect(),
            karmic_debts,
            forecast: year_forecast(personal_year.value),
            life_path,
            expression,
            soul_urge,
            destiny,
            personal_year,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::NumerologyError;

    fn engine() -> NumerologyEngine {
        NumerologyEngine::default()
    }

    #[test]
    fn test_life_path_example() {
        let date = BirthDate::from_ymd(1991, 2, 9).unwrap();
        let score = engine().compute_life_path(&date);
        assert_eq!(score.total, 31);
        assert_eq!(score.value, 4);
    }

    #[test]
    fn test_expression_is_stable() {
        let parts = ["LAURA", "JULIA", "COSTAS PEREZ"];
        let first = engine().compute_expression(&parts);
        let second = engine().compute_expression(&parts);
        assert_eq!(first, second);
        assert_eq!(first.total, 82);
        assert_eq!(first.value, 1);
    }

    #[test]
    fn test_soul_urge_and_destiny_split_letters() {
        let parts = ["LAURA", "JULIA", "COSTAS PEREZ"];
        let soul_urge = engine().compute_soul_urge(&parts);
        let destiny = engine().compute_destiny(&parts);
        assert_eq!(soul_urge.total, 35);
        assert_eq!(destiny.total, 47);
        assert_eq!(soul_urge.total + destiny.total, 82);
        assert_eq!(soul_urge.value, 8);
        assert_eq!(destiny.value, 2);
    }

    #[test]
    fn test_personal_year_uses_full_reference_year() {
        let date = BirthDate::from_ymd(1985, 1, 15).unwrap();
        let score = engine().compute_personal_year(&date, 2026).unwrap();
        assert_eq!(score.total, 2042);
        assert_eq!(score.value, 8);
    }

    #[test]
    fn test_reference_year_out_of_range_is_rejected() {
        let date = BirthDate::from_ymd(1985, 12, 31).unwrap();
        for year in [0, 10_000, u32::MAX] {
            match engine().compute_personal_year(&date, year) {
                Err(NumerologyError::InvalidConfigValueError { field, .. }) => {
                    assert_eq!(field, "reference_year")
                }
                other => panic!("expected InvalidConfigValueError, got {:?}", other),
            }
        }
        assert!(engine().compute_personal_year(&date, 9999).is_ok());
        assert!(engine().compute_personal_year(&date, 1).is_ok());
    }

    #[test]
    fn test_calculate_rejects_reference_year_overflow() {
        let input = PersonInput::from_full_name(
            "Jane Doe",
            BirthDate::from_ymd(1985, 12, 31).unwrap(),
        )
        .unwrap();
        assert!(engine().calculate(&input, u32::MAX).is_err());
    }

    #[test]
    fn test_karmic_debt_numbers() {
        for n in [13, 14, 16, 19] {
            assert!(has_karmic_debt(&[n]));
        }
        assert!(!has_karmic_debt(&[12, 20]));
        assert!(!has_karmic_debt(&[]));
        assert!(has_karmic_debt(&[4, 16]));
    }

    #[test]
    fn test_year_forecast_wraps() {
        assert_eq!(
            year_forecast(1),
            YearForecast {
                past_year: 9,
                current_year: 1,
                next_year: 2
            }
        );
        assert_eq!(year_forecast(9).next_year, 1);
        assert_eq!(year_forecast(8).past_year, 7);
    }

    #[test]
    fn test_single_pass_engine() {
        let engine = NumerologyEngine::new(Reduction::SinglePass);
        let date = BirthDate::from_ymd(1985, 1, 15).unwrap();
        assert_eq!(engine.compute_life_path(&date).value, 12);
        let parts = ["LAURA", "JULIA", "COSTAS PEREZ"];
        assert_eq!(engine.compute_expression(&parts).value, 10);
    }
}
