use crate::domain::date::BirthDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 將完整姓名拆成名、中間名、姓：第一個字為名，超過兩個字時第二個字為中間名，其餘為姓
///
/// Missing parts come back empty.
pub fn split_full_name(full_name: &str) -> (String, Option<String>, String) {
    let words: Vec<&str> = full_name.split_whitespace().collect();
    match words.len() {
        0 => (String::new(), None, String::new()),
        1 => (words[0].to_string(), None, String::new()),
        2 => (words[0].to_string(), None, words[1].to_string()),
        _ => (
            words[0].to_string(),
            Some(words[1].to_string()),
            words[2..].join(" "),
        ),
    }
}

/// Validated personal information, built once from a submitted form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonInput {
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub birth_date: BirthDate,
}

impl PersonInput {
    /// Returns `None` when the name has fewer than two words.
    pub fn from_full_name(full_name: &str, birth_date: BirthDate) -> Option<Self> {
        let (first_name, middle_name, last_name) = split_full_name(full_name);
        if last_name.is_empty() {
            return None;
        }

        Some(Self {
            first_name,
            middle_name,
            last_name,
            birth_date,
        })
    }

    /// Name parts in calculation order, skipping an empty middle name.
    pub fn name_parts(&self) -> Vec<&str> {
        let mut parts = vec![self.first_name.as_str()];
        if let Some(middle) = self.middle_name.as_deref().filter(|m| !m.is_empty()) {
            parts.push(middle);
        }
        parts.push(self.last_name.as_str());
        parts
    }

    pub fn full_name(&self) -> String {
        self.name_parts().join(" ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterValue {
    pub letter: char,
    pub value: u32,
}

/// Per-letter values of one name part, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameBreakdown {
    pub part: String,
    pub letters: Vec<LetterValue>,
}

impl NameBreakdown {
    pub fn total(&self) -> u32 {
        self.letters.iter().map(|l| l.value).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreKind {
    LifePath,
    Expression,
    SoulUrge,
    Destiny,
    PersonalYear,
}

impl ScoreKind {
    pub const ALL: [ScoreKind; 5] = [
        ScoreKind::LifePath,
        ScoreKind::Expression,
        ScoreKind::SoulUrge,
        ScoreKind::Destiny,
        ScoreKind::PersonalYear,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ScoreKind::LifePath => "Life Path",
            ScoreKind::Expression => "Expression",
            ScoreKind::SoulUrge => "Soul Urge",
            ScoreKind::Destiny => "Destiny",
            ScoreKind::PersonalYear => "Personal Year",
        }
    }

    pub fn meaning(&self) -> &'static str {
        match self {
            ScoreKind::LifePath => "Your life's purpose and journey",
            ScoreKind::Expression => "Your natural abilities and talents",
            ScoreKind::SoulUrge => "Your inner desires and motivations",
            ScoreKind::Destiny => "Your life's direction and challenges",
            ScoreKind::PersonalYear => "Influences for current year",
        }
    }
}

impl fmt::Display for ScoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One reduced number together with the sums it was reduced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub kind: ScoreKind,
    /// Unreduced total.
    pub total: u32,
    /// Value after the first digit-sum pass, when a pass happened.
    pub first_pass: Option<u32>,
    pub value: u32,
}

impl Score {
    /// The sums a karmic debt check looks at, before the final value.
    pub fn intermediates(&self) -> impl Iterator<Item = u32> {
        std::iter::once(self.total).chain(self.first_pass)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KarmicDebt {
    pub source: ScoreKind,
    pub number: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearForecast {
    pub past_year: u32,
    pub current_year: u32,
    pub next_year: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumerologyProfile {
    pub input: PersonInput,
    pub reference_year: u32,
    pub life_path: Score,
    pub expression: Score,
    pub soul_urge: Score,
    pub destiny: Score,
    pub personal_year: Score,
    pub breakdowns: Vec<NameBreakdown>,
    pub karmic_debts: Vec<KarmicDebt>,
    pub forecast: YearForecast,
}

impl NumerologyProfile {
    pub fn scores(&self) -> [&Score; 5] {
        [
            &self.life_path,
            &self.expression,
            &self.soul_urge,
            &self.destiny,
            &self.personal_year,
        ]
    }

    pub fn score(&self, kind: ScoreKind) -> &Score {
        match kind {
            ScoreKind::LifePath => &self.life_path,
            ScoreKind::Expression => &self.expression,
            ScoreKind::SoulUrge => &self.soul_urge,
            ScoreKind::Destiny => &self.destiny,
            ScoreKind::PersonalYear => &self.personal_year,
        }
    }

    pub fn has_karmic_debt(&self) -> bool {
        !self.karmic_debts.is_empty()
    }
}
