use crate::core::archetypes::{archetype, Archetype};
use crate::domain::model::{KarmicDebt, NameBreakdown, NumerologyProfile, ScoreKind, YearForecast};
use crate::utils::error::{NumerologyError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = NumerologyError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(NumerologyError::InvalidConfigValueError {
                field: "output.format".to_string(),
                value: other.to_string(),
                reason: "Unsupported format. Valid formats: text, json, csv".to_string(),
            }),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ScoreRow {
    pub kind: ScoreKind,
    pub label: &'static str,
    pub total: u32,
    pub first_pass: Option<u32>,
    pub value: u32,
    pub meaning: &'static str,
    pub archetype: Option<&'static Archetype>,
}

/// Serializable view of a profile, shared by every output format.
#[derive(Debug, Serialize)]
pub struct ProfileReport<'a> {
    pub name: String,
    pub birth_date: String,
    pub reference_year: u32,
    pub scores: Vec<ScoreRow>,
    pub karmic_debts: &'a [KarmicDebt],
    pub forecast: YearForecast,
    pub breakdowns: &'a [NameBreakdown],
}

impl<'a> ProfileReport<'a> {
    pub fn new(profile: &'a NumerologyProfile) -> Self {
        let scores = profile
            .scores()
            .iter()
            .map(|score| ScoreRow {
                kind: score.kind,
                label: score.kind.label(),
                total: score.total,
                first_pass: score.first_pass,
                value: score.value,
                meaning: score.kind.meaning(),
                archetype: archetype(score.value),
            })
            .collect();

        Self {
            name: profile.input.full_name(),
            birth_date: profile.input.birth_date.long_format(),
            reference_year: profile.reference_year,
            scores,
            karmic_debts: &profile.karmic_debts,
            forecast: profile.forecast,
            breakdowns: &profile.breakdowns,
        }
    }
}

pub fn render(profile: &NumerologyProfile, format: OutputFormat) -> Result<String> {
    let report = ProfileReport::new(profile);
    match format {
        OutputFormat::Text => Ok(render_text(&report, profile)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&report)?),
        OutputFormat::Csv => render_csv(&report),
    }
}

fn render_csv(report: &ProfileReport<'_>) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["number_type", "total", "first_pass", "value", "meaning"])?;
    for row in &report.scores {
        writer.write_record([
            row.label.to_string(),
            row.total.to_string(),
            row.first_pass.map(|v| v.to_string()).unwrap_or_default(),
            row.value.to_string(),
            row.meaning.to_string(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| NumerologyError::IoError(e.into_error()))?;
    csv_text(bytes)
}

fn csv_text(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| {
        NumerologyError::IoError(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("CSV output is not UTF-8: {}", e),
        ))
    })
}

// 文字格式仿照計算表格：姓名字母列、數值列、出生日期、結果表
fn render_text(report: &ProfileReport<'_>, profile: &NumerologyProfile) -> String {
    let mut out = String::new();
    let date = &profile.input.birth_date;

    let _ = writeln!(out, "Numerology Results for {}", report.name);
    let _ = writeln!(out, "Birth Date: {}", report.birth_date);
    let _ = writeln!(out);

    let letters: Vec<String> = report
        .breakdowns
        .iter()
        .map(|b| b.letters.iter().map(|l| format!("{:>2}", l.letter)).collect())
        .collect();
    let values: Vec<String> = report
        .breakdowns
        .iter()
        .map(|b| b.letters.iter().map(|l| format!("{:>2}", l.value)).collect())
        .collect();
    let _ = writeln!(out, "Name  |{}", letters.join(" |"));
    let _ = writeln!(out, "Value |{}", values.join(" |"));
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "Month {}  Day {}  Year {}  ({})",
        date.month(),
        date.day(),
        date.year(),
        date.grid_format()
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "{:<14} {:>5}  {}", "Number Type", "Value", "Meaning");
    for row in &report.scores {
        let symbol = row.archetype.map(|a| a.symbol).unwrap_or(" ");
        let _ = writeln!(
            out,
            "{:<14} {:>5}  {} {}",
            row.label, row.value, symbol, row.meaning
        );
    }
    let _ = writeln!(out);

    if report.karmic_debts.is_empty() {
        let _ = writeln!(
            out,
            "Karmic Debts: none detected in your primary calculations."
        );
    } else {
        let found: Vec<String> = report
            .karmic_debts
            .iter()
            .map(|d| format!("{} ({})", d.number, d.source))
            .collect();
        let _ = writeln!(out, "Karmic Debts: {}", found.join(", "));
    }

    let _ = writeln!(
        out,
        "Personal Years ({}): past {}  current {}  next {}",
        report.reference_year,
        report.forecast.past_year,
        report.forecast.current_year,
        report.forecast.next_year
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::NumerologyEngine;
    use crate::domain::date::BirthDate;
    use crate::domain::model::PersonInput;
    use crate::utils::error::ErrorCategory;

    fn profile() -> NumerologyProfile {
        let input = PersonInput::from_full_name(
            "Laura Julia Costas Perez",
            BirthDate::from_ymd(1991, 2, 9).unwrap(),
        )
        .unwrap();
        NumerologyEngine::default().calculate(&input, 2026).unwrap()
    }

    #[test]
    fn test_text_report_contains_grid_and_scores() {
        let text = render(&profile(), OutputFormat::Text).unwrap();
        assert!(text.starts_with("Numerology Results for Laura Julia Costas Perez"));
        assert!(text.contains("Birth Date: February 9, 1991"));
        assert!(text.contains("Life Path"));
        assert!(text.contains("Karmic Debts: none detected"));
    }

    #[test]
    fn test_json_report_lists_every_score() {
        let json = render(&profile(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let scores = value["scores"].as_array().unwrap();
        assert_eq!(scores.len(), 5);
        assert_eq!(scores[0]["kind"], "life_path");
        assert_eq!(scores[0]["value"], 4);
        assert_eq!(scores[0]["archetype"]["name"], "The Builder");
    }

    #[test]
    fn test_csv_report_has_header_and_rows() {
        let csv = render(&profile(), OutputFormat::Csv).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "number_type,total,first_pass,value,meaning");
        assert_eq!(lines.len(), 6);
        assert!(lines[2].starts_with("Expression,82,10,1,"));
    }

    #[test]
    fn test_non_utf8_csv_is_output_error() {
        let err = csv_text(vec![b'a', 0xff]).unwrap_err();
        match &err {
            NumerologyError::IoError(io) => assert_eq!(io.kind(), std::io::ErrorKind::InvalidData),
            other => panic!("expected IoError, got {:?}", other),
        }
        assert_eq!(err.category(), ErrorCategory::Output);
        assert_eq!(csv_text(b"a,b".to_vec()).unwrap(), "a,b");
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!("csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert!("xml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Json.extension(), "json");
    }
}
