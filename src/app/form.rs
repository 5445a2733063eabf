use crate::domain::date::BirthDate;
use crate::domain::model::{split_full_name, PersonInput};
use crate::utils::error::{NumerologyError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};

/// Raw form fields as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonForm {
    pub first_name: String,
    #[serde(default)]
    pub middle_name: Option<String>,
    pub last_name: String,
    pub birth_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl PersonForm {
    pub fn new(
        first_name: impl Into<String>,
        middle_name: Option<String>,
        last_name: impl Into<String>,
        birth_date: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            middle_name,
            last_name: last_name.into(),
            birth_date: birth_date.into(),
        }
    }

    pub fn from_full_name(full_name: &str, birth_date: impl Into<String>) -> Self {
        let (first_name, middle_name, last_name) = split_full_name(full_name);
        Self::new(first_name, middle_name, last_name, birth_date)
    }

    /// 收集所有欄位錯誤，讓表單一次顯示
    pub fn field_errors(&self) -> Vec<FieldError> {
        let checks = [
            ("first_name", self.first_name.as_str(), "First name is required"),
            ("last_name", self.last_name.as_str(), "Last name is required"),
            ("birth_date", self.birth_date.as_str(), "Birth date is required"),
        ];

        let mut errors: Vec<FieldError> = checks
            .iter()
            .filter_map(|&(field, value, message)| {
                validate_non_empty_string(field, value, message)
                    .err()
                    .map(|_| FieldError {
                        field,
                        message: message.to_string(),
                    })
            })
            .collect();

        if !self.birth_date.trim().is_empty() {
            if let Err(e) = BirthDate::parse(&self.birth_date) {
                errors.push(FieldError {
                    field: "birth_date",
                    message: e.user_friendly_message(),
                });
            }
        }

        errors
    }

    /// Trims every field; an empty middle name becomes `None`.
    /// 送出表單：有欄位錯誤時全部回傳，呼叫端自行顯示
    pub fn submit(self) -> std::result::Result<PersonInput, Vec<FieldError>> {
        let errors = self.field_errors();
        if !errors.is_empty() {
            return Err(errors);
        }
        self.into_input().map_err(|e| {
            vec![FieldError {
                field: "form",
                message: e.user_friendly_message(),
            }]
        })
    }

    pub fn into_input(self) -> Result<PersonInput> {
        self.validate()?;

        let birth_date = BirthDate::parse(&self.birth_date)?;
        let middle_name = self
            .middle_name
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty());

        Ok(PersonInput {
            first_name: self.first_name.trim().to_string(),
            middle_name,
            last_name: self.last_name.trim().to_string(),
            birth_date,
        })
    }
}

impl Validate for PersonForm {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("first_name", &self.first_name, "First name is required")?;
        validate_non_empty_string("last_name", &self.last_name, "Last name is required")?;
        validate_non_empty_string("birth_date", &self.birth_date, "Birth date is required")?;
        Ok(())
    }
}

/// Summary error for a rejected form; the field messages are not repeated.
pub fn rejected_form_error(errors: &[FieldError]) -> NumerologyError {
    let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
    NumerologyError::validation(
        &fields.join(", "),
        &format!("{} field(s) need attention", errors.len()),
    )
}

impl TryFrom<PersonForm> for PersonInput {
    type Error = NumerologyError;

    fn try_from(form: PersonForm) -> Result<Self> {
        form.into_input()
    }
}
