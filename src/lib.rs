pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::app::export::ProfileExporter;
pub use crate::app::form::PersonForm;
pub use crate::app::report::{render, OutputFormat};
pub use crate::app::session::{CalculationSession, CalculationState};
pub use crate::config::{cli::LocalStorage, toml_config::TomlConfig};
pub use crate::core::engine::NumerologyEngine;
pub use crate::core::reduction::{digital_root, Reduction};
pub use crate::domain::date::BirthDate;
pub use crate::domain::model::{NumerologyProfile, PersonInput};
pub use crate::utils::error::{NumerologyError, Result};
