pub mod archetypes;
pub mod engine;
pub mod letters;
pub mod reduction;

pub use crate::domain::model::{NumerologyProfile, PersonInput, Score, ScoreKind};
pub use crate::utils::error::Result;
