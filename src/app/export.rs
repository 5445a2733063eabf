use crate::app::report::{render, OutputFormat};
use crate::domain::model::NumerologyProfile;
use crate::domain::ports::Storage;
use crate::utils::error::Result;

/// Saves rendered profiles through a [`Storage`] backend.
pub struct ProfileExporter<S: Storage> {
    storage: S,
    filename: String,
}

impl<S: Storage> ProfileExporter<S> {
    pub fn new(storage: S, filename: impl Into<String>) -> Self {
        Self {
            storage,
            filename: filename.into(),
        }
    }

    pub fn file_name(&self, format: OutputFormat) -> String {
        format!("{}.{}", self.filename, format.extension())
    }

    /// Returns the location reported by the storage backend.
    pub async fn save(&self, profile: &NumerologyProfile, format: OutputFormat) -> Result<String> {
        let content = render(profile, format)?;
        let file_name = self.file_name(format);

        tracing::debug!("Saving {} bytes to {}", content.len(), file_name);
        let location = self.storage.write_file(&file_name, content.as_bytes()).await?;
        tracing::info!("💾 Profile saved to {}", location);

        Ok(location)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
