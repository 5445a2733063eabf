use crate::core::reduction::Reduction;
use crate::app::report::OutputFormat;
use crate::utils::error::Result;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn calculation_delay(&self) -> Duration;
    /// `None` means "use the current year at the edge".
    fn reference_year(&self) -> Option<u32>;
    fn reduction(&self) -> Reduction;
    fn output_format(&self) -> OutputFormat;
    fn output_path(&self) -> Option<&str>;
    fn output_filename(&self) -> &str;
}
