use crate::core::theme::Theme;
use crate::domain::model::{ExportBundle, PortfolioData};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn data_path(&self) -> &str;
    /// File inlined as the profile image, replacing any in the data. Read
    /// through the same [`Storage`] as [`data_path`](Self::data_path).
    fn profile_image_path(&self) -> Option<&str>;
    fn resume_path(&self) -> Option<&str>;
    fn output_path(&self) -> &str;
    fn theme(&self) -> Theme;
    /// Base that relative image references are resolved against.
    fn base_url(&self) -> &str;
    fn lang(&self) -> &str;
    fn font_stylesheet(&self) -> Option<&str>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<PortfolioData>;
    async fn transform(&self, data: PortfolioData) -> Result<ExportBundle>;
    async fn load(&self, bundle: ExportBundle) -> Result<String>;
}
