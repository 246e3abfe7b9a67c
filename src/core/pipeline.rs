use crate::adapters::upload::AssetKind;
use crate::core::compile::{compile_with, CompileOptions, PageMeta};
use crate::core::package::{self, archive_filename, resume_filename, DOCUMENT_ENTRY, NOTE_ENTRY};
use crate::core::render::{render_at, SectionId};
use crate::core::{ConfigProvider, Pipeline, Storage};
use crate::domain::edit::Edit;
use crate::domain::model::{Asset, ExportBundle, PortfolioData};
use crate::utils::error::Result;
use chrono::{Datelike, Local, NaiveDate};
use std::path::Path;

/// Loads portfolio data, compiles the static site and writes the archive.
pub struct SitePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    as_of: Option<NaiveDate>,
}

/// What an export would produce, without producing it.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportPreview {
    pub sections: Vec<(SectionId, usize)>,
    pub archive_name: String,
    pub entries: Vec<String>,
}

impl<S: Storage, C: ConfigProvider> SitePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            as_of: None,
        }
    }

    /// Pins the date used for elapsed durations and the footer year.
    pub fn with_date(mut self, as_of: NaiveDate) -> Self {
        self.as_of = Some(as_of);
        self
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    fn today(&self) -> NaiveDate {
        self.as_of.unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn preview(&self, data: &PortfolioData) -> ExportPreview {
        let tree = render_at(data, &self.config.theme().palette(), self.today());
        let mut entries = vec![DOCUMENT_ENTRY.to_string()];
        if let Some(resume) = &data.resume_file {
            entries.push(resume_filename(resume));
        }
        entries.push(NOTE_ENTRY.to_string());

        ExportPreview {
            sections: tree
                .sections
                .iter()
                .map(|s| (s.id(), s.item_count()))
                .collect(),
            archive_name: archive_filename(PageMeta::from_data(data).name.as_deref()),
            entries,
        }
    }

    fn compile_options(&self) -> CompileOptions {
        CompileOptions {
            base_url: self.config.base_url().to_string(),
            lang: self.config.lang().to_string(),
            font_stylesheet: self.config.font_stylesheet().map(str::to_string),
            generated_year: self.today().year(),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for SitePipeline<S, C> {
    async fn extract(&self) -> Result<PortfolioData> {
        tracing::debug!("Reading portfolio data from: {}", self.config.data_path());
        let raw = self.storage.read_file(self.config.data_path()).await?;
        let mut data: PortfolioData = serde_json::from_slice(&raw)?;

        if let Some(path) = self.config.profile_image_path() {
            let asset = Asset::from_storage(&self.storage, path, AssetKind::ProfileImage).await?;
            data = data.apply(Edit::SetProfileImage(Some(asset)));
        }
        if let Some(path) = self.config.resume_path() {
            let asset = Asset::from_storage(&self.storage, path, AssetKind::Resume).await?;
            data = data.apply(Edit::SetResume(Some(asset)));
        }

        Ok(data)
    }

    async fn transform(&self, data: PortfolioData) -> Result<ExportBundle> {
        let theme = self.config.theme();
        tracing::debug!("Rendering with theme: {}", theme.id());

        let tree = render_at(&data, &theme.palette(), self.today());
        let meta = PageMeta::from_data(&data);
        let document = compile_with(&tree, &meta, &self.compile_options());

        package::prepare_bundle(document, data.resume_file.as_ref(), &meta)
    }

    async fn load(&self, bundle: ExportBundle) -> Result<String> {
        let archive = package::to_archive(&bundle)?;
        let output_path = Path::new(self.config.output_path())
            .join(&archive.filename)
            .to_string_lossy()
            .into_owned();

        self.storage.write_file(&output_path, &archive.bytes).await?;
        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TomlConfig;
    use crate::core::theme::Theme;
    use crate::utils::error::ExportError;
    use std::collections::HashMap;
    use std::io::{Cursor, Read};
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn with_file(path: &str, data: &[u8]) -> Self {
            let mut files = HashMap::new();
            files.insert(path.to_string(), data.to_vec());
            Self {
                files: Arc::new(Mutex::new(files)),
            }
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                ExportError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    const DATA: &str = r#"{
        "personal": {"name": "Alex Johnson", "email": "alex@example.com"},
        "about": "Builder of things.",
        "skills": ["React", "Docker"],
        "resumeFile": {
            "name": "Alex_Resume.pdf",
            "src": "data:application/pdf;base64,JVBERi0xLjQ=",
            "type": "application/pdf",
            "size": 8
        }
    }"#;

    fn config(theme: Theme) -> TomlConfig {
        let mut config = TomlConfig::default();
        config.site.theme = theme;
        config.output.output_path = "out".to_string();
        config
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[tokio::test]
    async fn test_extract_reads_data_snapshot() {
        let storage = MockStorage::with_file("portfolio.json", DATA.as_bytes());
        let pipeline = SitePipeline::new(storage, config(Theme::Light));

        let data = pipeline.extract().await.unwrap();
        assert_eq!(data.personal.name.as_deref(), Some("Alex Johnson"));
        assert_eq!(data.skills, vec!["React", "Docker"]);
        assert!(data.resume_file.is_some());
    }

    #[tokio::test]
    async fn test_malformed_data_is_serialization_error() {
        let storage = MockStorage::with_file("portfolio.json", b"{not json");
        let pipeline = SitePipeline::new(storage, config(Theme::Light));
        let err = pipeline.extract().await.unwrap_err();
        assert!(matches!(err, ExportError::SerializationError(_)));
    }

    #[tokio::test]
    async fn test_full_run_writes_archive() {
        let storage = MockStorage::with_file("portfolio.json", DATA.as_bytes());
        let pipeline = SitePipeline::new(storage.clone(), config(Theme::Dark)).with_date(date());

        let data = pipeline.extract().await.unwrap();
        let bundle = pipeline.transform(data).await.unwrap();
        assert!(bundle.document.contains("&copy; 2024 Alex Johnson"));
        assert!(bundle.document.contains("--background: #111827;"));

        let path = pipeline.load(bundle).await.unwrap();
        let expected = Path::new("out")
            .join("alex-johnson-github-pages.zip")
            .to_string_lossy()
            .into_owned();
        assert_eq!(path, expected);

        let bytes = storage.get_file(&path).await.unwrap();
        let mut zip = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(zip.len(), 3);
        let mut pdf = Vec::new();
        zip.by_name("Alex_Resume.pdf")
            .unwrap()
            .read_to_end(&mut pdf)
            .unwrap();
        assert_eq!(pdf, b"%PDF-1.4");
    }

    #[tokio::test]
    async fn test_bad_resume_writes_nothing() {
        let data = DATA.replace("JVBERi0xLjQ=", "@@@");
        let storage = MockStorage::with_file("portfolio.json", data.as_bytes());
        let pipeline = SitePipeline::new(storage.clone(), config(Theme::Light));

        let data = pipeline.extract().await.unwrap();
        let err = pipeline.transform(data).await.unwrap_err();
        assert_eq!(
            err.user_friendly_message(),
            crate::utils::error::EXPORT_FAILURE_NOTICE
        );
        assert_eq!(storage.files.lock().await.len(), 1);
    }

    #[tokio::test]
    async fn test_assets_read_through_storage() {
        let storage = MockStorage::with_file("portfolio.json", DATA.as_bytes());
        storage
            .write_file("uploads/me.png", &[1, 2, 3])
            .await
            .unwrap();
        let mut config = config(Theme::Light);
        config.input.profile_image = Some("uploads/me.png".to_string());
        let pipeline = SitePipeline::new(storage, config);

        let data = pipeline.extract().await.unwrap();
        let image = data.profile_image.unwrap();
        assert_eq!(image.name, "me.png");
        assert_eq!(image.src, "data:image/png;base64,AQID");
    }

    #[tokio::test]
    async fn test_preview_lists_sections_and_entries() {
        let storage = MockStorage::with_file("portfolio.json", DATA.as_bytes());
        let pipeline = SitePipeline::new(storage, config(Theme::Light)).with_date(date());
        let data = pipeline.extract().await.unwrap();

        let preview = pipeline.preview(&data);
        assert_eq!(
            preview.sections,
            vec![
                (SectionId::Home, 1),
                (SectionId::About, 1),
                (SectionId::Skills, 2),
                (SectionId::Contact, 1),
            ]
        );
        assert_eq!(preview.archive_name, "alex-johnson-github-pages.zip");
        assert_eq!(preview.entries, vec!["index.html", "Alex_Resume.pdf", "README.md"]);
    }
}
