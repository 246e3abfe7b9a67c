use super::{DEFAULT_DATA_PATH, DEFAULT_OUTPUT_PATH};
use crate::core::compile::{DEFAULT_BASE_URL, DEFAULT_FONT_STYLESHEET};
use crate::core::theme::Theme;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "portfolio-export")]
#[command(about = "Export portfolio data as a GitHub Pages ready archive")]
pub struct CliConfig {
    #[arg(long, help = "Portfolio data JSON file")]
    pub data: Option<String>,

    #[arg(long, help = "TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "Theme: light, dark or synthwave")]
    pub theme: Option<String>,

    #[arg(long)]
    pub output_path: Option<String>,

    #[arg(long, help = "Base URL for relative image references")]
    pub base_url: Option<String>,

    #[arg(long, help = "Image file to inline as the profile picture")]
    pub profile_image: Option<String>,

    #[arg(long, help = "PDF/DOC/DOCX file to include as the resume")]
    pub resume: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Print what would be exported without writing")]
    pub dry_run: bool,
}

impl ConfigProvider for CliConfig {
    fn data_path(&self) -> &str {
        self.data.as_deref().unwrap_or(DEFAULT_DATA_PATH)
    }

    fn profile_image_path(&self) -> Option<&str> {
        self.profile_image.as_deref()
    }

    fn resume_path(&self) -> Option<&str> {
        self.resume.as_deref()
    }

    fn output_path(&self) -> &str {
        self.output_path.as_deref().unwrap_or(DEFAULT_OUTPUT_PATH)
    }

    fn theme(&self) -> Theme {
        self.theme.as_deref().map(Theme::from_id).unwrap_or_default()
    }

    fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    fn lang(&self) -> &str {
        "en"
    }

    fn font_stylesheet(&self) -> Option<&str> {
        Some(DEFAULT_FONT_STYLESHEET)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("data", self.data_path())?;
        validate_path("output_path", self.output_path())?;
        validate_url("base_url", self.base_url())?;
        if let Some(theme) = &self.theme {
            validate_non_empty_string("theme", theme)?;
        }
        Ok(())
    }
}
