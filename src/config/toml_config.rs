use super::{DEFAULT_DATA_PATH, DEFAULT_OUTPUT_PATH};
use crate::core::compile::{DEFAULT_BASE_URL, DEFAULT_FONT_STYLESHEET};
use crate::core::theme::Theme;
use crate::core::ConfigProvider;
use crate::utils::error::{ExportError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub input: InputConfig,
    pub site: SiteConfig,
    pub output: OutputConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub data: String,
    pub profile_image: Option<String>,
    pub resume: Option<String>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            data: DEFAULT_DATA_PATH.to_string(),
            profile_image: None,
            resume: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub theme: Theme,
    pub base_url: String,
    pub lang: String,
    /// Empty string disables the external font link.
    pub font_stylesheet: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            base_url: DEFAULT_BASE_URL.to_string(),
            lang: "en".to_string(),
            font_stylesheet: DEFAULT_FONT_STYLESHEET.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub output_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub json: bool,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ExportError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ExportError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables stay
    /// as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ExportError::ProcessingError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Command-line values win over file values.
    #[cfg(feature = "cli")]
    pub fn apply_cli(&mut self, cli: &super::CliConfig) {
        if let Some(data) = &cli.data {
            self.input.data = data.clone();
        }
        if let Some(path) = &cli.profile_image {
            self.input.profile_image = Some(path.clone());
        }
        if let Some(path) = &cli.resume {
            self.input.resume = Some(path.clone());
        }
        if let Some(theme) = &cli.theme {
            self.site.theme = Theme::from_id(theme);
        }
        if let Some(base_url) = &cli.base_url {
            self.site.base_url = base_url.clone();
        }
        if let Some(output_path) = &cli.output_path {
            self.output.output_path = output_path.clone();
        }
    }

    pub fn json_logging(&self) -> bool {
        self.logging.as_ref().map(|l| l.json).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn data_path(&self) -> &str {
        &self.input.data
    }

    fn profile_image_path(&self) -> Option<&str> {
        self.input.profile_image.as_deref()
    }

    fn resume_path(&self) -> Option<&str> {
        self.input.resume.as_deref()
    }

    fn output_path(&self) -> &str {
        &self.output.output_path
    }

    fn theme(&self) -> Theme {
        self.site.theme
    }

    fn base_url(&self) -> &str {
        &self.site.base_url
    }

    fn lang(&self) -> &str {
        &self.site.lang
    }

    fn font_stylesheet(&self) -> Option<&str> {
        Some(self.site.font_stylesheet.trim()).filter(|s| !s.is_empty())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input.data", &self.input.data)?;
        validate_path("output.output_path", &self.output.output_path)?;
        validate_url("site.base_url", &self.site.base_url)?;
        validate_non_empty_string("site.lang", &self.site.lang)?;
        if let Some(stylesheet) = self.font_stylesheet() {
            validate_url("site.font_stylesheet", stylesheet)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[input]
data = "data/alex.json"
resume = "docs/cv.pdf"

[site]
theme = "dark"
base_url = "https://alex.github.io/"
lang = "en-GB"
font_stylesheet = ""

[output]
output_path = "./dist"

[logging]
json = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.data_path(), "data/alex.json");
        assert_eq!(config.resume_path(), Some("docs/cv.pdf"));
        assert_eq!(config.profile_image_path(), None);
        assert_eq!(config.theme(), Theme::Dark);
        assert_eq!(config.lang(), "en-GB");
        assert_eq!(config.font_stylesheet(), None);
        assert_eq!(config.output_path(), "./dist");
        assert!(config.json_logging());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.data_path(), DEFAULT_DATA_PATH);
        assert_eq!(config.theme(), Theme::Light);
        assert_eq!(config.font_stylesheet(), Some(DEFAULT_FONT_STYLESHEET));
        assert!(!config.json_logging());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let config = TomlConfig::from_toml_str("[site]\ntheme = \"vaporwave\"\n").unwrap();
        assert_eq!(config.theme(), Theme::Light);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PORTFOLIO_TEST_BASE_URL", "https://test.example.com/");

        let toml_content = r#"
[site]
base_url = "${PORTFOLIO_TEST_BASE_URL}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.base_url(), "https://test.example.com/");

        std::env::remove_var("PORTFOLIO_TEST_BASE_URL");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[site]
base_url = "invalid-url"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[site\ntheme = 1").unwrap_err();
        assert!(matches!(err, ExportError::ConfigValidationError { .. }));
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_overrides_file() {
        use clap::Parser;

        let mut config = TomlConfig::from_toml_str("[site]\ntheme = \"dark\"\n").unwrap();
        let cli = super::super::CliConfig::parse_from([
            "portfolio-export",
            "--theme",
            "synthwave",
            "--output-path",
            "./out",
        ]);
        config.apply_cli(&cli);
        assert_eq!(config.theme(), Theme::Synthwave);
        assert_eq!(config.output_path(), "./out");
        assert_eq!(config.data_path(), DEFAULT_DATA_PATH);
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[output]\noutput_path = \"./from-file\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.output_path(), "./from-file");
    }
}
