pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{AssetKind, LocalStorage};
#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use crate::core::{
    engine::{ExportEngine, ExportOutcome},
    pipeline::{ExportPreview, SitePipeline},
};
pub use domain::edit::Edit;
pub use domain::model::PortfolioData;
pub use utils::error::{ExportError, Result};
