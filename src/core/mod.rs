pub mod classifier;
pub mod compile;
pub mod derived;
pub mod engine;
pub mod glyphs;
pub mod icons;
pub mod package;
pub mod pipeline;
pub mod render;
pub mod theme;

pub use crate::domain::model::{Archive, ExportBundle, PortfolioData};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
