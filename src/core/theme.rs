//! Theme resolution: a theme identifier becomes a fixed palette of roles.
//!
//! Renderer and compiler code only ever names roles; the concrete CSS values
//! live here and reach the document as custom properties.

use crate::core::classifier::Category;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Synthwave,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::Synthwave];

    /// Unknown identifiers fall back to [`Theme::Light`].
    pub fn from_id(id: &str) -> Theme {
        match id.trim().to_ascii_lowercase().as_str() {
            "light" => Theme::Light,
            "dark" => Theme::Dark,
            "synthwave" => Theme::Synthwave,
            other => {
                tracing::warn!("Unknown theme '{}', using light", other);
                Theme::Light
            }
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Synthwave => "synthwave",
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Theme::Light => LIGHT,
            Theme::Dark => DARK,
            Theme::Synthwave => SYNTHWAVE,
        }
    }
}

impl<'de> Deserialize<'de> for Theme {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let id = String::deserialize(deserializer)?;
        Ok(Theme::from_id(&id))
    }
}

pub fn resolve(theme_id: &str) -> Palette {
    Theme::from_id(theme_id).palette()
}

/// Semantic style roles for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub theme: Theme,
    pub background: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub border: &'static str,
    pub card_bg: &'static str,
    pub accent: &'static str,
    /// Positive badges: "Present", achievements.
    pub highlight: &'static str,
    pub highlight_bg: &'static str,
    pub placeholder_opacity: &'static str,
}

const LIGHT: Palette = Palette {
    theme: Theme::Light,
    background: "#ffffff",
    text: "#111827",
    text_secondary: "#4b5563",
    border: "#e5e7eb",
    card_bg: "#f9fafb",
    accent: "#2563eb",
    highlight: "#15803d",
    highlight_bg: "#f0fdf4",
    placeholder_opacity: "0.3",
};

const DARK: Palette = Palette {
    theme: Theme::Dark,
    background: "#111827",
    text: "#ffffff",
    text_secondary: "#d1d5db",
    border: "#374151",
    card_bg: "#1f2937",
    accent: "#60a5fa",
    highlight: "#4ade80",
    highlight_bg: "rgba(34, 197, 94, 0.1)",
    placeholder_opacity: "0.4",
};

const SYNTHWAVE: Palette = Palette {
    theme: Theme::Synthwave,
    background: "linear-gradient(to bottom right, #581c87, #1e3a8a, #831843)",
    text: "#fce7f3",
    text_secondary: "#e9d5ff",
    border: "#ec4899",
    card_bg: "rgba(0, 0, 0, 0.4)",
    accent: "#22d3ee",
    highlight: "#67e8f9",
    highlight_bg: "rgba(6, 182, 212, 0.1)",
    placeholder_opacity: "0.6",
};

/// Border and tint used for a skill badge of one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryAccent {
    pub color: &'static str,
    pub tint: &'static str,
}

impl Palette {
    /// Ordered `(custom property, value)` pairs for the document's `:root`.
    pub fn css_roles(&self) -> [(&'static str, &'static str); 9] {
        [
            ("background", self.background),
            ("text", self.text),
            ("text-secondary", self.text_secondary),
            ("border", self.border),
            ("card-bg", self.card_bg),
            ("accent", self.accent),
            ("highlight", self.highlight),
            ("highlight-bg", self.highlight_bg),
            ("placeholder-opacity", self.placeholder_opacity),
        ]
    }

    pub fn category_accent(&self, category: Category) -> CategoryAccent {
        let (color, light, dark, synthwave) = match category {
            Category::Frontend => ("#6366f1", "#eef2ff", "rgba(99, 102, 241, 0.05)", "rgba(99, 102, 241, 0.1)"),
            Category::Backend => ("#10b981", "#ecfdf5", "rgba(16, 185, 129, 0.05)", "rgba(16, 185, 129, 0.1)"),
            Category::Tools => ("#f59e0b", "#fffbeb", "rgba(245, 158, 11, 0.05)", "rgba(245, 158, 11, 0.1)"),
            Category::Testing => ("#d946ef", "#fdf4ff", "rgba(217, 70, 239, 0.05)", "rgba(217, 70, 239, 0.1)"),
            Category::Design => ("#0ea5e9", "#f0f9ff", "rgba(14, 165, 233, 0.05)", "rgba(14, 165, 233, 0.1)"),
        };
        let tint = match self.theme {
            Theme::Light => light,
            Theme::Dark => dark,
            Theme::Synthwave => synthwave,
        };
        CategoryAccent { color, tint }
    }
}
