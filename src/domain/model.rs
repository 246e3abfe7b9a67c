use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Root data object handed over by the editing form.
///
/// Every field is optional on the wire. A field holding the wrong JSON
/// shape reads as absent, and list elements of the wrong shape are dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PortfolioData {
    #[serde(deserialize_with = "lenient")]
    pub personal: Personal,
    #[serde(deserialize_with = "lenient")]
    pub profile_image: Option<Asset>,
    #[serde(deserialize_with = "lenient")]
    pub resume_file: Option<Asset>,
    #[serde(deserialize_with = "lenient")]
    pub about: Option<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub experience: Vec<Experience>,
    #[serde(deserialize_with = "lenient_list")]
    pub projects: Vec<Project>,
    #[serde(deserialize_with = "lenient_list")]
    pub education: Vec<Education>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Personal {
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub location: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub website: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub github: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub linkedin: Option<String>,
}

/// An uploaded file, carried as a base64 data URI.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Asset {
    #[serde(deserialize_with = "lenient")]
    pub name: String,
    #[serde(deserialize_with = "lenient")]
    pub src: String,
    #[serde(rename = "type", deserialize_with = "lenient")]
    pub mime_type: String,
    #[serde(deserialize_with = "lenient")]
    pub size: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    #[serde(deserialize_with = "lenient")]
    pub company: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub position: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub duration: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub location: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub description: Option<String>,
    pub tech_stack: TextList,
    pub achievements: TextList,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub description: Option<String>,
    pub technologies: TextList,
    #[serde(deserialize_with = "lenient")]
    pub link: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub github: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub image: Option<String>,
    pub achievements: TextList,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    #[serde(deserialize_with = "lenient")]
    pub institution: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub degree: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub field: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub duration: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub location: Option<String>,
}

/// A list of short labels stored either as a real sequence or as one
/// comma-separated string. The sequence form is what edits write back.
///
/// Any other JSON shape deserializes to an empty list instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TextList {
    Items(Vec<String>),
    Joined(String),
}

impl Default for TextList {
    fn default() -> Self {
        TextList::Items(Vec::new())
    }
}

impl<'de> Deserialize<'de> for TextList {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match value {
            serde_json::Value::String(joined) => TextList::Joined(joined),
            serde_json::Value::Array(items) => TextList::Items(
                items
                    .into_iter()
                    .filter_map(|item| match item {
                        serde_json::Value::String(s) => Some(s),
                        _ => None,
                    })
                    .collect(),
            ),
            _ => TextList::default(),
        })
    }
}

impl TextList {
    /// Trimmed, non-empty entries in stored order.
    pub fn entries(&self) -> Vec<String> {
        match self {
            TextList::Items(items) => items
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            TextList::Joined(joined) => joined
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

impl From<Vec<String>> for TextList {
    fn from(items: Vec<String>) -> Self {
        TextList::Items(items)
    }
}

impl From<&str> for TextList {
    fn from(joined: &str) -> Self {
        TextList::Joined(joined.to_string())
    }
}

/// Output of one export request: everything the archive will contain.
#[derive(Debug, Clone)]
pub struct ExportBundle {
    pub document: String,
    pub resume: Option<BinaryEntry>,
    pub note: String,
    pub archive_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryEntry {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// A finished zip archive held in memory.
#[derive(Debug, Clone)]
pub struct Archive {
    pub filename: String,
    pub entries: Vec<String>,
    pub bytes: Vec<u8>,
}

/// Treats whitespace-only text the same as a missing value.
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Reads `T`, falling back to its default when the value has another shape.
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// Reads a sequence, keeping only the elements that fit `T`.
fn lenient_list<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|item| T::deserialize(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}
