//! Upload boundary: local files become inlined [`Asset`] records.
//!
//! Everything that reaches the renderer has already passed these checks.

use crate::domain::model::Asset;
use crate::domain::ports::Storage;
use crate::utils::error::{ExportError, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::path::Path;

pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;
pub const MAX_RESUME_BYTES: u64 = 10 * 1024 * 1024;

const RESUME_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    ProfileImage,
    Resume,
}

impl AssetKind {
    pub fn max_bytes(&self) -> u64 {
        match self {
            AssetKind::ProfileImage => MAX_IMAGE_BYTES,
            AssetKind::Resume => MAX_RESUME_BYTES,
        }
    }

    pub fn accepts(&self, mime_type: &str) -> bool {
        match self {
            AssetKind::ProfileImage => mime_type.starts_with("image/"),
            AssetKind::Resume => RESUME_TYPES.contains(&mime_type),
        }
    }

    fn label(&self) -> &'static str {
        match self {
            AssetKind::ProfileImage => "an image",
            AssetKind::Resume => "a PDF, DOC or DOCX file",
        }
    }
}

/// Media type from the file extension; `application/octet-stream` when unknown.
pub fn mime_from_name(name: &str) -> &'static str {
    let extension = Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "avif" => "image/avif",
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => "application/octet-stream",
    }
}

impl Asset {
    /// Validates `bytes` for `kind` and inlines them as a base64 data URI.
    pub fn from_bytes(name: &str, bytes: &[u8], kind: AssetKind) -> Result<Asset> {
        let mime_type = mime_from_name(name);
        check(name, mime_type, bytes.len() as u64, kind)?;
        Ok(Asset {
            name: name.to_string(),
            src: format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes)),
            mime_type: mime_type.to_string(),
            size: bytes.len() as u64,
        })
    }

    /// Reads `path` through `storage`, the same way the data file is read,
    /// and passes it through the upload checks.
    pub async fn from_storage<S: Storage>(storage: &S, path: &str, kind: AssetKind) -> Result<Asset> {
        let name = Path::new(path)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();

        // Type is known from the name alone; reject before reading.
        check(&name, mime_from_name(&name), 0, kind)?;

        let bytes = storage.read_file(path).await?;
        let asset = Asset::from_bytes(&name, &bytes, kind)?;
        tracing::info!("Accepted {} ({}, {} bytes)", asset.name, asset.mime_type, asset.size);
        Ok(asset)
    }
}

fn check(name: &str, mime_type: &str, size: u64, kind: AssetKind) -> Result<()> {
    if !kind.accepts(mime_type) {
        tracing::warn!("Rejected {}: type {} is not {}", name, mime_type, kind.label());
        return Err(ExportError::AssetRejectedError {
            name: name.to_string(),
            reason: format!("expected {}", kind.label()),
        });
    }
    if size > kind.max_bytes() {
        tracing::warn!("Rejected {}: {} bytes exceeds limit", name, size);
        return Err(ExportError::AssetRejectedError {
            name: name.to_string(),
            reason: format!("file is larger than {} MB", kind.max_bytes() / (1024 * 1024)),
        });
    }
    Ok(())
}
