//! Archive packager: compiled document + optional resume -> zip archive.

use crate::core::compile::PageMeta;
use crate::domain::model::{Archive, Asset, BinaryEntry, ExportBundle};
use crate::utils::error::{ExportError, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::io::{Cursor, Write};
use zip::write::{FileOptions, ZipWriter};

pub const DOCUMENT_ENTRY: &str = "index.html";
pub const NOTE_ENTRY: &str = "README.md";
pub const ARCHIVE_SUFFIX: &str = "-github-pages.zip";
const FALLBACK_STEM: &str = "portfolio";

/// `"Alex Johnson"` -> `"alex-johnson-github-pages.zip"`.
pub fn archive_filename(name: Option<&str>) -> String {
    let stem = name
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(|n| n.to_lowercase().split_whitespace().collect::<Vec<_>>().join("-"))
        .unwrap_or_else(|| FALLBACK_STEM.to_string());
    format!("{}{}", stem, ARCHIVE_SUFFIX)
}

/// Decodes a base64 `data:` URI into raw bytes.
pub fn decode_data_uri(name: &str, src: &str) -> Result<Vec<u8>> {
    let rest = src
        .trim()
        .strip_prefix("data:")
        .ok_or_else(|| ExportError::AssetDecodeError {
            name: name.to_string(),
            reason: "not a data URI".to_string(),
        })?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| ExportError::AssetDecodeError {
            name: name.to_string(),
            reason: "data URI has no payload".to_string(),
        })?;
    if !header.ends_with(";base64") {
        return Err(ExportError::AssetDecodeError {
            name: name.to_string(),
            reason: "data URI is not base64 encoded".to_string(),
        });
    }
    Ok(STANDARD.decode(payload.trim())?)
}

/// Archive path for the resume: its base name, kept clear of the fixed
/// entries.
pub fn resume_filename(asset: &Asset) -> String {
    let base = asset
        .name
        .rsplit(['/', '\\'])
        .next()
        .map(str::trim)
        .filter(|n| !n.is_empty() && *n != "." && *n != "..")
        .map(str::to_string)
        .unwrap_or_else(|| match asset.mime_type.as_str() {
            "application/pdf" => "resume.pdf".to_string(),
            _ => "resume".to_string(),
        });
    if base.eq_ignore_ascii_case(DOCUMENT_ENTRY) || base.eq_ignore_ascii_case(NOTE_ENTRY) {
        format!("resume-{}", base)
    } else {
        base
    }
}

/// README text listing exactly `files`.
pub fn usage_note(name: Option<&str>, files: &[String], has_resume: bool) -> String {
    let mut note = format!(
        "# {} - GitHub Pages\n\nThis is a GitHub Pages ready portfolio website.\n\n## Files Included\n\n",
        name.unwrap_or("Portfolio")
    );
    for file in files {
        let role = match file.as_str() {
            DOCUMENT_ENTRY => "Your portfolio website",
            NOTE_ENTRY => "This file",
            _ => "Resume file",
        };
        note.push_str(&format!("- `{}` - {}\n", file, role));
    }
    note.push_str(
        "\n## How to Deploy to GitHub Pages\n\n\
         1. Create a new repository on GitHub\n\
         2. Upload all files from this ZIP to your repository\n\
         3. Go to repository Settings > Pages\n\
         4. Select \"Deploy from a branch\"\n\
         5. Choose \"main\" branch and \"/ (root)\" folder\n\
         6. Click Save\n\n\
         Your portfolio will be live at: `https://yourusername.github.io/repository-name`\n\n\
         ## Customization\n\n\
         1. Edit the `index.html` file\n\
         2. Commit and push changes to GitHub\n\
         3. GitHub Pages will automatically update your site\n\n\
         ## Features\n\n\
         - Fully responsive design\n\
         - Navigation with smooth scrolling\n\
         - Works offline, no build step\n\
         - SEO-friendly metadata\n",
    );
    if has_resume {
        note.push_str("- Downloadable resume\n");
    }
    note.push_str("\n---\nGenerated with Web Portfolio Generator\n");
    note
}

/// Decodes the resume and assembles everything the archive will hold.
pub fn prepare_bundle(document: String, resume: Option<&Asset>, meta: &PageMeta) -> Result<ExportBundle> {
    let resume = resume
        .map(|asset| -> Result<BinaryEntry> {
            let filename = resume_filename(asset);
            let bytes = decode_data_uri(&filename, &asset.src)?;
            tracing::debug!("Decoded resume '{}' ({} bytes)", filename, bytes.len());
            Ok(BinaryEntry { filename, bytes })
        })
        .transpose()?;

    let files = entry_names(resume.as_ref());
    let note = usage_note(meta.name.as_deref(), &files, resume.is_some());

    Ok(ExportBundle {
        document,
        resume,
        note,
        archive_name: archive_filename(meta.name.as_deref()),
    })
}

fn entry_names(resume: Option<&BinaryEntry>) -> Vec<String> {
    let mut names = vec![DOCUMENT_ENTRY.to_string()];
    if let Some(resume) = resume {
        names.push(resume.filename.clone());
    }
    names.push(NOTE_ENTRY.to_string());
    names
}

/// Writes the bundle into an in-memory zip.
pub fn to_archive(bundle: &ExportBundle) -> Result<Archive> {
    let bytes = {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

        zip.start_file::<_, ()>(DOCUMENT_ENTRY, FileOptions::default())?;
        zip.write_all(bundle.document.as_bytes())?;

        if let Some(resume) = &bundle.resume {
            zip.start_file::<_, ()>(resume.filename.as_str(), FileOptions::default())?;
            zip.write_all(&resume.bytes)?;
        }

        zip.start_file::<_, ()>(NOTE_ENTRY, FileOptions::default())?;
        zip.write_all(bundle.note.as_bytes())?;

        zip.finish()?.into_inner()
    };

    let entries = entry_names(bundle.resume.as_ref());
    tracing::info!(
        "Packaged {} ({} entries, {} bytes)",
        bundle.archive_name,
        entries.len(),
        bytes.len()
    );
    Ok(Archive {
        filename: bundle.archive_name.clone(),
        entries,
        bytes,
    })
}

pub fn package(document: String, resume: Option<&Asset>, meta: &PageMeta) -> Result<Archive> {
    to_archive(&prepare_bundle(document, resume, meta)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;
    use std::io::Read;
    use zip::ZipArchive;

    fn meta(name: &str) -> PageMeta {
        PageMeta {
            name: Some(name.to_string()),
            about: None,
        }
    }

    fn resume() -> Asset {
        Asset {
            name: "Alex_Resume.pdf".to_string(),
            src: format!("data:application/pdf;base64,{}", STANDARD.encode(b"%PDF-1.4 test")),
            mime_type: "application/pdf".to_string(),
            size: 13,
        }
    }

    fn names(bytes: &[u8]) -> Vec<String> {
        let archive = ZipArchive::new(Cursor::new(bytes.to_vec())).unwrap();
        archive.file_names().map(str::to_string).collect()
    }

    #[test]
    fn test_archive_filename() {
        assert_eq!(archive_filename(Some("Alex Johnson")), "alex-johnson-github-pages.zip");
        assert_eq!(archive_filename(Some("  Mary \t Ann  Lee ")), "mary-ann-lee-github-pages.zip");
        assert_eq!(archive_filename(Some("   ")), "portfolio-github-pages.zip");
        assert_eq!(archive_filename(None), "portfolio-github-pages.zip");
    }

    #[test]
    fn test_two_entries_without_resume() {
        let archive = package("<html></html>".to_string(), None, &meta("Alex Johnson")).unwrap();
        assert_eq!(archive.entries, vec!["index.html", "README.md"]);
        let mut found = names(&archive.bytes);
        found.sort();
        assert_eq!(found, vec!["README.md", "index.html"]);

        let bundle = prepare_bundle(String::new(), None, &meta("Alex Johnson")).unwrap();
        assert!(bundle.note.contains("`index.html`"));
        assert!(!bundle.note.contains("Resume file"));
        assert!(!bundle.note.contains("Downloadable resume"));
    }

    #[test]
    fn test_three_entries_with_resume() {
        let asset = resume();
        let archive = package("<html></html>".to_string(), Some(&asset), &meta("Alex Johnson")).unwrap();
        assert_eq!(archive.entries, vec!["index.html", "Alex_Resume.pdf", "README.md"]);

        let mut zip = ZipArchive::new(Cursor::new(archive.bytes.clone())).unwrap();
        assert_eq!(zip.len(), 3);
        let mut pdf = Vec::new();
        zip.by_name("Alex_Resume.pdf").unwrap().read_to_end(&mut pdf).unwrap();
        assert_eq!(pdf, b"%PDF-1.4 test");

        let mut note = String::new();
        zip.by_name("README.md").unwrap().read_to_string(&mut note).unwrap();
        assert!(note.contains("`Alex_Resume.pdf` - Resume file"));
        assert!(note.starts_with("# Alex Johnson - GitHub Pages"));
        assert!(note.contains("Generated with Web Portfolio Generator"));
    }

    #[test]
    fn test_undecodable_resume_fails_whole_package() {
        let mut asset = resume();
        asset.src = "https://example.com/cv.pdf".to_string();
        let err = package(String::new(), Some(&asset), &meta("Alex")).unwrap_err();
        assert!(matches!(err, ExportError::AssetDecodeError { .. }));

        asset.src = "data:application/pdf;base64,!!!not-base64".to_string();
        let err = package(String::new(), Some(&asset), &meta("Alex")).unwrap_err();
        assert!(matches!(err, ExportError::DecodeError(_)));
    }

    #[test]
    fn test_resume_filename_avoids_fixed_entries() {
        let mut asset = resume();
        asset.name = "uploads/README.md".to_string();
        assert_eq!(resume_filename(&asset), "resume-README.md");
        asset.name = "C:\\docs\\cv.docx".to_string();
        assert_eq!(resume_filename(&asset), "cv.docx");
        asset.name = String::new();
        assert_eq!(resume_filename(&asset), "resume.pdf");
    }
}
