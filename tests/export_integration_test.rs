use chrono::NaiveDate;
use portfolio_export::core::compile::{compile_with, CompileOptions, PageMeta};
use portfolio_export::core::render::render_at;
use portfolio_export::core::theme::{resolve, Theme};
use portfolio_export::core::Pipeline;
use portfolio_export::{
    ExportEngine, ExportOutcome, LocalStorage, PortfolioData, SitePipeline, TomlConfig,
};
use pretty_assertions::assert_eq;
use std::io::Read;
use std::path::Path;
use tempfile::TempDir;

const DEMO: &str = include_str!("../demos/alex-johnson.json");

fn demo() -> PortfolioData {
    serde_json::from_str(DEMO).unwrap()
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

fn setup(theme: Theme) -> (TempDir, TomlConfig) {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("portfolio.json"), DEMO).unwrap();

    let mut config = TomlConfig::default();
    config.input.data = "portfolio.json".to_string();
    config.output.output_path = "dist".to_string();
    config.site.theme = theme;
    config.site.base_url = "https://alexjohnson.github.io/".to_string();
    (temp_dir, config)
}

fn read_entry(bytes: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes.to_vec())).unwrap();
    let mut content = String::new();
    archive
        .by_name(name)
        .unwrap()
        .read_to_string(&mut content)
        .unwrap();
    content
}

#[tokio::test]
async fn test_end_to_end_export() {
    let (temp_dir, config) = setup(Theme::Synthwave);
    let storage = LocalStorage::new(temp_dir.path());
    let pipeline = SitePipeline::new(storage, config).with_date(today());
    let engine = ExportEngine::new(pipeline);

    let outcome = engine.run().await.unwrap();
    let expected = Path::new("dist")
        .join("alex-johnson-github-pages.zip")
        .to_string_lossy()
        .into_owned();
    assert_eq!(outcome, ExportOutcome::Completed(expected.clone()));

    let bytes = std::fs::read(temp_dir.path().join(&expected)).unwrap();
    let archive = zip::ZipArchive::new(std::io::Cursor::new(bytes.clone())).unwrap();
    let mut names: Vec<String> = archive.file_names().map(str::to_string).collect();
    names.sort();
    assert_eq!(names, vec!["README.md", "index.html"]);

    let html = read_entry(&bytes, "index.html");
    assert!(html.contains("<title>Alex Johnson</title>"));
    assert!(html.contains("2 yrs 2 mos"));
    assert!(html.contains("1 yr 6 mos"));
    assert!(html.contains(r#"src="https://alexjohnson.github.io/images/tasks.png""#));
    assert!(html.contains("project-placeholder"));
    assert!(html.contains("&copy; 2024 Alex Johnson. All rights reserved."));
    // Only the first two achievements surface.
    assert!(html.contains("Onboarded 5 new engineers"));
    assert!(!html.contains("Cut infrastructure cost"));

    let note = read_entry(&bytes, "README.md");
    assert!(note.contains("`index.html`"));
    assert!(!note.contains("Resume file"));
}

#[tokio::test]
async fn test_resume_flag_adds_third_entry() {
    let (temp_dir, mut config) = setup(Theme::Light);
    let resume_path = temp_dir.path().join("Alex_Resume.pdf");
    std::fs::write(&resume_path, b"%PDF-1.7 resume").unwrap();
    config.input.resume = Some(resume_path.to_string_lossy().into_owned());

    let storage = LocalStorage::new(temp_dir.path());
    let pipeline = SitePipeline::new(storage, config).with_date(today());

    let data = pipeline.extract().await.unwrap();
    let bundle = pipeline.transform(data).await.unwrap();
    let path = pipeline.load(bundle).await.unwrap();

    let bytes = std::fs::read(temp_dir.path().join(path)).unwrap();
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes.clone())).unwrap();
    assert_eq!(archive.len(), 3);
    let mut pdf = Vec::new();
    archive
        .by_name("Alex_Resume.pdf")
        .unwrap()
        .read_to_end(&mut pdf)
        .unwrap();
    assert_eq!(pdf, b"%PDF-1.7 resume");

    let note = read_entry(&bytes, "README.md");
    assert!(note.contains("`Alex_Resume.pdf` - Resume file"));
    let html = read_entry(&bytes, "index.html");
    assert!(html.contains(r#"download="Alex_Resume.pdf""#));
}

#[tokio::test]
async fn test_rejected_upload_never_writes_archive() {
    let (temp_dir, mut config) = setup(Theme::Light);
    let image_path = temp_dir.path().join("avatar.pdf");
    std::fs::write(&image_path, b"not an image").unwrap();
    config.input.profile_image = Some(image_path.to_string_lossy().into_owned());

    let storage = LocalStorage::new(temp_dir.path());
    let engine = ExportEngine::new(SitePipeline::new(storage, config));

    let err = engine.run().await.unwrap_err();
    assert!(matches!(
        err,
        portfolio_export::ExportError::AssetRejectedError { .. }
    ));
    assert!(!temp_dir.path().join("dist").exists());
}

#[test]
fn test_compile_is_deterministic_per_theme() {
    let data = demo();
    let meta = PageMeta::from_data(&data);
    for theme in Theme::ALL {
        let tree = render_at(&data, &resolve(theme.id()), today());
        let options = CompileOptions {
            generated_year: 2024,
            ..Default::default()
        };
        assert_eq!(
            compile_with(&tree, &meta, &options),
            compile_with(&tree, &meta, &options)
        );
    }
}

#[test]
fn test_unknown_theme_renders_as_light() {
    let data = demo();
    let meta = PageMeta::from_data(&data);
    let options = CompileOptions {
        generated_year: 2024,
        ..Default::default()
    };
    let unknown = compile_with(&render_at(&data, &resolve("neon"), today()), &meta, &options);
    let light = compile_with(&render_at(&data, &resolve("light"), today()), &meta, &options);
    assert_eq!(unknown, light);
}
