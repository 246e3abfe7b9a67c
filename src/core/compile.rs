//! Static export compiler: section tree -> one self-contained HTML page.
//!
//! The page carries its own styles and a small behavior script, so it
//! opens offline. Only the optional font stylesheet is linked externally.

use crate::core::glyphs::{escape_xml as escape, glyph_svg, tech_icon_svg};
use crate::core::icons::Glyph;
use crate::core::render::{
    Contact, EducationCard, ExperienceCard, Header, ImageSlot, ProjectCard, Section, SectionId,
    SectionTree, SkillBadge, TextBlock,
};
use crate::domain::model::{present, PortfolioData};
use chrono::{Datelike, Local};
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost/";

pub const DEFAULT_FONT_STYLESHEET: &str = "https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700;800&family=Space+Grotesk:wght@400;500;600;700&display=swap";

/// Characters of `about` carried into the Open Graph description.
pub const OG_DESCRIPTION_LIMIT: usize = 160;

/// Page-level metadata taken from the personal record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageMeta {
    pub name: Option<String>,
    pub about: Option<String>,
}

impl PageMeta {
    pub fn from_data(data: &PortfolioData) -> PageMeta {
        PageMeta {
            name: present(&data.personal.name).map(str::to_string),
            about: present(&data.about).map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompileOptions {
    /// Base that non-`data:` image references are resolved against.
    pub base_url: String,
    pub lang: String,
    pub font_stylesheet: Option<String>,
    /// Year printed in the footer.
    pub generated_year: i32,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            lang: "en".to_string(),
            font_stylesheet: Some(DEFAULT_FONT_STYLESHEET.to_string()),
            generated_year: Local::now().year(),
        }
    }
}

/// Compiles with default options.
pub fn compile(tree: &SectionTree, meta: &PageMeta) -> String {
    compile_with(tree, meta, &CompileOptions::default())
}

pub fn compile_with(tree: &SectionTree, meta: &PageMeta, options: &CompileOptions) -> String {
    let base = Url::parse(&options.base_url).ok();
    if base.is_none() {
        tracing::warn!(
            "Base URL '{}' is not absolute; relative images will use placeholders",
            options.base_url
        );
    }

    let mut page = HtmlPage::new(base);
    page.head(tree, meta, options);
    page.push("<body>\n");
    page.nav(tree);
    page.push("<main id=\"portfolio-preview\" class=\"main-content\">\n");
    for section in &tree.sections {
        page.section(section);
    }
    page.push("</main>\n");
    page.footer(tree, options.generated_year);
    page.push("<script>\n");
    page.push(BEHAVIOR_SCRIPT);
    page.push("</script>\n</body>\n</html>\n");

    tracing::debug!("Compiled document: {} bytes", page.out.len());
    page.out
}

/// Accepts http(s), mailto, tel and in-page links; a bare host gets
/// `https://`. Script schemes yield `None`.
pub fn safe_href(raw: &str) -> Option<String> {
    let href = raw.trim();
    if href.is_empty() {
        return None;
    }
    if href.starts_with('#') || href.starts_with('/') {
        return Some(href.to_string());
    }
    let scheme = href
        .split_once(':')
        .map(|(scheme, _)| scheme)
        .filter(|s| !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || "+-.".contains(c)));
    match scheme.map(|s| s.to_ascii_lowercase()) {
        Some(s) if matches!(s.as_str(), "http" | "https" | "mailto" | "tel") => Some(href.to_string()),
        Some(s) if matches!(s.as_str(), "javascript" | "vbscript" | "data" | "file") => {
            tracing::warn!("Dropping link with '{}:' scheme", s);
            None
        }
        // "localhost:8080/x" parses as a scheme but is really a host.
        Some(_) if href.contains("://") => Some(href.to_string()),
        _ => Some(format!("https://{}", href)),
    }
}

/// Inline `data:` images pass through; anything else becomes an absolute
/// http(s) URL or `None`.
pub fn resolve_image(src: &str, base: Option<&Url>) -> Option<String> {
    let src = src.trim();
    if src.is_empty() {
        return None;
    }
    if src.starts_with("data:") {
        return Some(src.to_string());
    }
    let joined = match base {
        Some(base) => base.join(src).ok()?,
        None => Url::parse(src).ok()?,
    };
    matches!(joined.scheme(), "http" | "https").then(|| joined.to_string())
}

fn truncate_chars(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}

struct HtmlPage {
    out: String,
    base: Option<Url>,
}

impl HtmlPage {
    fn new(base: Option<Url>) -> Self {
        Self {
            out: String::with_capacity(16 * 1024),
            base,
        }
    }

    fn push(&mut self, s: &str) {
        self.out.push_str(s);
    }

    fn head(&mut self, tree: &SectionTree, meta: &PageMeta, options: &CompileOptions) {
        let title = meta.name.as_deref().unwrap_or("Portfolio");
        let description = format!(
            "Professional portfolio of {}",
            meta.name.as_deref().unwrap_or("Developer")
        );
        let og_description = meta
            .about
            .as_deref()
            .map(|about| truncate_chars(about, OG_DESCRIPTION_LIMIT))
            .unwrap_or_else(|| "Professional portfolio".to_string());

        self.push("<!DOCTYPE html>\n");
        self.push(&format!("<html lang=\"{}\">\n<head>\n", escape(&options.lang)));
        self.push("<meta charset=\"UTF-8\">\n");
        self.push("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
        self.push(&format!("<title>{}</title>\n", escape(title)));
        self.push(&format!(
            "<meta name=\"description\" content=\"{}\">\n",
            escape(&description)
        ));
        self.push(&format!(
            "<meta property=\"og:title\" content=\"{}\">\n",
            escape(title)
        ));
        self.push(&format!(
            "<meta property=\"og:description\" content=\"{}\">\n",
            escape(&og_description)
        ));
        self.push("<meta property=\"og:type\" content=\"website\">\n");
        if let Some(href) = options.font_stylesheet.as_deref().and_then(safe_href) {
            self.push(&format!(
                "<link href=\"{}\" rel=\"stylesheet\">\n",
                escape(&href)
            ));
        }

        self.push("<style>\n:root {\n");
        for (role, value) in tree.palette.css_roles() {
            self.push(&format!("  --{}: {};\n", role, value));
        }
        self.push("}\n");
        self.push(BASE_STYLES);
        self.push("</style>\n</head>\n");
    }

    fn nav(&mut self, tree: &SectionTree) {
        let links: String = tree
            .nav()
            .iter()
            .map(|id| {
                format!(
                    "<a href=\"#{}\">{}</a>",
                    id.anchor(),
                    id.nav_label()
                )
            })
            .collect();

        self.push("<nav class=\"site-nav no-print\">\n<div class=\"nav-inner\">\n");
        self.push(&format!(
            "<a class=\"brand font-grotesk\" href=\"#\">{}</a>\n",
            escape(&tree.brand)
        ));
        self.push(&format!("<div class=\"nav-links\">{}</div>\n", links));
        self.push(&format!(
            "<button id=\"nav-toggle\" class=\"nav-toggle\" type=\"button\" aria-label=\"Toggle navigation\" aria-controls=\"mobile-menu\" aria-expanded=\"false\">{}</button>\n",
            glyph_svg(Glyph::Menu, 24)
        ));
        self.push("</div>\n");
        self.push(&format!(
            "<div id=\"mobile-menu\" class=\"mobile-menu hidden\">{}</div>\n",
            links
        ));
        self.push("</nav>\n");
    }

    fn section(&mut self, section: &Section) {
        match section {
            Section::Header(header) => self.header(header),
            Section::About { text } => {
                self.open(SectionId::About, "About Me");
                self.push(&format!("<p class=\"about-text\">{}</p>\n", escape(text)));
                self.close();
            }
            Section::Skills { badges } => {
                self.open(SectionId::Skills, "Skills");
                self.push("<div class=\"skills-grid\">\n");
                for badge in badges {
                    self.skill(badge);
                }
                self.push("</div>\n");
                self.close();
            }
            Section::Experience { cards } => {
                self.open(SectionId::Experience, "Experience");
                self.push("<div class=\"timeline\">\n");
                for (i, card) in cards.iter().enumerate() {
                    self.experience(&format!("exp{}", i), card);
                }
                self.push("</div>\n");
                self.close();
            }
            Section::Projects { cards } => {
                self.open(SectionId::Projects, "Projects");
                self.push("<div class=\"card-grid\">\n");
                for card in cards {
                    self.project(card);
                }
                self.push("</div>\n");
                self.close();
            }
            Section::Education { cards } => {
                self.open(SectionId::Education, "Education");
                self.push("<div class=\"card-grid\">\n");
                for card in cards {
                    self.education(card);
                }
                self.push("</div>\n");
                self.close();
            }
            Section::Contact(contact) => self.contact(contact),
        }
    }

    fn open(&mut self, id: SectionId, heading: &str) {
        self.push(&format!(
            "<section id=\"{}\" class=\"section\">\n<h2 class=\"section-title font-grotesk\">{}</h2>\n",
            id.anchor(),
            heading
        ));
    }

    fn close(&mut self) {
        self.push("</section>\n");
    }

    fn header(&mut self, header: &Header) {
        self.push("<header id=\"home\" class=\"hero\">\n");
        if let Some(src) = header
            .profile_image
            .as_deref()
            .and_then(|src| resolve_image(src, self.base.as_ref()))
        {
            self.push(&format!(
                "<img class=\"avatar\" src=\"{}\" alt=\"{}\">\n",
                escape(&src),
                escape(header.name.as_deref().unwrap_or("Profile"))
            ));
        }
        if let Some(name) = &header.name {
            self.push(&format!(
                "<h1 class=\"hero-name font-grotesk\">{}</h1>\n",
                escape(name)
            ));
        }
        if let Some(title) = &header.title {
            self.push(&format!("<p class=\"hero-title\">{}</p>\n", escape(title)));
        }

        let mut items = Vec::new();
        if let Some(email) = &header.email {
            items.push(link_item(Glyph::Mail, &format!("mailto:{}", email), email));
        }
        if let Some(phone) = &header.phone {
            items.push(link_item(Glyph::Phone, &format!("tel:{}", phone), phone));
        }
        if let Some(location) = &header.location {
            items.push(format!(
                "<span class=\"meta-item\">{}{}</span>",
                glyph_svg(Glyph::MapPin, 16),
                escape(location)
            ));
        }
        if let Some(website) = &header.website {
            items.push(link_item(Glyph::Globe, website, "Website"));
        }
        if let Some(github) = &header.github {
            items.push(link_item(Glyph::Github, github, "GitHub"));
        }
        if let Some(linkedin) = &header.linkedin {
            items.push(link_item(Glyph::Linkedin, linkedin, "LinkedIn"));
        }
        items.retain(|item| !item.is_empty());
        if !items.is_empty() {
            self.push(&format!("<div class=\"hero-meta\">{}</div>\n", items.join("")));
        }

        if let Some(resume) = &header.resume {
            let href = if resume.href.starts_with("data:") {
                Some(resume.href.clone())
            } else {
                resolve_image(&resume.href, self.base.as_ref())
            };
            if let Some(href) = href {
                self.push(&format!(
                    "<a class=\"button no-print\" href=\"{}\" download=\"{}\">{}Download Resume</a>\n",
                    escape(&href),
                    escape(&resume.filename),
                    glyph_svg(Glyph::Download, 16)
                ));
            }
        }
        self.push("</header>\n");
    }

    fn skill(&mut self, badge: &SkillBadge) {
        self.push(&format!(
            "<div class=\"skill-card\" style=\"border-color: {}; background: {};\" data-category=\"{}\">{}<span class=\"skill-label\">{}</span></div>\n",
            badge.accent.color,
            badge.accent.tint,
            badge.classification.category.as_str(),
            tech_icon_svg(badge.classification.icon, 20),
            escape(&badge.label)
        ));
    }

    fn experience(&mut self, id: &str, card: &ExperienceCard) {
        self.push("<article class=\"card experience-card\">\n<div class=\"card-head\">\n");
        self.push(&format!(
            "<span class=\"card-icon\">{}</span>\n<div>\n",
            glyph_svg(card.icon, 20)
        ));
        if let Some(position) = &card.position {
            self.push(&format!("<h3 class=\"card-title\">{}</h3>\n", escape(position)));
        }
        if let Some(company) = &card.company {
            self.push(&format!("<p class=\"card-subtitle\">{}</p>\n", escape(company)));
        }
        self.push("</div>\n");
        if card.is_current {
            self.push("<span class=\"badge-current\">Current</span>\n");
        }
        self.push("</div>\n");

        let mut meta = Vec::new();
        if let Some(range) = &card.range {
            let elapsed = card
                .elapsed
                .as_deref()
                .map(|e| format!(" <span class=\"elapsed\">({})</span>", escape(e)))
                .unwrap_or_default();
            meta.push(format!(
                "<span class=\"meta-item\">{}{}{}</span>",
                glyph_svg(Glyph::Calendar, 14),
                escape(range),
                elapsed
            ));
        }
        if let Some(location) = &card.location {
            meta.push(format!(
                "<span class=\"meta-item\">{}{}</span>",
                glyph_svg(Glyph::MapPin, 14),
                escape(location)
            ));
        }
        if !meta.is_empty() {
            self.push(&format!("<div class=\"card-meta\">{}</div>\n", meta.join("")));
        }

        if let Some(description) = &card.description {
            self.text_block(&format!("{}-desc", id), description);
        }
        self.tags(&card.tech_stack);
        if !card.achievements.is_empty() {
            self.push("<ul class=\"achievements\">\n");
            for achievement in &card.achievements {
                self.push(&format!(
                    "<li>{}{}</li>\n",
                    glyph_svg(Glyph::CheckCircle, 14),
                    escape(achievement)
                ));
            }
            self.push("</ul>\n");
        }
        self.push("</article>\n");
    }

    fn text_block(&mut self, id: &str, block: &TextBlock) {
        match &block.preview {
            None => self.push(&format!("<p class=\"card-text\">{}</p>\n", escape(&block.full))),
            Some(preview) => {
                self.push(&format!(
                    "<p id=\"{id}-preview\" class=\"card-text\">{}</p>\n",
                    escape(preview)
                ));
                self.push(&format!(
                    "<p id=\"{id}-full\" class=\"card-text hidden\">{}</p>\n",
                    escape(&block.full)
                ));
                self.push(&format!(
                    "<button class=\"read-more no-print\" type=\"button\" data-readmore=\"{id}\" aria-controls=\"{id}-full\" aria-expanded=\"false\">Read more</button>\n"
                ));
            }
        }
    }

    fn tags(&mut self, tags: &[String]) {
        if tags.is_empty() {
            return;
        }
        let tags: String = tags
            .iter()
            .map(|t| format!("<span class=\"tag\">{}</span>", escape(t)))
            .collect();
        self.push(&format!("<div class=\"tags\">{}</div>\n", tags));
    }

    fn project(&mut self, card: &ProjectCard) {
        self.push("<article class=\"card project-card\">\n");
        let image = match &card.image {
            ImageSlot::Image(src) => resolve_image(src, self.base.as_ref()),
            ImageSlot::Placeholder => None,
        };
        match image {
            Some(src) => self.push(&format!(
                "<img class=\"project-image\" src=\"{}\" alt=\"{}\">\n",
                escape(&src),
                escape(card.name.as_deref().unwrap_or("Project"))
            )),
            None => self.push(&format!(
                "<div class=\"project-placeholder\"><span>{}</span></div>\n",
                glyph_svg(Glyph::Terminal, 40)
            )),
        }
        self.push("<div class=\"card-body\">\n");
        if let Some(name) = &card.name {
            self.push(&format!("<h3 class=\"card-title\">{}</h3>\n", escape(name)));
        }
        if let Some(description) = &card.description {
            self.push(&format!("<p class=\"card-text\">{}</p>\n", escape(description)));
        }
        self.tags(&card.technologies);
        if !card.achievements.is_empty() {
            self.push("<div class=\"achievement-badges\">\n");
            for badge in &card.achievements {
                self.push(&format!(
                    "<span class=\"achievement-badge\">{}{}</span>\n",
                    glyph_svg(badge.icon, 14),
                    escape(&badge.text)
                ));
            }
            self.push("</div>\n");
        }

        let links: Vec<String> = [
            card.link.as_deref().map(|l| (Glyph::ExternalLink, l, "Live Demo")),
            card.github.as_deref().map(|l| (Glyph::Github, l, "Code")),
        ]
        .into_iter()
        .flatten()
        .map(|(glyph, href, label)| link_item(glyph, href, label))
        .filter(|item| !item.is_empty())
        .collect();
        if !links.is_empty() {
            self.push(&format!("<div class=\"card-links\">{}</div>\n", links.join("")));
        }
        self.push("</div>\n</article>\n");
    }

    fn education(&mut self, card: &EducationCard) {
        self.push("<article class=\"card education-card\">\n");
        let degree = match (&card.degree, &card.field) {
            (Some(degree), Some(field)) => Some(format!("{} in {}", degree, field)),
            (Some(degree), None) => Some(degree.clone()),
            (None, Some(field)) => Some(field.clone()),
            (None, None) => None,
        };
        if let Some(degree) = degree {
            self.push(&format!("<h3 class=\"card-title\">{}</h3>\n", escape(&degree)));
        }
        if let Some(institution) = &card.institution {
            self.push(&format!(
                "<p class=\"card-subtitle\">{}</p>\n",
                escape(institution)
            ));
        }
        let mut meta = Vec::new();
        if let Some(duration) = &card.duration {
            meta.push(format!(
                "<span class=\"meta-item\">{}{}</span>",
                glyph_svg(Glyph::Calendar, 14),
                escape(duration)
            ));
        }
        if let Some(location) = &card.location {
            meta.push(format!(
                "<span class=\"meta-item\">{}{}</span>",
                glyph_svg(Glyph::MapPin, 14),
                escape(location)
            ));
        }
        if !meta.is_empty() {
            self.push(&format!("<div class=\"card-meta\">{}</div>\n", meta.join("")));
        }
        self.push("</article>\n");
    }

    fn contact(&mut self, contact: &Contact) {
        self.open(SectionId::Contact, "Get In Touch");
        self.push("<p class=\"contact-lead\">I'm always open to discussing new opportunities and interesting projects.</p>\n");
        let mut items = Vec::new();
        if let Some(email) = &contact.email {
            items.push(link_item(Glyph::Mail, &format!("mailto:{}", email), email));
        }
        if let Some(phone) = &contact.phone {
            items.push(link_item(Glyph::Phone, &format!("tel:{}", phone), phone));
        }
        if let Some(github) = &contact.github {
            items.push(link_item(Glyph::Github, github, "GitHub"));
        }
        if let Some(linkedin) = &contact.linkedin {
            items.push(link_item(Glyph::Linkedin, linkedin, "LinkedIn"));
        }
        items.retain(|item| !item.is_empty());
        self.push(&format!("<div class=\"contact-links\">{}</div>\n", items.join("")));
        self.close();
    }

    fn footer(&mut self, tree: &SectionTree, year: i32) {
        self.push(&format!(
            "<footer class=\"site-footer\"><p>&copy; {} {}. All rights reserved.</p></footer>\n",
            year,
            escape(tree.owner.as_deref().unwrap_or(&tree.brand))
        ));
    }
}

/// Anchor with a leading glyph; empty when the href is unsafe.
fn link_item(glyph: Glyph, href: &str, label: &str) -> String {
    let Some(href) = safe_href(href) else {
        return String::new();
    };
    let external = if href.starts_with("http") {
        " target=\"_blank\" rel=\"noopener noreferrer\""
    } else {
        ""
    };
    format!(
        "<a class=\"meta-item\" href=\"{}\"{}>{}{}</a>",
        escape(&href),
        external,
        glyph_svg(glyph, 16),
        escape(label)
    )
}

const BASE_STYLES: &str = r#"* { box-sizing: border-box; }
html { scroll-behavior: smooth; }
body {
  margin: 0;
  font-family: 'Inter', system-ui, sans-serif;
  background: var(--background);
  background-attachment: fixed;
  color: var(--text);
  line-height: 1.6;
}
a { color: var(--accent); text-decoration: none; }
a:hover { text-decoration: underline; }
img { max-width: 100%; height: auto; }
.hidden { display: none !important; }
.font-grotesk { font-family: 'Space Grotesk', 'Inter', sans-serif; }
.glyph, .tech-icon { flex-shrink: 0; vertical-align: middle; }
.site-nav {
  position: sticky;
  top: 0;
  z-index: 10;
  background: var(--card-bg);
  border-bottom: 1px solid var(--border);
  backdrop-filter: blur(8px);
}
.nav-inner {
  max-width: 72rem;
  margin: 0 auto;
  padding: 0.75rem 1.5rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}
.brand { font-weight: 700; font-size: 1.25rem; color: var(--text); }
.nav-links { display: flex; gap: 1.5rem; }
.nav-links a, .mobile-menu a { color: var(--text-secondary); font-weight: 500; }
.nav-toggle { display: none; background: none; border: 0; color: var(--text); cursor: pointer; }
.mobile-menu { padding: 0.5rem 1.5rem 1rem; }
.mobile-menu a { display: block; padding: 0.5rem 0; }
.main-content { max-width: 72rem; margin: 0 auto; padding: 2rem 1.5rem; }
.hero { text-align: center; margin-bottom: 3rem; }
.avatar {
  width: 8rem;
  height: 8rem;
  border-radius: 9999px;
  object-fit: cover;
  border: 4px solid var(--border);
}
.hero-name { font-size: 2.75rem; margin: 1rem 0 0.25rem; }
.hero-title { font-size: 1.25rem; color: var(--text-secondary); margin: 0 0 1rem; }
.hero-meta, .contact-links, .card-links, .card-meta {
  display: flex;
  flex-wrap: wrap;
  gap: 0.75rem 1.25rem;
  justify-content: center;
}
.card-meta, .card-links { justify-content: flex-start; font-size: 0.875rem; color: var(--text-secondary); }
.meta-item { display: inline-flex; align-items: center; gap: 0.375rem; color: var(--text-secondary); }
a.meta-item:hover { color: var(--accent); }
.button {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  margin-top: 1.5rem;
  padding: 0.625rem 1.25rem;
  border-radius: 0.5rem;
  background: var(--accent);
  color: #ffffff;
  font-weight: 600;
}
.section { margin-bottom: 3rem; }
.section-title { font-size: 1.875rem; margin: 0 0 1.5rem; }
.about-text { white-space: pre-line; color: var(--text-secondary); font-size: 1.125rem; }
.skills-grid { display: flex; flex-wrap: wrap; gap: 0.75rem; }
.skill-card {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.5rem 0.875rem;
  border: 1px solid;
  border-radius: 0.75rem;
  font-weight: 500;
  animation: skillFadeIn 0.4s cubic-bezier(0.34, 1.56, 0.64, 1);
  transition: transform 200ms cubic-bezier(0.4, 0, 0.2, 1), box-shadow 200ms;
}
.skill-card:hover {
  box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05);
  transform: translateY(-2px) scale(1.05);
}
.skill-card:hover svg { transform: scale(1.05) rotate(3deg); }
@keyframes skillFadeIn {
  from { opacity: 0; transform: translateY(10px) scale(0.95); }
  to { opacity: 1; transform: translateY(0) scale(1); }
}
.timeline { display: grid; gap: 1.5rem; }
.card-grid { display: grid; gap: 1.5rem; grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr)); }
.card {
  background: var(--card-bg);
  border: 1px solid var(--border);
  border-radius: 1rem;
  padding: 1.5rem;
  overflow: hidden;
}
.card-head { display: flex; align-items: flex-start; gap: 0.75rem; }
.card-icon {
  display: inline-flex;
  padding: 0.5rem;
  border-radius: 0.5rem;
  color: var(--accent);
  border: 1px solid var(--border);
}
.card-title { margin: 0; font-size: 1.25rem; }
.card-subtitle { margin: 0.125rem 0 0; color: var(--accent); font-weight: 500; }
.card-text { color: var(--text-secondary); margin: 0.75rem 0; }
.badge-current {
  margin-left: auto;
  padding: 0.125rem 0.625rem;
  border-radius: 9999px;
  font-size: 0.75rem;
  font-weight: 600;
  color: var(--highlight);
  background: var(--highlight-bg);
}
.read-more {
  background: none;
  border: 0;
  padding: 0;
  color: var(--accent);
  font-weight: 600;
  cursor: pointer;
}
.tags { display: flex; flex-wrap: wrap; gap: 0.5rem; margin: 0.75rem 0; }
.tag {
  padding: 0.125rem 0.625rem;
  border-radius: 0.375rem;
  font-size: 0.75rem;
  border: 1px solid var(--border);
  color: var(--text-secondary);
}
.achievements { list-style: none; padding: 0; margin: 0.75rem 0 0; }
.achievements li, .achievement-badge {
  display: flex;
  align-items: center;
  gap: 0.375rem;
  font-size: 0.875rem;
  color: var(--highlight);
}
.achievement-badges { display: grid; gap: 0.375rem; margin: 0.75rem 0; }
.achievement-badge { padding: 0.25rem 0.5rem; border-radius: 0.375rem; background: var(--highlight-bg); }
.project-card { padding: 0; }
.card-body { padding: 1.5rem; }
.project-image { display: block; width: 100%; height: 12rem; object-fit: cover; }
.project-placeholder {
  position: relative;
  height: 12rem;
  display: flex;
  align-items: center;
  justify-content: center;
  color: var(--text);
}
.project-placeholder::before {
  content: '';
  position: absolute;
  inset: 0;
  background: linear-gradient(135deg, var(--accent), var(--highlight));
  opacity: var(--placeholder-opacity);
}
.project-placeholder span { position: relative; }
.contact-lead { color: var(--text-secondary); }
.site-footer {
  text-align: center;
  padding: 2rem 1.5rem;
  border-top: 1px solid var(--border);
  color: var(--text-secondary);
  font-size: 0.875rem;
}
@keyframes experienceFadeIn {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}
.experience-card { animation: experienceFadeIn 0.5s cubic-bezier(0.34, 1.56, 0.64, 1); }
@media (max-width: 767px) {
  .nav-links { display: none; }
  .nav-toggle { display: inline-flex; }
  .hero-name { font-size: 2rem; }
  body { font-size: 14px; }
}
@media (min-width: 768px) {
  .mobile-menu { display: none !important; }
}
@media print {
  .no-print { display: none !important; }
  .site-nav { position: relative; }
}
"#;

const BEHAVIOR_SCRIPT: &str = r#"(function () {
  var toggle = document.getElementById('nav-toggle');
  var menu = document.getElementById('mobile-menu');
  if (toggle && menu) {
    toggle.addEventListener('click', function () {
      var hidden = menu.classList.toggle('hidden');
      toggle.setAttribute('aria-expanded', hidden ? 'false' : 'true');
    });
    menu.querySelectorAll('a').forEach(function (link) {
      link.addEventListener('click', function () {
        menu.classList.add('hidden');
        toggle.setAttribute('aria-expanded', 'false');
      });
    });
  }
  document.querySelectorAll('[data-readmore]').forEach(function (button) {
    var id = button.getAttribute('data-readmore');
    var preview = document.getElementById(id + '-preview');
    var full = document.getElementById(id + '-full');
    if (!preview || !full) {
      return;
    }
    button.addEventListener('click', function () {
      var collapsed = full.classList.toggle('hidden');
      preview.classList.toggle('hidden', !collapsed);
      button.textContent = collapsed ? 'Read more' : 'Read less';
      button.setAttribute('aria-expanded', collapsed ? 'false' : 'true');
    });
  });
})();
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render::render_at;
    use crate::core::theme::Theme;
    use crate::domain::model::{Experience, Personal, Project};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn sample() -> PortfolioData {
        PortfolioData {
            personal: Personal {
                name: Some("Alex Johnson".to_string()),
                title: Some("Full Stack Developer".to_string()),
                email: Some("alex@example.com".to_string()),
                github: Some("https://github.com/alexj".to_string()),
                ..Default::default()
            },
            about: Some("a".repeat(300)),
            skills: vec!["React".to_string(), "Unknown Thing".to_string()],
            experience: vec![Experience {
                company: Some("TechCorp".to_string()),
                duration: Some("Jan 2022 - Present".to_string()),
                description: Some("d".repeat(250)),
                ..Default::default()
            }],
            projects: vec![Project {
                name: Some("Shop".to_string()),
                image: Some("images/shop.png".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    fn options(year: i32) -> CompileOptions {
        CompileOptions {
            base_url: "https://alex.dev/".to_string(),
            generated_year: year,
            ..Default::default()
        }
    }

    fn build(data: &PortfolioData, theme: Theme, year: i32) -> String {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let tree = render_at(data, &theme.palette(), today);
        compile_with(&tree, &PageMeta::from_data(data), &options(year))
    }

    #[test]
    fn test_head_metadata() {
        let html = build(&sample(), Theme::Light, 2024);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Alex Johnson</title>"));
        assert!(html.contains(r#"<meta name="description" content="Professional portfolio of Alex Johnson">"#));
        assert!(html.contains(r#"<meta property="og:title" content="Alex Johnson">"#));
        assert!(html.contains(&format!(
            r#"<meta property="og:description" content="{}">"#,
            "a".repeat(OG_DESCRIPTION_LIMIT)
        )));
        assert!(html.contains(r#"<meta property="og:type" content="website">"#));
        assert!(html.contains("--background: #ffffff;"));
    }

    #[test]
    fn test_unnamed_page_falls_back() {
        let html = build(&PortfolioData::default(), Theme::Dark, 2024);
        assert!(html.contains("<title>Portfolio</title>"));
        assert!(html.contains("Professional portfolio of Developer"));
        assert!(html.contains(r#"content="Professional portfolio">"#));
        assert!(html.contains("&copy; 2024 Portfolio. All rights reserved."));
    }

    #[test]
    fn test_deterministic_modulo_year() {
        let data = sample();
        let first = build(&data, Theme::Synthwave, 2024);
        let second = build(&data, Theme::Synthwave, 2031);
        assert_ne!(first, second);
        assert_eq!(first.replace("2031", "2024"), second.replace("2031", "2024"));
        assert_eq!(first, build(&data, Theme::Synthwave, 2024));
    }

    #[test]
    fn test_behavior_wiring() {
        let html = build(&sample(), Theme::Light, 2024);
        assert!(html.contains(r#"id="nav-toggle""#));
        assert!(html.contains(r#"id="mobile-menu""#));
        assert!(html.contains(r#"data-readmore="exp0-desc""#));
        assert!(html.contains(r#"id="exp0-desc-preview""#));
        assert!(html.contains(r#"id="exp0-desc-full" class="card-text hidden""#));
        assert!(html.contains("<script>"));
    }

    #[test]
    fn test_nav_lists_only_rendered_sections() {
        let html = build(&sample(), Theme::Light, 2024);
        assert!(html.contains(r##"<a href="#experience">Experience</a>"##));
        assert!(!html.contains(r##"<a href="#education">"##));
    }

    #[test]
    fn test_relative_image_absolutized() {
        let html = build(&sample(), Theme::Light, 2024);
        assert!(html.contains(r#"src="https://alex.dev/images/shop.png""#));
    }

    #[test]
    fn test_missing_image_renders_placeholder() {
        let mut data = sample();
        data.projects[0].image = None;
        let html = build(&data, Theme::Light, 2024);
        assert!(html.contains("project-placeholder"));
        assert!(!html.contains("project-image"));
    }

    #[test]
    fn test_text_is_escaped_and_scripts_dropped() {
        let mut data = sample();
        data.personal.name = Some("<script>alert(1)</script>".to_string());
        data.personal.github = Some("javascript:alert(1)".to_string());
        let html = build(&data, Theme::Light, 2024);
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("javascript:alert"));
    }

    #[test]
    fn test_safe_href() {
        assert_eq!(safe_href("github.com/alex").as_deref(), Some("https://github.com/alex"));
        assert_eq!(safe_href("https://x.dev").as_deref(), Some("https://x.dev"));
        assert_eq!(safe_href("mailto:a@b.c").as_deref(), Some("mailto:a@b.c"));
        assert_eq!(safe_href(" JavaScript:alert(1)"), None);
        assert_eq!(safe_href("vbscript:x"), None);
        assert_eq!(safe_href(""), None);
    }

    #[test]
    fn test_resolve_image() {
        let base = Url::parse("https://alex.dev/site/").unwrap();
        assert_eq!(
            resolve_image("data:image/png;base64,AA==", Some(&base)).as_deref(),
            Some("data:image/png;base64,AA==")
        );
        assert_eq!(
            resolve_image("a.png", Some(&base)).as_deref(),
            Some("https://alex.dev/site/a.png")
        );
        assert_eq!(resolve_image("javascript:alert(1)", Some(&base)), None);
        assert_eq!(resolve_image("a.png", None), None);
    }
}
