//! Document renderer: portfolio data + palette -> ordered section tree.
//!
//! A section is present in the tree only when its data is. Nothing here
//! fails; odd or missing values simply drop out of the tree.

use crate::core::classifier::{classify, SkillClassification};
use crate::core::derived::{self, achievement_icon, industry_icon};
use crate::core::icons::Glyph;
use crate::core::package::resume_filename;
use crate::core::theme::{CategoryAccent, Palette};
use crate::domain::model::{present, Education, Experience, PortfolioData, Project, TextList};
use chrono::{Local, NaiveDate};
use serde::Serialize;

/// Descriptions longer than this many characters start collapsed.
pub const DESCRIPTION_PREVIEW_LIMIT: usize = 200;

/// Badges surfaced per card, whatever the stored count.
pub const ACHIEVEMENT_BADGE_LIMIT: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionTree {
    pub palette: Palette,
    /// Person's name, or "Portfolio" in the nav bar when unnamed.
    pub brand: String,
    pub owner: Option<String>,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Home,
    About,
    Skills,
    Experience,
    Projects,
    Education,
    Contact,
}

impl SectionId {
    pub fn anchor(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::Education => "education",
            SectionId::Contact => "contact",
        }
    }

    pub fn nav_label(&self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Experience => "Experience",
            SectionId::Projects => "Projects",
            SectionId::Education => "Education",
            SectionId::Contact => "Contact",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Section {
    Header(Header),
    About { text: String },
    Skills { badges: Vec<SkillBadge> },
    Experience { cards: Vec<ExperienceCard> },
    Projects { cards: Vec<ProjectCard> },
    Education { cards: Vec<EducationCard> },
    Contact(Contact),
}

impl Section {
    pub fn id(&self) -> SectionId {
        match self {
            Section::Header(_) => SectionId::Home,
            Section::About { .. } => SectionId::About,
            Section::Skills { .. } => SectionId::Skills,
            Section::Experience { .. } => SectionId::Experience,
            Section::Projects { .. } => SectionId::Projects,
            Section::Education { .. } => SectionId::Education,
            Section::Contact(_) => SectionId::Contact,
        }
    }

    /// Cards or badges in the section; header, about and contact count as one.
    pub fn item_count(&self) -> usize {
        match self {
            Section::Skills { badges } => badges.len(),
            Section::Experience { cards } => cards.len(),
            Section::Projects { cards } => cards.len(),
            Section::Education { cards } => cards.len(),
            _ => 1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Header {
    pub name: Option<String>,
    pub title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub profile_image: Option<String>,
    pub resume: Option<ResumeLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumeLink {
    pub filename: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillBadge {
    pub label: String,
    pub classification: SkillClassification,
    pub accent: CategoryAccent,
}

/// Long text with an optional collapsed preview.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextBlock {
    pub full: String,
    /// Set only when `full` exceeds [`DESCRIPTION_PREVIEW_LIMIT`].
    pub preview: Option<String>,
}

impl TextBlock {
    pub fn new(text: &str) -> TextBlock {
        let preview = (text.chars().count() > DESCRIPTION_PREVIEW_LIMIT).then(|| {
            let head: String = text.chars().take(DESCRIPTION_PREVIEW_LIMIT).collect();
            format!("{}…", head.trim_end())
        });
        TextBlock {
            full: text.to_string(),
            preview,
        }
    }

    pub fn is_truncated(&self) -> bool {
        self.preview.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperienceCard {
    pub position: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub range: Option<String>,
    pub elapsed: Option<String>,
    pub is_current: bool,
    pub icon: Glyph,
    pub description: Option<TextBlock>,
    pub tech_stack: Vec<String>,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "src", rename_all = "lowercase")]
pub enum ImageSlot {
    Image(String),
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AchievementBadge {
    pub text: String,
    pub icon: Glyph,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectCard {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: ImageSlot,
    pub technologies: Vec<String>,
    pub achievements: Vec<AchievementBadge>,
    pub link: Option<String>,
    pub github: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EducationCard {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub field: Option<String>,
    pub duration: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Contact {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
}

impl SectionTree {
    /// Nav targets, one per rendered section, in page order.
    pub fn nav(&self) -> Vec<SectionId> {
        self.sections.iter().map(Section::id).collect()
    }

    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| s.id() == id)
    }
}

pub fn render(data: &PortfolioData, palette: &Palette) -> SectionTree {
    render_at(data, palette, Local::now().date_naive())
}

/// Render with elapsed-time facts measured against `today`.
pub fn render_at(data: &PortfolioData, palette: &Palette, today: NaiveDate) -> SectionTree {
    let owner = owned(&data.personal.name);
    let mut sections = Vec::new();

    if let Some(header) = header(data) {
        sections.push(Section::Header(header));
    }
    if let Some(text) = owned(&data.about) {
        sections.push(Section::About { text });
    }

    let badges = skill_badges(&data.skills, palette);
    if !badges.is_empty() {
        sections.push(Section::Skills { badges });
    }
    if !data.experience.is_empty() {
        let cards = data
            .experience
            .iter()
            .map(|entry| experience_card(entry, today))
            .collect();
        sections.push(Section::Experience { cards });
    }
    if !data.projects.is_empty() {
        let cards = data.projects.iter().map(project_card).collect();
        sections.push(Section::Projects { cards });
    }
    if !data.education.is_empty() {
        let cards = data.education.iter().map(education_card).collect();
        sections.push(Section::Education { cards });
    }
    if let Some(contact) = contact(data) {
        sections.push(Section::Contact(contact));
    }

    tracing::debug!(
        "Rendered {} sections: {:?}",
        sections.len(),
        sections.iter().map(Section::id).collect::<Vec<_>>()
    );

    SectionTree {
        palette: *palette,
        brand: owner.clone().unwrap_or_else(|| "Portfolio".to_string()),
        owner,
        sections,
    }
}

fn owned(value: &Option<String>) -> Option<String> {
    present(value).map(str::to_string)
}

fn header(data: &PortfolioData) -> Option<Header> {
    let p = &data.personal;
    let header = Header {
        name: owned(&p.name),
        title: owned(&p.title),
        email: owned(&p.email),
        phone: owned(&p.phone),
        location: owned(&p.location),
        website: owned(&p.website),
        github: owned(&p.github),
        linkedin: owned(&p.linkedin),
        profile_image: data
            .profile_image
            .as_ref()
            .map(|asset| asset.src.trim())
            .filter(|src| !src.is_empty())
            .map(str::to_string),
        resume: data
            .resume_file
            .as_ref()
            .filter(|asset| !asset.src.trim().is_empty())
            .map(|asset| ResumeLink {
                filename: resume_filename(asset),
                href: asset.src.trim().to_string(),
            }),
    };
    (header != Header::default()).then_some(header)
}

fn skill_badges(skills: &[String], palette: &Palette) -> Vec<SkillBadge> {
    skills
        .iter()
        .map(|label| label.trim())
        .filter(|label| !label.is_empty())
        .map(|label| {
            let classification = classify(label);
            SkillBadge {
                label: label.to_string(),
                classification,
                accent: palette.category_accent(classification.category),
            }
        })
        .collect()
}

fn experience_card(entry: &Experience, today: NaiveDate) -> ExperienceCard {
    let range = owned(&entry.duration);
    let (elapsed, is_current) = match range.as_deref() {
        Some(range) => {
            let (start, end) = derived::split_range(range);
            (
                Some(derived::duration_at(start, end, today)),
                derived::is_current(range),
            )
        }
        None => (None, false),
    };
    let company = owned(&entry.company);

    ExperienceCard {
        position: owned(&entry.position),
        icon: industry_icon(company.as_deref().unwrap_or_default()),
        company,
        location: owned(&entry.location),
        range,
        elapsed,
        is_current,
        description: present(&entry.description).map(TextBlock::new),
        tech_stack: entry.tech_stack.entries(),
        achievements: capped(&entry.achievements),
    }
}

fn capped(list: &TextList) -> Vec<String> {
    list.entries()
        .into_iter()
        .take(ACHIEVEMENT_BADGE_LIMIT)
        .collect()
}

fn project_card(project: &Project) -> ProjectCard {
    ProjectCard {
        name: owned(&project.name),
        description: owned(&project.description),
        image: match present(&project.image) {
            Some(src) => ImageSlot::Image(src.to_string()),
            None => ImageSlot::Placeholder,
        },
        technologies: project.technologies.entries(),
        achievements: capped(&project.achievements)
            .into_iter()
            .map(|text| AchievementBadge {
                icon: achievement_icon(&text),
                text,
            })
            .collect(),
        link: owned(&project.link),
        github: owned(&project.github),
    }
}

fn education_card(entry: &Education) -> EducationCard {
    EducationCard {
        institution: owned(&entry.institution),
        degree: owned(&entry.degree),
        field: owned(&entry.field),
        duration: owned(&entry.duration),
        location: owned(&entry.location),
    }
}

fn contact(data: &PortfolioData) -> Option<Contact> {
    let p = &data.personal;
    let contact = Contact {
        email: owned(&p.email),
        phone: owned(&p.phone),
        github: owned(&p.github),
        linkedin: owned(&p.linkedin),
    };
    (contact != Contact::default()).then_some(contact)
}
