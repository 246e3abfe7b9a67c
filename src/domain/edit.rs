//! Snapshot edits for [`PortfolioData`].
//!
//! The form collaborator describes each change as an [`Edit`]; applying it
//! returns a new snapshot and leaves the original untouched, so an export that
//! already captured a snapshot never observes later edits.

use crate::domain::model::{Asset, Education, Experience, PortfolioData, Project, TextList};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonalField {
    Name,
    Title,
    Email,
    Phone,
    Location,
    Website,
    Github,
    Linkedin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Experience,
    Projects,
    Education,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
    SetPersonal(PersonalField, Option<String>),
    SetAbout(Option<String>),
    AddSkill(String),
    RemoveSkill(usize),
    AddExperience(Experience),
    AddProject(Project),
    AddEducation(Education),
    RemoveItem(ListKind, usize),
    /// Set one named field of one list item. Unknown fields and
    /// out-of-range indices leave the snapshot unchanged.
    SetItemField {
        list: ListKind,
        index: usize,
        field: String,
        value: Option<String>,
    },
    SetProfileImage(Option<Asset>),
    SetResume(Option<Asset>),
}

impl PortfolioData {
    pub fn apply(&self, edit: Edit) -> PortfolioData {
        let mut next = self.clone();
        match edit {
            Edit::SetPersonal(field, value) => {
                let slot = match field {
                    PersonalField::Name => &mut next.personal.name,
                    PersonalField::Title => &mut next.personal.title,
                    PersonalField::Email => &mut next.personal.email,
                    PersonalField::Phone => &mut next.personal.phone,
                    PersonalField::Location => &mut next.personal.location,
                    PersonalField::Website => &mut next.personal.website,
                    PersonalField::Github => &mut next.personal.github,
                    PersonalField::Linkedin => &mut next.personal.linkedin,
                };
                *slot = value;
            }
            Edit::SetAbout(value) => next.about = value,
            Edit::AddSkill(skill) => next.skills.push(skill),
            Edit::RemoveSkill(index) => {
                if index < next.skills.len() {
                    next.skills.remove(index);
                }
            }
            Edit::AddExperience(item) => next.experience.push(item),
            Edit::AddProject(item) => next.projects.push(item),
            Edit::AddEducation(item) => next.education.push(item),
            Edit::RemoveItem(list, index) => match list {
                ListKind::Experience => remove_at(&mut next.experience, index),
                ListKind::Projects => remove_at(&mut next.projects, index),
                ListKind::Education => remove_at(&mut next.education, index),
            },
            Edit::SetItemField {
                list,
                index,
                field,
                value,
            } => {
                let applied = match list {
                    ListKind::Experience => next
                        .experience
                        .get_mut(index)
                        .map(|item| set_experience_field(item, &field, value)),
                    ListKind::Projects => next
                        .projects
                        .get_mut(index)
                        .map(|item| set_project_field(item, &field, value)),
                    ListKind::Education => next
                        .education
                        .get_mut(index)
                        .map(|item| set_education_field(item, &field, value)),
                };
                if applied != Some(true) {
                    tracing::debug!("Ignored edit of {:?}[{}].{}", list, index, field);
                }
            }
            Edit::SetProfileImage(asset) => next.profile_image = asset,
            Edit::SetResume(asset) => next.resume_file = asset,
        }
        next
    }
}

fn remove_at<T>(items: &mut Vec<T>, index: usize) {
    if index < items.len() {
        items.remove(index);
    }
}

/// Comma-separated input is stored back as a sequence.
fn to_text_list(value: Option<String>) -> TextList {
    match value {
        Some(joined) => TextList::Joined(joined).entries().into(),
        None => TextList::default(),
    }
}

fn set_experience_field(item: &mut Experience, field: &str, value: Option<String>) -> bool {
    match field {
        "company" => item.company = value,
        "position" => item.position = value,
        "duration" => item.duration = value,
        "location" => item.location = value,
        "description" => item.description = value,
        "techStack" => item.tech_stack = to_text_list(value),
        "achievements" => item.achievements = to_text_list(value),
        _ => return false,
    }
    true
}

fn set_project_field(item: &mut Project, field: &str, value: Option<String>) -> bool {
    match field {
        "name" => item.name = value,
        "description" => item.description = value,
        "technologies" => item.technologies = to_text_list(value),
        "link" => item.link = value,
        "github" => item.github = value,
        "image" => item.image = value,
        "achievements" => item.achievements = to_text_list(value),
        _ => return false,
    }
    true
}

fn set_education_field(item: &mut Education, field: &str, value: Option<String>) -> bool {
    match field {
        "institution" => item.institution = value,
        "degree" => item.degree = value,
        "field" => item.field = value,
        "duration" => item.duration = value,
        "location" => item.location = value,
        _ => return false,
    }
    true
}
