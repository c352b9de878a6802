//! Pure update operations over [`PortfolioDocument`].
//!
//! Every function takes the current snapshot by reference and returns a new
//! one; the input is never touched. Rejected input (blank or duplicate skill,
//! stale index) yields a snapshot equal to the input rather than an error.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::entities::{PersonalField, PortfolioDocument, SocialPlatform};

pub fn set_personal_field(
    doc: &PortfolioDocument,
    field: PersonalField,
    value: impl Into<String>,
) -> PortfolioDocument {
    let value = value.into();
    let mut next = doc.clone();
    let info = &mut next.personal_info;
    match field {
        PersonalField::Name => info.name = value,
        PersonalField::Title => info.title = value,
        PersonalField::Email => info.email = Some(value),
        PersonalField::Phone => info.phone = Some(value),
        PersonalField::Location => info.location = Some(value),
        PersonalField::ProfilePicture => info.profile_picture = Some(value),
    }
    next
}

pub fn set_social_link(
    doc: &PortfolioDocument,
    platform: SocialPlatform,
    url: impl Into<String>,
) -> PortfolioDocument {
    let url = Some(url.into());
    let mut next = doc.clone();
    match platform {
        SocialPlatform::Github => next.social_links.github = url,
        SocialPlatform::Linkedin => next.social_links.linkedin = url,
        SocialPlatform::Twitter => next.social_links.twitter = url,
    }
    next
}

pub fn set_summary(doc: &PortfolioDocument, text: impl Into<String>) -> PortfolioDocument {
    PortfolioDocument {
        summary: Some(text.into()),
        ..doc.clone()
    }
}

/// Appends the trimmed skill unless it is blank or already listed
/// (case-sensitive).
pub fn add_skill(doc: &PortfolioDocument, raw: &str) -> PortfolioDocument {
    let skill = raw.trim();
    let mut next = doc.clone();
    if skill.is_empty() || next.skills.iter().any(|s| s == skill) {
        return next;
    }
    next.skills.push(skill.to_string());
    next
}

/// Out-of-range indexes come from stale views and are ignored.
pub fn remove_skill_at(doc: &PortfolioDocument, index: usize) -> PortfolioDocument {
    let mut next = doc.clone();
    if index < next.skills.len() {
        next.skills.remove(index);
    }
    next
}

/// Stores an already encoded image; decoding the source file happens elsewhere.
pub fn set_profile_picture(
    doc: &PortfolioDocument,
    encoded_image: impl Into<String>,
) -> PortfolioDocument {
    set_personal_field(doc, PersonalField::ProfilePicture, encoded_image)
}

/// A single user edit, as carried from the interaction layer to the session.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PortfolioEdit {
    SetPersonalField { field: PersonalField, value: String },
    SetSocialLink { platform: SocialPlatform, url: String },
    SetSummary { summary: String },
    AddSkill { skill: String },
    RemoveSkillAt { index: usize },
    SetProfilePicture { image: String },
}

impl PortfolioEdit {
    pub fn apply(&self, doc: &PortfolioDocument) -> PortfolioDocument {
        match self {
            PortfolioEdit::SetPersonalField { field, value } => {
                set_personal_field(doc, *field, value.as_str())
            }
            PortfolioEdit::SetSocialLink { platform, url } => {
                set_social_link(doc, *platform, url.as_str())
            }
            PortfolioEdit::SetSummary { summary } => set_summary(doc, summary.as_str()),
            PortfolioEdit::AddSkill { skill } => add_skill(doc, skill),
            PortfolioEdit::RemoveSkillAt { index } => remove_skill_at(doc, *index),
            PortfolioEdit::SetProfilePicture { image } => set_profile_picture(doc, image.as_str()),
        }
    }
}
