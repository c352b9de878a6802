use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::edit_mode::EditMode;
use super::entities::{is_present, PortfolioDocument, SocialPlatform};

/// Whether empty sections stay visible while the user is editing.
///
/// `ContentOnly` hides empty sections regardless of mode, which also hides the
/// "add skill" affordance once the last skill is removed.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VisibilityPolicy {
    #[default]
    ContentOnly,
    RevealWhileEditing,
}

pub fn has_contact_info(doc: &PortfolioDocument) -> bool {
    let info = &doc.personal_info;
    is_present(info.email.as_deref())
        || is_present(info.phone.as_deref())
        || is_present(info.location.as_deref())
}

pub fn has_social_links(doc: &PortfolioDocument) -> bool {
    SocialPlatform::ALL
        .iter()
        .any(|platform| is_present(doc.social_links.get(*platform)))
}

pub fn has_summary(doc: &PortfolioDocument) -> bool {
    is_present(doc.summary.as_deref())
}

pub fn has_experience(doc: &PortfolioDocument) -> bool {
    !doc.experience.is_empty()
}

pub fn has_projects(doc: &PortfolioDocument) -> bool {
    !doc.projects.is_empty()
}

pub fn has_skills(doc: &PortfolioDocument) -> bool {
    !doc.skills.is_empty()
}

pub fn has_certifications(doc: &PortfolioDocument) -> bool {
    !doc.certifications.is_empty()
}

/// Which structural sections render for a snapshot. Recomputed on every
/// render, never stored.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SectionVisibility {
    pub contact: bool,
    pub social: bool,
    pub summary: bool,
    pub experience: bool,
    pub projects: bool,
    pub skills: bool,
    pub certifications: bool,
}

impl SectionVisibility {
    pub fn from_content(doc: &PortfolioDocument) -> Self {
        Self {
            contact: has_contact_info(doc),
            social: has_social_links(doc),
            summary: has_summary(doc),
            experience: has_experience(doc),
            projects: has_projects(doc),
            skills: has_skills(doc),
            certifications: has_certifications(doc),
        }
    }

    pub fn resolve(doc: &PortfolioDocument, mode: EditMode, policy: VisibilityPolicy) -> Self {
        match (policy, mode) {
            (VisibilityPolicy::RevealWhileEditing, EditMode::Editing) => Self::all(),
            _ => Self::from_content(doc),
        }
    }

    fn all() -> Self {
        Self {
            contact: true,
            social: true,
            summary: true,
            experience: true,
            projects: true,
            skills: true,
            certifications: true,
        }
    }
}
