use serde::Serialize;
use utoipa::ToSchema;

use super::edit_mode::{EditMode, FieldView, SkillAffordances};
use super::entities::{
    is_present, Certification, Experience, PortfolioDocument, Project, SocialPlatform,
};
use super::theme::ThemePreference;
use super::visibility::{has_contact_info, has_social_links, SectionVisibility, VisibilityPolicy};

/// Everything a render needs besides the snapshot itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    pub mode: EditMode,
    pub theme: ThemePreference,
    pub policy: VisibilityPolicy,
    pub year: i32,
}

/// The rendered shape of the page for one snapshot and mode.
///
/// `None` sections are not rendered at all.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioView {
    pub theme: ThemePreference,
    pub mode: EditMode,
    pub sections: SectionVisibility,
    pub header: HeaderView,
    pub summary: Option<FieldView>,
    pub experience: Option<Vec<Experience>>,
    pub projects: Option<Vec<ProjectView>>,
    pub skills: Option<SkillsView>,
    pub certifications: Option<Vec<Certification>>,
    pub footer: FooterView,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HeaderView {
    pub name: FieldView,
    pub title: FieldView,
    pub picture: PictureView,
    pub contact: Option<ContactView>,
    pub social: Option<Vec<SocialLinkView>>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PictureView {
    /// `None` renders the placeholder avatar.
    pub src: Option<String>,
    pub alt: String,
    pub can_replace: bool,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct ContactView {
    pub email: Option<ContactItemView>,
    pub phone: Option<ContactItemView>,
    pub location: Option<ContactItemView>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct ContactItemView {
    pub field: FieldView,
    pub href: Option<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct SocialLinkView {
    pub platform: SocialPlatform,
    pub label: String,
    pub href: String,
    pub field: FieldView,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct ProjectView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub link: Option<String>,
    pub github: Option<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct SkillsView {
    pub items: Vec<SkillItemView>,
    pub affordances: SkillAffordances,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct SkillItemView {
    /// Position to pass back when removing this skill.
    pub index: usize,
    pub name: String,
    pub removable: bool,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct FooterView {
    pub contact: Option<ContactView>,
    pub social: Option<Vec<SocialLinkView>>,
    pub copyright: String,
}

impl PortfolioView {
    pub fn render(doc: &PortfolioDocument, ctx: RenderContext) -> Self {
        let mode = ctx.mode;
        let sections = SectionVisibility::resolve(doc, mode, ctx.policy);
        let reveal_empty = ctx.policy == VisibilityPolicy::RevealWhileEditing && mode.is_editing();
        let info = &doc.personal_info;

        let header = HeaderView {
            name: mode.field(&info.name),
            title: mode.field(&info.title),
            picture: PictureView {
                src: info.profile_picture.clone().filter(|src| !src.is_empty()),
                alt: info.name.clone(),
                can_replace: mode.is_editing(),
            },
            contact: sections
                .contact
                .then(|| contact_view(doc, mode, reveal_empty)),
            social: sections
                .social
                .then(|| social_view(doc, mode, reveal_empty)),
        };

        let footer = FooterView {
            contact: has_contact_info(doc).then(|| contact_view(doc, EditMode::Viewing, false)),
            social: has_social_links(doc).then(|| social_view(doc, EditMode::Viewing, false)),
            copyright: format!("© {} {}. All rights reserved.", ctx.year, info.name),
        };

        Self {
            theme: ctx.theme,
            mode,
            sections,
            header,
            summary: sections
                .summary
                .then(|| mode.multiline_field(doc.summary.as_deref().unwrap_or_default())),
            experience: sections.experience.then(|| doc.experience.clone()),
            projects: sections
                .projects
                .then(|| doc.projects.iter().map(project_view).collect()),
            skills: sections.skills.then(|| skills_view(doc, mode)),
            certifications: sections.certifications.then(|| doc.certifications.clone()),
            footer,
        }
    }
}

fn contact_view(doc: &PortfolioDocument, mode: EditMode, reveal_empty: bool) -> ContactView {
    let info = &doc.personal_info;
    let item = |value: Option<&str>, scheme: Option<&str>| {
        (reveal_empty || is_present(value)).then(|| {
            let value = value.unwrap_or_default();
            ContactItemView {
                field: mode.field(value),
                href: scheme
                    .filter(|_| !value.is_empty())
                    .map(|scheme| format!("{scheme}:{value}")),
            }
        })
    };

    ContactView {
        email: item(info.email.as_deref(), Some("mailto")),
        phone: item(info.phone.as_deref(), Some("tel")),
        location: item(info.location.as_deref(), None),
    }
}

fn social_view(doc: &PortfolioDocument, mode: EditMode, reveal_empty: bool) -> Vec<SocialLinkView> {
    SocialPlatform::ALL
        .iter()
        .filter_map(|platform| {
            let url = doc.social_links.get(*platform);
            (reveal_empty || is_present(url)).then(|| {
                let url = url.unwrap_or_default();
                SocialLinkView {
                    platform: *platform,
                    label: platform.label().to_string(),
                    href: url.to_string(),
                    field: mode.field(url),
                }
            })
        })
        .collect()
}

fn project_view(project: &Project) -> ProjectView {
    ProjectView {
        id: project.id.clone(),
        name: project.name.clone(),
        description: project.description.clone(),
        technologies: project.technologies.clone(),
        link: project.link.clone().filter(|l| !l.is_empty()),
        github: project.github.clone().filter(|l| !l.is_empty()),
    }
}

fn skills_view(doc: &PortfolioDocument, mode: EditMode) -> SkillsView {
    let affordances = mode.skill_affordances();
    SkillsView {
        items: doc
            .skills
            .iter()
            .enumerate()
            .map(|(index, name)| SkillItemView {
                index,
                name: name.clone(),
                removable: affordances.can_remove,
            })
            .collect(),
        affordances,
    }
}
