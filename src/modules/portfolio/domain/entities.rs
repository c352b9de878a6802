use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The whole portfolio held in memory and mirrored to the local store.
///
/// Field names serialize in camelCase so a previously stored record
/// (`personalInfo`, `socialLinks`, ...) decodes without translation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioDocument {
    pub personal_info: PersonalInfo,
    pub social_links: SocialLinks,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub skills: Vec<String>,
    pub certifications: Vec<Certification>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Embedded image encoding, usually a `data:` URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, ToSchema)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Experience {
    pub id: String,
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Certification {
    pub id: String,
    pub name: String,
    pub issuer: String,
    /// Free text ("2023", "March 2022", ...).
    pub date: String,
}

/// Scalar fields of [`PersonalInfo`] addressable by an edit.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum PersonalField {
    Name,
    Title,
    Email,
    Phone,
    Location,
    ProfilePicture,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Github,
    Linkedin,
    Twitter,
}

impl SocialPlatform {
    pub const ALL: [SocialPlatform; 3] = [
        SocialPlatform::Github,
        SocialPlatform::Linkedin,
        SocialPlatform::Twitter,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SocialPlatform::Github => "GitHub",
            SocialPlatform::Linkedin => "LinkedIn",
            SocialPlatform::Twitter => "Twitter",
        }
    }
}

impl SocialLinks {
    pub fn get(&self, platform: SocialPlatform) -> Option<&str> {
        match platform {
            SocialPlatform::Github => self.github.as_deref(),
            SocialPlatform::Linkedin => self.linkedin.as_deref(),
            SocialPlatform::Twitter => self.twitter.as_deref(),
        }
    }
}

/// `true` when an optional text field holds something worth rendering.
pub fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_record_with_camel_case_keys_and_missing_optionals() {
        let raw = json!({
            "personalInfo": { "name": "Grace Hopper", "title": "Rear Admiral" },
            "socialLinks": {},
            "experience": [],
            "projects": [
                {
                    "id": "p1",
                    "name": "COBOL",
                    "description": "Business language",
                    "technologies": ["Mainframe"]
                }
            ],
            "skills": ["Compilers"],
            "certifications": []
        });

        let doc: PortfolioDocument = serde_json::from_value(raw).unwrap();

        assert_eq!(doc.personal_info.name, "Grace Hopper");
        assert_eq!(doc.personal_info.email, None);
        assert_eq!(doc.summary, None);
        assert_eq!(doc.projects[0].link, None);
        assert_eq!(doc.social_links, SocialLinks::default());
    }

    #[test]
    fn rejects_record_without_required_lists() {
        let raw = json!({
            "personalInfo": { "name": "Grace Hopper", "title": "Rear Admiral" },
            "socialLinks": {}
        });

        assert!(serde_json::from_value::<PortfolioDocument>(raw).is_err());
    }

    #[test]
    fn personal_field_uses_camel_case_names() {
        let field: PersonalField = serde_json::from_value(json!("profilePicture")).unwrap();
        assert_eq!(field, PersonalField::ProfilePicture);
        assert!(serde_json::from_value::<PersonalField>(json!("nickname")).is_err());
    }

    #[test]
    fn is_present_treats_empty_string_as_absent() {
        assert!(!is_present(None));
        assert!(!is_present(Some("")));
        assert!(is_present(Some(" ")));
        assert!(is_present(Some("ada@example.com")));
    }
}
