use super::entities::{
    Certification, Experience, PersonalInfo, PortfolioDocument, Project, SocialLinks,
};

impl Default for PortfolioDocument {
    /// The canonical seed shown before anything has been saved, and whenever
    /// the stored record cannot be decoded.
    fn default() -> Self {
        Self {
            personal_info: PersonalInfo {
                name: "Your Name".to_string(),
                title: "Your Professional Title".to_string(),
                email: Some("your.email@example.com".to_string()),
                phone: Some("+1 (555) 123-4567".to_string()),
                location: Some("Your City, State".to_string()),
                profile_picture: None,
            },
            social_links: SocialLinks {
                github: Some("https://github.com/yourusername".to_string()),
                linkedin: Some("https://linkedin.com/in/yourusername".to_string()),
                twitter: Some("https://twitter.com/yourusername".to_string()),
            },
            summary: Some(
                "A passionate professional with expertise in creating amazing solutions. \
                 Write your compelling summary here."
                    .to_string(),
            ),
            experience: vec![
                Experience {
                    id: "1".to_string(),
                    title: "Senior Developer".to_string(),
                    company: "Amazing Company".to_string(),
                    period: "2022 - Present".to_string(),
                    description: "Led development of innovative solutions and managed a team of developers.".to_string(),
                },
                Experience {
                    id: "2".to_string(),
                    title: "Software Developer".to_string(),
                    company: "Previous Company".to_string(),
                    period: "2020 - 2022".to_string(),
                    description: "Developed and maintained web applications using modern technologies.".to_string(),
                },
            ],
            projects: vec![
                Project {
                    id: "1".to_string(),
                    name: "Project Alpha".to_string(),
                    description: "An innovative web application that solves real-world problems."
                        .to_string(),
                    technologies: strings(&["React", "TypeScript", "Node.js"]),
                    link: Some("https://project-alpha.com".to_string()),
                    github: Some("https://github.com/yourusername/project-alpha".to_string()),
                },
                Project {
                    id: "2".to_string(),
                    name: "Project Beta".to_string(),
                    description: "A mobile-first application with beautiful design and smooth UX."
                        .to_string(),
                    technologies: strings(&["React Native", "Firebase", "Redux"]),
                    link: Some("https://project-beta.com".to_string()),
                    github: None,
                },
            ],
            skills: strings(&[
                "JavaScript",
                "TypeScript",
                "React",
                "Node.js",
                "Python",
                "SQL",
                "AWS",
                "Docker",
            ]),
            certifications: vec![
                Certification {
                    id: "1".to_string(),
                    name: "AWS Certified Developer".to_string(),
                    issuer: "Amazon Web Services".to_string(),
                    date: "2023".to_string(),
                },
                Certification {
                    id: "2".to_string(),
                    name: "React Professional".to_string(),
                    issuer: "Meta".to_string(),
                    date: "2022".to_string(),
                },
            ],
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_document_is_fully_populated() {
        let doc = PortfolioDocument::default();

        assert_eq!(doc.personal_info.name, "Your Name");
        assert!(doc.personal_info.profile_picture.is_none());
        assert_eq!(doc.experience.len(), 2);
        assert_eq!(doc.projects.len(), 2);
        assert_eq!(doc.skills.len(), 8);
        assert_eq!(doc.certifications.len(), 2);
        assert!(doc.projects[1].github.is_none());
    }

    #[test]
    fn default_skills_are_unique() {
        let doc = PortfolioDocument::default();
        let mut sorted = doc.skills.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), doc.skills.len());
    }
}
