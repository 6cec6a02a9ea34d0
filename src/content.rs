use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;
use thiserror::Error;

const PORTFOLIO_FILE: &str = "portfolio.json";

static PORTFOLIO: LazyLock<Portfolio> =
    LazyLock::new(|| Portfolio::load().expect("embedded portfolio content should be valid"));

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse content: {0}")]
    ParseError(String),
    #[error("Invalid content: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub tagline: String,
    pub bio: String,
    pub location: String,
    #[serde(default)]
    pub email: Option<String>,
    pub skills: Vec<String>,
}

impl PersonalInfo {
    /// Uppercase initials of the name, used as the header logo.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Personal,
    Professional,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Personal => "personal",
            Category::Professional => "professional",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLinks {
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub live: Option<String>,
    #[serde(default)]
    pub demo: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    GitHub,
    Live,
    Demo,
}

impl LinkKind {
    /// Key reported to analytics as `link_type`.
    pub fn key(&self) -> &'static str {
        match self {
            LinkKind::GitHub => "github",
            LinkKind::Live => "live",
            LinkKind::Demo => "demo",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LinkKind::GitHub => "GitHub",
            LinkKind::Live => "Company Site",
            LinkKind::Demo => "Demo",
        }
    }
}

impl ProjectLinks {
    /// Present links in display order: GitHub, live site, demo.
    pub fn iter(&self) -> impl Iterator<Item = (LinkKind, &str)> {
        [
            (LinkKind::GitHub, &self.github),
            (LinkKind::Live, &self.live),
            (LinkKind::Demo, &self.demo),
        ]
        .into_iter()
        .filter_map(|(kind, url)| url.as_deref().map(|u| (kind, u)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub category: Category,
    pub featured: bool,
    #[serde(default)]
    pub links: ProjectLinks,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SocialPlatform {
    GitHub,
    LinkedIn,
    Twitter,
    Telegram,
    Facebook,
}

impl SocialPlatform {
    pub fn name(&self) -> &'static str {
        match self {
            SocialPlatform::GitHub => "GitHub",
            SocialPlatform::LinkedIn => "LinkedIn",
            SocialPlatform::Twitter => "Twitter",
            SocialPlatform::Telegram => "Telegram",
            SocialPlatform::Facebook => "Facebook",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            SocialPlatform::GitHub => "🐙",
            SocialPlatform::LinkedIn => "💼",
            SocialPlatform::Twitter => "🐦",
            SocialPlatform::Telegram => "✈️",
            SocialPlatform::Facebook => "📘",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: SocialPlatform,
    pub url: String,
}

impl SocialLink {
    /// Display handle derived from the profile URL.
    ///
    /// Username-style platforms show `@name`, the others show the URL path
    /// (e.g. `/in/someone` for LinkedIn).
    pub fn handle(&self) -> String {
        let path = url_path(&self.url);
        match self.platform {
            SocialPlatform::GitHub | SocialPlatform::Twitter | SocialPlatform::Telegram => {
                let name = path.rsplit('/').next().unwrap_or_default();
                format!("@{name}")
            }
            SocialPlatform::LinkedIn | SocialPlatform::Facebook => path.to_string(),
        }
    }
}

fn url_path(url: &str) -> &str {
    let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
    let path = rest.find('/').map_or("", |i| &rest[i..]);
    let path = path.split(['?', '#']).next().unwrap_or_default();
    path.trim_end_matches('/')
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub id: String,
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub personal_info: PersonalInfo,
    pub hero_phrases: Vec<String>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    pub social_links: Vec<SocialLink>,
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experience: Vec<Experience>,
}

impl Portfolio {
    /// Reads and validates the embedded content table.
    pub fn load() -> Result<Self, ContentError> {
        let file = Assets::get(PORTFOLIO_FILE)
            .ok_or_else(|| ContentError::NotFound(PORTFOLIO_FILE.to_string()))?;
        Self::parse(&file.data)
    }

    pub fn parse(raw: &[u8]) -> Result<Self, ContentError> {
        let portfolio: Portfolio =
            serde_json::from_slice(raw).map_err(|e| ContentError::ParseError(e.to_string()))?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.hero_phrases.is_empty() {
            return Err(ContentError::Invalid("hero_phrases is empty".to_string()));
        }
        let mut seen = HashSet::new();
        for project in &self.projects {
            if !seen.insert(project.id.as_str()) {
                return Err(ContentError::Invalid(format!(
                    "duplicate project id: {}",
                    project.id
                )));
            }
        }
        Ok(())
    }
}

/// The process-wide content table, parsed on first access.
pub fn portfolio() -> &'static Portfolio {
    &PORTFOLIO
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_loads() {
        let portfolio = Portfolio::load().expect("embedded content should parse");
        assert_eq!(portfolio.personal_info.name, "Ofry Linkovsky");
        assert!(!portfolio.personal_info.skills.is_empty());
        assert!(!portfolio.hero_phrases.is_empty());
        assert!(!portfolio.projects.is_empty());
        assert!(portfolio
            .projects
            .iter()
            .any(|p| p.category == Category::Professional));
    }

    #[test]
    fn test_initials() {
        assert_eq!(portfolio().personal_info.initials(), "OL");
    }

    #[test]
    fn test_social_handles() {
        let link = |platform, url: &str| SocialLink {
            platform,
            url: url.to_string(),
        };
        assert_eq!(
            link(SocialPlatform::GitHub, "https://github.com/ofryl").handle(),
            "@ofryl"
        );
        assert_eq!(
            link(
                SocialPlatform::LinkedIn,
                "https://www.linkedin.com/in/ofry-linkovsky/"
            )
            .handle(),
            "/in/ofry-linkovsky"
        );
        assert_eq!(
            link(SocialPlatform::Twitter, "https://twitter.com/0fry?lang=en").handle(),
            "@0fry"
        );
        assert_eq!(
            link(SocialPlatform::Facebook, "https://facebook.com/ofryL").handle(),
            "/ofryL"
        );
    }

    #[test]
    fn test_unknown_platform_rejected() {
        let raw = br#"{
            "personal_info": {"name": "A", "tagline": "", "bio": "", "location": "", "skills": []},
            "hero_phrases": ["x"],
            "social_links": [{"platform": "MySpace", "url": "https://myspace.com/a"}],
            "projects": []
        }"#;
        assert!(matches!(
            Portfolio::parse(raw),
            Err(ContentError::ParseError(_))
        ));
    }

    #[test]
    fn test_validation() {
        let raw = br#"{
            "personal_info": {"name": "A", "tagline": "", "bio": "", "location": "", "skills": []},
            "hero_phrases": [],
            "social_links": [],
            "projects": []
        }"#;
        assert!(matches!(Portfolio::parse(raw), Err(ContentError::Invalid(_))));

        let raw = br#"{
            "personal_info": {"name": "A", "tagline": "", "bio": "", "location": "", "skills": []},
            "hero_phrases": ["x"],
            "social_links": [],
            "projects": [
                {"id": "a", "title": "", "description": "", "technologies": [], "category": "personal", "featured": false},
                {"id": "a", "title": "", "description": "", "technologies": [], "category": "professional", "featured": true}
            ]
        }"#;
        assert_eq!(
            Portfolio::parse(raw).unwrap_err(),
            ContentError::Invalid("duplicate project id: a".to_string())
        );
    }

    #[test]
    fn test_project_links_order() {
        let links = ProjectLinks {
            github: Some("g".to_string()),
            live: None,
            demo: Some("d".to_string()),
        };
        let kinds: Vec<_> = links.iter().map(|(k, u)| (k.key(), u)).collect();
        assert_eq!(kinds, vec![("github", "g"), ("demo", "d")]);
        assert_eq!(ProjectLinks::default().iter().count(), 0);
    }
}
