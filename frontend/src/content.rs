//! Default page content, kept as data in `content/site.json`.

use serde::Deserialize;
use thiserror::Error;

use crate::models::{
    CompanyValue, MediaItem, NavLink, NavSection, PortfolioProject, SocialLinks, TeamMember,
};

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("site content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate portfolio project id `{0}`")]
    DuplicateProject(String),
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NavbarContent {
    pub logo: String,
    pub links: Vec<NavLink>,
    pub contact_phone: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    pub headline: String,
    pub subheadline: String,
    pub cta_text: String,
    pub items: Vec<MediaItem>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct PortfolioContent {
    pub title: String,
    pub subtitle: String,
    pub projects: Vec<PortfolioProject>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct AboutContent {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub values: Vec<CompanyValue>,
    pub team: Vec<TeamMember>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContactContent {
    pub title: String,
    pub subtitle: String,
    pub background_image: String,
    pub office_lines: Vec<String>,
    pub email: String,
    pub phone: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FooterContent {
    pub company_name: String,
    pub tagline: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub social_links: SocialLinks,
    pub navigation: Vec<NavSection>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SiteContent {
    pub navbar: NavbarContent,
    pub hero: HeroContent,
    pub portfolio: PortfolioContent,
    pub about: AboutContent,
    pub contact: ContactContent,
    pub footer: FooterContent,
}

impl SiteContent {
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_str(raw)?;
        let mut seen = std::collections::HashSet::new();
        for project in &content.portfolio.projects {
            if !seen.insert(project.id.as_str()) {
                return Err(ContentError::DuplicateProject(project.id.clone()));
            }
        }
        Ok(content)
    }

    /// The content compiled into the bundle.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(SITE_JSON)
    }
}
