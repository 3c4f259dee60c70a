use serde::Deserialize;

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

/// One background layer of the hero carousel.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct MediaItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    #[serde(rename = "src")]
    pub source: String,
    #[serde(default, rename = "alt")]
    pub alt_text: Option<String>,
}

impl MediaItem {
    pub fn image(id: &str, source: &str) -> Self {
        Self {
            id: id.to_string(),
            kind: MediaKind::Image,
            source: source.to_string(),
            alt_text: None,
        }
    }

    pub fn video(id: &str, source: &str) -> Self {
        Self {
            id: id.to_string(),
            kind: MediaKind::Video,
            source: source.to_string(),
            alt_text: None,
        }
    }

    pub fn with_alt(mut self, alt: &str) -> Self {
        self.alt_text = Some(alt.to_string());
        self
    }

    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct CaseStudy {
    pub title: String,
    pub client: String,
    pub description: String,
    pub challenge: String,
    pub solution: String,
    pub results: String,
    pub images: Vec<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct PortfolioProject {
    pub id: String,
    #[serde(alias = "image")]
    pub thumbnail: String,
    pub title: String,
    pub category: String,
    #[serde(alias = "description")]
    pub summary: String,
    #[serde(rename = "caseStudy")]
    pub case_study: CaseStudy,
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ValueIcon {
    #[default]
    Lightbulb,
    Target,
    Users,
    Award,
}

impl ValueIcon {
    /// Unknown keys render as a lightbulb.
    pub fn from_key(key: &str) -> Self {
        match key {
            "target" => ValueIcon::Target,
            "users" => ValueIcon::Users,
            "award" => ValueIcon::Award,
            _ => ValueIcon::Lightbulb,
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            ValueIcon::Lightbulb => "💡",
            ValueIcon::Target => "🎯",
            ValueIcon::Users => "👥",
            ValueIcon::Award => "🏆",
        }
    }
}

fn icon_from_key<'de, D>(deserializer: D) -> Result<ValueIcon, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let key = String::deserialize(deserializer)?;
    Ok(ValueIcon::from_key(&key))
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct CompanyValue {
    #[serde(deserialize_with = "icon_from_key")]
    pub icon: ValueIcon,
    pub title: String,
    pub description: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub image: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct NavSection {
    pub title: String,
    pub links: Vec<NavLink>,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
pub struct SocialLinks {
    pub facebook: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
}

impl SocialLinks {
    /// (label, url) pairs for the networks that are set.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        [
            ("Facebook", &self.facebook),
            ("Twitter", &self.twitter),
            ("Instagram", &self.instagram),
            ("LinkedIn", &self.linkedin),
        ]
        .into_iter()
        .filter_map(|(label, url)| url.as_deref().map(|u| (label, u)))
        .collect()
    }
}
