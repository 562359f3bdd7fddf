use crate::utils::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identity and display preferences of the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteInfo {
    /// Absolute URL of the deployed site, e.g. `https://example.com/`.
    pub website: String,
    pub author: String,
    #[serde(alias = "desc")]
    pub description: String,
    pub title: String,
    /// File name of the default social preview image.
    #[serde(alias = "og_image_path")]
    pub og_image: String,
    pub light_and_dark_mode: bool,
    #[serde(alias = "post_per_page")]
    pub posts_per_page: usize,
    /// How far ahead of `now` a post may be dated and still count as published.
    pub scheduled_post_margin_ms: u64,
}

/// Language settings used for the html `lang` attribute and date formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleInfo {
    #[serde(default)]
    pub lang: String,
    /// BCP 47 tags in order of preference. Empty means the runtime default.
    #[serde(default)]
    pub lang_tag: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoImage {
    pub enable: bool,
    pub svg: bool,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: SocialPlatform,
    pub href: String,
    pub link_title: String,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SocialPlatform {
    Github,
    Facebook,
    Instagram,
    LinkedIn,
    Mail,
    Twitter,
    Twitch,
    YouTube,
    WhatsApp,
    Snapchat,
    Pinterest,
    TikTok,
    CodePen,
    Discord,
    GitLab,
    Reddit,
    Skype,
    Steam,
    Telegram,
    Mastodon,
}

const ALL_PLATFORMS: [SocialPlatform; 20] = [
    SocialPlatform::Github,
    SocialPlatform::Facebook,
    SocialPlatform::Instagram,
    SocialPlatform::LinkedIn,
    SocialPlatform::Mail,
    SocialPlatform::Twitter,
    SocialPlatform::Twitch,
    SocialPlatform::YouTube,
    SocialPlatform::WhatsApp,
    SocialPlatform::Snapchat,
    SocialPlatform::Pinterest,
    SocialPlatform::TikTok,
    SocialPlatform::CodePen,
    SocialPlatform::Discord,
    SocialPlatform::GitLab,
    SocialPlatform::Reddit,
    SocialPlatform::Skype,
    SocialPlatform::Steam,
    SocialPlatform::Telegram,
    SocialPlatform::Mastodon,
];

impl SocialPlatform {
    pub fn all() -> &'static [SocialPlatform] {
        &ALL_PLATFORMS
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SocialPlatform::Github => "Github",
            SocialPlatform::Facebook => "Facebook",
            SocialPlatform::Instagram => "Instagram",
            SocialPlatform::LinkedIn => "LinkedIn",
            SocialPlatform::Mail => "Mail",
            SocialPlatform::Twitter => "Twitter",
            SocialPlatform::Twitch => "Twitch",
            SocialPlatform::YouTube => "YouTube",
            SocialPlatform::WhatsApp => "WhatsApp",
            SocialPlatform::Snapchat => "Snapchat",
            SocialPlatform::Pinterest => "Pinterest",
            SocialPlatform::TikTok => "TikTok",
            SocialPlatform::CodePen => "CodePen",
            SocialPlatform::Discord => "Discord",
            SocialPlatform::GitLab => "GitLab",
            SocialPlatform::Reddit => "Reddit",
            SocialPlatform::Skype => "Skype",
            SocialPlatform::Steam => "Steam",
            SocialPlatform::Telegram => "Telegram",
            SocialPlatform::Mastodon => "Mastodon",
        }
    }
}

impl fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SocialPlatform {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_PLATFORMS
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownPlatformError {
                field: "name".to_string(),
                name: s.to_string(),
            })
    }
}

impl TryFrom<String> for SocialPlatform {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SocialPlatform> for String {
    fn from(platform: SocialPlatform) -> Self {
        platform.as_str().to_string()
    }
}
