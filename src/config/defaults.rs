use super::SiteConfig;
use crate::core::socials::default_link_title;
use crate::domain::model::{LocaleInfo, LogoImage, SiteInfo, SocialLink, SocialPlatform};

pub const DEFAULT_LANG: &str = "en";
pub const DEFAULT_SCHEDULED_POST_MARGIN_MS: u64 = 15 * 60 * 1000;

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            website: "https://adrianzinko.com/".to_string(),
            author: "Adrian Zinko".to_string(),
            description: "My modest space on the internet. I write about web development and other things I find interesting.".to_string(),
            title: "Adrian Zinko".to_string(),
            og_image: "astropaper-og.jpg".to_string(),
            light_and_dark_mode: true,
            posts_per_page: 3,
            scheduled_post_margin_ms: DEFAULT_SCHEDULED_POST_MARGIN_MS,
        }
    }
}

/// Used when a config file has no `[locale]` section.
impl Default for LocaleInfo {
    fn default() -> Self {
        Self {
            lang: DEFAULT_LANG.to_string(),
            lang_tag: Vec::new(),
        }
    }
}

impl Default for LogoImage {
    fn default() -> Self {
        Self {
            enable: false,
            svg: true,
            width: 216,
            height: 46,
        }
    }
}

fn social(name: SocialPlatform, href: &str, link_title: String, active: bool) -> SocialLink {
    SocialLink {
        name,
        href: href.to_string(),
        link_title,
        active,
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        let site = SiteInfo::default();
        let title = site.title.as_str();

        let socials = vec![
            // The leading space is part of the published label.
            social(
                SocialPlatform::Github,
                "https://github.com/adrianghub",
                format!(" {} on Github", title),
                true,
            ),
            social(
                SocialPlatform::Instagram,
                "https://www.instagram.com/_drianko",
                default_link_title(SocialPlatform::Instagram, title),
                true,
            ),
            social(
                SocialPlatform::LinkedIn,
                "https://www.linkedin.com/in/adrian-zinko",
                default_link_title(SocialPlatform::LinkedIn, title),
                true,
            ),
            social(
                SocialPlatform::Mail,
                "mailto:az@adrianzinko.com",
                default_link_title(SocialPlatform::Mail, title),
                true,
            ),
            social(
                SocialPlatform::Twitter,
                "https://twitter.com/AdrianZinko",
                default_link_title(SocialPlatform::Twitter, title),
                true,
            ),
            social(
                SocialPlatform::Facebook,
                "https://github.com/adrianghub",
                default_link_title(SocialPlatform::Facebook, title),
                false,
            ),
        ];

        Self {
            site,
            locale: LocaleInfo {
                lang: DEFAULT_LANG.to_string(),
                lang_tag: vec!["en-EN".to_string()],
            },
            logo: LogoImage::default(),
            socials,
        }
    }
}
