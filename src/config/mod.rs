#[cfg(feature = "cli")]
pub mod cli;
pub mod defaults;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::{LocaleInfo, LogoImage, SiteInfo, SocialLink};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};

/// The complete, resolved configuration of the site.
///
/// Built once (from [`Default`] or a TOML file) and only read afterwards.
/// All link titles are already composed from `site.title`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub site: SiteInfo,
    pub locale: LocaleInfo,
    pub logo: LogoImage,
    pub socials: Vec<SocialLink>,
}

/// Short overview used by the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigSummary {
    pub title: String,
    pub website: String,
    pub html_lang: String,
    pub posts_per_page: usize,
    pub scheduled_post_margin: String,
    pub active_socials: usize,
    pub total_socials: usize,
}

impl SiteConfig {
    pub fn summary(&self) -> ConfigSummary {
        ConfigSummary {
            title: self.site.title.clone(),
            website: self.site.website.clone(),
            html_lang: self.locale.html_lang().to_string(),
            posts_per_page: self.site.posts_per_page,
            scheduled_post_margin: format_margin(self.site.scheduled_post_margin_ms),
            active_socials: self.active_socials().count(),
            total_socials: self.socials.len(),
        }
    }
}

/// Whole minutes as "N min", otherwise seconds or milliseconds.
pub fn format_margin(ms: u64) -> String {
    if ms % 60_000 == 0 {
        format!("{} min", ms / 60_000)
    } else if ms % 1000 == 0 {
        format!("{} s", ms / 1000)
    } else {
        format!("{} ms", ms)
    }
}

impl ConfigProvider for SiteConfig {
    fn site(&self) -> &SiteInfo {
        &self.site
    }

    fn locale(&self) -> &LocaleInfo {
        &self.locale
    }

    fn logo(&self) -> &LogoImage {
        &self.logo
    }

    fn socials(&self) -> &[SocialLink] {
        &self.socials
    }
}

impl Validate for SiteInfo {
    fn validate(&self) -> Result<()> {
        validation::validate_url("site.website", &self.website)?;
        validation::validate_non_empty_string("site.title", &self.title)?;
        validation::validate_non_empty_string("site.author", &self.author)?;
        validation::validate_path("site.og_image", &self.og_image)?;
        validation::validate_positive_number("site.posts_per_page", self.posts_per_page as u64, 1)?;
        Ok(())
    }
}

impl Validate for LocaleInfo {
    fn validate(&self) -> Result<()> {
        validation::validate_language_code("locale.lang", &self.lang)?;
        for (i, tag) in self.lang_tag.iter().enumerate() {
            validation::validate_language_tag(&format!("locale.lang_tag[{}]", i), tag)?;
        }
        Ok(())
    }
}

impl Validate for LogoImage {
    fn validate(&self) -> Result<()> {
        validation::validate_positive_number("logo.width", u64::from(self.width), 1)?;
        validation::validate_positive_number("logo.height", u64::from(self.height), 1)?;
        Ok(())
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        self.site.validate()?;
        self.locale.validate()?;
        self.logo.validate()?;

        for (i, link) in self.socials.iter().enumerate() {
            validation::validate_link_href(&format!("socials[{}].href", i), &link.href)?;
            validation::validate_non_empty_string(
                &format!("socials[{}].link_title", i),
                &link.link_title,
            )?;
        }

        Ok(())
    }
}
