use super::SiteConfig;
use crate::core::socials::{
    default_link_template, escape_link_title, format_link_title, unknown_placeholders,
    TITLE_PLACEHOLDER,
};
use crate::domain::model::{LocaleInfo, LogoImage, SiteInfo, SocialLink, SocialPlatform};
use crate::utils::error::{ConfigError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

/// `$${NAME}` is an escaped, literal `${NAME}`.
static ENV_VAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\$\{([^}]+)\}|\$\{([^}]+)\}").expect("env var pattern is valid")
});

/// On-disk shape of the config. Social titles are still templates here.
#[derive(Debug, Clone, Deserialize)]
struct SiteConfigFile {
    site: SiteInfo,
    #[serde(default)]
    locale: LocaleInfo,
    #[serde(default)]
    logo: LogoImage,
    #[serde(default)]
    socials: Vec<SocialLinkEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLinkEntry {
    /// Platform display name, checked against [`SocialPlatform::all`] on resolve.
    pub name: String,
    pub href: String,
    /// May contain `{title}`; a per-platform template is used when absent.
    pub link_title: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl SocialLinkEntry {
    fn resolve(self, index: usize, site_title: &str) -> Result<SocialLink> {
        let name: SocialPlatform = self.name.parse().map_err(|_| {
            ConfigError::UnknownPlatformError {
                field: format!("socials[{}].name", index),
                name: self.name.clone(),
            }
        })?;

        let template = self
            .link_title
            .unwrap_or_else(|| default_link_template(name));

        if let Some(placeholder) = unknown_placeholders(&template).into_iter().next() {
            return Err(ConfigError::ConfigValidationError {
                field: format!("socials[{}].link_title", index),
                message: format!(
                    "Unknown placeholder {} (only {} is supported, write {{{{ }}}} for literal braces)",
                    placeholder, TITLE_PLACEHOLDER
                ),
            });
        }

        let link_title = format_link_title(&template, site_title);
        tracing::debug!("socials[{}] {} -> {:?}", index, name, link_title);

        Ok(SocialLink {
            name,
            href: self.href,
            link_title,
            active: self.active,
        })
    }
}

impl SiteConfigFile {
    fn resolve(self) -> Result<SiteConfig> {
        let socials = self
            .socials
            .into_iter()
            .enumerate()
            .map(|(i, entry)| entry.resolve(i, &self.site.title))
            .collect::<Result<Vec<_>>>()?;

        for (first, dup) in shared_hrefs(&socials) {
            tracing::warn!(
                "socials[{}] ({}) shares its href with socials[{}]: {}",
                dup,
                socials[dup].name,
                first,
                socials[dup].href
            );
        }

        Ok(SiteConfig {
            site: self.site,
            locale: self.locale,
            logo: self.logo,
            socials,
        })
    }
}

/// Pairs of `(first, later)` indices whose links point at the same href.
pub fn shared_hrefs(socials: &[SocialLink]) -> Vec<(usize, usize)> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    let mut shared = Vec::new();
    for (i, link) in socials.iter().enumerate() {
        match seen.get(link.href.as_str()) {
            Some(&first) => shared.push((first, i)),
            None => {
                seen.insert(link.href.as_str(), i);
            }
        }
    }
    shared
}

impl SiteConfig {
    /// Loads and validates a config from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        tracing::info!("Loading site config from {}", path.as_ref().display());
        let content = std::fs::read_to_string(&path).map_err(ConfigError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses and validates a config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config = Self::parse_toml_str(content)?;
        config.validate()?;
        tracing::info!(
            "Site config for '{}' loaded ({} social links)",
            config.site.title,
            config.socials.len()
        );
        Ok(config)
    }

    /// Parses TOML text and resolves link titles, without validating values.
    pub fn parse_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content);
        let file: SiteConfigFile = toml::from_str(&processed_content)?;
        file.resolve()
    }

    /// TOML that loads back into an equal config: link titles are written
    /// as brace-escaped templates and `${` is escaped as `$${`.
    pub fn to_toml_string(&self) -> Result<String> {
        let mut escaped = self.clone();
        for link in &mut escaped.socials {
            link.link_title = escape_link_title(&link.link_title);
        }
        Ok(toml::to_string(&escaped)?.replace("${", "$${"))
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Replaces `${VAR}` with the variable's value. Unset variables are kept as written.
fn substitute_env_vars(content: &str) -> String {
    ENV_VAR_PATTERN
        .replace_all(content, |caps: &regex::Captures| {
            if let Some(escaped) = caps.get(1) {
                return format!("${{{}}}", escaped.as_str());
            }
            let var_name = &caps[2];
            match std::env::var(var_name) {
                Ok(value) => {
                    tracing::debug!("Substituted ${{{}}}", var_name);
                    value
                }
                Err(_) => format!("${{{}}}", var_name),
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const BASIC: &str = r#"
[site]
website = "https://example.com/"
author = "Jane Doe"
desc = "Notes"
title = "Jane Doe"
og_image = "og.jpg"
light_and_dark_mode = false
post_per_page = 5
scheduled_post_margin_ms = 60000

[locale]
lang = "de"
lang_tag = ["de-DE", "en-US"]

[[socials]]
name = "Github"
href = "https://github.com/jane"

[[socials]]
name = "Mail"
href = "mailto:jane@example.com"
active = false

[[socials]]
name = "Mastodon"
href = "https://mastodon.social/@jane"
link_title = "Follow {title} on Mastodon"
"#;

    #[test]
    fn test_parse_basic_toml_config() {
        let config = SiteConfig::from_toml_str(BASIC).unwrap();

        assert_eq!(config.site.description, "Notes");
        assert_eq!(config.site.posts_per_page, 5);
        assert_eq!(config.locale.lang_tag, vec!["de-DE", "en-US"]);
        assert_eq!(config.logo, LogoImage::default());
        assert_eq!(config.socials.len(), 3);
        assert_eq!(config.socials[0].link_title, "Jane Doe on Github");
        assert!(config.socials[0].active);
        assert_eq!(config.socials[1].link_title, "Send an email to Jane Doe");
        assert!(!config.socials[1].active);
        assert_eq!(config.socials[2].link_title, "Follow Jane Doe on Mastodon");
    }

    #[test]
    fn test_missing_locale_uses_defaults() {
        let content = r#"
[site]
website = "https://example.com/"
author = "A"
description = ""
title = "A"
og_image = "og.jpg"
light_and_dark_mode = true
posts_per_page = 1
scheduled_post_margin_ms = 0
"#;
        let config = SiteConfig::from_toml_str(content).unwrap();
        assert_eq!(config.locale.lang, "en");
        assert!(config.locale.lang_tag.is_empty());
        assert!(config.socials.is_empty());
    }

    #[test]
    fn test_unknown_platform_is_rejected() {
        let content = BASIC.replace("name = \"Mastodon\"", "name = \"MySpace\"");
        let err = SiteConfig::from_toml_str(&content).unwrap_err();
        match &err {
            ConfigError::UnknownPlatformError { field, name } => {
                assert_eq!(field, "socials[2].name");
                assert_eq!(name, "MySpace");
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(err.user_friendly_message().contains("MySpace"));
        assert!(err.recovery_suggestion().contains("Mastodon"));
    }

    #[test]
    fn test_braces_in_title_survive_round_trip() {
        let content = BASIC.replace("title = \"Jane Doe\"", "title = \"Jane {dev} Doe\"");
        let config = SiteConfig::from_toml_str(&content).unwrap();
        assert_eq!(config.socials[0].link_title, "Jane {dev} Doe on Github");

        let reloaded = SiteConfig::from_toml_str(&config.to_toml_string().unwrap()).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_literal_dollar_braces_survive_round_trip() {
        std::env::set_var("BLOG_CONFIG_TEST_SHELL_HOME", "/root");

        let mut config = SiteConfig::default();
        config.site.description = "Writing about ${BLOG_CONFIG_TEST_SHELL_HOME} in shell".to_string();
        let reloaded = SiteConfig::from_toml_str(&config.to_toml_string().unwrap()).unwrap();
        assert_eq!(reloaded, config);

        std::env::remove_var("BLOG_CONFIG_TEST_SHELL_HOME");
    }

    #[test]
    fn test_escaped_env_var_is_literal() {
        std::env::set_var("BLOG_CONFIG_TEST_ESCAPED", "value");
        assert_eq!(
            substitute_env_vars("a = \"$${BLOG_CONFIG_TEST_ESCAPED}\" b = \"${BLOG_CONFIG_TEST_ESCAPED}\""),
            "a = \"${BLOG_CONFIG_TEST_ESCAPED}\" b = \"value\""
        );
        std::env::remove_var("BLOG_CONFIG_TEST_ESCAPED");
    }

    #[test]
    fn test_shared_hrefs_in_default_config() {
        let config = SiteConfig::default();
        assert_eq!(shared_hrefs(&config.socials), vec![(0, 5)]);
    }

    #[test]
    fn test_shared_hrefs_after_load() {
        let content = BASIC.replace(
            "href = \"https://mastodon.social/@jane\"",
            "href = \"https://github.com/jane\"",
        );
        let config = SiteConfig::from_toml_str(&content).unwrap();
        assert_eq!(shared_hrefs(&config.socials), vec![(0, 2)]);
    }

    #[test]
    fn test_unknown_placeholder_is_rejected() {
        let content = BASIC.replace("Follow {title}", "Follow {author}");
        match SiteConfig::from_toml_str(&content) {
            Err(ConfigError::ConfigValidationError { field, .. }) => {
                assert_eq!(field, "socials[2].link_title")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("BLOG_CONFIG_TEST_WEBSITE", "https://env.example.org/");

        let content = BASIC.replace(
            "website = \"https://example.com/\"",
            "website = \"${BLOG_CONFIG_TEST_WEBSITE}\"",
        );
        let config = SiteConfig::from_toml_str(&content).unwrap();
        assert_eq!(config.site.website, "https://env.example.org/");

        std::env::remove_var("BLOG_CONFIG_TEST_WEBSITE");
    }

    #[test]
    fn test_unset_env_var_is_left_in_place() {
        assert_eq!(
            substitute_env_vars("x = \"${BLOG_CONFIG_SURELY_UNSET_VAR}\""),
            "x = \"${BLOG_CONFIG_SURELY_UNSET_VAR}\""
        );
    }

    #[test]
    fn test_validation_runs_on_load() {
        let content = BASIC.replace("post_per_page = 5", "post_per_page = 0");
        assert!(SiteConfig::parse_toml_str(&content).is_ok());
        assert!(SiteConfig::from_toml_str(&content).is_err());
    }

    #[test]
    fn test_default_config_round_trips_through_toml() {
        let config = SiteConfig::default();
        let text = config.to_toml_string().unwrap();
        let parsed = SiteConfig::from_toml_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(BASIC.as_bytes()).unwrap();

        let config = SiteConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.site.title, "Jane Doe");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = SiteConfig::from_file("/definitely/not/here/site.toml").unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
