use crate::config::SiteConfig;
use crate::domain::model::{SocialLink, SocialPlatform};
use regex::{Captures, Regex};
use std::sync::LazyLock;

pub const TITLE_PLACEHOLDER: &str = "{title}";

/// `{{` and `}}` are literal braces; `{name}` is a placeholder.
static TEMPLATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{|\}\}|\{([A-Za-z_]+)\}").expect("template pattern is valid")
});

/// Template used when a social entry does not set its own `link_title`.
pub fn default_link_template(platform: SocialPlatform) -> String {
    match platform {
        SocialPlatform::Mail => format!("Send an email to {}", TITLE_PLACEHOLDER),
        other => format!("{} on {}", TITLE_PLACEHOLDER, other),
    }
}

/// Composes a link title once; later changes to the site title are not reflected.
/// Unknown placeholders are kept as written.
pub fn format_link_title(template: &str, site_title: &str) -> String {
    TEMPLATE_PATTERN
        .replace_all(template, |caps: &Captures| match caps.get(1) {
            Some(name) if name.as_str() == "title" => site_title.to_string(),
            Some(_) => caps[0].to_string(),
            None => caps[0][..1].to_string(),
        })
        .into_owned()
}

/// Placeholders in `template` other than `{title}`, ignoring escaped braces.
pub fn unknown_placeholders(template: &str) -> Vec<String> {
    TEMPLATE_PATTERN
        .captures_iter(template)
        .filter_map(|caps| caps.get(1).map(|name| (name, caps[0].to_string())))
        .filter(|(name, _)| name.as_str() != "title")
        .map(|(_, placeholder)| placeholder)
        .collect()
}

/// Turns a resolved title back into a template that formats to itself.
pub fn escape_link_title(text: &str) -> String {
    text.replace('{', "{{").replace('}', "}}")
}

pub fn default_link_title(platform: SocialPlatform, site_title: &str) -> String {
    format_link_title(&default_link_template(platform), site_title)
}

impl SiteConfig {
    /// Links to render, in the order they were defined.
    pub fn active_socials(&self) -> impl Iterator<Item = &SocialLink> {
        self.socials.iter().filter(|link| link.active)
    }

    pub fn social(&self, platform: SocialPlatform) -> Option<&SocialLink> {
        self.socials.iter().find(|link| link.name == platform)
    }
}
