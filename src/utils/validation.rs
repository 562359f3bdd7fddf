use crate::utils::error::{ConfigError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

fn parse_url(field_name: &str, url_str: &str) -> Result<Url> {
    if url_str.is_empty() {
        return Err(invalid(field_name, url_str, "URL cannot be empty"));
    }

    Url::parse(url_str).map_err(|e| invalid(field_name, url_str, format!("Invalid URL format: {}", e)))
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    let url = parse_url(field_name, url_str)?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(invalid(
            field_name,
            url_str,
            format!("Unsupported URL scheme: {}", scheme),
        )),
    }
}

/// Social links may also point at a `mailto:` address.
pub fn validate_link_href(field_name: &str, href: &str) -> Result<()> {
    let url = parse_url(field_name, href)?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        "mailto" => {
            let address = url.path();
            if address.is_empty() || !address.contains('@') {
                Err(invalid(field_name, href, "mailto link needs an email address"))
            } else {
                Ok(())
            }
        }
        scheme => Err(invalid(
            field_name,
            href,
            format!("Unsupported URL scheme: {}. Use http, https or mailto", scheme),
        )),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(invalid(field_name, path, "Path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(invalid(field_name, path, "Path contains null bytes"));
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(invalid(
            field_name,
            &value.to_string(),
            format!("Value must be at least {}", min_value),
        ));
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

/// An empty code is allowed; the html `lang` attribute then falls back to "en".
pub fn validate_language_code(field_name: &str, code: &str) -> Result<()> {
    if code.is_empty() {
        return Ok(());
    }
    let len = code.len();
    if !(2..=3).contains(&len) || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(invalid(
            field_name,
            code,
            "Language code must be 2 or 3 ASCII letters",
        ));
    }
    Ok(())
}

/// Checks the shape of a BCP 47 tag: a 2-3 letter language followed by
/// alphanumeric subtags of 1-8 characters, separated by '-'.
pub fn validate_language_tag(field_name: &str, tag: &str) -> Result<()> {
    let mut subtags = tag.split('-');
    let language = subtags.next().unwrap_or_default();
    if validate_language_code(field_name, language).is_err() || language.is_empty() {
        return Err(invalid(
            field_name,
            tag,
            "Language tag must start with a 2 or 3 letter language code",
        ));
    }

    for subtag in subtags {
        if subtag.is_empty()
            || subtag.len() > 8
            || !subtag.chars().all(|c| c.is_ascii_alphanumeric())
        {
            return Err(invalid(
                field_name,
                tag,
                format!("Invalid subtag '{}'", subtag),
            ));
        }
    }

    Ok(())
}
