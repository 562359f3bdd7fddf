use crate::domain::model::SiteInfo;
use crate::utils::error::{ConfigError, Result};
use url::Url;

impl SiteInfo {
    fn base_url(&self) -> Result<Url> {
        Url::parse(&self.website).map_err(|e| ConfigError::InvalidConfigValueError {
            field: "site.website".to_string(),
            value: self.website.clone(),
            reason: format!("Invalid URL format: {}", e),
        })
    }

    /// Absolute URL of a site-relative path such as `posts/hello/`.
    pub fn page_url(&self, path: &str) -> Result<Url> {
        self.base_url()?
            .join(path.trim_start_matches('/'))
            .map_err(|e| ConfigError::InvalidConfigValueError {
                field: "path".to_string(),
                value: path.to_string(),
                reason: e.to_string(),
            })
    }

    pub fn og_image_url(&self) -> Result<Url> {
        self.page_url(&self.og_image)
    }
}
