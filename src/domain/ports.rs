use crate::domain::model::{LocaleInfo, LogoImage, SiteInfo, SocialLink};

/// Read access to a loaded site configuration.
pub trait ConfigProvider: Send + Sync {
    fn site(&self) -> &SiteInfo;
    fn locale(&self) -> &LocaleInfo;
    fn logo(&self) -> &LogoImage;
    fn socials(&self) -> &[SocialLink];
}
