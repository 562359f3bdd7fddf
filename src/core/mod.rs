pub mod locale;
pub mod pagination;
pub mod schedule;
pub mod socials;
pub mod urls;

pub use crate::domain::model::{LocaleInfo, LogoImage, SiteInfo, SocialLink, SocialPlatform};
pub use crate::domain::ports::ConfigProvider;
