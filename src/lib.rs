pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::Cli;

pub use config::{ConfigSummary, SiteConfig};
pub use core::{ConfigProvider, LocaleInfo, LogoImage, SiteInfo, SocialLink, SocialPlatform};
pub use utils::error::{ConfigError, Result};
