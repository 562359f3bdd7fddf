use super::SiteConfig;
use crate::utils::error::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "blog-config")]
#[command(about = "Check and export the configuration of a blog", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Load, validate and summarize the configuration
    Check(ConfigSource),

    /// Print the resolved configuration
    Export {
        #[command(flatten)]
        source: ConfigSource,

        #[arg(short, long, value_enum, default_value_t = ExportFormat::Toml)]
        format: ExportFormat,
    },

    /// List social links
    Socials {
        #[command(flatten)]
        source: ConfigSource,

        /// Include inactive links
        #[arg(short, long)]
        all: bool,
    },
}

#[derive(Debug, Clone, Args)]
pub struct ConfigSource {
    /// Path to a TOML config file; the built-in config is used when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl ConfigSource {
    pub fn load(&self) -> Result<SiteConfig> {
        match &self.config {
            Some(path) => SiteConfig::from_file(path),
            None => {
                tracing::info!("No config file given, using the built-in config");
                Ok(SiteConfig::default())
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Toml,
    Json,
}

impl ExportFormat {
    pub fn render(self, config: &SiteConfig) -> Result<String> {
        match self {
            ExportFormat::Toml => config.to_toml_string(),
            ExportFormat::Json => config.to_json_string(),
        }
    }
}
