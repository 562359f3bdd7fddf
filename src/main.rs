use anyhow::Context;
use blog_config::config::cli::{Cli, Command};
use blog_config::utils::logger;
use blog_config::{ConfigError, ConfigProvider, SiteConfig};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    match cli.command {
        Command::Check(source) => {
            let config = load_or_exit(source.load());
            display_config_summary(&config);
            println!("✅ Configuration is valid");
        }
        Command::Export { source, format } => {
            let config = load_or_exit(source.load());
            let rendered = format
                .render(&config)
                .with_context(|| format!("failed to export config as {:?}", format))?;
            println!("{}", rendered);
        }
        Command::Socials { source, all } => {
            let config = load_or_exit(source.load());
            for link in config.socials.iter().filter(|link| all || link.active) {
                let marker = if link.active { " " } else { "-" };
                println!("{} {:<10} {:<45} {}", marker, link.name, link.href, link.link_title);
            }
        }
    }

    Ok(())
}

fn load_or_exit(result: blog_config::Result<SiteConfig>) -> SiteConfig {
    match result {
        Ok(config) => {
            tracing::info!("✅ Configuration loaded and validated successfully");
            config
        }
        Err(e) => exit_with(e),
    }
}

fn exit_with(e: ConfigError) -> ! {
    tracing::error!(
        "❌ Configuration failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.exit_code());
}

fn display_config_summary(config: &SiteConfig) {
    let summary = config.summary();
    println!("📋 Configuration Summary:");
    println!("  Title: {}", summary.title);
    println!("  Website: {}", summary.website);
    println!("  Language: {}", summary.html_lang);
    if let Some(tags) = config.locale.format_tags() {
        println!("  Formatting: {}", tags.join(", "));
    } else {
        println!("  Formatting: runtime default");
    }
    println!("  Posts per page: {}", summary.posts_per_page);
    println!("  Scheduled post margin: {}", summary.scheduled_post_margin);
    println!("  Light/dark mode: {}", config.site().light_and_dark_mode);
    let logo = config.logo();
    if logo.enable {
        let kind = if logo.svg { "svg" } else { "raster" };
        println!("  Logo: {} {}x{}", kind, logo.width, logo.height);
    } else {
        println!("  Logo: disabled (text title)");
    }
    println!(
        "  Social links: {} active of {}",
        summary.active_socials, summary.total_socials
    );
    println!();
}
