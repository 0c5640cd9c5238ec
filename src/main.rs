//! Global Scholarships - Entry Point

use clap::{Parser, Subcommand};
use scholar::client::{NewsClient, ScholarshipClient};
use scholar::config::{resolve_config, CliOverrides};
use scholar::state::Theme;
use scholar::view::ColorConfig;
use std::path::PathBuf;
use tracing::info;

/// Global Scholarships - browse the scholarship catalog from the terminal
#[derive(Parser, Debug)]
#[command(name = "scholar")]
#[command(version)]
#[command(about = "Terminal client for the Global Scholarships catalog")]
pub struct Args {
    /// Location to open, e.g. "/scholarships?search=law&page=2" or "/scholarships/42"
    pub location: Option<String>,

    /// Base URL of the scholarship API
    #[arg(long)]
    pub api_url: Option<String>,

    /// URL of the news headlines endpoint (enables the News screen)
    #[arg(long)]
    pub news_url: Option<String>,

    /// Color theme
    #[arg(long, value_parser = ["dark", "light"])]
    pub theme: Option<String>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Optional one-shot command instead of the TUI.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// One-shot commands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Write sitemap XML for the public site
    Sitemap {
        /// Public site URL used in <loc> entries
        #[arg(long)]
        site_url: Option<String>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Args {
    fn overrides(&self) -> Result<CliOverrides, String> {
        let theme = self.theme.as_deref().map(str::parse::<Theme>).transpose()?;
        let site_url = match &self.command {
            Some(Command::Sitemap { site_url, .. }) => site_url.clone(),
            None => None,
        };
        Ok(CliOverrides {
            api_url: self.api_url.clone(),
            news_url: self.news_url.clone(),
            site_url,
            theme,
        })
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = resolve_config(args.config.clone(), args.overrides()?)?;

    scholar::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    match &args.command {
        Some(Command::Sitemap { output, .. }) => {
            let runtime = tokio::runtime::Runtime::new()?;
            let client = ScholarshipClient::new(config.api_url.as_str());
            let news = config.news_url.as_deref().map(NewsClient::new);
            let (scholarships, articles) =
                runtime.block_on(scholar::sitemap::collect(&client, news.as_ref()))?;
            let xml = scholar::sitemap::render_sitemap(&config.site_url, &scholarships, &articles);
            match output {
                Some(path) => {
                    std::fs::write(path, xml)?;
                    info!(path = %path.display(), "Sitemap written");
                }
                None => print!("{}", xml),
            }
        }
        None => {
            let colors = ColorConfig::from_env_and_args(args.no_color);
            let location = scholar::view::run_app(&config, args.location.as_deref(), colors)?;
            info!(%location, "Exited");
            println!("{}", location);
        }
    }

    Ok(())
}
