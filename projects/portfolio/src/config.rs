use std::path::PathBuf;

use clap::Parser;
use interfaces_github_repos::index::GITHUB_API_BASE_URL;

/// Host-side settings. What to fetch and which projects qualify lives in
/// [`crate::catalog::Catalog`] and is not configurable here.
#[derive(Debug, Clone, Parser)]
#[command(name = "projects_portfolio", about = "Render featured GitHub projects into a page")]
pub struct Settings {
    /// HTML page whose `#projects-container` element is rewritten in place.
    /// The container markup goes to stdout when omitted.
    #[arg(long, env = "PORTFOLIO_PAGE")]
    pub page: Option<PathBuf>,

    #[arg(long, env = "GITHUB_API_BASE_URL", default_value = GITHUB_API_BASE_URL)]
    pub api_base_url: String,

    /// Filter used when `RUST_LOG` is not set.
    #[arg(long, env = "PORTFOLIO_LOG", default_value = "info")]
    pub log_level: String,
}
