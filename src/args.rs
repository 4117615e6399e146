use clap::{
    Parser,
    Subcommand,
};
use gitlab_stats_gatherer::gitlab::DEFAULT_GITLAB_URL;
use std::path::PathBuf;

/// Collect statistics from GitLab groups and push them to a Prometheus Push Gateway.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Scrape statistics from GitLab based on the provided configuration file.
    Scrape(ScrapeArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct ScrapeArgs {
    /// Config file (json or yaml).
    #[arg(short, long)]
    pub config: PathBuf,

    /// GitLab access token.
    #[arg(short, long, env = "GITLAB_ACCESS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Prometheus Push Gateway URL.
    #[arg(short = 'p', long = "pushgateway", env = "PUSHGATEWAY_URL")]
    pub pushgateway_url: Option<String>,

    /// GitLab instance to query.
    #[arg(long, env = "GITLAB_URL", default_value = DEFAULT_GITLAB_URL)]
    pub gitlab_url: String,

    /// Print the collected metrics instead of pushing them.
    #[arg(long)]
    pub dry_run: bool,
}
