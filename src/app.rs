use crate::args::{
    Args,
    Command,
    ScrapeArgs,
};
use color_eyre::Result;
use gitlab_stats_config::{
    parse_config,
    required,
    Config,
};
use gitlab_stats_gatherer::{
    GitlabClient,
    Orchestrator,
    PushgatewayPublisher,
    StdoutPublisher,
};

pub struct App {
    args: Args,
}

impl App {
    pub fn new(args: Args) -> Result<Self> {
        Ok(Self { args })
    }

    pub async fn run(self) -> Result<()> {
        match self.args.command {
            Command::Scrape(args) => scrape(args).await,
        }
    }
}

/// Everything that can fail without touching the network is checked before
/// the first request.
#[instrument(level = "debug", skip_all, fields(config = ?args.config))]
async fn scrape(args: ScrapeArgs) -> Result<()> {
    let config: Config = parse_config(&args.config)?;
    config.validate()?;

    let token = required(
        args.token,
        "an access token",
        "token",
        "GITLAB_ACCESS_TOKEN",
    )?;
    let client = GitlabClient::new(&args.gitlab_url, token)?;
    debug!(api_url = %client.api_url(), "Using GitLab API");

    let mut orchestrator = if args.dry_run {
        info!("Dry run, metrics are printed instead of pushed");
        Orchestrator::new(client, StdoutPublisher)
    } else {
        let pushgateway_url = required(
            args.pushgateway_url,
            "a Push Gateway URL",
            "pushgateway",
            "PUSHGATEWAY_URL",
        )?;
        Orchestrator::new(client, PushgatewayPublisher::new(&pushgateway_url)?)
    };

    orchestrator.run(&config).await?;
    Ok(())
}
