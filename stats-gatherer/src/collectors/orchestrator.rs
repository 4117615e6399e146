use crate::{
    collectors::{
        CollectorRegistry,
        GroupProcessor,
    },
    error::GatherError,
    gitlab::GroupsApi,
    metrics::MetricSample,
    publisher::Publisher,
};
use gitlab_stats_config::Config;
use strum::Display;
use tracing::{
    debug,
    info,
    warn,
};

/// Lifecycle of a run. There are no checkpoints in between: either every
/// group was collected and pushed, or nothing was.
#[derive(Debug, Default, Clone, Copy, Display, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum RunState {
    #[default]
    NotStarted,
    Running,
    Completed,
    Aborted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub groups: usize,
    pub samples: usize,
}

/// Drives the groups of a configuration through the collectors and hands the
/// resulting batch to the publisher.
pub struct Orchestrator {
    api: Box<dyn GroupsApi>,
    registry: CollectorRegistry,
    publisher: Box<dyn Publisher>,
    state: RunState,
}

impl Orchestrator {
    /// Create an orchestrator using the default collectors
    pub fn new(api: impl GroupsApi + 'static, publisher: impl Publisher + 'static) -> Self {
        Self {
            api: Box::new(api),
            registry: CollectorRegistry::default(),
            publisher: Box::new(publisher),
            state: RunState::NotStarted,
        }
    }

    pub fn with_registry(mut self, registry: CollectorRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Collects every enabled metric of every group in configuration order and
    /// publishes the batch.
    ///
    /// Any collector failure aborts the run immediately: remaining groups are
    /// not visited and the publisher is not called.
    pub async fn run(&mut self, config: &Config) -> Result<RunSummary, GatherError> {
        self.state = RunState::Running;
        info!(groups = config.groups.len(), "Starting collection");

        let result = self.collect_and_publish(config).await;

        self.state = match &result {
            Ok(summary) => {
                info!(groups = summary.groups, samples = summary.samples, "Run completed");
                RunState::Completed
            }
            Err(err) => {
                debug!(group_id = err.group_id(), "Run aborted");
                RunState::Aborted
            }
        };

        result
    }

    async fn collect_and_publish(&self, config: &Config) -> Result<RunSummary, GatherError> {
        let samples = self.collect(config).await?;

        if samples.is_empty() {
            warn!("No metrics enabled, pushing an empty batch");
        }

        self.publisher.publish(&samples).await.map_err(GatherError::Publish)?;

        Ok(RunSummary {
            groups: config.groups.len(),
            samples: samples.len(),
        })
    }

    /// Collects the batch without publishing it. Stops at the first failing group.
    pub async fn collect(&self, config: &Config) -> Result<Vec<MetricSample>, GatherError> {
        let processor = GroupProcessor::new(self.api.as_ref(), &self.registry, &config.default_labels);

        let mut samples = Vec::new();
        for group in &config.groups {
            samples.extend(processor.process(group).await?);
        }
        Ok(samples)
    }
}
