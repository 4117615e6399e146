use crate::{
    collectors::CollectorRegistry,
    error::GatherError,
    gitlab::GroupsApi,
    metrics::{
        group_labels,
        merge_labels,
        Labels,
        MetricKind,
        MetricSample,
    },
};
use gitlab_stats_config::GroupConfig;
use strum::IntoEnumIterator;
use tracing::{
    debug,
    info,
};

/// Runs the enabled collectors of a single group.
pub struct GroupProcessor<'a> {
    api: &'a dyn GroupsApi,
    registry: &'a CollectorRegistry,
    default_labels: &'a Labels,
}

impl<'a> GroupProcessor<'a> {
    pub fn new(api: &'a dyn GroupsApi, registry: &'a CollectorRegistry, default_labels: &'a Labels) -> Self {
        Self {
            api,
            registry,
            default_labels,
        }
    }

    /// Produces one sample per enabled metric, project count before member count.
    ///
    /// The first failing collector aborts the group and its error is returned
    /// unchanged, no retries.
    pub async fn process(&self, group: &GroupConfig) -> Result<Vec<MetricSample>, GatherError> {
        let mut samples = Vec::new();

        for kind in MetricKind::iter() {
            if !kind.is_enabled_for(group) {
                debug!(group_id = %group.id, metric = %kind, "Skipping disabled metric");
                continue;
            }

            let collector = self.registry.get(kind).ok_or(GatherError::MissingCollector(kind))?;
            let value = collector
                .collect(self.api, group)
                .await
                .map_err(|cause| GatherError::Retrieval {
                    group_id: group.id.clone(),
                    kind,
                    cause,
                })?;

            info!(group_id = %group.id, metric = kind.metric_name(), value, "Collected {kind}");

            let labels = merge_labels([self.default_labels, &group_labels(&group.id)]);
            samples.push(MetricSample::new(kind, value, labels));
        }

        Ok(samples)
    }
}
