use crate::{
    collectors::Collector,
    gitlab::GroupsApi,
    metrics::MetricKind,
};
use eyre::Result;
use gitlab_stats_config::{
    GroupConfig,
    ProjectCountConfig,
};
use std::{
    future::Future,
    pin::Pin,
};

/// Counts the projects owned by a group, honoring `include_subgroups`
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectCountCollector;

impl Collector for ProjectCountCollector {
    fn kind(&self) -> MetricKind {
        MetricKind::ProjectCount
    }

    fn collect<'a>(
        &'a self,
        api: &'a dyn GroupsApi,
        group: &'a GroupConfig,
    ) -> Pin<Box<dyn Future<Output = Result<u64>> + Send + 'a>> {
        Box::pin(async move {
            let include_subgroups = group
                .project_count
                .as_ref()
                .is_some_and(ProjectCountConfig::include_subgroups);
            api.count_projects(&group.id, include_subgroups).await
        })
    }
}
