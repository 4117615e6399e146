use crate::{
    collectors::Collector,
    gitlab::GroupsApi,
    metrics::MetricKind,
};
use eyre::Result;
use gitlab_stats_config::GroupConfig;
use std::{
    future::Future,
    pin::Pin,
};

/// Counts the direct members of a group
#[derive(Debug, Clone, Copy, Default)]
pub struct MemberCountCollector;

impl Collector for MemberCountCollector {
    fn kind(&self) -> MetricKind {
        MetricKind::MemberCount
    }

    fn collect<'a>(
        &'a self,
        api: &'a dyn GroupsApi,
        group: &'a GroupConfig,
    ) -> Pin<Box<dyn Future<Output = Result<u64>> + Send + 'a>> {
        api.count_members(&group.id)
    }
}
