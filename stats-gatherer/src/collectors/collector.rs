use crate::{
    collectors::{
        MemberCountCollector,
        ProjectCountCollector,
    },
    gitlab::GroupsApi,
    metrics::MetricKind,
};
use eyre::Result;
use gitlab_stats_config::GroupConfig;
use std::{
    collections::BTreeMap,
    fmt,
    future::Future,
    pin::Pin,
};

/// Retrieves a single count for a group
pub trait Collector: Send + Sync {
    /// The metric this collector produces
    fn kind(&self) -> MetricKind;

    /// Collect the value for `group`, reading collector options from its config
    fn collect<'a>(
        &'a self,
        api: &'a dyn GroupsApi,
        group: &'a GroupConfig,
    ) -> Pin<Box<dyn Future<Output = Result<u64>> + Send + 'a>>;
}

/// One collector per metric kind.
pub struct CollectorRegistry {
    collectors: BTreeMap<MetricKind, Box<dyn Collector>>,
}

impl CollectorRegistry {
    pub fn empty() -> Self {
        Self {
            collectors: BTreeMap::new(),
        }
    }

    /// Registers `collector` for its kind, returning the one it replaces.
    pub fn register(&mut self, collector: impl Collector + 'static) -> Option<Box<dyn Collector>> {
        self.collectors.insert(collector.kind(), Box::new(collector))
    }

    pub fn with(mut self, collector: impl Collector + 'static) -> Self {
        self.register(collector);
        self
    }

    pub fn get(&self, kind: MetricKind) -> Option<&dyn Collector> {
        self.collectors.get(&kind).map(|collector| collector.as_ref())
    }

    pub fn kinds(&self) -> impl Iterator<Item = MetricKind> + '_ {
        self.collectors.keys().copied()
    }
}

impl Default for CollectorRegistry {
    fn default() -> Self {
        Self::empty()
            .with(ProjectCountCollector)
            .with(MemberCountCollector)
    }
}

impl fmt::Debug for CollectorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.kinds()).finish()
    }
}
