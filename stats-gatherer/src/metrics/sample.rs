use super::{
    Labels,
    MetricKind,
};

/// One gauge value ready for publication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSample {
    pub name: &'static str,
    pub help: &'static str,
    pub value: u64,
    pub labels: Labels,
}

impl MetricSample {
    pub fn new(kind: MetricKind, value: u64, labels: Labels) -> Self {
        Self {
            name: kind.metric_name(),
            help: kind.help(),
            value,
            labels,
        }
    }
}
