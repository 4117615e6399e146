use crate::metrics::MetricKind;

#[derive(thiserror::Error, Debug)]
pub enum GatherError {
    #[error("Failed to collect {kind} for group {group_id}: {cause:#}")]
    Retrieval {
        group_id: String,
        kind: MetricKind,
        cause: eyre::Report,
    },
    #[error("No collector registered for {0}")]
    MissingCollector(MetricKind),
    #[error("Failed to push metrics to Push Gateway: {0:#}")]
    Publish(eyre::Report),
}

impl GatherError {
    pub fn group_id(&self) -> Option<&str> {
        match self {
            GatherError::Retrieval { group_id, .. } => Some(group_id),
            _ => None,
        }
    }
}
