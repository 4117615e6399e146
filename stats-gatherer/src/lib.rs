//! # GitLab Stats Gatherer
//!
//! Collects group statistics from GitLab and publishes them as gauges to a
//! Prometheus Pushgateway.
//!
//! ## Architecture
//!
//! - **`metrics`**: metric kinds, samples and label merging
//! - **`gitlab`**: the `GroupsApi` capability and its REST implementation
//! - **`collectors`**: one collector per metric kind, the registry mapping
//!   kinds to collectors, the per-group processor and the `Orchestrator`
//!   driving a whole run
//! - **`publisher`**: serializes the batch and hands it to the gateway
//!
//! A run is all-or-nothing: the first failing collector aborts it and
//! nothing is pushed.

pub mod collectors;
pub mod error;
pub mod gitlab;
pub mod metrics;
pub mod publisher;

#[cfg(test)]
pub(crate) mod testing;

pub use collectors::*;
pub use error::GatherError;
pub use gitlab::{
    GitlabClient,
    GroupsApi,
};
pub use metrics::*;
pub use publisher::{
    Publisher,
    PushgatewayPublisher,
    StdoutPublisher,
};
