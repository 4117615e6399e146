//! # Collectors Module
//!
//! - **`Collector` trait**: retrieves one count for one group
//! - **`ProjectCountCollector`** / **`MemberCountCollector`**: the built-in collectors
//! - **`CollectorRegistry`**: maps a `MetricKind` to its collector
//! - **`GroupProcessor`**: runs the enabled collectors of one group and builds samples
//! - **`Orchestrator`**: drives all groups and hands the batch to the publisher

pub mod collector;
pub mod group_processor;
pub mod member_count;
pub mod orchestrator;
pub mod project_count;

// Re-export the main types for easy access
pub use collector::{
    Collector,
    CollectorRegistry,
};
pub use group_processor::GroupProcessor;
pub use member_count::MemberCountCollector;
pub use orchestrator::{
    Orchestrator,
    RunState,
    RunSummary,
};
pub use project_count::ProjectCountCollector;
