pub mod kind;
pub mod labels;
pub mod sample;

// Re-export the main types for easy access
pub use gitlab_stats_config::Labels;
pub use kind::*;
pub use labels::*;
pub use sample::*;
