//! Configuration for the GitLab stats scraper.
//!
//! The configuration file declares a set of default labels and a list of
//! groups. Each group opts into metric collectors by the mere presence of
//! the corresponding key:
//!
//! ```yaml
//! default_labels:
//!   team: platform
//! groups:
//!   - id: 1234
//!     project_count:
//!       include_subgroups: true
//!     member_count: {}
//! ```

#[macro_use]
extern crate tracing;

mod credentials;
mod error;
mod group_config;
mod scalar;
mod scrape_config;

pub use credentials::{
    required,
    MissingCredentialError,
};
pub use error::ConfigError;
pub use group_config::{
    GroupConfig,
    MemberCountConfig,
    ProjectCountConfig,
};
pub use scrape_config::{
    parse_config,
    Config,
    Labels,
};
