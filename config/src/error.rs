use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to unmarshal config {path:?}: {cause}")]
    Parse { path: PathBuf, cause: eyre::Report },
    #[error("Invalid config: {0}")]
    Invalid(String),
}
