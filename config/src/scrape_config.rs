use crate::{
    ConfigError,
    GroupConfig,
};
use serde::{
    Deserialize,
    Serialize,
};
use std::{
    collections::BTreeMap,
    path::Path,
};

/// Label name to label value.
pub type Labels = BTreeMap<String, String>;

/// Label names that the gateway uses for its grouping key.
const RESERVED_LABELS: &[&str] = &["job"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Attached to every sample unless a group specific label overrides it.
    #[serde(default, deserialize_with = "crate::scalar::labels")]
    pub default_labels: Labels,
    #[serde(default)]
    pub groups: Vec<GroupConfig>,
}

/// Reads the configuration file at `path`.
///
/// `.json` files are parsed as JSON, everything else as YAML.
pub fn parse_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let cfg = if is_json {
        serde_json::from_str::<Config>(&content).map_err(eyre::Report::new)
    } else {
        serde_yml::from_str::<Config>(&content).map_err(eyre::Report::new)
    }
    .map_err(|cause| ConfigError::Parse {
        path: path.to_path_buf(),
        cause,
    })?;

    debug!(
        ?path,
        groups = cfg.groups.len(),
        default_labels = cfg.default_labels.len(),
        "Loaded config"
    );

    Ok(cfg)
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for name in self.default_labels.keys() {
            if !is_valid_label_name(name) {
                return Err(ConfigError::Invalid(format!("'{name}' is not a valid label name")));
            }
            if RESERVED_LABELS.contains(&name.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "default label '{name}' is reserved by the push gateway"
                )));
            }
        }

        for (index, group) in self.groups.iter().enumerate() {
            if group.id.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("groups[{index}]: id must not be empty")));
            }
            if group.is_noop() {
                debug!(group_id = %group.id, "Group has no metrics enabled");
            }
        }

        Ok(())
    }
}

/// `[a-zA-Z_][a-zA-Z0-9_]*`, names starting with `__` are reserved for internal use.
fn is_valid_label_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    !name.starts_with("__") && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
