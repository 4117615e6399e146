/// A value that must be provided either as a flag or via the environment.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Please provide {what} using the --{flag} flag or {env} environment variable")]
pub struct MissingCredentialError {
    pub what: &'static str,
    pub flag: &'static str,
    pub env: &'static str,
}

/// Resolves a required value. Empty strings count as missing.
///
/// `value` is expected to already combine the flag and the environment
/// fallback, clap does this for us with `#[arg(env = ...)]`.
pub fn required(
    value: Option<String>,
    what: &'static str,
    flag: &'static str,
    env: &'static str,
) -> Result<String, MissingCredentialError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(MissingCredentialError { what, flag, env }),
    }
}
