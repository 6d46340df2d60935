use crate::error::SweepError;

/// Run configuration pulled from the process environment. Immutable after
/// loading; every stage borrows it.
#[derive(Debug, Clone)]
pub struct Config {
    pub user: String,
    pub base_url: String,
    pub api_token: String,
    pub admin_user: String,
    pub admin_password: String,
    /// Pre-provisioned access token. When set, no AuthenticateByName call is
    /// issued.
    pub access_token: Option<String>,
    /// Pre-provisioned user id. When set, no /Users lookup is issued.
    pub user_id: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, SweepError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. Required keys must be present and
    /// non-empty; optional keys are dropped when empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SweepError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String, SweepError> {
            match lookup(key) {
                Some(value) if !value.is_empty() => Ok(value),
                _ => Err(SweepError::MissingConfig(key.to_string())),
            }
        };
        let optional = |key: &str| lookup(key).filter(|value| !value.is_empty());

        Ok(Self {
            user: required("JELLY_USER")?,
            base_url: required("JELLY_URL")?,
            api_token: required("JELLY_API_TOKEN")?,
            admin_user: required("JELLY_ADMIN_USER")?,
            admin_password: required("JELLY_ADMIN_PASSWORD")?,
            access_token: optional("JELLY_ACCESS_TOKEN"),
            user_id: optional("USER_ID"),
        })
    }
}
