use crate::catalog::CATALOG_TITLE;
use serde::{Deserialize, Serialize};

pub(crate) const DEFAULT_ACTION_LOG_LIMIT: usize = 20;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub(crate) struct CatalogConfig {
    pub title: String,
    pub persist_playground: bool,
    pub action_log_limit: usize,
}

impl CatalogConfig {
    /// Reads overrides from `window.ENV` (`CATALOG_TITLE`, `PERSIST_PLAYGROUND`,
    /// `ACTION_LOG_LIMIT`). Missing or mistyped values keep their defaults.
    pub fn new() -> Self {
        let mut title = None;
        let mut persist = None;
        let mut limit = None;

        if let Some(window) = web_sys::window() {
            if let Some(env) = window.get("ENV") {
                if !env.is_undefined() && env.is_object() {
                    let read = |key: &str| js_sys::Reflect::get(&env, &key.into()).ok();
                    title = read("CATALOG_TITLE").and_then(|v| v.as_string());
                    persist = read("PERSIST_PLAYGROUND").and_then(|v| v.as_bool());
                    limit = read("ACTION_LOG_LIMIT").and_then(|v| v.as_f64());
                }
            }
        }

        Self::from_env_values(title, persist, limit)
    }

    fn from_env_values(title: Option<String>, persist: Option<bool>, limit: Option<f64>) -> Self {
        let title = title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| CATALOG_TITLE.to_string());

        let action_log_limit = limit
            .filter(|n| n.is_finite() && *n >= 1.0)
            .map(|n| n as usize)
            .unwrap_or(DEFAULT_ACTION_LOG_LIMIT);

        Self {
            title,
            persist_playground: persist.unwrap_or(true),
            action_log_limit,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::from_env_values(None, None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CatalogConfig::default();
        assert_eq!(config.title, "components/Button");
        assert!(config.persist_playground);
        assert_eq!(config.action_log_limit, DEFAULT_ACTION_LOG_LIMIT);
    }

    #[test]
    fn test_env_overrides() {
        let config =
            CatalogConfig::from_env_values(Some(" Buttons ".to_string()), Some(false), Some(5.0));
        assert_eq!(config.title, "Buttons");
        assert!(!config.persist_playground);
        assert_eq!(config.action_log_limit, 5);
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let config =
            CatalogConfig::from_env_values(Some("   ".to_string()), None, Some(f64::NAN));
        assert_eq!(config.title, CATALOG_TITLE);
        assert_eq!(config.action_log_limit, DEFAULT_ACTION_LOG_LIMIT);

        let config = CatalogConfig::from_env_values(None, None, Some(0.0));
        assert_eq!(config.action_log_limit, DEFAULT_ACTION_LOG_LIMIT);
    }
}
