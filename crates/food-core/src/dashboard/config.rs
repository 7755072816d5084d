//! Dashboard Configuration

use serde::{Deserialize, Serialize};

pub const ENV_API_URL: &str = "FOOD_API_URL";
pub const ENV_DELETE_POLICY: &str = "FOOD_DELETE_POLICY";
pub const ENV_TOAST_MS: &str = "FOOD_TOAST_MS";

const DEFAULT_API_BASE_URL: &str = "http://localhost:3333";
const DEFAULT_TOAST_MS: u32 = 4000;

/// When a deleted dish leaves the local list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeletePolicy {
    /// Remove right after the request, whatever the backend answered
    #[default]
    Optimistic,
    /// Remove only once the backend confirmed
    ConfirmFirst,
}

impl DeletePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeletePolicy::Optimistic => "optimistic",
            DeletePolicy::ConfirmFirst => "confirm-first",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "optimistic" => Some(DeletePolicy::Optimistic),
            "confirm-first" | "confirm_first" | "confirm" => Some(DeletePolicy::ConfirmFirst),
            _ => None,
        }
    }

    /// Whether the local record goes away given the request outcome
    pub fn removes_locally(&self, succeeded: bool) -> bool {
        match self {
            DeletePolicy::Optimistic => true,
            DeletePolicy::ConfirmFirst => succeeded,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Backend root; `/foods` is appended
    pub api_base_url: String,
    pub delete_policy: DeletePolicy,
    /// How long an error toast stays on screen
    pub toast_duration_ms: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            delete_policy: DeletePolicy::default(),
            toast_duration_ms: DEFAULT_TOAST_MS,
        }
    }
}

impl DashboardConfig {
    /// Read overrides from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read overrides baked in at compile time (the browser has no environment)
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| {
            let value = match key {
                ENV_API_URL => option_env!("FOOD_API_URL"),
                ENV_DELETE_POLICY => option_env!("FOOD_DELETE_POLICY"),
                ENV_TOAST_MS => option_env!("FOOD_TOAST_MS"),
                _ => None,
            };
            value.map(str::to_string)
        })
    }

    /// Build from a key lookup; unparsable values keep the default
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_API_URL).filter(|u| !u.trim().is_empty()) {
            config.api_base_url = url.trim().to_string();
        }

        if let Some(raw) = lookup(ENV_DELETE_POLICY) {
            match DeletePolicy::parse(&raw) {
                Some(policy) => config.delete_policy = policy,
                None => log::warn!("ignoring {}={:?}: expected optimistic or confirm-first", ENV_DELETE_POLICY, raw),
            }
        }

        if let Some(raw) = lookup(ENV_TOAST_MS) {
            match raw.trim().parse::<u32>() {
                Ok(ms) => config.toast_duration_ms = ms,
                Err(_) => log::warn!("ignoring {}={:?}: expected milliseconds", ENV_TOAST_MS, raw),
            }
        }

        config
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_delete_policy(mut self, policy: DeletePolicy) -> Self {
        self.delete_policy = policy;
        self
    }

    pub fn with_toast_duration_ms(mut self, ms: u32) -> Self {
        self.toast_duration_ms = ms;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::from_lookup(|_| None);
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.api_base_url, "http://localhost:3333");
        assert_eq!(config.delete_policy, DeletePolicy::Optimistic);
    }

    #[test]
    fn test_overrides() {
        let config = DashboardConfig::from_lookup(lookup_from(&[
            (ENV_API_URL, " https://api.example.com "),
            (ENV_DELETE_POLICY, "Confirm-First"),
            (ENV_TOAST_MS, "1500"),
        ]));
        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.delete_policy, DeletePolicy::ConfirmFirst);
        assert_eq!(config.toast_duration_ms, 1500);
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let config = DashboardConfig::from_lookup(lookup_from(&[
            (ENV_API_URL, "  "),
            (ENV_DELETE_POLICY, "sometimes"),
            (ENV_TOAST_MS, "soon"),
        ]));
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn test_policy_removal() {
        assert!(DeletePolicy::Optimistic.removes_locally(false));
        assert!(!DeletePolicy::ConfirmFirst.removes_locally(false));
        assert!(DeletePolicy::ConfirmFirst.removes_locally(true));
    }

    #[test]
    fn test_deserialize_partial() {
        let config: DashboardConfig =
            serde_json::from_str(r#"{"delete_policy":"confirm-first"}"#).unwrap();
        assert_eq!(config.delete_policy, DeletePolicy::ConfirmFirst);
        assert_eq!(config.toast_duration_ms, 4000);
    }
}
