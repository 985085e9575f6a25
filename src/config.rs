//! Configuration handling for the TUI

use crate::recommend::DEFAULT_ENDPOINT;
use crate::state::FormVariant;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable overriding the recommendation endpoint
pub const ENDPOINT_ENV: &str = "NUTRI_INTAKE_ENDPOINT";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TuiConfig {
    /// Recommendation endpoint URL
    pub endpoint: Option<String>,
    /// Key of the form variant opened last
    pub last_variant: Option<String>,
}

impl TuiConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("org", "nutri-intake", "nutri-intake-tui")
    }

    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Get the log file path
    pub fn log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().join("nutri-intake-tui.log"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file, defaulting when it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: TuiConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Endpoint from the environment, then this config, then the built-in default
    pub fn resolve_endpoint(&self) -> String {
        self.resolve_endpoint_with(std::env::var(ENDPOINT_ENV).ok())
    }

    fn resolve_endpoint_with(&self, env_value: Option<String>) -> String {
        let endpoint = env_value
            .filter(|v| !v.trim().is_empty())
            .or_else(|| self.endpoint.clone().filter(|v| !v.trim().is_empty()))
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        info!("Using recommendation endpoint {endpoint}");
        endpoint
    }

    /// Variant to preselect on the selection page
    pub fn preferred_variant(&self) -> FormVariant {
        self.last_variant
            .as_deref()
            .and_then(FormVariant::from_key)
            .unwrap_or_default()
    }

    /// Remember the variant that was opened
    pub fn remember_variant(&mut self, variant: FormVariant) {
        self.last_variant = Some(variant.key().to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn temp_config_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("nutri-intake-tui-test-{}-{name}", std::process::id()))
            .join("config.json")
    }

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.endpoint.is_none());
        assert!(config.last_variant.is_none());
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            endpoint: Some("http://localhost:8080/recommend".to_string()),
            last_variant: Some("nutrition_plan".to_string()),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, config);
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, TuiConfig::default());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"endpoint": "http://x/api", "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.endpoint.as_deref(), Some("http://x/api"));
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let path = temp_config_path("roundtrip");
        let mut config = TuiConfig::default();
        config.remember_variant(FormVariant::DietaryIntake);

        config.save_to(&path).unwrap();
        let loaded = TuiConfig::load_from(&path).unwrap();

        assert_eq!(loaded, config);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_load_from_missing_file_is_default() {
        let path = temp_config_path("missing");
        assert_eq!(TuiConfig::load_from(&path).unwrap(), TuiConfig::default());
    }

    #[test]
    fn test_load_from_corrupt_file_errors() {
        let path = temp_config_path("corrupt");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{not json").unwrap();

        assert!(TuiConfig::load_from(&path).is_err());
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_endpoint_prefers_environment() {
        let config = TuiConfig {
            endpoint: Some("http://file/api".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.resolve_endpoint_with(Some("http://env/api".to_string())),
            "http://env/api"
        );
    }

    #[test]
    fn test_endpoint_falls_back_to_file_then_default() {
        let config = TuiConfig {
            endpoint: Some("http://file/api".to_string()),
            ..Default::default()
        };
        assert_eq!(config.resolve_endpoint_with(None), "http://file/api");
        assert_eq!(
            config.resolve_endpoint_with(Some("  ".to_string())),
            "http://file/api"
        );
        assert_eq!(
            TuiConfig::default().resolve_endpoint_with(None),
            DEFAULT_ENDPOINT
        );
    }

    #[test]
    fn test_preferred_variant() {
        let mut config = TuiConfig::default();
        assert_eq!(config.preferred_variant(), FormVariant::HealthCheck);

        config.remember_variant(FormVariant::NutritionPlan);
        assert_eq!(config.preferred_variant(), FormVariant::NutritionPlan);

        config.last_variant = Some("retired_form".to_string());
        assert_eq!(config.preferred_variant(), FormVariant::HealthCheck);
    }
}
