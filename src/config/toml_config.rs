use crate::core::{ConfigProvider, FilterState, LatLon, MapSettings, ViewSettings};
use crate::utils::error::{LocatorError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use super::DEFAULT_TIMEOUT_SECONDS;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub source: SourceConfig,
    pub map: Option<MapConfig>,
    pub view: Option<ViewConfig>,
    pub filter: Option<FilterState>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
    pub headers: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MapConfig {
    pub center_latitude: Option<f64>,
    pub center_longitude: Option<f64>,
    pub zoom: Option<u8>,
    pub focus_zoom: Option<u8>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViewConfig {
    pub no_name_placeholder: Option<String>,
    pub accessible_label: Option<String>,
    pub error_message: Option<String>,
    pub loading_message: Option<String>,
    pub empty_message: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(LocatorError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| LocatorError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${API_TOKEN})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| LocatorError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    #[cfg(feature = "cli")]
    pub fn apply_cli_overrides(&mut self, cli: &super::cli::CliConfig) {
        if let Some(endpoint) = &cli.endpoint {
            self.source.endpoint = endpoint.clone();
        }
        if let Some(timeout) = cli.timeout_seconds {
            self.source.timeout_seconds = Some(timeout);
        }
        let base = self.filter.take().unwrap_or_default();
        self.filter = Some(cli.filter_overrides(base));
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_url("source.endpoint", &self.source.endpoint)?;

        if let Some(timeout) = self.source.timeout_seconds {
            validate_positive_number("source.timeout_seconds", timeout, 1)?;
        }

        if let Some(map) = &self.map {
            if let Some(lat) = map.center_latitude {
                validate_range("map.center_latitude", lat, -90.0, 90.0)?;
            }
            if let Some(lon) = map.center_longitude {
                validate_range("map.center_longitude", lon, -180.0, 180.0)?;
            }
            if let Some(zoom) = map.zoom {
                validate_range("map.zoom", zoom, 0, 19)?;
            }
            if let Some(zoom) = map.focus_zoom {
                validate_range("map.focus_zoom", zoom, 0, 19)?;
            }
        }

        if let Some(view) = &self.view {
            for (field, value) in [
                ("view.no_name_placeholder", &view.no_name_placeholder),
                ("view.error_message", &view.error_message),
            ] {
                if let Some(value) = value {
                    validate_non_empty_string(field, value)?;
                }
            }
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn endpoint(&self) -> &str {
        &self.source.endpoint
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.source.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS))
    }

    fn headers(&self) -> HashMap<String, String> {
        self.source.headers.clone().unwrap_or_default()
    }

    fn map_settings(&self) -> MapSettings {
        let defaults = MapSettings::default();
        let Some(map) = &self.map else {
            return defaults;
        };

        MapSettings {
            center: LatLon::new(
                map.center_latitude.unwrap_or(defaults.center.latitude),
                map.center_longitude.unwrap_or(defaults.center.longitude),
            ),
            zoom: map.zoom.unwrap_or(defaults.zoom),
            focus_zoom: map.focus_zoom.unwrap_or(defaults.focus_zoom),
        }
    }

    fn view_settings(&self) -> ViewSettings {
        let defaults = ViewSettings::default();
        let Some(view) = &self.view else {
            return defaults;
        };
        let pick = |value: &Option<String>, default: String| value.clone().unwrap_or(default);

        ViewSettings {
            no_name_placeholder: pick(&view.no_name_placeholder, defaults.no_name_placeholder),
            accessible_label: pick(&view.accessible_label, defaults.accessible_label),
            error_message: pick(&view.error_message, defaults.error_message),
            loading_message: pick(&view.loading_message, defaults.loading_message),
            empty_message: pick(&view.empty_message, defaults.empty_message),
        }
    }

    fn initial_filter(&self) -> FilterState {
        self.filter.clone().unwrap_or_default()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
