use crate::core::{ConfigProvider, Facility, FacilitySource};
use crate::utils::error::{LoadError, LocatorError, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;

/// Fetches the facility list with a single `GET` against the configured endpoint.
#[derive(Debug, Clone)]
pub struct HttpFacilitySource {
    client: Client,
    endpoint: String,
}

impl HttpFacilitySource {
    pub fn new(
        endpoint: impl Into<String>,
        timeout: Duration,
        headers: &HashMap<String, String>,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .default_headers(build_headers(headers)?)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        Self::new(config.endpoint(), config.request_timeout(), &config.headers())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn build_headers(headers: &HashMap<String, String>) -> Result<HeaderMap> {
    let mut map = HeaderMap::new();
    map.insert(ACCEPT, HeaderValue::from_static("application/json"));

    for (key, value) in headers {
        let name = HeaderName::from_bytes(key.as_bytes()).map_err(|e| {
            LocatorError::InvalidConfigValueError {
                field: "source.headers".to_string(),
                value: key.clone(),
                reason: format!("Invalid header name: {}", e),
            }
        })?;
        let value = HeaderValue::from_str(value).map_err(|e| {
            LocatorError::InvalidConfigValueError {
                field: format!("source.headers.{}", key),
                value: value.clone(),
                reason: format!("Invalid header value: {}", e),
            }
        })?;
        map.insert(name, value);
    }

    Ok(map)
}

#[async_trait]
impl FacilitySource for HttpFacilitySource {
    async fn fetch_facilities(&self) -> std::result::Result<Vec<Facility>, LoadError> {
        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(LoadError::Network)?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);
        if !status.is_success() {
            return Err(LoadError::Http {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(LoadError::Network)?;
        serde_json::from_str::<Vec<Facility>>(&body).map_err(|e| LoadError::Parse {
            message: e.to_string(),
        })
    }
}
