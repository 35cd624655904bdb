use crate::core::{CertificateRecord, CertificateSource, ConfigProvider};
use crate::utils::error::{PortfolioError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Reads certificate rows through Supabase's PostgREST endpoint.
#[derive(Debug, Clone)]
pub struct SupabaseSource {
    client: Client,
    base_url: String,
    api_key: String,
    table: String,
    timeout: Option<Duration>,
}

impl SupabaseSource {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        table: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
            table: table.into(),
            timeout: None,
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        let mut source = Self::new(config.base_url(), config.api_key(), config.table());
        source.timeout = config.timeout_seconds().map(Duration::from_secs);
        source
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// `{base}/rest/v1/{table}`, tolerating a trailing slash on the base URL.
    pub fn table_url(&self) -> String {
        format!(
            "{}/rest/v1/{}",
            self.base_url.trim_end_matches('/'),
            self.table
        )
    }

    fn parse_rows(json_data: serde_json::Value) -> Result<Vec<CertificateRecord>> {
        match json_data {
            serde_json::Value::Null => Ok(Vec::new()),
            other => Ok(serde_json::from_value(other)?),
        }
    }
}

#[async_trait]
impl CertificateSource for SupabaseSource {
    async fn list_certificates(&self) -> Result<Vec<CertificateRecord>> {
        let url = self.table_url();

        let mut request = self
            .client
            .get(&url)
            .query(&[("select", "*"), ("order", "id.desc")])
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Accept", "application/json");

        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        tracing::debug!("Making API request to: {}", url);
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PortfolioError::ApiStatusError {
                status: status.as_u16(),
                body,
            });
        }

        let json_data: serde_json::Value = response.json().await?;
        let records = Self::parse_rows(json_data)?;
        tracing::debug!("Received {} rows from {}", records.len(), self.table);

        Ok(records)
    }
}
