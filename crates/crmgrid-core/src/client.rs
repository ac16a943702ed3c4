//! CRM upstream client
//!
//! Thin wrapper around `reqwest` that pins the base URL, attaches the bearer
//! credential, and speaks the three `/crm/v3` call shapes the front-end
//! needs. Failed calls are never retried.

use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;

use crate::error::{Result, UpstreamError};
use crate::types::{record_results, schema_properties, PropertyDescriptor, Record};

/// Upper bound on any single upstream call
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Configured client for the CRM REST API
#[derive(Debug, Clone)]
pub struct CrmClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl CrmClient {
    /// Create a client against `base_url` authenticating with `token`.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(UpstreamError::transport)?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    /// Fetch the property descriptors for an object type.
    pub async fn fetch_schema(&self, object_type: &str) -> Result<Vec<PropertyDescriptor>> {
        let url = format!(
            "{}/crm/v3/schemas/{}",
            self.base_url,
            urlencoding::encode(object_type)
        );
        let payload = self.execute(self.client.get(&url)).await?;
        Ok(schema_properties(&payload))
    }

    /// Fetch the record collection for an object type, limited to `properties`.
    pub async fn fetch_records(
        &self,
        object_type: &str,
        properties: &[String],
    ) -> Result<Vec<Record>> {
        let url = format!(
            "{}/crm/v3/objects/{}",
            self.base_url,
            urlencoding::encode(object_type)
        );
        let request = self
            .client
            .get(&url)
            .query(&[("properties", properties.join(","))]);
        let payload = self.execute(request).await?;
        Ok(record_results(&payload))
    }

    /// Create a record with the given property values.
    pub async fn create_record(
        &self,
        object_type: &str,
        properties: &HashMap<String, String>,
    ) -> Result<Record> {
        let url = format!(
            "{}/crm/v3/objects/{}",
            self.base_url,
            urlencoding::encode(object_type)
        );
        let body = serde_json::json!({ "properties": properties });
        let payload = self.execute(self.client.post(&url).json(&body)).await?;
        serde_json::from_value(payload).map_err(UpstreamError::decode)
    }

    /// Send a request and return the JSON payload of a success response.
    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<Value> {
        let response = request
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(UpstreamError::transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::api(status.as_u16(), &body));
        }

        response.json().await.map_err(UpstreamError::transport)
    }
}
