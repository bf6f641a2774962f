use anyhow::{Result, anyhow};
use reqwest::{
    Client,
    Method,
    RequestBuilder,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};

use shared_config::AppConfig;

/// Thin client for the Supabase PostgREST surface. All kiosk reads and
/// writes go through the service role key; there is no per-user auth.
pub struct SupabaseClient {
    client: Client,
    base_url: String,
    service_key: String,
}

impl SupabaseClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.supabase_url.clone(),
            service_key: config.supabase_service_key.clone(),
        }
    }

    fn with_auth(&self, req: RequestBuilder) -> RequestBuilder {
        req.header("apikey", &self.service_key)
            .header(AUTHORIZATION, format!("Bearer {}", self.service_key))
            .header(CONTENT_TYPE, "application/json")
    }

    pub async fn request<T>(&self, method: Method, path: &str, body: Option<Value>) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("Making request to {}", url);

        let mut req = self.with_auth(self.client.request(method, &url));

        if let Some(body_data) = body {
            req = req.json(&body_data);
        }

        let response = req.send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await?;
            error!("Storage API error ({}): {}", status, error_text);

            return Err(match status.as_u16() {
                401 | 403 => anyhow!("Authorization error: {}", error_text),
                404 => anyhow!("Resource not found: {}", error_text),
                _ => anyhow!("Storage API error ({}): {}", status, error_text),
            });
        }

        let data = response.json::<T>().await?;
        Ok(data)
    }

    /// Fetch at most one row. PostgREST always answers list queries with an
    /// array; an empty array becomes `None` rather than an error.
    pub async fn fetch_optional<T>(&self, path: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        let mut rows: Vec<T> = self.request(Method::GET, path, None).await?;
        if rows.is_empty() {
            Ok(None)
        } else {
            Ok(Some(rows.remove(0)))
        }
    }

    /// Insert one row and return the stored representation, including
    /// database-generated columns such as the primary key.
    pub async fn insert_returning<T>(&self, path: &str, body: Value) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("Inserting row at {}", url);

        let response = self
            .with_auth(self.client.post(&url))
            .header("Prefer", "return=representation")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await?;
            error!("Storage API error ({}): {}", status, error_text);
            return Err(anyhow!("Storage API error ({}): {}", status, error_text));
        }

        let mut rows = response.json::<Vec<T>>().await?;
        if rows.is_empty() {
            return Err(anyhow!("Insert returned no representation"));
        }
        Ok(rows.remove(0))
    }
}
