use super::protocol::{IndexRequest, RegisterRequest, SearchRequest};
use crate::router::types::{IndexAck, Registration, SearchOutcome, Status};
use anyhow::Result;
use std::collections::HashMap;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);
const RETRY_ATTEMPTS: usize = 3;

/// Client for the synchronous HTTP binding.
///
/// Remembers the API key handed out by `register` and attaches it to every
/// subsequent call. Transport failures are retried with capped exponential
/// backoff; payload-level failures (ERROR status) are returned to the caller
/// as ordinary reply values.
pub struct EngineClient {
    base_url: String,
    http_client: reqwest::Client,
    client_id: String,
    api_key: Option<String>,
}

impl EngineClient {
    pub fn new(base_url: &str, client_id: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client: reqwest::Client::new(),
            client_id: client_id.to_string(),
            api_key: None,
        }
    }

    /// Registers this client and stores the returned API key for later calls.
    pub async fn register(&mut self) -> Result<Registration> {
        let request = RegisterRequest {
            client_id: self.client_id.clone(),
        };
        let reply: Registration = self.post_with_retry("/register", &request).await?;

        if reply.status != Status::Success {
            anyhow::bail!("Registration failed: {}", reply.message);
        }
        self.api_key = Some(reply.api_key.clone());
        Ok(reply)
    }

    pub async fn index(
        &self,
        file_path: &str,
        word_frequencies: HashMap<String, u64>,
    ) -> Result<IndexAck> {
        let request = IndexRequest {
            client_id: self.client_id.clone(),
            api_key: self.api_key.clone().unwrap_or_default(),
            file_path: file_path.to_string(),
            word_frequencies,
        };
        self.post_with_retry("/index", &request).await
    }

    pub async fn search(&self, query_terms: &[&str]) -> Result<SearchOutcome> {
        let request = SearchRequest {
            client_id: self.client_id.clone(),
            api_key: self.api_key.clone().unwrap_or_default(),
            query_terms: query_terms.iter().map(|t| t.to_string()).collect(),
        };
        self.post_with_retry("/search", &request).await
    }

    async fn post_with_retry<T, R>(&self, path: &str, payload: &T) -> Result<R>
    where
        T: serde::Serialize,
        R: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let mut delay_ms = 150u64;

        for attempt in 0..RETRY_ATTEMPTS {
            let response = self
                .http_client
                .post(url.clone())
                .json(payload)
                .timeout(REQUEST_TIMEOUT)
                .send()
                .await;

            match response {
                Ok(resp) => {
                    if !resp.status().is_success() {
                        return Err(anyhow::anyhow!(
                            "Request to {} failed: {}",
                            path,
                            resp.status()
                        ));
                    }
                    return Ok(resp.json().await?);
                }
                Err(e) => {
                    if attempt + 1 == RETRY_ATTEMPTS {
                        return Err(anyhow::anyhow!(e));
                    }
                    let jitter = rand::random::<u64>() % 50;
                    tokio::time::sleep(Duration::from_millis(delay_ms + jitter)).await;
                    delay_ms = (delay_ms * 2).min(1200);
                }
            }
        }

        Err(anyhow::anyhow!("Retry attempts exhausted"))
    }
}
