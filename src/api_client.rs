use crate::config::ClientConfig;
use crate::errors::ClientError;
use crate::models::{Business, BusinessQueryParams};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Client for the lead tracker backend.
///
/// Payloads for create/update are passed through as raw JSON so that the
/// server, not the client, decides what is valid.
#[derive(Clone)]
pub struct BusinessClient {
    client: reqwest::Client,
    base_url: String,
}

impl BusinessClient {
    /// Creates a new `BusinessClient` targeting `config.api_url`.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ClientError::Network)?;

        Ok(Self {
            client,
            base_url: config.api_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("{} {}", method, url);
        self.client
            .request(method, url)
            .header("Accept", "application/json")
    }

    /// Sends the request and decodes a successful JSON body.
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let response = request.send().await.map_err(ClientError::Network)?;
        let response = Self::check_status(response).await?;

        let body = response.text().await.map_err(ClientError::Network)?;
        serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))
    }

    async fn check_status(response: Response) -> Result<Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        let message = serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string))
            .unwrap_or(body);

        Err(ClientError::Http {
            status: status.as_u16(),
            message,
        })
    }

    /// GET /health
    pub async fn health(&self) -> Result<Value, ClientError> {
        self.send(self.request(Method::GET, "/health")).await
    }

    /// GET /businesses with optional filters.
    pub async fn list(&self, params: &BusinessQueryParams) -> Result<Vec<Business>, ClientError> {
        let request = self.request(Method::GET, "/businesses").query(params);
        let businesses: Vec<Business> = self.send(request).await?;
        tracing::debug!("Fetched {} businesses", businesses.len());
        Ok(businesses)
    }

    /// GET /businesses/{id}
    pub async fn get(&self, id: u64) -> Result<Business, ClientError> {
        self.send(self.request(Method::GET, &format!("/businesses/{}", id)))
            .await
    }

    /// POST /businesses
    pub async fn create(&self, payload: &Value) -> Result<Business, ClientError> {
        let request = self.request(Method::POST, "/businesses").json(payload);
        self.send(request).await
    }

    /// PUT /businesses/{id}
    pub async fn update(&self, id: u64, payload: &Value) -> Result<Business, ClientError> {
        let request = self
            .request(Method::PUT, &format!("/businesses/{}", id))
            .json(payload);
        self.send(request).await
    }

    /// DELETE /businesses/{id}
    pub async fn delete(&self, id: u64) -> Result<Value, ClientError> {
        self.send(self.request(Method::DELETE, &format!("/businesses/{}", id)))
            .await
    }
}

/// Reads a JSON payload from a file.
pub fn load_payload_from_file(path: &std::path::Path) -> Result<Value, ClientError> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| ClientError::InvalidPayload(format!("{}: {}", path.display(), e)))
}
