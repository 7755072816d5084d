//! HTTP Food Repository
//!
//! reqwest-backed implementation of the `/foods` REST contract.
//! Works on the host and in the browser (reqwest uses `fetch` on wasm32).

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::dashboard::DashboardConfig;
use crate::domain::{DomainError, DomainResult, FoodId, FoodItem, NewFood};
use super::traits::FoodRepository;

/// Characters that may not appear raw inside a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone)]
pub struct HttpFoodRepository {
    client: Client,
    base_url: String,
}

impl HttpFoodRepository {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/foods", self.base_url)
    }

    fn food_url(&self, id: &FoodId) -> String {
        format!("{}/foods/{}", self.base_url, utf8_percent_encode(id.as_str(), PATH_SEGMENT))
    }
}

/// Turn non-2xx answers into `DomainError::Status`, keeping the body as message
async fn check_status(response: Response) -> DomainResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(DomainError::Status {
        status: status.as_u16(),
        message: message.trim().to_string(),
    })
}

async fn send(request: RequestBuilder) -> DomainResult<Response> {
    let response = request
        .send()
        .await
        .map_err(|e| DomainError::Request(e.to_string()))?;
    check_status(response).await
}

async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> DomainResult<T> {
    send(request)
        .await?
        .json::<T>()
        .await
        .map_err(|e| DomainError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl FoodRepository for HttpFoodRepository {
    async fn list(&self) -> DomainResult<Vec<FoodItem>> {
        log::debug!("GET {}", self.collection_url());
        send_json(self.client.get(self.collection_url())).await
    }

    async fn create(&self, food: &NewFood) -> DomainResult<FoodItem> {
        log::debug!("POST {}", self.collection_url());
        send_json(self.client.post(self.collection_url()).json(food)).await
    }

    async fn update(&self, id: &FoodId, food: &FoodItem) -> DomainResult<FoodItem> {
        let url = self.food_url(id);
        log::debug!("PUT {}", url);
        send_json(self.client.put(url).json(food)).await
    }

    async fn delete(&self, id: &FoodId) -> DomainResult<()> {
        let url = self.food_url(id);
        log::debug!("DELETE {}", url);
        send(self.client.delete(url)).await.map(|_| ())
    }
}
