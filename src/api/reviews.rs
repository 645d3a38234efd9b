//! Review Backend Bindings
//!
//! `ReviewApi` over the browser fetch API (reqwest's wasm backend).

use async_trait::async_trait;
use serde_json::Value;
use storefront_core::api::reviews_url;
use storefront_core::{PageQuery, Review, ReviewApi, WidgetError, WidgetResult};

/// JSON-over-HTTP client for the review collection
#[derive(Debug, Clone)]
pub struct HttpReviewApi {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpReviewApi {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

fn network(err: reqwest::Error) -> WidgetError {
    WidgetError::Network(err.to_string())
}

#[async_trait(?Send)]
impl ReviewApi for HttpReviewApi {
    async fn create_review(&self, review: &Review) -> WidgetResult<Value> {
        // Status is not inspected: any JSON body counts as accepted
        let response = self
            .client
            .post(&self.endpoint)
            .json(review)
            .send()
            .await
            .map_err(network)?;
        response.json().await.map_err(network)
    }

    async fn fetch_reviews(&self, query: Option<PageQuery>) -> WidgetResult<Value> {
        let url = reviews_url(&self.endpoint, query);
        let response = self.client.get(url).send().await.map_err(network)?;
        response.json().await.map_err(network)
    }
}
