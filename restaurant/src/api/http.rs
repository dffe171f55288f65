use crate::api::{ApiError, OrderApi, endpoints};
use async_trait::async_trait;
use common::constants::REQUEST_TIMEOUT_SECONDS;
use common::types::dtos::OrderDTO;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Cliente REST contra el backend real.
pub struct HttpOrderApi {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpOrderApi {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECONDS))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            token,
        })
    }

    fn url(&self, path: &str) -> String {
        endpoints::join(&self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let request = match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(response.json::<T>().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status.as_u16(), body))
        }
    }
}

#[async_trait]
impl OrderApi for HttpOrderApi {
    async fn get_all(&self, restaurant_id: u64) -> Result<Vec<OrderDTO>, ApiError> {
        let url = self.url(&endpoints::restaurant_orders(restaurant_id));
        self.send(self.client.get(url)).await
    }

    async fn forward_order(&self, order_id: u64) -> Result<OrderDTO, ApiError> {
        let url = self.url(&endpoints::forward(order_id));
        self.send(self.client.patch(url)).await
    }

    async fn backward_order(&self, order_id: u64) -> Result<OrderDTO, ApiError> {
        let url = self.url(&endpoints::backward(order_id));
        self.send(self.client.patch(url)).await
    }
}
