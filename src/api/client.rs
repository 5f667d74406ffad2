use std::time::Instant;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::posts::PostId;
use crate::users::User;

use super::error::ApiError;
use super::types::{DeleteConfirmation, NewPostRequest, RawPost, UpdatePostRequest};
use super::{PostApi, UserApi};

/// HTTP implementation of [`PostApi`] and [`UserApi`].
#[derive(Clone)]
pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn posts_url(&self) -> String {
        format!("{}/posts", self.base_url)
    }

    fn post_url(&self, id: PostId) -> String {
        format!("{}/posts/{}", self.base_url, id)
    }

    fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    /// Send a request and hand back the raw response, logging the round trip.
    async fn send(
        &self,
        method: &'static str,
        url: &str,
        builder: RequestBuilder,
    ) -> Result<Response, ApiError> {
        let start = Instant::now();
        let result = builder.send().await;
        let latency_ms = start.elapsed().as_millis() as u64;

        match result {
            Ok(resp) => {
                tracing::debug!(
                    method,
                    url,
                    status = %resp.status(),
                    latency_ms,
                    "API request completed"
                );
                Ok(resp)
            }
            Err(e) => {
                tracing::debug!(method, url, error = %e, latency_ms, "API request failed");
                Err(e.into())
            }
        }
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        method: &'static str,
        url: &str,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        let resp = self.send(method, url, builder).await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::status(status));
        }

        Ok(resp.json().await?)
    }
}

#[async_trait]
impl PostApi for HttpApi {
    async fn list_posts(&self) -> Result<Vec<RawPost>, ApiError> {
        let url = self.posts_url();
        self.send_json("GET", &url, self.client.get(&url)).await
    }

    async fn create_post(&self, request: &NewPostRequest) -> Result<RawPost, ApiError> {
        let url = self.posts_url();
        self.send_json("POST", &url, self.client.post(&url).json(request))
            .await
    }

    async fn update_post(
        &self,
        id: PostId,
        request: &UpdatePostRequest,
    ) -> Result<RawPost, ApiError> {
        let url = self.post_url(id);
        self.send_json("PUT", &url, self.client.put(&url).json(request))
            .await
    }

    async fn delete_post(&self, id: PostId) -> Result<DeleteConfirmation, ApiError> {
        let url = self.post_url(id);
        let resp = self.send("DELETE", &url, self.client.delete(&url)).await?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(ApiError::status(status));
        }

        Ok(DeleteConfirmation { id })
    }
}

#[async_trait]
impl UserApi for HttpApi {
    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let url = self.users_url();
        self.send_json("GET", &url, self.client.get(&url)).await
    }
}
