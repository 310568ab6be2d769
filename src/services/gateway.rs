// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTTP gateway to the challenge backend.
//!
//! Handles:
//! - Bearer token attachment when the caller supplies one
//! - JSON request and response bodies
//! - Mapping non-2xx responses to errors carrying the server's message
//!
//! Every call is a single attempt: no retries, no backoff.

use crate::config::Config;
use crate::error::{ClientError, Result};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Error body shape the backend uses for failures.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Low-level backend client.
#[derive(Clone)]
pub struct FetchGateway {
    http: reqwest::Client,
    base_url: String,
}

impl FetchGateway {
    /// Create a gateway for the configured backend.
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| ClientError::Internal(anyhow::anyhow!("HTTP client init failed: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.backend_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path` and decode the JSON response.
    pub async fn get<T: DeserializeOwned>(&self, path: &str, token: Option<&str>) -> Result<T> {
        let request = self.request(Method::GET, path, token);
        let response = self.dispatch(&Method::GET, path, request).await?;
        Self::check_response_json(response).await
    }

    /// GET `path` with query parameters.
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        token: Option<&str>,
    ) -> Result<T> {
        let request = self.request(Method::GET, path, token).query(query);
        let response = self.dispatch(&Method::GET, path, request).await?;
        Self::check_response_json(response).await
    }

    /// Send a request with an optional JSON body and decode the response.
    pub async fn send<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        token: Option<&str>,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut request = self.request(method.clone(), path, token);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = self.dispatch(&method, path, request).await?;
        Self::check_response_json(response).await
    }

    /// Send a request whose response body the caller does not need.
    pub async fn execute<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        token: Option<&str>,
    ) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        let mut request = self.request(method.clone(), path, token);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = self.dispatch(&method, path, request).await?;
        Self::check_response(response).await.map(|_| ())
    }

    fn request(&self, method: Method, path: &str, token: Option<&str>) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let request = self.http.request(method, url);
        match token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn dispatch(
        &self,
        method: &Method,
        path: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!(method = %method, path, error = %e, "Backend request failed");
            ClientError::Transport(e.to_string())
        })?;
        tracing::debug!(
            method = %method,
            path,
            status = response.status().as_u16(),
            "Backend request"
        );
        Ok(response)
    }

    /// Check response status and return an error if not successful.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let server_message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.message);

        if status == 401 {
            tracing::warn!("Backend rejected credentials (401)");
        }

        Err(ClientError::from_status(status, server_message))
    }

    /// Check response and parse JSON body.
    async fn check_response_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let response = Self::check_response(response).await?;
        response
            .json()
            .await
            .map_err(|e| ClientError::Decode(format!("JSON parse error: {}", e)))
    }
}
