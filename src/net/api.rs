//! REST client for the recipe backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Elsewhere: every call fails with `ApiError::Transport`, since the
//! endpoints are only reachable from the browser bundle.
//!
//! ERROR HANDLING
//! ==============
//! Response interpretation is split from transport so the status/body to
//! `Result` mapping can be unit-tested without a browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{AuthToken, Credentials, Recipe, RecipeDetail, Registration, UserProfile};
use crate::config::ClientConfig;

pub const CREATE_USER_PATH: &str = "/api/users/create/";
pub const TOKEN_PATH: &str = "/api/users/token/";
pub const PROFILE_PATH: &str = "/api/users/me/";
pub const RECIPES_PATH: &str = "/api/recipe/recipes/";

fn recipe_detail_path(id: u64) -> String {
    format!("{RECIPES_PATH}{id}/")
}

/// HTTP verb subset used by this client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Get,
    Post,
}

/// Decode a JSON success body, or classify a failure response.
pub(crate) fn decode_json<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::from_status(status, body));
    }
    serde_json::from_str(body).map_err(|e| ApiError::Transport(format!("malformed response body: {e}")))
}

/// Accept any success status and ignore the body.
pub(crate) fn expect_success(status: u16, body: &str) -> Result<(), ApiError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(ApiError::from_status(status, body)) }
}

/// Thin handle on the backend origin; cheap to clone into async tasks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into().trim_end_matches('/').to_owned() }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Register a new account via `POST /api/users/create/`.
    ///
    /// # Errors
    ///
    /// `Validation` carries per-field messages for a rejected registration.
    pub async fn create_account(&self, input: &Registration) -> Result<(), ApiError> {
        let body = to_body(input)?;
        let (status, text) = self.send(Method::Post, CREATE_USER_PATH, None, Some(body)).await?;
        expect_success(status, &text)
    }

    /// Exchange credentials for a token via `POST /api/users/token/`.
    ///
    /// # Errors
    ///
    /// `Validation` may carry `email`, `password` and `non_field_errors` keys.
    pub async fn authenticate(&self, credentials: &Credentials) -> Result<AuthToken, ApiError> {
        let body = to_body(credentials)?;
        let (status, text) = self.send(Method::Post, TOKEN_PATH, None, Some(body)).await?;
        decode_json(status, &text)
    }

    /// Fetch the signed-in user's recipes.
    ///
    /// # Errors
    ///
    /// `Auth` when the stored token is missing or rejected server-side.
    pub async fn list_recipes(&self, token: &str) -> Result<Vec<Recipe>, ApiError> {
        let (status, text) = self.send(Method::Get, RECIPES_PATH, Some(token), None).await?;
        decode_json(status, &text)
    }

    /// Fetch one recipe with description and ingredients.
    ///
    /// # Errors
    ///
    /// `Auth` on a rejected token, `Server(404)` for an unknown id.
    pub async fn get_recipe(&self, token: &str, id: u64) -> Result<RecipeDetail, ApiError> {
        let (status, text) = self.send(Method::Get, &recipe_detail_path(id), Some(token), None).await?;
        decode_json(status, &text)
    }

    /// Fetch the signed-in user's profile.
    ///
    /// # Errors
    ///
    /// `Auth` when the stored token is missing or rejected server-side.
    pub async fn get_profile(&self, token: &str) -> Result<UserProfile, ApiError> {
        let (status, text) = self.send(Method::Get, PROFILE_PATH, Some(token), None).await?;
        decode_json(status, &text)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> Result<(u16, String), ApiError> {
        let url = self.endpoint(path);
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::Request;

            let mut builder = match method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
            };
            if let Some(token) = token {
                builder = builder.header("Authorization", token);
            }
            let request = match body {
                Some(json) => builder.json(&json),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Transport(e.to_string()))?;

            let response = request.send().await.map_err(|e| {
                log::warn!("{method:?} {url} failed: {e}");
                ApiError::Transport(e.to_string())
            })?;
            let status = response.status();
            let text = response.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
            log::debug!("{method:?} {url} -> {status}");
            Ok((status, text))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (method, token, body);
            Err(ApiError::Transport(format!("{url} is only reachable from the browser build")))
        }
    }
}

fn to_body<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::Transport(format!("could not encode request: {e}")))
}
