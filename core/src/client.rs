//! Stateless HTTP request builder and response parser for the two upstream
//! services.
//!
//! # Design
//! `ApiClient` holds only base URLs and an optional API key; it carries no
//! mutable state between calls. Each operation is split into a `build_*`
//! method that produces an `HttpRequest` and a `parse_*` method that consumes
//! an `HttpResponse`. The caller executes the actual HTTP round-trip.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{NewUser, Post, User};

/// Base URL of the placeholder service serving users and posts.
pub const PLACEHOLDER_URL: &str = "https://jsonplaceholder.typicode.com";

/// Base URL of the service accepting new users.
pub const REQRES_URL: &str = "https://reqres.in";

/// Synchronous, stateless client for the users/posts APIs.
#[derive(Debug, Clone)]
pub struct ApiClient {
    placeholder_url: String,
    reqres_url: String,
    reqres_api_key: Option<String>,
}

impl ApiClient {
    pub fn new(placeholder_url: &str, reqres_url: &str) -> Self {
        Self {
            placeholder_url: placeholder_url.trim_end_matches('/').to_string(),
            reqres_url: reqres_url.trim_end_matches('/').to_string(),
            reqres_api_key: None,
        }
    }

    /// A client pointed at the public services.
    pub fn public() -> Self {
        Self::new(PLACEHOLDER_URL, REQRES_URL)
    }

    /// Send `x-api-key` with every create request.
    pub fn with_reqres_api_key(mut self, key: impl Into<String>) -> Self {
        self.reqres_api_key = Some(key.into());
        self
    }

    pub fn build_list_users(&self) -> HttpRequest {
        self.get(format!("{}/users", self.placeholder_url))
    }

    pub fn build_delete_user(&self, id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: format!("{}/users/{id}", self.placeholder_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_user(&self, input: &NewUser) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        let mut headers = vec![("content-type".to_string(), "application/json".to_string())];
        if let Some(key) = &self.reqres_api_key {
            headers.push(("x-api-key".to_string(), key.clone()));
        }
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}/api/users", self.reqres_url),
            headers,
            body: Some(body),
        })
    }

    pub fn build_list_posts(&self) -> HttpRequest {
        self.get(format!("{}/posts", self.placeholder_url))
    }

    pub fn build_get_post(&self, id: u64) -> HttpRequest {
        self.get(format!("{}/posts/{id}", self.placeholder_url))
    }

    pub fn parse_list_users(&self, response: HttpResponse) -> Result<Vec<User>, ApiError> {
        decode(response)
    }

    pub fn parse_delete_user(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    /// The acknowledgement body is not used; only the status matters.
    pub fn parse_create_user(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    pub fn parse_list_posts(&self, response: HttpResponse) -> Result<Vec<Post>, ApiError> {
        decode(response)
    }

    pub fn parse_get_post(&self, response: HttpResponse) -> Result<Post, ApiError> {
        decode(response)
    }

    fn get(&self, url: String) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url,
            headers: Vec::new(),
            body: None,
        }
    }
}

/// Map non-2xx status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

fn decode<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}
