//! Executes the core's plain-data requests with reqwest.

use blog_core::{ApiError, HttpMethod, HttpRequest, HttpResponse, Outcome};

#[derive(Debug, Clone, Default)]
pub struct Transport {
    http: reqwest::Client,
}

impl Transport {
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Run `request` to completion. Any status, including 4xx/5xx, comes
    /// back as an `HttpResponse`; only failures to get one are errors.
    pub async fn execute(&self, request: HttpRequest) -> Outcome {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };
        tracing::debug!(method = request.method.as_str(), url = %request.url, "upstream request");

        let mut builder = self.http.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(transport)?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                let value = value.to_str().ok()?;
                Some((name.as_str().to_string(), value.to_string()))
            })
            .collect();
        let body = response.text().await.map_err(transport)?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

fn transport(error: reqwest::Error) -> ApiError {
    ApiError::Transport(error.to_string())
}
