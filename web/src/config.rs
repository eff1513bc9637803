//! Command-line and environment configuration for the web front.

use std::net::SocketAddr;

use blog_core::client::{PLACEHOLDER_URL, REQRES_URL};
use blog_core::ApiClient;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "blog-web", version, about = "Server-rendered blog and users portal", long_about = None)]
pub struct Config {
    /// Address to serve pages on.
    #[arg(long, env = "BLOG_LISTEN", default_value = "127.0.0.1:3000")]
    pub listen: SocketAddr,

    /// Base URL of the users/posts service.
    #[arg(long, env = "BLOG_PLACEHOLDER_URL", default_value = PLACEHOLDER_URL)]
    pub placeholder_url: String,

    /// Base URL of the service that accepts new users.
    #[arg(long, env = "BLOG_REQRES_URL", default_value = REQRES_URL)]
    pub reqres_url: String,

    /// Sent as `x-api-key` on create requests when set.
    #[arg(long, env = "REQRES_API_KEY", hide_env_values = true)]
    pub reqres_api_key: Option<String>,

    /// Live users-list views kept for delete round-trips; oldest go first.
    #[arg(long, env = "BLOG_MAX_VIEWS", default_value_t = 256)]
    pub max_views: usize,
}

impl Config {
    pub fn api_client(&self) -> ApiClient {
        let client = ApiClient::new(&self.placeholder_url, &self.reqres_url);
        match &self.reqres_api_key {
            Some(key) => client.with_reqres_api_key(key.clone()),
            None => client,
        }
    }
}
