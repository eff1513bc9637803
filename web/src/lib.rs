//! Server-rendered front for the blog portal.
//!
//! # Overview
//! Maps the client-visible paths onto `blog-core` views. Each GET mounts a
//! fresh view, runs its one fetch through `Transport`, and returns the
//! rendered page. Users-list views are kept in a bounded `ViewRegistry` so
//! deletes can be applied to the same local state the page was rendered from.

pub mod config;
pub mod pages;
pub mod registry;
pub mod telemetry;
pub mod transport;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use blog_core::{ApiClient, RenderError, Renderer};
use tokio::{net::TcpListener, sync::RwLock};

use crate::config::Config;
use crate::registry::ViewRegistry;
use crate::transport::Transport;

#[derive(Clone)]
pub struct AppState {
    pub client: ApiClient,
    pub transport: Transport,
    pub users: Arc<RwLock<ViewRegistry>>,
    pub renderer: Arc<Renderer>,
}

impl AppState {
    /// Fails only if a page template does not compile.
    pub fn new(
        client: ApiClient,
        transport: Transport,
        max_views: usize,
    ) -> Result<Self, RenderError> {
        Ok(Self {
            client,
            transport,
            users: Arc::new(RwLock::new(ViewRegistry::new(max_views))),
            renderer: Arc::new(Renderer::new()?),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, RenderError> {
        Self::new(config.api_client(), Transport::default(), config.max_views)
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::page))
        .route("/blogs", get(pages::page))
        .route("/blogs/{id}", get(pages::page))
        .route("/add-user", get(pages::page).post(pages::add_user))
        .route("/users", get(pages::page))
        .route("/users/{view}/delete/{id}", post(pages::delete_user))
        .fallback(pages::page)
        .layer(middleware::from_fn(pages::log_path))
        .with_state(state)
}

pub async fn run(listener: TcpListener, state: AppState) -> Result<(), std::io::Error> {
    axum::serve(listener, app(state)).await
}
