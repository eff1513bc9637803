//! API client and views for the blog portal.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The views sit on top: each
//! one is an owned state record that asks the host to run a fetch on mount
//! and renders loading / error / content from the result.
//!
//! # Design
//! - `ApiClient` is stateless; it holds only base URLs.
//! - Each operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - Views hand out `Fetch` values tagged with a `Ticket`; results for a
//!   superseded ticket or an unmounted view are dropped.
//! - `render` turns view state into whole pages through minijinja templates.

pub mod client;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod messages;
pub mod render;
pub mod route;
pub mod types;
pub mod views;

pub use client::ApiClient;
pub use error::{ApiError, RenderError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use lifecycle::{Fetch, Loadable, Outcome, Ticket};
pub use render::Renderer;
pub use route::Route;
pub use types::{NewUser, Post, User};
pub use views::{AddUser, BlogDetails, Blogs, UsersList};
