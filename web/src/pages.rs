//! Page handlers: mount a view, run its fetch, render the page around it.

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Form, Path, Query, Request, State,
    },
    http::StatusCode,
    middleware::Next,
    response::{Html, IntoResponse, Redirect, Response},
};
use blog_core::{AddUser, BlogDetails, Blogs, NewUser, RenderError, Route, UsersList};
use serde::Deserialize;
use uuid::Uuid;

use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// Id of a live users view to re-render instead of mounting a new one.
    view: Option<Uuid>,
}

/// Log the path of every page the browser asks for.
pub async fn log_path(request: Request, next: Next) -> Response {
    tracing::debug!(path = %request.uri().path(), "current page");
    next.run(request).await
}

fn render_failed(error: RenderError) -> Response {
    tracing::error!(%error, "page failed to render");
    StatusCode::INTERNAL_SERVER_ERROR.into_response()
}

fn html(page: Result<String, RenderError>) -> Response {
    match page {
        Ok(markup) => Html(markup).into_response(),
        Err(error) => render_failed(error),
    }
}

/// GET handler for every client-visible path.
///
/// A query string that does not parse is ignored; the page renders as if
/// none was given.
pub async fn page(
    State(state): State<AppState>,
    query: Result<Query<PageQuery>, QueryRejection>,
    request: Request,
) -> Response {
    let query = query.map(|Query(query)| query).unwrap_or_else(|rejection| {
        tracing::debug!(%rejection, "ignoring malformed query");
        PageQuery::default()
    });
    let Some(route) = Route::recognize(request.uri().path()) else {
        return match state.renderer.not_found() {
            Ok(markup) => (StatusCode::NOT_FOUND, Html(markup)).into_response(),
            Err(error) => render_failed(error),
        };
    };
    let page = match route {
        Route::Home => state.renderer.home(),
        Route::Blogs => blogs(&state).await,
        Route::BlogDetails(param) => blog_details(&state, &param).await,
        Route::AddUser => state.renderer.add_user(&AddUser::mount()),
        Route::Users => users(&state, query.view).await,
    };
    html(page)
}

async fn blogs(state: &AppState) -> Result<String, RenderError> {
    let (mut view, fetch) = Blogs::mount(&state.client);
    let outcome = state.transport.execute(fetch.request).await;
    view.resolve(&state.client, fetch.ticket, outcome);
    state.renderer.blogs(&view)
}

async fn blog_details(state: &AppState, param: &str) -> Result<String, RenderError> {
    let (mut view, fetch) = BlogDetails::mount(&state.client, param);
    if let Some(fetch) = fetch {
        let outcome = state.transport.execute(fetch.request).await;
        view.resolve(&state.client, fetch.ticket, outcome);
    }
    state.renderer.blog_details(&view)
}

async fn users(state: &AppState, live: Option<Uuid>) -> Result<String, RenderError> {
    if let Some(id) = live {
        if let Some(view) = state.users.read().await.get(&id) {
            return state.renderer.users(view, &id.to_string());
        }
        tracing::debug!(view = %id, "users view gone, mounting a new one");
    }

    let (mut view, fetch) = UsersList::mount(&state.client);
    let outcome = state.transport.execute(fetch.request).await;
    view.resolve(&state.client, fetch.ticket, outcome);

    let id = Uuid::new_v4();
    let page = state.renderer.users(&view, &id.to_string());
    state.users.write().await.insert(id, view);
    page
}

/// `POST /users/{view}/delete/{id}`, then back to the same view.
///
/// A target that is not a live view goes back to a fresh `/users`; a user id
/// that is not numeric leaves the view untouched.
pub async fn delete_user(
    State(state): State<AppState>,
    path: Result<Path<(Uuid, String)>, PathRejection>,
) -> Redirect {
    let Ok(Path((view_id, raw_id))) = path else {
        tracing::debug!("delete target is not a users view");
        return Redirect::to(&Route::Users.path());
    };
    let back = Redirect::to(&format!("{}?view={view_id}", Route::Users.path()));
    let Ok(user_id) = raw_id.parse::<u64>() else {
        tracing::debug!(view = %view_id, id = %raw_id, "user id is not numeric");
        return back;
    };

    let request = match state.users.read().await.get(&view_id) {
        Some(view) => view.delete(&state.client, user_id),
        None => return Redirect::to(&Route::Users.path()),
    };

    let outcome = state.transport.execute(request).await;

    match state.users.write().await.get_mut(&view_id) {
        Some(view) => {
            view.resolve_delete(&state.client, user_id, outcome);
        }
        None => tracing::debug!(view = %view_id, user_id, "delete finished after view was evicted"),
    }
    back
}

/// `POST /add-user` with the urlencoded form.
pub async fn add_user(State(state): State<AppState>, Form(draft): Form<NewUser>) -> Response {
    let mut view = AddUser::with_draft(draft);
    if let Some(fetch) = view.submit(&state.client) {
        let outcome = state.transport.execute(fetch.request).await;
        view.resolve(&state.client, fetch.ticket, outcome);
    }
    html(state.renderer.add_user(&view))
}
