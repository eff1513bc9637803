//! Stand-in for the placeholder and reqres services.
//!
//! Serves seeded users and posts, accepts deletes without persisting them
//! (as the real placeholder does), and echoes created users back with an id.
//! `Faults` make individual operations fail with a 500 so hosts can exercise
//! their error paths.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

pub const SEEDED_USERS: u64 = 10;
pub const SEEDED_POSTS: u64 = 12;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    #[serde(rename = "userId")]
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    pub body: String,
}

#[derive(Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedUser {
    pub id: String,
    pub username: String,
    pub email: String,
}

/// Operations that should answer 500 instead of succeeding.
#[derive(Clone, Copy, Debug, Default)]
pub struct Faults {
    pub reads: bool,
    pub deletes: bool,
    pub creates: bool,
}

struct Backend {
    users: Vec<User>,
    posts: Vec<Post>,
    faults: Faults,
    next_id: AtomicU64,
}

type Shared = Arc<Backend>;

pub fn seed_users() -> Vec<User> {
    (1..=SEEDED_USERS)
        .map(|id| User {
            id,
            name: format!("User {id}"),
            username: format!("user{id}"),
            email: format!("user{id}@example.com"),
        })
        .collect()
}

pub fn seed_posts() -> Vec<Post> {
    (1..=SEEDED_POSTS)
        .map(|id| Post {
            user_id: (id - 1) % SEEDED_USERS + 1,
            id,
            title: format!("Post {id}"),
            body: format!("Body of post {id}. ").repeat(8),
        })
        .collect()
}

pub fn app() -> Router {
    app_with(Faults::default())
}

pub fn app_with(faults: Faults) -> Router {
    let backend = Arc::new(Backend {
        users: seed_users(),
        posts: seed_posts(),
        faults,
        next_id: AtomicU64::new(SEEDED_USERS + 1),
    });
    Router::new()
        .route("/users", get(list_users))
        .route("/users/{id}", delete(delete_user))
        .route("/posts", get(list_posts))
        .route("/posts/{id}", get(get_post))
        .route("/api/users", post(create_user))
        .with_state(backend)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with(listener, Faults::default()).await
}

pub async fn run_with(listener: TcpListener, faults: Faults) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(faults)).await
}

async fn list_users(State(backend): State<Shared>) -> Result<Json<Vec<User>>, StatusCode> {
    if backend.faults.reads {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    Ok(Json(backend.users.clone()))
}

/// Always "succeeds" for known and unknown ids alike; nothing is removed.
async fn delete_user(
    State(backend): State<Shared>,
    Path(_id): Path<u64>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    if backend.faults.deletes {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    Ok(Json(serde_json::json!({})))
}

async fn list_posts(State(backend): State<Shared>) -> Result<Json<Vec<Post>>, StatusCode> {
    if backend.faults.reads {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    Ok(Json(backend.posts.clone()))
}

async fn get_post(
    State(backend): State<Shared>,
    Path(id): Path<u64>,
) -> Result<Json<Post>, StatusCode> {
    if backend.faults.reads {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    backend
        .posts
        .iter()
        .find(|post| post.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn create_user(
    State(backend): State<Shared>,
    Json(input): Json<NewUser>,
) -> Result<(StatusCode, Json<CreatedUser>), StatusCode> {
    if backend.faults.creates {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    let id = backend.next_id.fetch_add(1, Ordering::Relaxed);
    Ok((
        StatusCode::CREATED,
        Json(CreatedUser {
            id: id.to_string(),
            username: input.username,
            email: input.email,
        }),
    ))
}
