use axum::http::{self, header, Request, StatusCode};
use blog_core::{messages, ApiClient};
use blog_web::{app, transport::Transport, AppState};
use http_body_util::BodyExt;
use minijinja::HtmlEscape;
use mock_server::Faults;
use tower::ServiceExt;

/// Start the mock backend on a random port and build state pointed at it.
async fn state_with(faults: Faults, max_views: usize) -> AppState {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    tokio::spawn(mock_server::run_with(listener, faults));
    AppState::new(ApiClient::new(&base, &base), Transport::default(), max_views).unwrap()
}

async fn state() -> AppState {
    state_with(Faults::default(), 16).await
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn get(state: &AppState, uri: &str) -> (StatusCode, String) {
    let resp = app(state.clone())
        .oneshot(Request::builder().uri(uri).body(String::new()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    (status, body_text(resp).await)
}

async fn post(state: &AppState, uri: &str, form: &str) -> axum::response::Response {
    app(state.clone())
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(http::header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(form.to_string())
                .unwrap(),
        )
        .await
        .unwrap()
}

/// `text` as it appears once auto-escaped into a page.
fn shown(text: &str) -> String {
    HtmlEscape(text).to_string()
}

/// The delete form target prefix rendered into a users page.
fn view_base(page: &str) -> String {
    let start = page.find("action=\"/users/").unwrap() + "action=\"".len();
    let end = start + page[start..].find("/delete/").unwrap();
    page[start..end].to_string()
}

// --- layout & routing ---

#[tokio::test]
async fn home_renders_inside_frame() {
    let state = state().await;
    let (status, page) = get(&state, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("<h1>Xush kelibsiz!</h1>"));
    for href in ["/blogs", "/add-user", "/users"] {
        assert!(page.contains(&format!(r#"<a href="{href}">"#)), "{href}");
    }
    assert!(page.contains("<footer>"));
}

#[tokio::test]
async fn unknown_path_is_404_with_empty_main() {
    let state = state().await;
    let (status, page) = get(&state, "/nowhere").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let start = page.find("<main>").unwrap() + "<main>".len();
    let end = page.find("</main>").unwrap();
    assert!(page[start..end].trim().is_empty());
    assert!(page.contains("<nav>"));
}

#[tokio::test]
async fn trailing_slash_reaches_the_same_view() {
    let state = state().await;
    let (status, page) = get(&state, "/blogs/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("<h1>Bloglar royxati</h1>"));
}

#[tokio::test]
async fn repeated_query_key_still_renders_the_page() {
    let state = state().await;
    let (status, page) = get(&state, "/blogs?view=a&view=b").await;

    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("<h1>Bloglar royxati</h1>"));
    assert!(page.contains("<footer>"));
}

// --- blogs ---

#[tokio::test]
async fn blogs_lists_every_post_with_excerpt() {
    let state = state().await;
    let (_, page) = get(&state, "/blogs").await;

    assert_eq!(page.matches("<li>").count() as u64, mock_server::SEEDED_POSTS);
    assert!(page.contains(r#"<a href="/blogs/5">"#));
    assert!(page.contains("...</p>"));
}

#[tokio::test]
async fn blog_details_shows_post() {
    let state = state().await;
    let (status, page) = get(&state, "/blogs/5").await;

    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("<h1>Post 5</h1>"));
    assert!(page.contains("Body of post 5."));
    assert!(page.contains("history.back()"));
}

#[tokio::test]
async fn blog_details_errors_collapse_to_one_message() {
    let state = state().await;
    for uri in ["/blogs/999", "/blogs/abc"] {
        let (status, page) = get(&state, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert!(page.contains(&shown(messages::DETAIL_ERROR)), "{uri}");
    }
}

// --- users ---

#[tokio::test]
async fn users_renders_one_item_per_user() {
    let state = state().await;
    let (_, page) = get(&state, "/users").await;

    assert_eq!(page.matches("<li>").count() as u64, mock_server::SEEDED_USERS);
    assert!(page.contains("User 3 - user3@example.com"));
}

#[tokio::test]
async fn users_load_failure_shows_error() {
    let state = state_with(
        Faults {
            reads: true,
            ..Faults::default()
        },
        16,
    )
    .await;
    let (_, page) = get(&state, "/users").await;

    assert!(page.contains(&shown(messages::LOAD_ERROR)));
    assert!(!page.contains("<li>"));
}

#[tokio::test]
async fn delete_removes_user_from_live_view() {
    let state = state().await;
    let (_, page) = get(&state, "/users").await;
    let base = view_base(&page);

    let resp = post(&state, &format!("{base}/delete/3"), "").await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let location = resp.headers()[header::LOCATION].to_str().unwrap().to_string();
    let view_id = base.trim_start_matches("/users/");
    assert_eq!(location, format!("/users?view={view_id}"));

    let (_, page) = get(&state, &location).await;
    assert_eq!(page.matches("<li>").count() as u64, mock_server::SEEDED_USERS - 1);
    assert!(!page.contains("delete/3\""));
    assert!(!page.contains(&shown(messages::DELETE_ERROR)));
}

#[tokio::test]
async fn failed_delete_keeps_user_and_shows_notice() {
    let state = state_with(
        Faults {
            deletes: true,
            ..Faults::default()
        },
        16,
    )
    .await;
    let (_, page) = get(&state, "/users").await;
    let base = view_base(&page);

    let resp = post(&state, &format!("{base}/delete/3"), "").await;
    let location = resp.headers()[header::LOCATION].to_str().unwrap().to_string();

    let (_, page) = get(&state, &location).await;
    assert!(page.contains("delete/3\""));
    assert!(page.contains(&shown(messages::DELETE_ERROR)));
    assert_eq!(page.matches("<li>").count() as u64, mock_server::SEEDED_USERS);
}

#[tokio::test]
async fn plain_users_get_remounts_from_scratch() {
    let state = state().await;
    let (_, first) = get(&state, "/users").await;
    let first_base = view_base(&first);
    post(&state, &format!("{first_base}/delete/1"), "").await;

    let (_, second) = get(&state, "/users").await;
    assert_ne!(view_base(&second), first_base);
    assert_eq!(second.matches("<li>").count() as u64, mock_server::SEEDED_USERS);
    assert_eq!(state.users.read().await.len(), 2);
}

#[tokio::test]
async fn delete_against_evicted_view_redirects_to_users() {
    let state = state_with(Faults::default(), 1).await;
    let (_, first) = get(&state, "/users").await;
    let first_base = view_base(&first);
    get(&state, "/users").await;

    let resp = post(&state, &format!("{first_base}/delete/2"), "").await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()[header::LOCATION], "/users");
}

#[tokio::test]
async fn non_numeric_user_id_redirects_back_to_the_view() {
    let state = state().await;
    let (_, page) = get(&state, "/users").await;
    let base = view_base(&page);

    let resp = post(&state, &format!("{base}/delete/abc"), "").await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let view_id = base.trim_start_matches("/users/");
    assert_eq!(resp.headers()[header::LOCATION], format!("/users?view={view_id}").as_str());

    let (_, page) = get(&state, &format!("/users?view={view_id}")).await;
    assert_eq!(page.matches("<li>").count() as u64, mock_server::SEEDED_USERS);
    assert!(!page.contains(&shown(messages::DELETE_ERROR)));
}

#[tokio::test]
async fn malformed_view_id_on_delete_redirects_to_users() {
    let state = state().await;
    let resp = post(&state, "/users/not-a-uuid/delete/3", "").await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()[header::LOCATION], "/users");
}

#[tokio::test]
async fn unknown_view_id_mounts_fresh_list() {
    let state = state().await;
    let (_, page) = get(&state, "/users?view=not-a-uuid").await;
    assert_eq!(page.matches("<li>").count() as u64, mock_server::SEEDED_USERS);
}

// --- add user ---

#[tokio::test]
async fn add_user_form_starts_empty() {
    let state = state().await;
    let (_, page) = get(&state, "/add-user").await;

    assert!(page.contains(r#"<form method="post" action="/add-user">"#));
    assert!(page.contains(r#"value="""#));
    assert!(!page.contains(&shown(messages::CREATE_OK)));
}

#[tokio::test]
async fn add_user_success_keeps_values() {
    let state = state().await;
    let resp = post(&state, "/add-user", "username=a&email=a%40b.com&password=x").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let page = body_text(resp).await;
    assert!(page.contains(&shown(messages::CREATE_OK)));
    assert!(page.contains(r#"value="a@b.com""#));
}

#[tokio::test]
async fn add_user_rejection_shows_failure() {
    let state = state_with(
        Faults {
            creates: true,
            ..Faults::default()
        },
        16,
    )
    .await;
    let resp = post(&state, "/add-user", "username=a&email=a%40b.com&password=x").await;

    let page = body_text(resp).await;
    assert!(page.contains(&shown(messages::CREATE_ERROR)));
    assert!(!page.contains(&shown(messages::CREATE_OK)));
}
