//! Client-visible paths and the views they select.

/// A recognized page path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Blogs,
    /// `/blogs/:id`, carrying the raw segment.
    BlogDetails(String),
    AddUser,
    Users,
}

impl Route {
    /// Match `path` (no query string) against the known pages.
    ///
    /// A single trailing slash is tolerated, so `/blogs/` is `/blogs`.
    pub fn recognize(path: &str) -> Option<Route> {
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => path,
        };
        match trimmed {
            "/" => Some(Route::Home),
            "/blogs" => Some(Route::Blogs),
            "/add-user" => Some(Route::AddUser),
            "/users" => Some(Route::Users),
            other => {
                let id = other.strip_prefix("/blogs/")?;
                if id.is_empty() || id.contains('/') {
                    return None;
                }
                Some(Route::BlogDetails(id.to_string()))
            }
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Blogs => "/blogs".to_string(),
            Route::BlogDetails(id) => format!("/blogs/{id}"),
            Route::AddUser => "/add-user".to_string(),
            Route::Users => "/users".to_string(),
        }
    }
}
