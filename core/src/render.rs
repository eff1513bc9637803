//! HTML pages for each view, rendered from minijinja templates.
//!
//! Templates live in `core/templates/` and are compiled into the binary.
//! Every `.html` template is auto-escaped, so upstream text (names, titles,
//! post bodies) is never trusted to be markup-safe. Paths are written into
//! the templates literally.

use minijinja::{context, AutoEscape, Environment};

use crate::error::RenderError;
use crate::lifecycle::Loadable;
use crate::messages;
use crate::views::{excerpt, AddUser, BlogDetails, Blogs, UsersList};

const TEMPLATES: &[(&str, &str)] = &[
    ("layout.html", include_str!("../templates/layout.html")),
    ("not_found.html", include_str!("../templates/not_found.html")),
    ("home.html", include_str!("../templates/home.html")),
    ("users.html", include_str!("../templates/users.html")),
    ("add_user.html", include_str!("../templates/add_user.html")),
    ("blogs.html", include_str!("../templates/blogs.html")),
    ("blog_details.html", include_str!("../templates/blog_details.html")),
];

/// Loading / error text for a read view; `None` once loaded.
fn pending<T>(state: &Loadable<T>) -> Option<&'static str> {
    match state {
        Loadable::Loading => Some(messages::LOADING),
        Loadable::Failed(message) => Some(*message),
        Loadable::Loaded(_) => None,
    }
}

/// Compiled page templates. Every method returns a whole page, layout
/// frame included.
#[derive(Debug)]
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new() -> Result<Self, RenderError> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|name| {
            if name.ends_with(".html") {
                AutoEscape::Html
            } else {
                AutoEscape::None
            }
        });
        env.add_filter("excerpt", |body: String| excerpt(&body).to_string());
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    fn page(&self, name: &str, ctx: minijinja::Value) -> Result<String, RenderError> {
        Ok(self.env.get_template(name)?.render(ctx)?)
    }

    pub fn home(&self) -> Result<String, RenderError> {
        self.page("home.html", context! {})
    }

    /// The frame with an empty main area.
    pub fn not_found(&self) -> Result<String, RenderError> {
        self.page("not_found.html", context! {})
    }

    /// Delete forms post to `/users/{view_id}/delete/{user_id}`.
    pub fn users(&self, view: &UsersList, view_id: &str) -> Result<String, RenderError> {
        self.page(
            "users.html",
            context! {
                pending => pending(view.state()),
                notice => view.notice(),
                users => view.users(),
                view_id,
            },
        )
    }

    /// The form posts back to `/add-user`; the values entered stay in place.
    pub fn add_user(&self, view: &AddUser) -> Result<String, RenderError> {
        self.page(
            "add_user.html",
            context! {
                draft => view.draft(),
                message => view.message(),
            },
        )
    }

    pub fn blogs(&self, view: &Blogs) -> Result<String, RenderError> {
        self.page(
            "blogs.html",
            context! {
                pending => pending(view.state()),
                posts => view.state().loaded(),
            },
        )
    }

    /// The back button walks browser history rather than linking to `/blogs`.
    pub fn blog_details(&self, view: &BlogDetails) -> Result<String, RenderError> {
        self.page(
            "blog_details.html",
            context! {
                pending => pending(view.state()),
                post => view.state().loaded(),
            },
        )
    }
}
