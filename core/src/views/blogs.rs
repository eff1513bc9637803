use crate::client::ApiClient;
use crate::lifecycle::{Fetch, Lifecycle, Loadable, Outcome, Ticket};
use crate::messages;
use crate::types::Post;

/// Number of body characters shown per post on the list page.
pub const EXCERPT_CHARS: usize = 100;

/// The `/blogs` view.
#[derive(Debug, Clone)]
pub struct Blogs {
    state: Loadable<Vec<Post>>,
    lifecycle: Lifecycle,
}

impl Blogs {
    pub fn mount(client: &ApiClient) -> (Self, Fetch) {
        let mut view = Self {
            state: Loadable::Loading,
            lifecycle: Lifecycle::default(),
        };
        let fetch = view.remount(client);
        (view, fetch)
    }

    pub fn remount(&mut self, client: &ApiClient) -> Fetch {
        self.state = Loadable::Loading;
        Fetch {
            ticket: self.lifecycle.issue(),
            request: client.build_list_posts(),
        }
    }

    pub fn resolve(&mut self, client: &ApiClient, ticket: Ticket, outcome: Outcome) -> bool {
        if !self.lifecycle.accepts(ticket) {
            return false;
        }
        let result = outcome.and_then(|response| client.parse_list_posts(response));
        self.state = Loadable::settle(result, messages::LOAD_ERROR);
        true
    }

    pub fn unmount(&mut self) {
        self.lifecycle.unmount();
    }

    pub fn state(&self) -> &Loadable<Vec<Post>> {
        &self.state
    }
}

/// First `EXCERPT_CHARS` characters of `body`.
pub fn excerpt(body: &str) -> &str {
    match body.char_indices().nth(EXCERPT_CHARS) {
        Some((end, _)) => &body[..end],
        None => body,
    }
}

/// The `/blogs/:id` view.
///
/// Keyed by the raw path parameter. A parameter that is not a post id never
/// reaches the network and fails the same way a 404 would.
#[derive(Debug, Clone)]
pub struct BlogDetails {
    param: String,
    state: Loadable<Post>,
    lifecycle: Lifecycle,
}

impl BlogDetails {
    pub fn mount(client: &ApiClient, param: &str) -> (Self, Option<Fetch>) {
        let mut view = Self {
            param: String::new(),
            state: Loadable::Loading,
            lifecycle: Lifecycle::default(),
        };
        let fetch = view.load(client, param);
        (view, fetch)
    }

    /// React to a path parameter change. Same parameter, no new fetch.
    ///
    /// For hosts that keep one details view alive while the path changes
    /// under it (an in-browser shell, a desktop front). A new parameter
    /// supersedes the ticket of any fetch still in flight. The web front
    /// mounts a fresh view per request and never calls this.
    pub fn navigate(&mut self, client: &ApiClient, param: &str) -> Option<Fetch> {
        if param == self.param && self.lifecycle.is_mounted() {
            return None;
        }
        self.load(client, param)
    }

    fn load(&mut self, client: &ApiClient, param: &str) -> Option<Fetch> {
        param.clone_into(&mut self.param);
        let ticket = self.lifecycle.issue();
        match param.parse::<u64>() {
            Ok(id) => {
                self.state = Loadable::Loading;
                Some(Fetch {
                    ticket,
                    request: client.build_get_post(id),
                })
            }
            Err(_) => {
                tracing::debug!(param, "post id is not numeric");
                self.state = Loadable::Failed(messages::DETAIL_ERROR);
                None
            }
        }
    }

    pub fn resolve(&mut self, client: &ApiClient, ticket: Ticket, outcome: Outcome) -> bool {
        if !self.lifecycle.accepts(ticket) {
            return false;
        }
        let result = outcome.and_then(|response| client.parse_get_post(response));
        self.state = Loadable::settle(result, messages::DETAIL_ERROR);
        true
    }

    pub fn unmount(&mut self) {
        self.lifecycle.unmount();
    }

    pub fn param(&self) -> &str {
        &self.param
    }

    pub fn state(&self) -> &Loadable<Post> {
        &self.state
    }
}
