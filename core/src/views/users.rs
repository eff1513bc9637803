use crate::client::ApiClient;
use crate::http::HttpRequest;
use crate::lifecycle::{Fetch, Lifecycle, Loadable, Outcome, Ticket};
use crate::messages;
use crate::types::User;

/// The `/users` view: lists users and deletes them one at a time.
///
/// A failed delete keeps the list on screen and adds a notice; a successful
/// one drops the entry locally without refetching.
#[derive(Debug, Clone)]
pub struct UsersList {
    state: Loadable<Vec<User>>,
    notice: Option<&'static str>,
    lifecycle: Lifecycle,
}

impl UsersList {
    pub fn mount(client: &ApiClient) -> (Self, Fetch) {
        let mut view = Self {
            state: Loadable::Loading,
            notice: None,
            lifecycle: Lifecycle::default(),
        };
        let fetch = view.remount(client);
        (view, fetch)
    }

    /// Throw away all local state and fetch the list again.
    pub fn remount(&mut self, client: &ApiClient) -> Fetch {
        self.state = Loadable::Loading;
        self.notice = None;
        Fetch {
            ticket: self.lifecycle.issue(),
            request: client.build_list_users(),
        }
    }

    /// Apply the list fetch. Returns `false` when the result was stale.
    pub fn resolve(&mut self, client: &ApiClient, ticket: Ticket, outcome: Outcome) -> bool {
        if !self.lifecycle.accepts(ticket) {
            return false;
        }
        let result = outcome.and_then(|response| client.parse_list_users(response));
        self.state = Loadable::settle(result, messages::LOAD_ERROR);
        true
    }

    pub fn delete(&self, client: &ApiClient, id: u64) -> HttpRequest {
        client.build_delete_user(id)
    }

    /// Apply a delete outcome. Deletes are not superseded by one another, so
    /// only unmounting makes the result stale.
    pub fn resolve_delete(&mut self, client: &ApiClient, id: u64, outcome: Outcome) -> bool {
        if !self.lifecycle.is_mounted() {
            return false;
        }
        match outcome.and_then(|response| client.parse_delete_user(response)) {
            Ok(()) => {
                if let Loadable::Loaded(users) = &mut self.state {
                    users.retain(|user| user.id != id);
                }
            }
            Err(error) => {
                tracing::warn!(%error, id, "delete failed");
                self.notice = Some(messages::DELETE_ERROR);
            }
        }
        true
    }

    pub fn unmount(&mut self) {
        self.lifecycle.unmount();
    }

    pub fn state(&self) -> &Loadable<Vec<User>> {
        &self.state
    }

    pub fn users(&self) -> &[User] {
        self.state.loaded().map(Vec::as_slice).unwrap_or_default()
    }

    /// Error from the last failed delete, if any.
    pub fn notice(&self) -> Option<&'static str> {
        self.notice
    }
}
