use crate::client::ApiClient;
use crate::lifecycle::{Fetch, Lifecycle, Outcome, Ticket};
use crate::messages;
use crate::types::NewUser;

/// The `/add-user` form.
///
/// The draft survives submission in both directions; only navigating away
/// discards it.
#[derive(Debug, Clone, Default)]
pub struct AddUser {
    draft: NewUser,
    message: Option<&'static str>,
    lifecycle: Lifecycle,
}

impl AddUser {
    pub fn mount() -> Self {
        let mut view = Self::default();
        view.lifecycle.issue();
        view
    }

    /// Mount with a draft already filled in, as a posted form arrives.
    pub fn with_draft(draft: NewUser) -> Self {
        Self {
            draft,
            ..Self::mount()
        }
    }

    pub fn draft(&self) -> &NewUser {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut NewUser {
        &mut self.draft
    }

    /// Package the draft for `POST /api/users`.
    ///
    /// If the body cannot even be built the failure message is set right
    /// away and there is nothing for the host to run.
    pub fn submit(&mut self, client: &ApiClient) -> Option<Fetch> {
        match client.build_create_user(&self.draft) {
            Ok(request) => Some(Fetch {
                ticket: self.lifecycle.issue(),
                request,
            }),
            Err(error) => {
                tracing::warn!(%error, "could not build create request");
                self.message = Some(messages::CREATE_ERROR);
                None
            }
        }
    }

    pub fn resolve(&mut self, client: &ApiClient, ticket: Ticket, outcome: Outcome) -> bool {
        if !self.lifecycle.accepts(ticket) {
            return false;
        }
        self.message = match outcome.and_then(|response| client.parse_create_user(response)) {
            Ok(()) => Some(messages::CREATE_OK),
            Err(error) => {
                tracing::warn!(%error, "create failed");
                Some(messages::CREATE_ERROR)
            }
        };
        true
    }

    pub fn unmount(&mut self) {
        self.lifecycle.unmount();
    }

    pub fn message(&self) -> Option<&'static str> {
        self.message
    }
}
