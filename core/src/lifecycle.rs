//! Fetch lifecycle shared by every view.
//!
//! # Design
//! A view never performs I/O. Mounting (or changing a path parameter) hands
//! the host a `Fetch`: the request to run plus the `Ticket` it was issued
//! under. The host feeds the outcome back with that ticket; the view accepts
//! it only if the ticket is still the latest one and the view has not been
//! unmounted. Anything else is a stale result and is dropped.

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

/// Generation a fetch was issued under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// A request a view wants the host to execute.
#[derive(Debug, Clone)]
pub struct Fetch {
    pub ticket: Ticket,
    pub request: HttpRequest,
}

/// What the host observed when executing a `Fetch`.
pub type Outcome = Result<HttpResponse, ApiError>;

/// The three observable states of a read view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Loadable<T> {
    Loading,
    Failed(&'static str),
    Loaded(T),
}

impl<T> Loadable<T> {
    /// Collapse any error into `message`.
    pub fn settle(result: Result<T, ApiError>, message: &'static str) -> Self {
        match result {
            Ok(value) => Loadable::Loaded(value),
            Err(error) => {
                tracing::warn!(%error, "fetch failed");
                Loadable::Failed(message)
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Loadable::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&'static str> {
        match self {
            Loadable::Failed(message) => Some(*message),
            _ => None,
        }
    }
}

/// Mount bookkeeping owned by a single view instance.
#[derive(Debug, Clone, Default)]
pub struct Lifecycle {
    generation: u64,
    mounted: bool,
}

impl Lifecycle {
    /// Start a new generation, superseding every ticket issued before.
    pub fn issue(&mut self) -> Ticket {
        self.generation += 1;
        self.mounted = true;
        Ticket(self.generation)
    }

    /// Whether a result carrying `ticket` may still touch view state.
    pub fn accepts(&self, ticket: Ticket) -> bool {
        self.mounted && ticket.0 == self.generation
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_ticket_supersedes_older() {
        let mut lifecycle = Lifecycle::default();
        let first = lifecycle.issue();
        let second = lifecycle.issue();
        assert!(!lifecycle.accepts(first));
        assert!(lifecycle.accepts(second));
    }

    #[test]
    fn unmount_rejects_current_ticket() {
        let mut lifecycle = Lifecycle::default();
        let ticket = lifecycle.issue();
        lifecycle.unmount();
        assert!(!lifecycle.accepts(ticket));
        assert!(!lifecycle.is_mounted());
    }

    #[test]
    fn settle_collapses_every_error() {
        let state: Loadable<u8> = Loadable::settle(Err(ApiError::NotFound), "oops");
        assert_eq!(state.error(), Some("oops"));
        let state: Loadable<u8> =
            Loadable::settle(Err(ApiError::Transport("refused".into())), "oops");
        assert_eq!(state, Loadable::Failed("oops"));
        assert_eq!(Loadable::settle(Ok(1u8), "oops").loaded(), Some(&1));
    }
}
