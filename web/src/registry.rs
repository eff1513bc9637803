//! Live `UsersList` instances, keyed by the id embedded in their page.
//!
//! A users page survives between its GET and the delete POSTs made from it,
//! so its local state (and the users already removed from it) is kept here.
//! The registry is bounded; the oldest instance is unmounted and dropped
//! when a new one would exceed the capacity.

use std::collections::{HashMap, VecDeque};

use blog_core::UsersList;
use uuid::Uuid;

#[derive(Debug)]
pub struct ViewRegistry {
    views: HashMap<Uuid, UsersList>,
    order: VecDeque<Uuid>,
    capacity: usize,
}

impl ViewRegistry {
    pub fn new(capacity: usize) -> Self {
        Self {
            views: HashMap::new(),
            order: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn insert(&mut self, id: Uuid, view: UsersList) {
        while self.views.len() >= self.capacity {
            let Some(oldest) = self.order.pop_front() else {
                break;
            };
            if let Some(mut evicted) = self.views.remove(&oldest) {
                evicted.unmount();
                tracing::debug!(view = %oldest, "users view evicted");
            }
        }
        self.order.push_back(id);
        self.views.insert(id, view);
    }

    pub fn get(&self, id: &Uuid) -> Option<&UsersList> {
        self.views.get(id)
    }

    pub fn get_mut(&mut self, id: &Uuid) -> Option<&mut UsersList> {
        self.views.get_mut(id)
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}
