//! One owned state record per route.
//!
//! # Design
//! Each view is created by `mount`, which returns the `Fetch` the host must
//! run (if any). Results come back through `resolve` together with the
//! ticket they were issued under. Views do not share state with each other.

mod add_user;
mod blogs;
mod users;

pub use add_user::AddUser;
pub use blogs::{excerpt, BlogDetails, Blogs, EXCERPT_CHARS};
pub use users::UsersList;
