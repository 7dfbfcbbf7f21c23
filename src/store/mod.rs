//! Storage operations over the account tables.
//!
//! Every function runs against a caller-owned connection as a single
//! statement or a single transaction. Uniqueness and referential rules are
//! left to Postgres; their failures come back as [`StoreError`] variants.
//!
//! [`StoreError`]: crate::error::StoreError

mod account;
mod preferences;
mod subscriptions;
mod trials;
mod users;

pub use account::*;
pub use preferences::*;
pub use subscriptions::*;
pub use trials::*;
pub use users::*;
