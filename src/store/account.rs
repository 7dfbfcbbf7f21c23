use crate::error::StoreError;
use crate::models::{AccountStatus, Subscription, User, UserPreferences, UserTrial};
use crate::store::{find_preferences, find_trial, find_user, subscriptions_for_user};
use diesel::connection::TransactionManager;
use diesel::{Connection, PgConnection};
use uuid::Uuid;

/// A user together with every row that references it.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub user: User,
    pub preferences: Option<UserPreferences>,
    pub trial: Option<UserTrial>,
    pub subscriptions: Vec<Subscription>,
}

impl Account {
    pub fn status(&self) -> AccountStatus {
        self.user.status()
    }
}

/// Reads a user and its dependent rows from one snapshot.
///
/// On its own the read runs in a read-only repeatable-read transaction. When
/// the caller already has a transaction open it joins it through a savepoint
/// and sees whatever isolation the caller chose.
#[tracing::instrument(name = "Load an account with its related rows", skip(conn))]
pub fn load_account(conn: &PgConnection, user_id: Uuid) -> Result<Option<Account>, StoreError> {
    if TransactionManager::<PgConnection>::get_transaction_depth(conn.transaction_manager()) > 0 {
        return conn.transaction::<_, StoreError, _>(|| read_account(conn, user_id));
    }
    conn.build_transaction()
        .read_only()
        .repeatable_read()
        .run::<_, StoreError, _>(|| read_account(conn, user_id))
}

fn read_account(conn: &PgConnection, user_id: Uuid) -> Result<Option<Account>, StoreError> {
    let user = match find_user(conn, user_id)? {
        Some(user) => user,
        None => return Ok(None),
    };
    Ok(Some(Account {
        preferences: find_preferences(conn, user_id)?,
        trial: find_trial(conn, user_id)?,
        subscriptions: subscriptions_for_user(conn, user_id)?,
        user,
    }))
}
