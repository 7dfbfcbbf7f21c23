use crate::error::StoreError;
use crate::models::{NewUser, User};
use crate::schema::users;
use diesel::dsl::now;
use diesel::{ExpressionMethods, OptionalExtension, PgConnection, QueryDsl, RunQueryDsl};
use uuid::Uuid;

#[tracing::instrument(
    name = "Saving a new user in the database",
    skip(conn, new_user),
    fields(user_id = %new_user.id)
)]
pub fn create_user(conn: &PgConnection, new_user: &NewUser) -> Result<User, StoreError> {
    diesel::insert_into(users::table)
        .values(new_user)
        .get_result(conn)
        .map_err(|e| {
            tracing::error!("Failed to execute query: {:?}", e);
            e.into()
        })
}

#[tracing::instrument(name = "Get user by id", skip(conn))]
pub fn find_user(conn: &PgConnection, user_id: Uuid) -> Result<Option<User>, StoreError> {
    Ok(users::table
        .find(user_id)
        .first::<User>(conn)
        .optional()?)
}

#[tracing::instrument(name = "Update the email of a user", skip(conn, email))]
pub fn update_email(
    conn: &PgConnection,
    user_id: Uuid,
    email: Option<&str>,
) -> Result<User, StoreError> {
    Ok(diesel::update(users::table.find(user_id))
        .set((users::email.eq(email), users::updated_at.eq(now)))
        .get_result(conn)?)
}

/// Marks a user as deleted. Preferences, trial and subscriptions are kept.
#[tracing::instrument(name = "Soft-delete a user", skip(conn))]
pub fn soft_delete_user(conn: &PgConnection, user_id: Uuid) -> Result<User, StoreError> {
    Ok(diesel::update(users::table.find(user_id))
        .set((
            users::is_deleted.eq(true),
            users::deleted_at.eq(now),
            users::updated_at.eq(now),
        ))
        .get_result(conn)?)
}

/// Clears the deletion flag. `deleted_at` stays as history.
#[tracing::instrument(name = "Reactivate a user", skip(conn))]
pub fn reactivate_user(conn: &PgConnection, user_id: Uuid) -> Result<User, StoreError> {
    Ok(diesel::update(users::table.find(user_id))
        .set((
            users::is_deleted.eq(false),
            users::reactivated_at.eq(now),
            users::updated_at.eq(now),
        ))
        .get_result(conn)?)
}

/// Physically removes a user.
///
/// Preferences and subscriptions go with it through `ON DELETE CASCADE`.
/// The trial foreign key has no delete action, so a user that still has a
/// trial cannot be removed and the call fails with
/// [`StoreError::ReferentialIntegrityViolation`].
#[tracing::instrument(name = "Delete a user and its cascading rows", skip(conn))]
pub fn delete_user(conn: &PgConnection, user_id: Uuid) -> Result<(), StoreError> {
    let deleted = diesel::delete(users::table.find(user_id))
        .execute(conn)
        .map_err(|e| {
            tracing::error!("Failed to execute query: {:?}", e);
            StoreError::from(e)
        })?;
    match deleted {
        0 => Err(StoreError::NotFound),
        _ => Ok(()),
    }
}
