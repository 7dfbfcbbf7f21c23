use crate::error::StoreError;
use crate::models::{NewUserPreferences, UserPreferences};
use crate::schema::user_preferences;
use diesel::dsl::now;
use diesel::{
    Connection, ExpressionMethods, OptionalExtension, PgConnection, QueryDsl, RunQueryDsl,
};
use uuid::Uuid;

#[tracing::instrument(name = "Get preferences of a user", skip(conn))]
pub fn find_preferences(
    conn: &PgConnection,
    user_id: Uuid,
) -> Result<Option<UserPreferences>, StoreError> {
    Ok(user_preferences::table
        .filter(user_preferences::user_id.eq(user_id))
        .first::<UserPreferences>(conn)
        .optional()?)
}

/// Inserts the preferences row of a user. A user owns at most one, so a
/// second insert fails with [`StoreError::ConstraintViolation`].
#[tracing::instrument(name = "Saving new preferences in the database", skip(conn))]
pub fn create_preferences(
    conn: &PgConnection,
    user_id: Uuid,
    has_completed_onboarding: Option<bool>,
) -> Result<UserPreferences, StoreError> {
    diesel::insert_into(user_preferences::table)
        .values(NewUserPreferences {
            user_id: &user_id,
            has_completed_onboarding,
        })
        .get_result(conn)
        .map_err(|e| {
            tracing::error!("Failed to execute query: {:?}", e);
            e.into()
        })
}

/// Updates the preferences of a user, creating the row on first write.
///
/// Two concurrent first writes both take the insert path; the uniqueness
/// constraint lets one through and the other fails with
/// [`StoreError::ConstraintViolation`].
#[tracing::instrument(name = "Upsert preferences of a user", skip(conn))]
pub fn upsert_preferences(
    conn: &PgConnection,
    user_id: Uuid,
    has_completed_onboarding: Option<bool>,
) -> Result<UserPreferences, StoreError> {
    conn.transaction::<_, StoreError, _>(|| {
        let existing = match find_preferences(conn, user_id)? {
            Some(existing) => existing,
            None => return create_preferences(conn, user_id, has_completed_onboarding),
        };

        let target = user_preferences::table.find(existing.id);
        let updated: UserPreferences = match has_completed_onboarding {
            Some(flag) => diesel::update(target)
                .set((
                    user_preferences::has_completed_onboarding.eq(flag),
                    user_preferences::updated_at.eq(now),
                ))
                .get_result(conn)?,
            None => diesel::update(target)
                .set(user_preferences::updated_at.eq(now))
                .get_result(conn)?,
        };
        Ok(updated)
    })
}
