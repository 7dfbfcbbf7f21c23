use crate::error::StoreError;
use crate::models::{NewUserTrial, UserTrial};
use crate::schema::user_trials;
use diesel::{ExpressionMethods, OptionalExtension, PgConnection, QueryDsl, RunQueryDsl};
use uuid::Uuid;

/// Starts the trial of a user.
///
/// Fails with [`StoreError::NotNullViolation`] when no end time is given and
/// with [`StoreError::ConstraintViolation`] when the user already had a trial.
#[tracing::instrument(
    name = "Saving a new trial in the database",
    skip(conn, new_trial),
    fields(user_id = %new_trial.user_id)
)]
pub fn create_trial(conn: &PgConnection, new_trial: &NewUserTrial) -> Result<UserTrial, StoreError> {
    diesel::insert_into(user_trials::table)
        .values(new_trial)
        .get_result(conn)
        .map_err(|e| {
            tracing::error!("Failed to execute query: {:?}", e);
            e.into()
        })
}

#[tracing::instrument(name = "Get trial of a user", skip(conn))]
pub fn find_trial(conn: &PgConnection, user_id: Uuid) -> Result<Option<UserTrial>, StoreError> {
    Ok(user_trials::table
        .filter(user_trials::user_id.eq(user_id))
        .first::<UserTrial>(conn)
        .optional()?)
}

#[tracing::instrument(name = "Mark trial as used", skip(conn))]
pub fn mark_trial_used(conn: &PgConnection, user_id: Uuid) -> Result<UserTrial, StoreError> {
    Ok(
        diesel::update(user_trials::table.filter(user_trials::user_id.eq(user_id)))
            .set(user_trials::is_trial_used.eq(true))
            .get_result(conn)?,
    )
}
