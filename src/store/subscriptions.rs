use crate::error::StoreError;
use crate::models::{NewSubscription, Subscription, SubscriptionChanges};
use crate::schema::subscriptions;
use diesel::dsl::now;
use diesel::{ExpressionMethods, PgConnection, QueryDsl, RunQueryDsl};
use uuid::Uuid;

/// Inserts a subscription. Provider ids are not deduplicated here: the same
/// `stripe_subscription_id` may be stored more than once.
#[tracing::instrument(
    name = "Saving a new subscription in the database",
    skip(conn, new_subscription),
    fields(
        user_id = ?new_subscription.user_id,
        stripe_subscription_id = ?new_subscription.stripe_subscription_id,
        status = ?new_subscription.status
    )
)]
pub fn create_subscription(
    conn: &PgConnection,
    new_subscription: &NewSubscription,
) -> Result<Subscription, StoreError> {
    diesel::insert_into(subscriptions::table)
        .values(new_subscription)
        .get_result(conn)
        .map_err(|e| {
            tracing::error!("Failed to execute query: {:?}", e);
            e.into()
        })
}

#[tracing::instrument(name = "Update a subscription", skip(conn, changes))]
pub fn update_subscription(
    conn: &PgConnection,
    subscription_id: Uuid,
    changes: &SubscriptionChanges,
) -> Result<Subscription, StoreError> {
    Ok(diesel::update(subscriptions::table.find(subscription_id))
        .set((changes, subscriptions::updated_at.eq(now)))
        .get_result(conn)?)
}

/// Unlinks a subscription from its user without deleting the row.
#[tracing::instrument(name = "Detach a subscription from its user", skip(conn))]
pub fn detach_subscription(
    conn: &PgConnection,
    subscription_id: Uuid,
) -> Result<Subscription, StoreError> {
    Ok(diesel::update(subscriptions::table.find(subscription_id))
        .set((
            subscriptions::user_id.eq(None::<Uuid>),
            subscriptions::updated_at.eq(now),
        ))
        .get_result(conn)?)
}

#[tracing::instrument(name = "Get subscriptions of a user", skip(conn))]
pub fn subscriptions_for_user(
    conn: &PgConnection,
    user_id: Uuid,
) -> Result<Vec<Subscription>, StoreError> {
    Ok(subscriptions::table
        .filter(subscriptions::user_id.eq(user_id))
        .order(subscriptions::created_at.asc())
        .load::<Subscription>(conn)?)
}

#[tracing::instrument(name = "Get subscriptions by provider id", skip(conn))]
pub fn find_by_stripe_subscription_id(
    conn: &PgConnection,
    stripe_subscription_id: &str,
) -> Result<Vec<Subscription>, StoreError> {
    Ok(subscriptions::table
        .filter(subscriptions::stripe_subscription_id.eq(stripe_subscription_id))
        .order(subscriptions::created_at.asc())
        .load::<Subscription>(conn)?)
}
