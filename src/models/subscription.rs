use crate::schema::subscriptions;
use chrono::offset::Utc;
use chrono::DateTime;

/// A billing subscription mirrored from the payment provider.
///
/// `status` is kept as the provider's free-form string; its vocabulary is
/// owned by the provider.
#[derive(Queryable, Debug, Clone, PartialEq)]
pub struct Subscription {
    pub id: uuid::Uuid,
    pub user_id: Option<uuid::Uuid>,
    pub stripe_customer_id: Option<String>,
    pub stripe_subscription_id: Option<String>,
    pub status: Option<String>,
    pub price_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub cancel_at_period_end: Option<bool>,
    pub updated_at: Option<DateTime<Utc>>,
    pub current_period_end: Option<DateTime<Utc>>,
}

#[derive(Insertable, Debug, Default)]
#[table_name = "subscriptions"]
pub struct NewSubscription<'a> {
    pub user_id: Option<&'a uuid::Uuid>,
    pub stripe_customer_id: Option<&'a str>,
    pub stripe_subscription_id: Option<&'a str>,
    pub status: Option<&'a str>,
    pub price_id: Option<&'a str>,
    pub cancel_at_period_end: Option<bool>,
    pub current_period_end: Option<DateTime<Utc>>,
}

/// Fields to overwrite on an existing subscription; `None` leaves a column
/// as it is. `updated_at` is always stamped by the update itself.
#[derive(AsChangeset, Debug, Default, Clone)]
#[table_name = "subscriptions"]
pub struct SubscriptionChanges<'a> {
    pub stripe_customer_id: Option<&'a str>,
    pub stripe_subscription_id: Option<&'a str>,
    pub status: Option<&'a str>,
    pub price_id: Option<&'a str>,
    pub cancel_at_period_end: Option<bool>,
    pub current_period_end: Option<DateTime<Utc>>,
}
