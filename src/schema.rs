table! {
    subscriptions (id) {
        id -> Uuid,
        user_id -> Nullable<Uuid>,
        stripe_customer_id -> Nullable<Text>,
        stripe_subscription_id -> Nullable<Text>,
        status -> Nullable<Text>,
        price_id -> Nullable<Text>,
        created_at -> Nullable<Timestamptz>,
        cancel_at_period_end -> Nullable<Bool>,
        updated_at -> Nullable<Timestamptz>,
        current_period_end -> Nullable<Timestamptz>,
    }
}

table! {
    user_preferences (id) {
        id -> Uuid,
        user_id -> Uuid,
        has_completed_onboarding -> Nullable<Bool>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

table! {
    user_trials (id) {
        id -> Uuid,
        user_id -> Uuid,
        trial_start_time -> Nullable<Timestamptz>,
        trial_end_time -> Timestamptz,
        is_trial_used -> Nullable<Bool>,
    }
}

table! {
    users (id) {
        id -> Uuid,
        email -> Nullable<Text>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
        is_deleted -> Nullable<Bool>,
        deleted_at -> Nullable<Timestamptz>,
        reactivated_at -> Nullable<Timestamptz>,
    }
}

joinable!(subscriptions -> users (user_id));
joinable!(user_preferences -> users (user_id));
joinable!(user_trials -> users (user_id));

allow_tables_to_appear_in_same_query!(
    subscriptions,
    user_preferences,
    user_trials,
    users,
);
