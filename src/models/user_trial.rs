use crate::schema::user_trials;
use chrono::offset::Utc;
use chrono::DateTime;

#[derive(Queryable, Debug, Clone, PartialEq)]
pub struct UserTrial {
    pub id: uuid::Uuid,
    pub user_id: uuid::Uuid,
    pub trial_start_time: Option<DateTime<Utc>>,
    pub trial_end_time: DateTime<Utc>,
    pub is_trial_used: Option<bool>,
}

/// A trial to insert.
///
/// `trial_end_time` has no column default: leaving it `None` makes the
/// insert fail with a not-null violation. `trial_start_time` defaults to the
/// insertion time.
#[derive(Insertable, Debug)]
#[table_name = "user_trials"]
pub struct NewUserTrial<'a> {
    pub user_id: &'a uuid::Uuid,
    pub trial_start_time: Option<DateTime<Utc>>,
    pub trial_end_time: Option<DateTime<Utc>>,
    pub is_trial_used: Option<bool>,
}
