use crate::schema::user_preferences;
use chrono::offset::Utc;
use chrono::DateTime;

#[derive(Queryable, Debug, Clone, PartialEq)]
pub struct UserPreferences {
    pub id: uuid::Uuid,
    pub user_id: uuid::Uuid,
    pub has_completed_onboarding: Option<bool>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// `None` fields fall back to the column defaults.
#[derive(Insertable)]
#[table_name = "user_preferences"]
pub struct NewUserPreferences<'a> {
    pub user_id: &'a uuid::Uuid,
    pub has_completed_onboarding: Option<bool>,
}
