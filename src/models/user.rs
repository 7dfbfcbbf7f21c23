use crate::schema::users;
use chrono::offset::Utc;
use chrono::DateTime;

/// Soft-delete state of a user. Both transitions are reversible; the
/// timestamps on [`User`] are audit data, not guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountStatus {
    Active,
    Deleted,
}

#[derive(Queryable, Debug, Clone, PartialEq)]
pub struct User {
    pub id: uuid::Uuid,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_deleted: Option<bool>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub reactivated_at: Option<DateTime<Utc>>,
}

impl User {
    // `is_deleted` is nullable in storage; NULL reads as active.
    pub fn status(&self) -> AccountStatus {
        match self.is_deleted {
            Some(true) => AccountStatus::Deleted,
            _ => AccountStatus::Active,
        }
    }
}

/// The id comes from the external auth provider and is never generated here.
#[derive(Insertable, Debug)]
#[table_name = "users"]
pub struct NewUser<'a> {
    pub id: &'a uuid::Uuid,
    pub email: Option<&'a str>,
}
