use crate::helpers::spawn_db;
use account_model::error::StoreError;
use account_model::models::{AccountStatus, NewUser};
use account_model::store;
use claim::{assert_none, assert_ok, assert_some};
use uuid::Uuid;

#[test]
fn create_user_keeps_the_external_id_and_applies_defaults() {
    // arrange
    let db = spawn_db();
    let id = Uuid::new_v4();

    // act
    let user = store::create_user(
        &db.conn,
        &NewUser {
            id: &id,
            email: Some("ursula_le_guin@gmail.com"),
        },
    )
    .expect("Failed to create user.");

    // assert
    assert_eq!(user.id, id);
    assert_eq!(user.email.as_deref(), Some("ursula_le_guin@gmail.com"));
    assert_eq!(user.is_deleted, Some(false));
    assert_eq!(user.created_at, user.updated_at);
    assert_none!(user.deleted_at);
    assert_none!(user.reactivated_at);
    assert_eq!(user.status(), AccountStatus::Active);
}

#[test]
fn email_is_optional() {
    let db = spawn_db();
    let id = Uuid::new_v4();

    let user = store::create_user(&db.conn, &NewUser { id: &id, email: None })
        .expect("Failed to create user.");

    assert_none!(user.email);
}

#[test]
fn a_second_user_with_the_same_id_is_rejected() {
    // arrange
    let db = spawn_db();
    let user = db.create_user();

    // act
    let result = store::create_user(
        &db.conn,
        &NewUser {
            id: &user.id,
            email: None,
        },
    );

    // assert
    assert!(
        matches!(result, Err(StoreError::ConstraintViolation { .. })),
        "Expected a constraint violation, got {:?}",
        result
    );
}

#[test]
fn find_user_returns_none_for_unknown_ids() {
    let db = spawn_db();

    let found = store::find_user(&db.conn, Uuid::new_v4()).expect("Failed to query users.");

    assert_none!(found);
}

#[test]
fn find_user_returns_the_stored_row() {
    let db = spawn_db();
    let user = db.create_user();

    let found = store::find_user(&db.conn, user.id).expect("Failed to query users.");

    assert_eq!(found, Some(user));
}

#[test]
fn update_email_sets_and_clears_the_address() {
    // arrange
    let db = spawn_db();
    let user = db.create_user();

    // act
    let changed = store::update_email(&db.conn, user.id, Some("new@example.com"))
        .expect("Failed to update email.");
    let cleared = store::update_email(&db.conn, user.id, None).expect("Failed to clear email.");

    // assert
    assert_eq!(changed.email.as_deref(), Some("new@example.com"));
    assert_none!(cleared.email);
    assert!(changed.updated_at > user.updated_at);
    assert!(cleared.updated_at > changed.updated_at);
}

#[test]
fn update_email_of_an_unknown_user_is_not_found() {
    let db = spawn_db();

    let result = store::update_email(&db.conn, Uuid::new_v4(), Some("nobody@example.com"));

    assert!(matches!(result, Err(StoreError::NotFound)));
}

#[test]
fn soft_delete_marks_the_user_deleted() {
    // arrange
    let db = spawn_db();
    let user = db.create_user();

    // act
    let deleted = store::soft_delete_user(&db.conn, user.id).expect("Failed to soft-delete.");

    // assert
    assert_eq!(deleted.is_deleted, Some(true));
    assert_some!(deleted.deleted_at);
    assert_none!(deleted.reactivated_at);
    assert_eq!(deleted.status(), AccountStatus::Deleted);
    assert!(deleted.updated_at > user.updated_at);
    assert_eq!(deleted.deleted_at, Some(deleted.updated_at));
    assert_some!(store::find_user(&db.conn, user.id).unwrap());
}

#[test]
fn reactivation_keeps_the_deletion_history() {
    // arrange
    let db = spawn_db();
    let user = db.create_user();
    let deleted = store::soft_delete_user(&db.conn, user.id).expect("Failed to soft-delete.");

    // act
    let reactivated =
        store::reactivate_user(&db.conn, user.id).expect("Failed to reactivate user.");

    // assert
    assert_eq!(reactivated.is_deleted, Some(false));
    assert_eq!(reactivated.deleted_at, deleted.deleted_at);
    let reactivated_at = reactivated
        .reactivated_at
        .expect("reactivated_at was not set.");
    assert!(reactivated_at >= deleted.deleted_at.unwrap());
    assert_eq!(reactivated.status(), AccountStatus::Active);
    assert!(reactivated.updated_at > deleted.updated_at);
    assert_eq!(reactivated.updated_at, reactivated_at);
}

#[test]
fn the_soft_delete_cycle_can_repeat() {
    let db = spawn_db();
    let user = db.create_user();

    for _ in 0..2 {
        assert_ok!(store::soft_delete_user(&db.conn, user.id));
        assert_ok!(store::reactivate_user(&db.conn, user.id));
    }
    let deleted = store::soft_delete_user(&db.conn, user.id).expect("Failed to soft-delete.");

    assert_eq!(deleted.status(), AccountStatus::Deleted);
    assert!(deleted.deleted_at.unwrap() >= deleted.reactivated_at.unwrap());
}

#[test]
fn soft_delete_of_an_unknown_user_is_not_found() {
    let db = spawn_db();

    let result = store::soft_delete_user(&db.conn, Uuid::new_v4());

    assert!(matches!(result, Err(StoreError::NotFound)));
}

#[test]
fn delete_of_an_unknown_user_is_not_found() {
    let db = spawn_db();

    let result = store::delete_user(&db.conn, Uuid::new_v4());

    assert!(matches!(result, Err(StoreError::NotFound)));
}
