use super::*;

/// Tests the existence check for a user that was inserted.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_for_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.insert("u1", "Alice").await?;

    let result = repo.exists("u1").await;

    assert!(result.is_ok());
    assert!(result.unwrap());

    Ok(())
}

/// Tests the existence check for a user ID never inserted.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.exists("missing").await;

    assert!(result.is_ok());
    assert!(!result.unwrap());

    Ok(())
}
