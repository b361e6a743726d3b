use super::*;

/// Tests flipping a collection's status.
///
/// Expected: Ok(Some(Collection)) with the new status persisted
#[tokio::test]
async fn updates_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Collection)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_collection(db).await?;
    let repo = CollectionRepository::new(db);

    let updated = repo
        .update_status(stored.game_id, CollectionStatus::Inactive)
        .await?
        .unwrap();

    assert_eq!(updated.status, CollectionStatus::Inactive);
    assert_eq!(
        repo.find_by_id(stored.game_id).await?.unwrap().status,
        CollectionStatus::Inactive
    );

    Ok(())
}

/// Tests updating a collection that does not exist.
///
/// Expected: Ok(None) for both status and expiry updates
#[tokio::test]
async fn returns_none_for_missing_collection() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Collection)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CollectionRepository::new(db);

    assert!(repo
        .update_status(7, CollectionStatus::Active)
        .await?
        .is_none());
    assert!(repo
        .update_expiry(7, chrono::Utc::now())
        .await?
        .is_none());

    Ok(())
}
