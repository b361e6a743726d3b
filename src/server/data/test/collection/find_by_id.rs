use super::*;

/// Tests that plain and locking lookups agree.
///
/// Expected: both return the stored collection; both return None for an unknown ID
#[tokio::test]
async fn finds_collection_with_and_without_lock() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Collection)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_collection(db).await?;
    let repo = CollectionRepository::new(db);

    let plain = repo.find_by_id(stored.game_id).await?.unwrap();
    let locked = repo.find_by_id_for_update(stored.game_id).await?.unwrap();
    assert_eq!(plain.game_id, locked.game_id);
    assert_eq!(plain.status, CollectionStatus::Active);

    assert!(repo.find_by_id(stored.game_id + 1).await?.is_none());
    assert!(repo.find_by_id_for_update(stored.game_id + 1).await?.is_none());

    Ok(())
}

/// Tests a row whose status is neither `active` nor `inactive`.
///
/// Expected: Err(DbErr) rather than a silently defaulted status
#[tokio::test]
async fn rejects_unknown_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Collection)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::collection::CollectionFactory::new(db)
        .status("archived")
        .build()
        .await?;

    let result = CollectionRepository::new(db).find_by_id(stored.game_id).await;

    assert!(result.is_err());

    Ok(())
}
