use super::*;

/// Tests deleting a collection that holds bids.
///
/// Expected: Ok(Some(Collection)), its bids are removed, bids elsewhere remain
#[tokio::test]
async fn deletes_collection_and_its_bids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_bidding_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (account, collection) = factory::helpers::create_bidding_dependencies(db, 0).await?;
    let other = factory::create_collection(db).await?;
    factory::create_bids(db, collection.game_id, account.id, 2).await?;
    let kept = factory::create_bid(db, other.game_id, account.id).await?;

    let repo = CollectionRepository::new(db);
    let deleted = repo.delete(collection.game_id).await?;

    assert_eq!(deleted.map(|c| c.game_id), Some(collection.game_id));
    assert!(repo.find_by_id(collection.game_id).await?.is_none());

    let remaining = entity::prelude::Bid::find().all(db).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, kept.id);

    Ok(())
}
