use super::*;

/// Tests moving a bid to another collection.
///
/// Expected: Ok(Some(Bid)) with the new collection and the same player
#[tokio::test]
async fn moves_bid() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_bidding_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (account, collection) = factory::helpers::create_bidding_dependencies(db, 0).await?;
    let target = factory::create_collection(db).await?;
    let bid = factory::create_bid(db, collection.game_id, account.id).await?;

    let repo = BidRepository::new(db);
    let moved = repo.update_collection(bid.id, target.game_id).await?.unwrap();

    assert_eq!(moved.game_id, target.game_id);
    assert_eq!(moved.player_id, account.id);
    assert_eq!(repo.count_by_collection(collection.game_id).await?, 0);

    Ok(())
}

/// Tests moving a bid that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_bid() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_bidding_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let collection = factory::create_collection(db).await?;
    let repo = BidRepository::new(db);

    assert!(repo
        .update_collection(12, collection.game_id)
        .await?
        .is_none());

    Ok(())
}
