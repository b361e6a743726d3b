use super::*;

/// Tests counting bids per collection.
///
/// Expected: each collection counts only its own bids; an empty collection counts 0
#[tokio::test]
async fn counts_bids_per_collection() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_bidding_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (account, collection) = factory::helpers::create_bidding_dependencies(db, 0).await?;
    let other = factory::create_collection(db).await?;
    let empty = factory::create_collection(db).await?;
    factory::create_bids(db, collection.game_id, account.id, 4).await?;
    factory::create_bid(db, other.game_id, account.id).await?;

    let repo = BidRepository::new(db);

    assert_eq!(repo.count_by_collection(collection.game_id).await?, 4);
    assert_eq!(repo.count_by_collection(other.game_id).await?, 1);
    assert_eq!(repo.count_by_collection(empty.game_id).await?, 0);

    Ok(())
}
