use super::*;

/// Tests recording a bid.
///
/// Expected: Ok(Bid) linked to the given collection and player
#[tokio::test]
async fn creates_bid() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_bidding_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (account, collection) = factory::helpers::create_bidding_dependencies(db, 1).await?;

    let repo = BidRepository::new(db);
    let bid = repo.create(collection.game_id, account.id).await?;

    assert!(bid.id > 0);
    assert_eq!(bid.game_id, collection.game_id);
    assert_eq!(bid.player_id, account.id);
    assert_eq!(repo.find_by_id(bid.id).await?.map(|b| b.id), Some(bid.id));

    Ok(())
}
