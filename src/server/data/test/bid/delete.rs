use super::*;

/// Tests deleting a bid twice.
///
/// Expected: true the first time, false once the bid is gone
#[tokio::test]
async fn deletes_bid_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_bidding_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (account, collection) = factory::helpers::create_bidding_dependencies(db, 0).await?;
    let bid = factory::create_bid(db, collection.game_id, account.id).await?;

    let repo = BidRepository::new(db);

    assert!(repo.delete(bid.id).await?);
    assert!(!repo.delete(bid.id).await?);
    assert!(repo.find_by_id(bid.id).await?.is_none());

    Ok(())
}
