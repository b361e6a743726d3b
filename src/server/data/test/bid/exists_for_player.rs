use super::*;

/// Tests enrolment detection for a player.
///
/// Expected: true only for the collection the player bid on
#[tokio::test]
async fn detects_player_enrolment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_bidding_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (account, collection) = factory::helpers::create_bidding_dependencies(db, 0).await?;
    let other = factory::create_collection(db).await?;
    let stranger = factory::create_account(db).await?;
    factory::create_bid(db, collection.game_id, account.id).await?;

    let repo = BidRepository::new(db);

    assert!(repo.exists_for_player(collection.game_id, account.id).await?);
    assert!(!repo.exists_for_player(other.game_id, account.id).await?);
    assert!(!repo.exists_for_player(collection.game_id, stranger.id).await?);

    Ok(())
}
