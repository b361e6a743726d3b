use super::*;

/// Tests deleting an account that placed bids.
///
/// Expected: Ok(Some(Account)), the account and its bids are gone, other bids remain
#[tokio::test]
async fn deletes_account_and_its_bids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_bidding_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (account, collection) = factory::helpers::create_bidding_dependencies(db, 0).await?;
    let other = factory::create_account(db).await?;
    factory::create_bids(db, collection.game_id, account.id, 3).await?;
    let kept = factory::create_bid(db, collection.game_id, other.id).await?;

    let repo = AccountRepository::new(db);
    let deleted = repo.delete(account.id).await?;

    assert_eq!(deleted.map(|a| a.id), Some(account.id));
    assert!(repo.find_by_id(account.id).await?.is_none());

    let remaining = entity::prelude::Bid::find().all(db).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, kept.id);

    Ok(())
}

/// Tests deleting an account that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_bidding_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AccountRepository::new(db);

    assert!(repo.delete(42).await?.is_none());

    Ok(())
}
