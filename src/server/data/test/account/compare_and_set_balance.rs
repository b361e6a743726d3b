use super::*;

/// Tests a balance write whose expected value matches.
///
/// Expected: Ok(true) and the new balance stored
#[tokio::test]
async fn writes_when_expected_balance_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::account::AccountFactory::new(db)
        .balance(3)
        .build()
        .await?;

    let repo = AccountRepository::new(db);
    let written = repo.compare_and_set_balance(account.id, 3, 2).await?;

    assert!(written);
    assert_eq!(repo.find_by_id(account.id).await?.unwrap().balance, 2);

    Ok(())
}

/// Tests a balance write whose expected value is stale.
///
/// Simulates a concurrent writer having changed the balance between read and write.
///
/// Expected: Ok(false) and the stored balance untouched
#[tokio::test]
async fn skips_write_when_balance_changed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::account::AccountFactory::new(db)
        .balance(5)
        .build()
        .await?;

    let repo = AccountRepository::new(db);
    let written = repo.compare_and_set_balance(account.id, 4, 3).await?;

    assert!(!written);
    assert_eq!(repo.find_by_id(account.id).await?.unwrap().balance, 5);

    Ok(())
}

/// Tests a balance write for an account that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn skips_write_for_missing_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AccountRepository::new(db);

    assert!(!repo.compare_and_set_balance(999, 0, 1).await?);

    Ok(())
}
