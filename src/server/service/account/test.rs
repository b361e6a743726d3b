use std::sync::Arc;

use test_utils::{builder::TestBuilder, factory};

use super::*;
use crate::server::data::bid::BidRepository;

fn sign_up_params(email: &str) -> SignUpParams {
    SignUpParams {
        email: email.to_string(),
        password: "correct horse".to_string(),
        first_name: Some("Ada".to_string()),
        last_name: None,
    }
}

/// Tests that sign-up applies the configured starting balance and never grants privilege.
///
/// Expected: Ok with balance equal to the setting and is_superuser false
#[tokio::test]
async fn sign_up_applies_starting_balance() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = KeyedLocks::new();
    let settings = ServiceSettings {
        starting_balance: 3,
        ..Default::default()
    };

    let account = AccountService::new(db, &locks, settings)
        .sign_up(sign_up_params("New@Example.com"))
        .await?;

    assert_eq!(account.email, "new@example.com");
    assert_eq!(account.balance, 3);
    assert!(!account.is_superuser);
    assert!(password::verify_password("correct horse", &account.password_hash));

    Ok(())
}

/// Tests that a second sign-up with the same email is rejected.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn sign_up_rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = KeyedLocks::new();
    let service = AccountService::new(db, &locks, ServiceSettings::default());

    service.sign_up(sign_up_params("dup@example.com")).await?;
    let result = service.sign_up(sign_up_params("dup@example.com")).await;

    assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == "Email already registered"));

    Ok(())
}

/// Tests a positive top-up credits the balance.
///
/// Expected: Ok with balance increased by the amount
#[tokio::test]
async fn top_up_credits_balance() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let account = factory::account::AccountFactory::new(db)
        .balance(2)
        .build()
        .await?;
    let locks = KeyedLocks::new();

    let updated = AccountService::new(db, &locks, ServiceSettings::default())
        .top_up(account.id, 5)
        .await?;

    assert_eq!(updated.balance, 7);
    let stored = AccountRepository::new(db).find_by_id(account.id).await?.unwrap();
    assert_eq!(stored.balance, 7);

    Ok(())
}

/// Tests that a negative or zero top-up is rejected and changes nothing.
///
/// Expected: Err(RuleError::InvalidAmount) with balance unchanged
#[tokio::test]
async fn top_up_rejects_non_positive_amount() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let account = factory::account::AccountFactory::new(db)
        .balance(4)
        .build()
        .await?;
    let locks = KeyedLocks::new();
    let service = AccountService::new(db, &locks, ServiceSettings::default());

    for amount in [-5, 0] {
        let result = service.top_up(account.id, amount).await;
        assert!(matches!(
            result,
            Err(AppError::RuleErr(RuleError::InvalidAmount))
        ));
    }

    let stored = AccountRepository::new(db).find_by_id(account.id).await?.unwrap();
    assert_eq!(stored.balance, 4);

    Ok(())
}

/// Tests topping up an account that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn top_up_unknown_account_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = KeyedLocks::new();

    let result = AccountService::new(db, &locks, ServiceSettings::default())
        .top_up(9999, 5)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that concurrent top-ups on one account never lose an update.
///
/// Expected: final balance equals the sum of all credits
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_top_ups_are_not_lost() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.clone().unwrap();
    let account_id = factory::account::create_account(&db).await?.id;
    let locks = Arc::new(KeyedLocks::<LockKey>::new());

    let mut handles = Vec::new();
    for _ in 0..20 {
        let db = db.clone();
        let locks = locks.clone();
        handles.push(tokio::spawn(async move {
            AccountService::new(&db, &locks, ServiceSettings::default())
                .top_up(account_id, 3)
                .await
        }));
    }
    for handle in handles {
        handle.await.unwrap()?;
    }

    let stored = AccountRepository::new(&db).find_by_id(account_id).await?.unwrap();
    assert_eq!(stored.balance, 60);

    Ok(())
}

/// Tests that an email owned by another account cannot be claimed.
///
/// Expected: Err(AppError::BadRequest) and original email kept
#[tokio::test]
async fn change_email_rejects_taken_address() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let first = factory::account::AccountFactory::new(db)
        .email("first@example.com")
        .build()
        .await?;
    factory::account::AccountFactory::new(db)
        .email("second@example.com")
        .build()
        .await?;
    let locks = KeyedLocks::new();
    let service = AccountService::new(db, &locks, ServiceSettings::default());

    let result = service.change_email(first.id, "second@example.com").await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let updated = service.change_email(first.id, "renamed@example.com").await?;
    assert_eq!(updated.email, "renamed@example.com");

    Ok(())
}

/// Tests that a password change replaces the stored hash.
///
/// Expected: new password verifies, old one does not
#[tokio::test]
async fn change_password_rehashes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let account = factory::account::AccountFactory::new(db)
        .password("old-password")
        .build()
        .await?;
    let locks = KeyedLocks::new();

    let updated = AccountService::new(db, &locks, ServiceSettings::default())
        .change_password(account.id, "new-password".to_string())
        .await?;

    assert!(password::verify_password("new-password", &updated.password_hash));
    assert!(!password::verify_password("old-password", &updated.password_hash));

    Ok(())
}

/// Tests that deleting an account removes its bids.
///
/// Expected: Ok with bid no longer present
#[tokio::test]
async fn delete_cascades_to_bids() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (account, collection) =
        factory::helpers::create_bidding_dependencies(db, 1).await?;
    let bid = factory::bid::create_bid(db, collection.game_id, account.id).await?;
    let locks = KeyedLocks::new();

    AccountService::new(db, &locks, ServiceSettings::default())
        .delete(account.id)
        .await?;

    assert!(BidRepository::new(db).find_by_id(bid.id).await?.is_none());

    Ok(())
}

/// Tests that the admin bootstrap is idempotent.
///
/// Expected: first call creates a superuser, second call is a no-op
#[tokio::test]
async fn ensure_admin_creates_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = KeyedLocks::new();
    let service = AccountService::new(db, &locks, ServiceSettings::default());
    let admin = AdminBootstrap {
        email: "root@example.com".to_string(),
        password: "root-password".to_string(),
        first_name: None,
        last_name: None,
    };

    let created = service.ensure_admin(&admin).await?.unwrap();
    assert!(created.is_superuser);
    assert!(service.ensure_admin(&admin).await?.is_none());

    Ok(())
}
