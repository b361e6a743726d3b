use super::*;

/// Tests creating an account.
///
/// Verifies that the repository stores every field and assigns an ID.
///
/// Expected: Ok(Account) with the given email and balance
#[tokio::test]
async fn creates_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AccountRepository::new(db);
    let account = repo
        .create(CreateAccountParams {
            balance: 7,
            ..params("ada@example.com")
        })
        .await?;

    assert!(account.id > 0);
    assert_eq!(account.email, "ada@example.com");
    assert_eq!(account.first_name.as_deref(), Some("Ada"));
    assert_eq!(account.balance, 7);
    assert!(!account.is_superuser);

    Ok(())
}

/// Tests creating two accounts with the same email.
///
/// Expected: Err on the second insert from the unique constraint
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AccountRepository::new(db);
    repo.create(params("dup@example.com")).await?;

    let result = repo.create(params("dup@example.com")).await;

    assert!(result.is_err());

    Ok(())
}
