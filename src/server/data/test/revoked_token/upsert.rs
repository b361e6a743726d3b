use super::*;

/// Tests revoking the same digest twice with a later expiry.
///
/// Expected: a single row whose expiry is the later one
#[tokio::test]
async fn extends_existing_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RevokedToken)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let repo = RevokedTokenRepository::new(db);

    repo.upsert("digest".to_string(), now + Duration::seconds(5))
        .await?;
    repo.upsert("digest".to_string(), now + Duration::minutes(10))
        .await?;

    assert!(repo.is_active("digest", now + Duration::minutes(5)).await?);
    assert_eq!(repo.delete_expired(now + Duration::minutes(11)).await?, 1);

    Ok(())
}
