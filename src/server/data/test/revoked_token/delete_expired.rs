use super::*;

/// Tests pruning expired digests.
///
/// Expected: only rows at or past their expiry are removed
#[tokio::test]
async fn removes_only_expired_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RevokedToken)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let repo = RevokedTokenRepository::new(db);
    repo.upsert("lapsed".to_string(), now - Duration::seconds(1))
        .await?;
    repo.upsert("boundary".to_string(), now).await?;
    repo.upsert("live".to_string(), now + Duration::minutes(1))
        .await?;

    assert_eq!(repo.delete_expired(now).await?, 2);
    assert!(repo.is_active("live", now).await?);
    assert_eq!(repo.delete_expired(now).await?, 0);

    Ok(())
}
