use super::*;

/// Tests the revocation window of a stored digest.
///
/// Expected: active strictly before expiry, inactive at and after it, and inactive for
/// unknown digests
#[tokio::test]
async fn active_only_before_expiry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RevokedToken)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let expires_at = now + Duration::minutes(1);
    let repo = RevokedTokenRepository::new(db);
    repo.upsert("digest".to_string(), expires_at).await?;

    assert!(repo.is_active("digest", now).await?);
    assert!(!repo.is_active("digest", expires_at).await?);
    assert!(!repo.is_active("digest", expires_at + Duration::seconds(1)).await?);
    assert!(!repo.is_active("other", now).await?);

    Ok(())
}
