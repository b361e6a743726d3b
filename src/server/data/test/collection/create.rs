use super::*;

/// Tests creating a collection with an expiry.
///
/// Expected: Ok(Collection) with the requested name, status and expiry
#[tokio::test]
async fn creates_collection() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Collection)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let expires_at = chrono::Utc::now() + chrono::Duration::days(3);
    let repo = CollectionRepository::new(db);
    let collection = repo
        .create(CreateCollectionParams {
            name: "Autumn League".to_string(),
            status: CollectionStatus::Inactive,
            expires_at: Some(expires_at),
        })
        .await?;

    assert!(collection.game_id > 0);
    assert_eq!(collection.name, "Autumn League");
    assert_eq!(collection.status, CollectionStatus::Inactive);
    assert_eq!(
        collection.expires_at.map(|e| e.timestamp()),
        Some(expires_at.timestamp())
    );

    Ok(())
}
