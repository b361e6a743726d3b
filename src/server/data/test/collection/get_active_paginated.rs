use super::*;

/// Tests listing only active collections.
///
/// Expected: inactive collections are skipped and pagination applies to active ones
#[tokio::test]
async fn lists_only_active_collections() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Collection)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_collection(db).await?;
    factory::collection::CollectionFactory::new(db)
        .status("inactive")
        .build()
        .await?;
    let second = factory::create_collection(db).await?;

    let repo = CollectionRepository::new(db);

    let active = repo.get_active_paginated(0, 10).await?;
    assert_eq!(
        active.iter().map(|c| c.game_id).collect::<Vec<_>>(),
        vec![first.game_id, second.game_id]
    );

    let page = repo.get_active_paginated(1, 10).await?;
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].game_id, second.game_id);

    assert_eq!(repo.get_all_paginated(0, 10).await?.len(), 3);

    Ok(())
}
