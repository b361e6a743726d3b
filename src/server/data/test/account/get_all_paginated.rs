use super::*;

/// Tests offset pagination over accounts.
///
/// Expected: pages ordered by ID, the last page partially filled
#[tokio::test]
async fn paginates_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut ids = Vec::new();
    for _ in 0..5 {
        ids.push(factory::create_account(db).await?.id);
    }

    let repo = AccountRepository::new(db);

    let first = repo.get_all_paginated(0, 2).await?;
    assert_eq!(first.iter().map(|a| a.id).collect::<Vec<_>>(), ids[0..2]);

    let last = repo.get_all_paginated(4, 2).await?;
    assert_eq!(last.len(), 1);
    assert_eq!(last[0].id, ids[4]);

    let beyond = repo.get_all_paginated(10, 2).await?;
    assert!(beyond.is_empty());

    Ok(())
}
