use super::*;

/// Tests admin account successfully passes admin permission check.
///
/// Expected: Ok(Account) with is_superuser=true
#[tokio::test]
async fn grants_access_to_admin_account() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let state = AppState::for_test(db.clone());

    let admin = factory::account::create_admin(db).await?;
    let token = BearerToken(state.tokens.issue(admin.id)?.token);

    let account = AuthGuard::new(&state, &token)
        .require(&[Permission::Admin])
        .await?;

    assert_eq!(account.id, admin.id);
    assert!(account.is_superuser);

    Ok(())
}

/// Tests regular account is denied admin permission.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_admin_permission_to_regular_account() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let state = AppState::for_test(db.clone());

    let account = factory::account::create_account(db).await?;
    let token = BearerToken(state.tokens.issue(account.id)?.token);

    let result = AuthGuard::new(&state, &token)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) if id == account.id
    ));

    Ok(())
}

/// Tests owner-or-admin permission for owner, admin and stranger.
///
/// Expected: owner and admin pass, stranger is denied
#[tokio::test]
async fn self_or_admin_allows_owner_and_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let state = AppState::for_test(db.clone());

    let owner = factory::account::create_account(db).await?;
    let stranger = factory::account::create_account(db).await?;
    let admin = factory::account::create_admin(db).await?;

    for (caller, allowed) in [(&owner, true), (&admin, true), (&stranger, false)] {
        let token = BearerToken(state.tokens.issue(caller.id)?.token);
        let result = AuthGuard::new(&state, &token)
            .require(&[Permission::SelfOrAdmin(owner.id)])
            .await;

        assert_eq!(result.is_ok(), allowed, "caller {}", caller.id);
    }

    Ok(())
}

/// Tests that owner-only permission gives superusers no override.
///
/// Expected: Err(AuthError::AccessDenied) for the admin
#[tokio::test]
async fn self_only_denies_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let state = AppState::for_test(db.clone());

    let owner = factory::account::create_account(db).await?;
    let admin = factory::account::create_admin(db).await?;
    let token = BearerToken(state.tokens.issue(admin.id)?.token);

    let result = AuthGuard::new(&state, &token)
        .require(&[Permission::SelfOnly(owner.id)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that an invalid token fails before any permission is checked.
///
/// Expected: Err(AuthError::Unauthorized)
#[tokio::test]
async fn rejects_invalid_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let state = AppState::for_test(db.clone());

    let token = BearerToken("garbage".to_string());
    let result = AuthGuard::new(&state, &token).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::Unauthorized))
    ));

    Ok(())
}
