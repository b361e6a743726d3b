use crate::server::{data::account::AccountRepository, model::account::CreateAccountParams};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod compare_and_set_balance;
mod create;
mod delete;
mod find_by_email;
mod get_all_paginated;

fn params(email: &str) -> CreateAccountParams {
    CreateAccountParams {
        email: email.to_string(),
        password_hash: "!unusable".to_string(),
        first_name: Some("Ada".to_string()),
        last_name: None,
        balance: 0,
        is_superuser: false,
    }
}
