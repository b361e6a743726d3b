use crate::server::{
    data::collection::CollectionRepository,
    model::collection::{CollectionStatus, CreateCollectionParams},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_id;
mod get_active_paginated;
mod update_status;
