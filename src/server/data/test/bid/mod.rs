use crate::server::data::bid::BidRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_by_collection;
mod create;
mod delete;
mod exists_for_player;
mod update_collection;
