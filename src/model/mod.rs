//! Request and response DTOs shared by the HTTP layer.

pub mod account;
pub mod api;
pub mod auth;
pub mod bid;
pub mod collection;
