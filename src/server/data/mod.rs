//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//!
//! Repositories borrow any `ConnectionTrait` implementor, so the same queries run against
//! the connection pool or inside an open `DatabaseTransaction`.

pub mod account;
pub mod bid;
pub mod collection;
pub mod revoked_token;

#[cfg(test)]
mod test;
