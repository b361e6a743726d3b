//! Domain models and operation parameters.
//!
//! Domain models are built from entities at the repository boundary (`from_entity`)
//! and turned into DTOs at the controller boundary (`into_dto`). Parameter types
//! carry exactly the fields an operation is allowed to touch.

pub mod account;
pub mod bid;
pub mod collection;
