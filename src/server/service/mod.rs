//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls within one transaction
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Concurrency**: Serializing balance and capacity changes through keyed locks

pub mod account;
pub mod auth;
pub mod bid;
pub mod collection;
