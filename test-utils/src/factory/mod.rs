//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let account = factory::account::create_account(&db).await?;
//! let collection = factory::collection::create_collection(&db).await?;
//! let bid = factory::bid::create_bid(&db, collection.game_id, account.id).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let admin = factory::account::AccountFactory::new(&db)
//!     .email("admin@example.com")
//!     .password("hunter22")
//!     .superuser(true)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `account` - Create account entities
//! - `collection` - Create collection entities
//! - `bid` - Create bid entities
//! - `helpers` - ID generation and multi-entity setups

pub mod account;
pub mod bid;
pub mod collection;
pub mod helpers;

pub use account::create_account;
pub use bid::{create_bid, create_bids};
pub use collection::create_collection;
