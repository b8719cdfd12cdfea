//! Database layer - connection pool, schema, and stores
//!
//! # Design Principles
//!
//! - One pooled connection per request, returned to the pool on drop
//! - Multi-statement writes run in a single transaction
//! - Handlers talk to the `QuizStore` trait, never to the pool directly

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::create_pool;
pub use repos::*;
