//! CodeCatalog - Coding Problem Catalog Backend
//!
//! This library provides the core functionality for the CodeCatalog platform,
//! a small backend that manages coding problems and their test cases.
//!
//! # Features
//!
//! - Problem and test case management over a Postgres store
//! - In-process full-mirror problem cache for fast reads
//! - Per-problem difficulty-ordered test case index
//! - Inert submission records (no judging pipeline)
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic and the in-memory layer lifecycle
//! - **Repositories**: Database access behind store traits
//! - **Index**: In-memory cache, registry, and test case tree
//! - **Models**: Domain models and DTOs

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod index;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
