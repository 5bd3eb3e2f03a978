//! Server-side API backend.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Query construction and single-statement mutations
//! - **Model Layer** (`model/`) - Domain models and validated parameter types
//! - **Error Layer** (`error/`) - Application error types and the error translator
//! - **Util** (`util/`) - Request parameter validation
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (the database pool)
//! - **Startup** (`startup`) - Tracing, database connection and migrations, shutdown signal
//! - **Router** (`router`) - Axum route configuration
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** validates path, query and body parameters
//! 3. **Service** orchestrates repository calls
//! 4. **Data** builds and executes a parameterized statement, converts rows to models
//! 5. **Controller** converts models to DTOs; errors go through `AppError::into_response`

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
