//! Server-side API backend and conversation persistence logic.
//!
//! The backend uses Axum as the web framework, SeaORM for database operations and
//! tower-sessions for identifying the acting user.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and session identity
//! - **Validation** (`validation/`) - Request DTO checks producing typed operation params
//! - **Service Layer** (`service/`) - Orchestration of storage calls, ownership checks and
//!   result envelopes
//! - **Data Layer** (`data/`) - Storage ports and their SeaORM implementations
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session access and authentication guards
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Database, session store and CORS initialization
//! - **Router** (`router`) - Route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** resolves the acting user from the session and calls a service
//! 3. **Service** validates the request, checks room ownership and calls the storage port
//! 4. **Data** runs the statements, usually inside one transaction
//! 5. **Service** wraps the outcome in an envelope, turning storage faults into `status=error`
//! 6. **Controller** returns the envelope as JSON

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod validation;
