//! Employee Directory - employee records, reporting structures and compensation history
//!
//! This crate provides the directory service (employee lifecycle, reporting-structure
//! computation, compensation history), the storage gateways it runs on and the HTTP
//! API that exposes it.

pub mod config;
pub mod db;
pub mod entity;
pub mod error;
pub mod gateway;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod seed;
pub mod service;
pub mod state;

// Re-export commonly used types
pub use config::Config;
pub use service::DirectoryService;
pub use state::AppState;
