//! Shared types, errors, and configuration for Exchequer.
//!
//! This crate provides common types used across all other crates:
//! - Money type with decimal precision
//! - Typed handles for departments and schemes
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use types::Money;
