//! Addy Fitness Core - Shared types library.
//!
//! This crate provides common types used across the Addy Fitness portal
//! components:
//! - `client` - Data-access layer wrapping the Addy Fitness REST backend
//! - `integration-tests` - End-to-end tests against a mock backend
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no
//! persistence. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, and
//!   role/status enums

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
