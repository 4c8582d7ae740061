//! core
//!
//! Core domain types and schemas for the Meridian CLI.
//!
//! # Modules
//!
//! - [`abi`] - Contract description schema, loading, and display
//! - [`config`] - Configuration schema and loading
//! - [`types`] - Strong types: ChannelId, SigningKey
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid states at compile time
//! - Schemas are strict and self-describing

pub mod abi;
pub mod config;
pub mod types;
