//! Task list management for Taskbook.
//!
//! This module implements the authoritative task store and its pluggable
//! persistence: creating, updating, and deleting tasks in an ordered
//! in-memory collection, mirroring every mutation to a configured storage
//! backend, and handing store access to consumers through a scoped
//! capability. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Store and access services in [`services`]
//! - Backend selection in [`config`]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
