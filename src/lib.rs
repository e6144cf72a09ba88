//! Taskbook: single-user task list manager core.
//!
//! This crate provides the state and storage layer for a task list
//! application: the in-memory task store, its mutation operations, and a
//! pluggable persistence strategy that mirrors the collection to a durable
//! key-value slot so it survives process restarts.
//!
//! # Architecture
//!
//! Taskbook follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task data types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: Concrete implementations of ports (file slot, memory)
//!
//! # Modules
//!
//! - [`task`]: Task entity, persistence strategies, and the task store

pub mod task;
