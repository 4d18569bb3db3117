//! Storage abstraction and persistence for Habitally.
//!
//! This crate provides a key/value storage trait with JSON-file and
//! in-memory implementations, the JSON codec for repository collections,
//! first-launch bootstrap and the debounced autosaver.

#![warn(missing_docs)]

pub mod autosave;
pub mod codec;
pub mod json_storage;
pub mod loader;
pub mod memory;
pub mod trait_;

pub use autosave::{AutoSaveConfig, AutoSaver, SharedRepository};
pub use json_storage::JsonStorage;
pub use loader::load_repository;
pub use memory::MemoryStorage;
pub use trait_::{Result, Storage, StorageError};
