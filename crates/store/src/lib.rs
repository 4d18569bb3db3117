//! Repository (Layer 1)
//!
//! The single in-memory owner of user data. Front-ends mutate it, the
//! autosaver listens to its change events, statistics read its slices.

#![warn(missing_docs)]

pub mod event;
pub mod repository;
pub mod seed;

pub use event::{ChangeEvent, ChangeKind, Collection};
pub use repository::{Collections, Repository};
pub use seed::{sample_goals, sample_habits};
