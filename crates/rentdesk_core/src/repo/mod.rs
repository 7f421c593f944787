//! Persistence layer for session settings.
//!
//! # Responsibility
//! - Define the key-value settings contract backing the session store.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository writes are visible to reads on the same connection
//!   immediately (write-through, no buffering).

pub mod settings_repo;
