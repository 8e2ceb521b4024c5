//! In-memory store
//!
//! Implements every repository trait over process-local tables. Used by
//! service tests and by callers that want the domain rules without a
//! database.

mod store;

pub use store::MemoryStore;
