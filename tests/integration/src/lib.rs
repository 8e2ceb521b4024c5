//! Integration test utilities for linkshare
//!
//! This crate provides helpers for running end-to-end scenarios through the
//! service layer, against the in-memory store and, when `DATABASE_URL` is
//! set, against PostgreSQL.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
