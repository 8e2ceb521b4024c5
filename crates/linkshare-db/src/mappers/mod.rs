//! Entity to model mappers
//!
//! `From<Model> for Entity` conversions turning database rows into domain
//! objects. Both the PostgreSQL repositories and the in-memory store go
//! through these.

mod comment;
mod post;
mod user;
mod vote;
