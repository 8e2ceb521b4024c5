//! # linkshare-service
//!
//! Application layer containing business logic, services, and DTOs.
//!
//! Every workflow validates its input before the first write, so a refused
//! request leaves the store untouched.

pub mod dto;
pub mod services;

pub use services::{
    AuthService, CommentService, PostService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult, VoteService,
};
