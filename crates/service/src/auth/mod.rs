//! Auth module: credential registration, authentication, and lookup.
//!
//! Layered the same way throughout: domain types, validation, hashing,
//! a repository abstraction, and the service tying them together.

pub mod domain;
pub mod errors;
pub mod password;
pub mod repo;
pub mod repository;
pub mod service;
pub mod validation;

pub use service::CredentialService;
