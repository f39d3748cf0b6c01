//! Service layer providing the credential workflows on top of models.
//! - Separates business logic from data access.
//! - Reuses entity definitions in the `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod auth;
#[cfg(test)]
pub mod test_support;
