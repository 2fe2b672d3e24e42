//! Domain layer: errors, repository ports, guards and orchestration services.
//!
//! The domain layer MUST NOT import `api::*`. Storage is reached only through
//! the repository traits in [`repos`].

pub mod error;
pub mod guards;
pub mod repos;
pub mod service;
