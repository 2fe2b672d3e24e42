//! Person Registry Module
//!
//! Keeps persons together with their postal addresses and contact
//! information and exposes them over a JSON REST API.
//!
//! ## Architecture
//!
//! ### Contract Layer (`person-registry-sdk`)
//! - Model types: `Person`, `Address`, `ContactInfo`
//! - Request/patch types: `NewPerson`, `PersonPatch`, etc.
//! - Closed type enums: `AddressType`, `ContactInfoType`
//!
//! ### API Layer (`person_registry::api`)
//! - `handlers/` - Request handlers per resource
//! - `dto.rs` - REST-specific DTOs and serialization
//! - `error.rs` - HTTP error mapping (domain errors → `{timestamp, error, message}`)
//! - `routes.rs` - Route table, fallbacks and `OpenAPI` document
//!
//! ### Domain Layer (`person_registry::domain`)
//! - `service/` - Business operations per resource
//! - `guards.rs` - Precondition checks run before any mutation
//! - `repos.rs` - Storage ports
//! - **Rule:** MUST NOT import `api::*` (one-way dependency only)
//!
//! ### Infrastructure Layer (`person_registry::infra`)
//! - `entity/` - `SeaORM` entity definitions
//! - `mapper.rs` - Entity → SDK model conversions
//! - `migrations/` - Database schema migrations
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// === PUBLIC API (from SDK) ===
pub use person_registry_sdk::{
    Address, AddressPatch, AddressType, ContactInfo, ContactInfoPatch, ContactInfoType,
    NewAddress, NewContactInfo, NewPerson, ParseTypeError, Person, PersonPatch,
};

// === MODULE DEFINITION ===
pub mod module;
pub use module::PersonRegistry;

pub mod config;
pub use config::PersonRegistryConfig;

pub use api::rest::error::{ApiError, ErrorResponse};

// === INTERNAL MODULES ===
// Exposed for tests and the server binary only; use the SDK types for stable APIs.
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;

#[cfg(test)]
mod test_support;
