//! Domain service layer - business logic and rules.
//!
//! ## Architecture
//!
//! One orchestration service per resource:
//! - `persons` - Person CRUD; deleting a person cascades to its children
//! - `addresses` - Addresses of a person (at most one per address type)
//! - `contact_infos` - Contact infos of a person
//!
//! Each operation follows the same sequence: load what the guards need,
//! run the guards from [`crate::domain::guards`], stamp timestamps, then issue
//! at most one mutating store call (the cascade delete runs in a single
//! transaction).
//!
//! ## Layering Rules
//!
//! The domain layer:
//! - **MAY** import: `person_registry_sdk` (contract types), `sea_orm` connection traits
//! - **MUST NOT** import: `api::*` (one-way dependency: API → Domain)

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::domain::guards::FieldRules;
use crate::domain::repos::{AddressesRepository, ContactInfosRepository, PersonsRepository};

mod addresses;
mod contact_infos;
mod persons;

#[cfg(test)]
mod tests_children;
#[cfg(test)]
mod tests_persons;

pub use addresses::AddressesService;
pub use contact_infos::ContactInfosService;
pub use persons::PersonsService;

/// Configuration for the domain service
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub max_text_length: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_text_length: 100,
        }
    }
}

impl ServiceConfig {
    #[must_use]
    pub fn field_rules(&self) -> FieldRules {
        FieldRules {
            max_text_length: self.max_text_length,
        }
    }
}

// DI Container - aggregates all domain services
//
// Services own a clone of the `DatabaseConnection` (a pool handle) and share
// the repositories through `Arc`. Handlers never touch database objects.
pub struct AppServices<PR, AR, CR>
where
    PR: PersonsRepository,
    AR: AddressesRepository,
    CR: ContactInfosRepository,
{
    pub persons: PersonsService<PR, AR, CR>,
    pub addresses: AddressesService<AR, PR>,
    pub contact_infos: ContactInfosService<CR, PR>,
}

impl<PR, AR, CR> AppServices<PR, AR, CR>
where
    PR: PersonsRepository,
    AR: AddressesRepository,
    CR: ContactInfosRepository,
{
    pub fn new(
        db: DatabaseConnection,
        persons_repo: PR,
        addresses_repo: AR,
        contact_infos_repo: CR,
        config: &ServiceConfig,
    ) -> Self {
        let persons_repo = Arc::new(persons_repo);
        let addresses_repo = Arc::new(addresses_repo);
        let contact_infos_repo = Arc::new(contact_infos_repo);
        let rules = config.field_rules();

        Self {
            persons: PersonsService::new(
                db.clone(),
                persons_repo.clone(),
                addresses_repo.clone(),
                contact_infos_repo.clone(),
                rules,
            ),
            addresses: AddressesService::new(
                db.clone(),
                addresses_repo,
                persons_repo.clone(),
                rules,
            ),
            contact_infos: ContactInfosService::new(db, contact_infos_repo, persons_repo, rules),
        }
    }
}
