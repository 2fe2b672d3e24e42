//! Sea-ORM backed persistence: entities, migrations and the repository
//! implementations of the domain ports.

pub mod entity;
pub mod mapper;
pub mod migrations;

mod addresses_sea_repo;
mod contact_infos_sea_repo;
mod persons_sea_repo;

pub use addresses_sea_repo::OrmAddressesRepository;
pub use contact_infos_sea_repo::OrmContactInfosRepository;
pub use persons_sea_repo::OrmPersonsRepository;

use crate::domain::error::DomainError;

pub(crate) fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::from(e)
}
