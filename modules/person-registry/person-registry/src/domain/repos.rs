//! Repository ports.
//!
//! Every method takes the connection explicitly so the same call can run on a
//! pooled connection or inside a transaction opened by the service.

use async_trait::async_trait;
use person_registry_sdk::{Address, ContactInfo, NewAddress, NewContactInfo, NewPerson, Person};
use sea_orm::ConnectionTrait;
use time::OffsetDateTime;

use super::error::DomainError;

#[async_trait]
pub trait PersonsRepository: Send + Sync {
    async fn get<C: ConnectionTrait>(
        &self,
        conn: &C,
        id: i64,
    ) -> Result<Option<Person>, DomainError>;

    async fn exists<C: ConnectionTrait>(&self, conn: &C, id: i64) -> Result<bool, DomainError>;

    /// All persons in ascending id order.
    async fn list<C: ConnectionTrait>(&self, conn: &C) -> Result<Vec<Person>, DomainError>;

    /// Persists a new person; the store assigns the id.
    async fn create<C: ConnectionTrait>(
        &self,
        conn: &C,
        new_person: NewPerson,
        now: OffsetDateTime,
    ) -> Result<Person, DomainError>;

    async fn update<C: ConnectionTrait>(
        &self,
        conn: &C,
        person: Person,
    ) -> Result<Person, DomainError>;

    /// Returns `false` when no row matched.
    async fn delete<C: ConnectionTrait>(&self, conn: &C, id: i64) -> Result<bool, DomainError>;
}

#[async_trait]
pub trait AddressesRepository: Send + Sync {
    async fn get<C: ConnectionTrait>(
        &self,
        conn: &C,
        id: i64,
    ) -> Result<Option<Address>, DomainError>;

    /// Addresses of one person in ascending id order.
    async fn list_by_person<C: ConnectionTrait>(
        &self,
        conn: &C,
        person_id: i64,
    ) -> Result<Vec<Address>, DomainError>;

    async fn create<C: ConnectionTrait>(
        &self,
        conn: &C,
        person_id: i64,
        new_address: NewAddress,
        now: OffsetDateTime,
    ) -> Result<Address, DomainError>;

    async fn update<C: ConnectionTrait>(
        &self,
        conn: &C,
        address: Address,
    ) -> Result<Address, DomainError>;

    async fn delete<C: ConnectionTrait>(&self, conn: &C, id: i64) -> Result<bool, DomainError>;

    async fn delete_by_person<C: ConnectionTrait>(
        &self,
        conn: &C,
        person_id: i64,
    ) -> Result<u64, DomainError>;
}

#[async_trait]
pub trait ContactInfosRepository: Send + Sync {
    async fn get<C: ConnectionTrait>(
        &self,
        conn: &C,
        id: i64,
    ) -> Result<Option<ContactInfo>, DomainError>;

    /// Contact infos of one person in ascending id order.
    async fn list_by_person<C: ConnectionTrait>(
        &self,
        conn: &C,
        person_id: i64,
    ) -> Result<Vec<ContactInfo>, DomainError>;

    async fn create<C: ConnectionTrait>(
        &self,
        conn: &C,
        person_id: i64,
        new_contact_info: NewContactInfo,
        now: OffsetDateTime,
    ) -> Result<ContactInfo, DomainError>;

    async fn update<C: ConnectionTrait>(
        &self,
        conn: &C,
        contact_info: ContactInfo,
    ) -> Result<ContactInfo, DomainError>;

    async fn delete<C: ConnectionTrait>(&self, conn: &C, id: i64) -> Result<bool, DomainError>;

    async fn delete_by_person<C: ConnectionTrait>(
        &self,
        conn: &C,
        person_id: i64,
    ) -> Result<u64, DomainError>;
}
