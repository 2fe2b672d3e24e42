use std::sync::Arc;

use person_registry_sdk::{Address, AddressPatch, NewAddress};
use sea_orm::DatabaseConnection;
use time::OffsetDateTime;
use tracing::{debug, info, instrument};

use crate::domain::error::DomainError;
use crate::domain::guards::{self, FieldRules};
use crate::domain::repos::{AddressesRepository, PersonsRepository};

pub struct AddressesService<R: AddressesRepository, P: PersonsRepository> {
    db: DatabaseConnection,
    repo: Arc<R>,
    persons_repo: Arc<P>,
    rules: FieldRules,
}

impl<R: AddressesRepository, P: PersonsRepository> AddressesService<R, P> {
    pub fn new(
        db: DatabaseConnection,
        repo: Arc<R>,
        persons_repo: Arc<P>,
        rules: FieldRules,
    ) -> Self {
        Self {
            db,
            repo,
            persons_repo,
            rules,
        }
    }

    #[instrument(skip(self), fields(person_id = person_id))]
    pub async fn list_addresses(&self, person_id: i64) -> Result<Vec<Address>, DomainError> {
        debug!("Listing addresses of person");

        let exists = self.persons_repo.exists(&self.db, person_id).await?;
        guards::ensure_person_exists(person_id, exists)?;

        let addresses = self.repo.list_by_person(&self.db, person_id).await?;

        debug!("Successfully listed {} addresses", addresses.len());
        Ok(addresses)
    }

    #[instrument(skip(self, new_address), fields(person_id = person_id, address_type = %new_address.address_type))]
    pub async fn add_address(
        &self,
        person_id: i64,
        new_address: NewAddress,
    ) -> Result<Address, DomainError> {
        info!("Adding address to person");

        let person = self
            .persons_repo
            .get(&self.db, person_id)
            .await?
            .ok_or_else(|| DomainError::person_not_found(person_id))?;

        self.rules.new_address(&new_address)?;

        let existing = self.repo.list_by_person(&self.db, person.id).await?;
        guards::ensure_address_type_unique(person.id, &existing, new_address.address_type)?;

        let now = OffsetDateTime::now_utc();
        let address = self
            .repo
            .create(&self.db, person.id, new_address, now)
            .await?;

        info!(address_id = address.id, "Successfully added address");
        Ok(address)
    }

    #[instrument(skip(self, patch), fields(person_id = person_id, address_id = address_id))]
    pub async fn update_address(
        &self,
        person_id: i64,
        address_id: i64,
        patch: AddressPatch,
    ) -> Result<Address, DomainError> {
        info!("Updating address");

        let mut address = self.owned_address(person_id, address_id).await?;
        self.rules.address_patch(&patch)?;

        if let Some(country) = patch.country {
            address.country = country;
        }
        if let Some(city) = patch.city {
            address.city = city;
        }
        if let Some(zip) = patch.zip {
            address.zip = zip;
        }
        if let Some(street) = patch.street {
            address.street = street;
        }
        address.updated_at = OffsetDateTime::now_utc();

        let updated = self.repo.update(&self.db, address).await?;

        info!("Successfully updated address");
        Ok(updated)
    }

    #[instrument(skip(self), fields(person_id = person_id, address_id = address_id))]
    pub async fn delete_address(&self, person_id: i64, address_id: i64) -> Result<(), DomainError> {
        info!("Deleting address");

        let address = self.owned_address(person_id, address_id).await?;
        let deleted = self.repo.delete(&self.db, address.id).await?;

        if !deleted {
            return Err(DomainError::address_not_found(address_id));
        }

        info!("Successfully deleted address");
        Ok(())
    }

    async fn owned_address(&self, person_id: i64, address_id: i64) -> Result<Address, DomainError> {
        let address = self
            .repo
            .get(&self.db, address_id)
            .await?
            .ok_or_else(|| DomainError::address_not_found(address_id))?;

        guards::ensure_address_belongs_to(&address, person_id)?;
        Ok(address)
    }
}
