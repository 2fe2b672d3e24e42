use std::sync::Arc;

use person_registry_sdk::{NewPerson, Person, PersonPatch};
use sea_orm::{DatabaseConnection, TransactionTrait};
use time::OffsetDateTime;
use tracing::{debug, info, instrument};

use crate::domain::error::DomainError;
use crate::domain::guards::FieldRules;
use crate::domain::repos::{AddressesRepository, ContactInfosRepository, PersonsRepository};

/// Person orchestration. Persons have no parent, so there is no ownership
/// check; the children repositories are only used for the cascading delete.
pub struct PersonsService<R, AR, CR>
where
    R: PersonsRepository,
    AR: AddressesRepository,
    CR: ContactInfosRepository,
{
    db: DatabaseConnection,
    repo: Arc<R>,
    addresses_repo: Arc<AR>,
    contact_infos_repo: Arc<CR>,
    rules: FieldRules,
}

impl<R, AR, CR> PersonsService<R, AR, CR>
where
    R: PersonsRepository,
    AR: AddressesRepository,
    CR: ContactInfosRepository,
{
    pub fn new(
        db: DatabaseConnection,
        repo: Arc<R>,
        addresses_repo: Arc<AR>,
        contact_infos_repo: Arc<CR>,
        rules: FieldRules,
    ) -> Self {
        Self {
            db,
            repo,
            addresses_repo,
            contact_infos_repo,
            rules,
        }
    }

    #[instrument(skip(self))]
    pub async fn list_persons(&self) -> Result<Vec<Person>, DomainError> {
        debug!("Listing all persons");

        let persons = self.repo.list(&self.db).await?;

        debug!("Successfully listed {} persons", persons.len());
        Ok(persons)
    }

    #[instrument(skip(self), fields(person_id = id))]
    pub async fn get_person(&self, id: i64) -> Result<Person, DomainError> {
        debug!("Getting person by id");

        self.repo
            .get(&self.db, id)
            .await?
            .ok_or_else(|| DomainError::person_not_found(id))
    }

    #[instrument(skip(self, new_person))]
    pub async fn create_person(&self, new_person: NewPerson) -> Result<Person, DomainError> {
        info!("Creating new person");

        self.rules.new_person(&new_person)?;

        let now = OffsetDateTime::now_utc();
        let person = self.repo.create(&self.db, new_person, now).await?;

        info!(person_id = person.id, "Successfully created person");
        Ok(person)
    }

    #[instrument(skip(self, patch), fields(person_id = id))]
    pub async fn update_person(&self, id: i64, patch: PersonPatch) -> Result<Person, DomainError> {
        info!("Updating person");

        let mut person = self.get_person(id).await?;
        self.rules.person_patch(&patch)?;

        if let Some(first_name) = patch.first_name {
            person.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            person.last_name = last_name;
        }
        person.updated_at = OffsetDateTime::now_utc();

        let updated = self.repo.update(&self.db, person).await?;

        info!("Successfully updated person");
        Ok(updated)
    }

    /// Deletes the person together with its addresses and contact infos.
    /// Deleting an unknown id is not an error.
    #[instrument(skip(self), fields(person_id = id))]
    pub async fn delete_person(&self, id: i64) -> Result<(), DomainError> {
        info!("Deleting person");

        let txn = self.db.begin().await?;

        let addresses = self.addresses_repo.delete_by_person(&txn, id).await?;
        let contact_infos = self.contact_infos_repo.delete_by_person(&txn, id).await?;
        let deleted = self.repo.delete(&txn, id).await?;

        txn.commit().await?;

        if deleted {
            info!(
                addresses,
                contact_infos, "Successfully deleted person with its children"
            );
        } else {
            debug!("No person to delete");
        }
        Ok(())
    }
}
