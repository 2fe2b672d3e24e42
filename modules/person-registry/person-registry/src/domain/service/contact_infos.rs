use std::sync::Arc;

use person_registry_sdk::{ContactInfo, ContactInfoPatch, NewContactInfo};
use sea_orm::DatabaseConnection;
use time::OffsetDateTime;
use tracing::{debug, info, instrument};

use crate::domain::error::DomainError;
use crate::domain::guards::{self, FieldRules};
use crate::domain::repos::{ContactInfosRepository, PersonsRepository};

pub struct ContactInfosService<R: ContactInfosRepository, P: PersonsRepository> {
    db: DatabaseConnection,
    repo: Arc<R>,
    persons_repo: Arc<P>,
    rules: FieldRules,
}

impl<R: ContactInfosRepository, P: PersonsRepository> ContactInfosService<R, P> {
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
    pub async fn list_contact_infos(
        &self,
        person_id: i64,
    ) -> Result<Vec<ContactInfo>, DomainError> {
        debug!("Listing contact infos of person");

        let exists = self.persons_repo.exists(&self.db, person_id).await?;
        guards::ensure_person_exists(person_id, exists)?;

        let contact_infos = self.repo.list_by_person(&self.db, person_id).await?;

        debug!("Successfully listed {} contact infos", contact_infos.len());
        Ok(contact_infos)
    }

    #[instrument(skip(self, new_contact_info), fields(person_id = person_id, contact_type = %new_contact_info.contact_type))]
    pub async fn add_contact_info(
        &self,
        person_id: i64,
        new_contact_info: NewContactInfo,
    ) -> Result<ContactInfo, DomainError> {
        info!("Adding contact info to person");

        let person = self
            .persons_repo
            .get(&self.db, person_id)
            .await?
            .ok_or_else(|| DomainError::person_not_found(person_id))?;

        self.rules.new_contact_info(&new_contact_info)?;

        let now = OffsetDateTime::now_utc();
        let contact_info = self
            .repo
            .create(&self.db, person.id, new_contact_info, now)
            .await?;

        info!(
            contact_info_id = contact_info.id,
            "Successfully added contact info"
        );
        Ok(contact_info)
    }

    #[instrument(skip(self, patch), fields(person_id = person_id, contact_info_id = contact_info_id))]
    pub async fn update_contact_info(
        &self,
        person_id: i64,
        contact_info_id: i64,
        patch: ContactInfoPatch,
    ) -> Result<ContactInfo, DomainError> {
        info!("Updating contact info");

        let mut contact_info = self.owned_contact_info(person_id, contact_info_id).await?;
        self.rules.contact_info_patch(&patch)?;

        if let Some(value) = patch.value {
            contact_info.value = value;
        }
        contact_info.updated_at = OffsetDateTime::now_utc();

        let updated = self.repo.update(&self.db, contact_info).await?;

        info!("Successfully updated contact info");
        Ok(updated)
    }

    #[instrument(skip(self), fields(person_id = person_id, contact_info_id = contact_info_id))]
    pub async fn delete_contact_info(
        &self,
        person_id: i64,
        contact_info_id: i64,
    ) -> Result<(), DomainError> {
        info!("Deleting contact info");

        let contact_info = self.owned_contact_info(person_id, contact_info_id).await?;
        let deleted = self.repo.delete(&self.db, contact_info.id).await?;

        if !deleted {
            return Err(DomainError::contact_info_not_found(contact_info_id));
        }

        info!("Successfully deleted contact info");
        Ok(())
    }

    async fn owned_contact_info(
        &self,
        person_id: i64,
        contact_info_id: i64,
    ) -> Result<ContactInfo, DomainError> {
        let contact_info = self
            .repo
            .get(&self.db, contact_info_id)
            .await?
            .ok_or_else(|| DomainError::contact_info_not_found(contact_info_id))?;

        guards::ensure_contact_info_belongs_to(&contact_info, person_id)?;
        Ok(contact_info)
    }
}
