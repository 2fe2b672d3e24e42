use async_trait::async_trait;
use person_registry_sdk::{ContactInfo, NewContactInfo};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use time::OffsetDateTime;

use crate::domain::error::DomainError;
use crate::domain::repos::ContactInfosRepository;
use crate::infra::storage::db_err;
use crate::infra::storage::entity::contact_info::{
    ActiveModel as ContactInfoAM, Column as ContactInfoColumn, Entity as ContactInfoEntity,
};

/// ORM-based implementation of the `ContactInfosRepository` trait.
#[derive(Clone, Default)]
pub struct OrmContactInfosRepository;

impl OrmContactInfosRepository {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ContactInfosRepository for OrmContactInfosRepository {
    async fn get<C: ConnectionTrait>(
        &self,
        conn: &C,
        id: i64,
    ) -> Result<Option<ContactInfo>, DomainError> {
        let found = ContactInfoEntity::find_by_id(id)
            .one(conn)
            .await
            .map_err(db_err)?;
        found.map(ContactInfo::try_from).transpose()
    }

    async fn list_by_person<C: ConnectionTrait>(
        &self,
        conn: &C,
        person_id: i64,
    ) -> Result<Vec<ContactInfo>, DomainError> {
        let rows = ContactInfoEntity::find()
            .filter(ContactInfoColumn::PersonId.eq(person_id))
            .order_by_asc(ContactInfoColumn::Id)
            .all(conn)
            .await
            .map_err(db_err)?;
        rows.into_iter().map(ContactInfo::try_from).collect()
    }

    async fn create<C: ConnectionTrait>(
        &self,
        conn: &C,
        person_id: i64,
        new_contact_info: NewContactInfo,
        now: OffsetDateTime,
    ) -> Result<ContactInfo, DomainError> {
        let m = ContactInfoAM {
            person_id: Set(person_id),
            contact_type: Set(new_contact_info.contact_type.as_str().to_owned()),
            value: Set(new_contact_info.value),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let inserted = m.insert(conn).await.map_err(db_err)?;
        ContactInfo::try_from(inserted)
    }

    async fn update<C: ConnectionTrait>(
        &self,
        conn: &C,
        contact_info: ContactInfo,
    ) -> Result<ContactInfo, DomainError> {
        let m = ContactInfoAM {
            id: Set(contact_info.id),
            person_id: Set(contact_info.person_id),
            contact_type: Set(contact_info.contact_type.as_str().to_owned()),
            value: Set(contact_info.value),
            created_at: Set(contact_info.created_at),
            updated_at: Set(contact_info.updated_at),
        };

        let updated = m.update(conn).await.map_err(db_err)?;
        ContactInfo::try_from(updated)
    }

    async fn delete<C: ConnectionTrait>(&self, conn: &C, id: i64) -> Result<bool, DomainError> {
        let result = ContactInfoEntity::delete_by_id(id)
            .exec(conn)
            .await
            .map_err(db_err)?;

        Ok(result.rows_affected > 0)
    }

    async fn delete_by_person<C: ConnectionTrait>(
        &self,
        conn: &C,
        person_id: i64,
    ) -> Result<u64, DomainError> {
        let result = ContactInfoEntity::delete_many()
            .filter(ContactInfoColumn::PersonId.eq(person_id))
            .exec(conn)
            .await
            .map_err(db_err)?;

        Ok(result.rows_affected)
    }
}
