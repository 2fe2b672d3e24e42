use async_trait::async_trait;
use person_registry_sdk::{NewPerson, Person};
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryOrder, Set};
use time::OffsetDateTime;

use crate::domain::error::DomainError;
use crate::domain::repos::PersonsRepository;
use crate::infra::storage::db_err;
use crate::infra::storage::entity::person::{
    ActiveModel as PersonAM, Column as PersonColumn, Entity as PersonEntity,
};

/// ORM-based implementation of the `PersonsRepository` trait.
#[derive(Clone, Default)]
pub struct OrmPersonsRepository;

impl OrmPersonsRepository {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PersonsRepository for OrmPersonsRepository {
    async fn get<C: ConnectionTrait>(
        &self,
        conn: &C,
        id: i64,
    ) -> Result<Option<Person>, DomainError> {
        let found = PersonEntity::find_by_id(id)
            .one(conn)
            .await
            .map_err(db_err)?;
        Ok(found.map(Into::into))
    }

    async fn exists<C: ConnectionTrait>(&self, conn: &C, id: i64) -> Result<bool, DomainError> {
        let count = PersonEntity::find_by_id(id)
            .count(conn)
            .await
            .map_err(db_err)?;
        Ok(count > 0)
    }

    async fn list<C: ConnectionTrait>(&self, conn: &C) -> Result<Vec<Person>, DomainError> {
        let rows = PersonEntity::find()
            .order_by_asc(PersonColumn::Id)
            .all(conn)
            .await
            .map_err(db_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn create<C: ConnectionTrait>(
        &self,
        conn: &C,
        new_person: NewPerson,
        now: OffsetDateTime,
    ) -> Result<Person, DomainError> {
        let m = PersonAM {
            first_name: Set(new_person.first_name),
            last_name: Set(new_person.last_name),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let inserted = m.insert(conn).await.map_err(db_err)?;
        Ok(inserted.into())
    }

    async fn update<C: ConnectionTrait>(
        &self,
        conn: &C,
        person: Person,
    ) -> Result<Person, DomainError> {
        let m = PersonAM {
            id: Set(person.id),
            first_name: Set(person.first_name),
            last_name: Set(person.last_name),
            created_at: Set(person.created_at),
            updated_at: Set(person.updated_at),
        };

        let updated = m.update(conn).await.map_err(db_err)?;
        Ok(updated.into())
    }

    async fn delete<C: ConnectionTrait>(&self, conn: &C, id: i64) -> Result<bool, DomainError> {
        let result = PersonEntity::delete_by_id(id)
            .exec(conn)
            .await
            .map_err(db_err)?;

        Ok(result.rows_affected > 0)
    }
}
