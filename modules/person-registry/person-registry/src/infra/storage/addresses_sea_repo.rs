use async_trait::async_trait;
use person_registry_sdk::{Address, NewAddress};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use time::OffsetDateTime;

use crate::domain::error::DomainError;
use crate::domain::repos::AddressesRepository;
use crate::infra::storage::db_err;
use crate::infra::storage::entity::address::{
    ActiveModel as AddressAM, Column as AddressColumn, Entity as AddressEntity,
};

/// ORM-based implementation of the `AddressesRepository` trait.
#[derive(Clone, Default)]
pub struct OrmAddressesRepository;

impl OrmAddressesRepository {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AddressesRepository for OrmAddressesRepository {
    async fn get<C: ConnectionTrait>(
        &self,
        conn: &C,
        id: i64,
    ) -> Result<Option<Address>, DomainError> {
        let found = AddressEntity::find_by_id(id)
            .one(conn)
            .await
            .map_err(db_err)?;
        found.map(Address::try_from).transpose()
    }

    async fn list_by_person<C: ConnectionTrait>(
        &self,
        conn: &C,
        person_id: i64,
    ) -> Result<Vec<Address>, DomainError> {
        let rows = AddressEntity::find()
            .filter(AddressColumn::PersonId.eq(person_id))
            .order_by_asc(AddressColumn::Id)
            .all(conn)
            .await
            .map_err(db_err)?;
        rows.into_iter().map(Address::try_from).collect()
    }

    async fn create<C: ConnectionTrait>(
        &self,
        conn: &C,
        person_id: i64,
        new_address: NewAddress,
        now: OffsetDateTime,
    ) -> Result<Address, DomainError> {
        let m = AddressAM {
            person_id: Set(person_id),
            address_type: Set(new_address.address_type.as_str().to_owned()),
            country: Set(new_address.country),
            city: Set(new_address.city),
            zip: Set(new_address.zip),
            street: Set(new_address.street),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let inserted = m.insert(conn).await.map_err(db_err)?;
        Address::try_from(inserted)
    }

    async fn update<C: ConnectionTrait>(
        &self,
        conn: &C,
        address: Address,
    ) -> Result<Address, DomainError> {
        let m = AddressAM {
            id: Set(address.id),
            person_id: Set(address.person_id),
            address_type: Set(address.address_type.as_str().to_owned()),
            country: Set(address.country),
            city: Set(address.city),
            zip: Set(address.zip),
            street: Set(address.street),
            created_at: Set(address.created_at),
            updated_at: Set(address.updated_at),
        };

        let updated = m.update(conn).await.map_err(db_err)?;
        Address::try_from(updated)
    }

    async fn delete<C: ConnectionTrait>(&self, conn: &C, id: i64) -> Result<bool, DomainError> {
        let result = AddressEntity::delete_by_id(id)
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
        let result = AddressEntity::delete_many()
            .filter(AddressColumn::PersonId.eq(person_id))
            .exec(conn)
            .await
            .map_err(db_err)?;

        Ok(result.rows_affected)
    }
}
