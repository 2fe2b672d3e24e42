use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        create_persons(manager).await?;
        create_addresses(manager).await?;
        create_contact_infos(manager).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ContactInfos::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Addresses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Persons::Table).to_owned())
            .await?;
        Ok(())
    }
}

async fn create_persons(manager: &SchemaManager<'_>) -> Result<(), DbErr> {
    manager
        .create_table(
            Table::create()
                .table(Persons::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(Persons::Id)
                        .big_integer()
                        .not_null()
                        .auto_increment()
                        .primary_key(),
                )
                .col(ColumnDef::new(Persons::FirstName).string().not_null())
                .col(ColumnDef::new(Persons::LastName).string().not_null())
                .col(
                    ColumnDef::new(Persons::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .col(
                    ColumnDef::new(Persons::UpdatedAt)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .to_owned(),
        )
        .await?;
    Ok(())
}

async fn create_addresses(manager: &SchemaManager<'_>) -> Result<(), DbErr> {
    // No unique index on (person_id, address_type); the service enforces it.
    manager
        .create_table(
            Table::create()
                .table(Addresses::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(Addresses::Id)
                        .big_integer()
                        .not_null()
                        .auto_increment()
                        .primary_key(),
                )
                .col(ColumnDef::new(Addresses::PersonId).big_integer().not_null())
                .col(ColumnDef::new(Addresses::AddressType).string().not_null())
                .col(ColumnDef::new(Addresses::Country).string().not_null())
                .col(ColumnDef::new(Addresses::City).string().not_null())
                .col(ColumnDef::new(Addresses::Zip).string().not_null())
                .col(ColumnDef::new(Addresses::Street).string().not_null())
                .col(
                    ColumnDef::new(Addresses::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .col(
                    ColumnDef::new(Addresses::UpdatedAt)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_addresses_person_id")
                        .from(Addresses::Table, Addresses::PersonId)
                        .to(Persons::Table, Persons::Id)
                        .on_delete(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

    manager
        .create_index(
            Index::create()
                .name("idx_addresses_person_id")
                .table(Addresses::Table)
                .col(Addresses::PersonId)
                .if_not_exists()
                .to_owned(),
        )
        .await?;
    Ok(())
}

async fn create_contact_infos(manager: &SchemaManager<'_>) -> Result<(), DbErr> {
    manager
        .create_table(
            Table::create()
                .table(ContactInfos::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(ContactInfos::Id)
                        .big_integer()
                        .not_null()
                        .auto_increment()
                        .primary_key(),
                )
                .col(
                    ColumnDef::new(ContactInfos::PersonId)
                        .big_integer()
                        .not_null(),
                )
                .col(
                    ColumnDef::new(ContactInfos::ContactType)
                        .string()
                        .not_null(),
                )
                .col(ColumnDef::new(ContactInfos::Value).string().not_null())
                .col(
                    ColumnDef::new(ContactInfos::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .col(
                    ColumnDef::new(ContactInfos::UpdatedAt)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_contact_infos_person_id")
                        .from(ContactInfos::Table, ContactInfos::PersonId)
                        .to(Persons::Table, Persons::Id)
                        .on_delete(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

    manager
        .create_index(
            Index::create()
                .name("idx_contact_infos_person_id")
                .table(ContactInfos::Table)
                .col(ContactInfos::PersonId)
                .if_not_exists()
                .to_owned(),
        )
        .await?;
    Ok(())
}

#[derive(DeriveIden)]
enum Persons {
    Table,
    Id,
    FirstName,
    LastName,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Addresses {
    Table,
    Id,
    PersonId,
    AddressType,
    Country,
    City,
    Zip,
    Street,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ContactInfos {
    Table,
    Id,
    PersonId,
    ContactType,
    Value,
    CreatedAt,
    UpdatedAt,
}
