#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use crate::domain::service::{AppServices, ServiceConfig};
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::{
    OrmAddressesRepository, OrmContactInfosRepository, OrmPersonsRepository,
};
use crate::module::ConcreteAppServices;

/// Create an in-memory database for testing.
///
/// A single pooled connection keeps every query on the same in-memory database.
pub async fn inmem_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect(opts)
        .await
        .expect("Failed to connect to in-memory database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

pub fn build_services(db: DatabaseConnection, config: &ServiceConfig) -> Arc<ConcreteAppServices> {
    Arc::new(AppServices::new(
        db,
        OrmPersonsRepository::new(),
        OrmAddressesRepository::new(),
        OrmContactInfosRepository::new(),
        config,
    ))
}
