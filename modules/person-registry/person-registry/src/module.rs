use std::sync::Arc;

use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::{debug, info};

use crate::api::rest::routes;
use crate::config::PersonRegistryConfig;
use crate::domain::service::AppServices;
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::{
    OrmAddressesRepository, OrmContactInfosRepository, OrmPersonsRepository,
};

/// Type alias for the concrete `AppServices` type used with ORM repositories.
/// This lives in the composition root (module.rs) to avoid infra dependencies in domain.
pub(crate) type ConcreteAppServices =
    AppServices<OrmPersonsRepository, OrmAddressesRepository, OrmContactInfosRepository>;

/// Composition root: wires repositories, services and REST routes.
#[derive(Clone)]
pub struct PersonRegistry {
    services: Arc<ConcreteAppServices>,
}

impl PersonRegistry {
    /// Builds the module on top of an open connection pool. When
    /// `run_migrations` is set, pending schema migrations are applied first.
    pub async fn init(
        db: DatabaseConnection,
        cfg: &PersonRegistryConfig,
        run_migrations: bool,
    ) -> anyhow::Result<Self> {
        info!("Initializing person_registry module");
        debug!(
            "Loaded person_registry config: max_text_length={}",
            cfg.max_text_length
        );

        if run_migrations {
            info!("Applying person_registry database migrations");
            Migrator::up(&db, None)
                .await
                .map_err(|e| anyhow::anyhow!("failed to run migrations: {e}"))?;
        }

        let services = Arc::new(AppServices::new(
            db,
            OrmPersonsRepository::new(),
            OrmAddressesRepository::new(),
            OrmContactInfosRepository::new(),
            &cfg.service_config(),
        ));

        Ok(Self { services })
    }

    /// Mounts the REST API, the health probe and the fallback handlers.
    #[must_use]
    pub fn register_rest(&self, router: axum::Router) -> axum::Router {
        info!("Registering person_registry REST routes");

        let router = routes::register_routes(router, self.services.clone());

        info!("Person registry REST routes registered successfully");
        router
    }
}
