use anyhow::Context;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::domain::common::DatabaseConfig;

#[derive(Debug, Clone)]
pub struct Postgres {
    db: DatabaseConnection,
}

impl Postgres {
    pub async fn new(config: &DatabaseConfig) -> anyhow::Result<Self> {
        let mut options = ConnectOptions::new(config.database_url.clone());
        options.max_connections(20).sqlx_logging(false);

        let db = Database::connect(options)
            .await
            .context("failed to connect to postgres")?;

        if config.run_migrations {
            info!("running database migrations");
            sqlx::migrate!("./migrations")
                .run(db.get_postgres_connection_pool())
                .await
                .context("failed to run database migrations")?;
        }

        Ok(Self { db })
    }

    pub fn get_db(&self) -> DatabaseConnection {
        self.db.clone()
    }
}
