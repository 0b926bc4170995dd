use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

use crate::config::DatabaseConfig;

/// Open the connection pool. Each lookup borrows one connection for its
/// query and hands it back when the query future completes or is dropped.
pub async fn init_db(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(config.url.to_owned());

    let timeout = Duration::from_secs(config.connect_timeout_secs);
    opt.max_connections(config.max_connections)
        .min_connections(1)
        .connect_timeout(timeout)
        .acquire_timeout(timeout)
        .sqlx_logging(true);

    Database::connect(opt).await
}
