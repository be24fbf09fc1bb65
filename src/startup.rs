use std::sync::Arc;

use crate::{
    config::Config,
    error::AppError,
    provider::{HttpIdentityProvider, IdentityProvider},
};

/// Connects to the SQLite database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is
/// up-to-date before the application accesses the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the HTTP client used for identity provider calls.
///
/// Redirects are disabled so the provider cannot bounce requests to arbitrary
/// hosts.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Builds the identity provider gateway from configuration.
///
/// # Arguments
/// - `config` - Application configuration with provider URL and API key
/// - `http_client` - Shared HTTP client
///
/// # Returns
/// - `Arc<dyn IdentityProvider>` - Gateway ready for use in application state
pub fn setup_identity_provider(
    config: &Config,
    http_client: reqwest::Client,
) -> Arc<dyn IdentityProvider> {
    Arc::new(HttpIdentityProvider::new(
        http_client,
        config.identity_api_url.clone(),
        config.identity_api_key.clone(),
    ))
}
