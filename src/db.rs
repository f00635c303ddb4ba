use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::info;

/// Open the SQLite database and bring its schema up to the latest migration.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(database_url.to_owned());
    options.sqlx_logging(false);

    info!("Connecting to database: {}", database_url);
    let db = Database::connect(options).await?;

    Migrator::up(&db, None).await?;
    info!("Database migrations applied");

    Ok(db)
}
