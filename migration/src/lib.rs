pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_users_table;
mod m20250301_000002_create_raffles_table;
mod m20250301_000003_create_catalog_table;
mod m20250301_000004_create_nutrition_logs_table;
mod m20250301_000005_create_professionals_table;
mod m20250322_000001_create_promotions_table;
mod m20250322_000002_create_media_table;
mod m20250410_000001_add_role_and_session_token_to_users;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    // Append only. Applied versions are tracked in `seaql_migrations`.
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_users_table::Migration),
            Box::new(m20250301_000002_create_raffles_table::Migration),
            Box::new(m20250301_000003_create_catalog_table::Migration),
            Box::new(m20250301_000004_create_nutrition_logs_table::Migration),
            Box::new(m20250301_000005_create_professionals_table::Migration),
            Box::new(m20250322_000001_create_promotions_table::Migration),
            Box::new(m20250322_000002_create_media_table::Migration),
            Box::new(m20250410_000001_add_role_and_session_token_to_users::Migration),
        ]
    }
}
