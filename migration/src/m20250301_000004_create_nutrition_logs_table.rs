use sea_orm_migration::prelude::*;

use super::m20250301_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NutritionLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(NutritionLogs::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(NutritionLogs::UserId).integer().not_null())
                    .col(ColumnDef::new(NutritionLogs::Meal).string().not_null())
                    .col(ColumnDef::new(NutritionLogs::Time).string().not_null().default(""))
                    .col(ColumnDef::new(NutritionLogs::Description).text().not_null().default(""))
                    .col(ColumnDef::new(NutritionLogs::Calories).integer().null())
                    .col(ColumnDef::new(NutritionLogs::Observation).text().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_nutrition_logs_user_id")
                            .from(NutritionLogs::Table, NutritionLogs::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(NutritionLogs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum NutritionLogs {
    Table,
    Id,
    UserId,
    Meal,
    Time,
    Description,
    Calories,
    Observation,
}
