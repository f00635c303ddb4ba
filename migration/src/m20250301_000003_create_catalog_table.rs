use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Catalog::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Catalog::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Catalog::Title).string().not_null())
                    .col(ColumnDef::new(Catalog::ImageUrl).string().not_null())
                    .col(ColumnDef::new(Catalog::Prompt).text().not_null())
                    .col(ColumnDef::new(Catalog::Description).text().not_null().default(""))
                    .col(ColumnDef::new(Catalog::Category).string().not_null())
                    .col(ColumnDef::new(Catalog::Style).string().not_null().default(""))
                    .col(ColumnDef::new(Catalog::MinPlan).string().not_null().default("Starter"))
                    .col(ColumnDef::new(Catalog::Status).string().not_null().default("Ativo"))
                    .col(ColumnDef::new(Catalog::CreatedBy).string().not_null().default(""))
                    .col(
                        ColumnDef::new(Catalog::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Catalog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Catalog {
    Table,
    Id,
    Title,
    ImageUrl,
    Prompt,
    Description,
    Category,
    Style,
    MinPlan,
    Status,
    CreatedBy,
    CreatedAt,
}
