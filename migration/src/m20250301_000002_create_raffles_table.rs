use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Raffles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Raffles::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Raffles::Product).string().not_null())
                    .col(ColumnDef::new(Raffles::Description).text().not_null().default(""))
                    .col(ColumnDef::new(Raffles::ValueNumber).double().not_null())
                    .col(ColumnDef::new(Raffles::TotalNumbers).integer().not_null())
                    .col(ColumnDef::new(Raffles::SoldNumbers).integer().not_null().default(0))
                    .col(ColumnDef::new(Raffles::DrawDate).string().null())
                    .col(ColumnDef::new(Raffles::Status).string().not_null().default("Ativo"))
                    .col(ColumnDef::new(Raffles::ImageUrl).string().null())
                    .col(
                        ColumnDef::new(Raffles::CreatedAt)
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
            .drop_table(Table::drop().table(Raffles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Raffles {
    Table,
    Id,
    Product,
    Description,
    ValueNumber,
    TotalNumbers,
    SoldNumbers,
    DrawDate,
    Status,
    ImageUrl,
    CreatedAt,
}
