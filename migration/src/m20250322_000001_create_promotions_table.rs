use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Promotions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Promotions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Promotions::Title).string().not_null())
                    .col(ColumnDef::new(Promotions::Description).text().not_null().default(""))
                    .col(ColumnDef::new(Promotions::Price).string().not_null().default(""))
                    .col(ColumnDef::new(Promotions::OriginalPrice).string().not_null().default(""))
                    .col(ColumnDef::new(Promotions::Category).string().not_null().default(""))
                    .col(ColumnDef::new(Promotions::Link).string().not_null().default(""))
                    .col(ColumnDef::new(Promotions::ImageUrl).string().not_null().default(""))
                    .col(ColumnDef::new(Promotions::Active).boolean().not_null().default(true))
                    .col(
                        ColumnDef::new(Promotions::CreatedAt)
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
            .drop_table(Table::drop().table(Promotions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Promotions {
    Table,
    Id,
    Title,
    Description,
    Price,
    OriginalPrice,
    Category,
    Link,
    ImageUrl,
    Active,
    CreatedAt,
}
