use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Media::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Media::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Media::Title).string().not_null())
                    .col(ColumnDef::new(Media::Kind).string().not_null())
                    .col(ColumnDef::new(Media::Category).string().not_null())
                    .col(ColumnDef::new(Media::Synopsis).text().not_null().default(""))
                    .col(ColumnDef::new(Media::Platform).string().not_null().default(""))
                    .col(ColumnDef::new(Media::Year).integer().null())
                    .col(ColumnDef::new(Media::ImageUrl).string().not_null().default(""))
                    .col(ColumnDef::new(Media::ExternalLink).string().null())
                    .col(ColumnDef::new(Media::SubmittedBy).string().not_null())
                    .col(ColumnDef::new(Media::Status).string().not_null().default("pendente"))
                    .col(
                        ColumnDef::new(Media::ApprovedByAdmin)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Media::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_media_status")
                    .table(Media::Table)
                    .col(Media::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Media::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Media {
    Table,
    Id,
    Title,
    Kind,
    Category,
    Synopsis,
    Platform,
    Year,
    ImageUrl,
    ExternalLink,
    SubmittedBy,
    Status,
    ApprovedByAdmin,
    CreatedAt,
}
