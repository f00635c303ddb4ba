use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Professionals::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Professionals::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Professionals::Name).string().not_null())
                    .col(ColumnDef::new(Professionals::Specialty).string().not_null().default(""))
                    .col(ColumnDef::new(Professionals::Bio).text().not_null().default(""))
                    .col(ColumnDef::new(Professionals::Whatsapp).string().not_null().default(""))
                    .col(ColumnDef::new(Professionals::Instagram).string().null())
                    .col(ColumnDef::new(Professionals::PhotoUrl).string().null())
                    .col(ColumnDef::new(Professionals::Active).boolean().not_null().default(true))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Professionals::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Professionals {
    Table,
    Id,
    Name,
    Specialty,
    Bio,
    Whatsapp,
    Instagram,
    PhotoUrl,
    Active,
}
