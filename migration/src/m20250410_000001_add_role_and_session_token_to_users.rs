use sea_orm_migration::prelude::*;

use super::m20250301_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // SQLite only accepts one column per ALTER TABLE.
        manager
            .alter_table(
                Table::alter()
                    .table(Users::Table)
                    .add_column(ColumnDef::new(UsersExt::Role).string().not_null().default("user"))
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Users::Table)
                    .add_column(ColumnDef::new(UsersExt::SessionToken).string().not_null().default(""))
                    .to_owned(),
            )
            .await?;

        // Rows created before this migration get a random token so the unique index holds.
        manager
            .get_connection()
            .execute_unprepared(
                "UPDATE users SET session_token = lower(hex(randomblob(16))) WHERE session_token = ''",
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_users_session_token")
                    .table(Users::Table)
                    .col(UsersExt::SessionToken)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_users_session_token")
                    .table(Users::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Users::Table)
                    .drop_column(UsersExt::SessionToken)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Users::Table)
                    .drop_column(UsersExt::Role)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum UsersExt {
    Role,
    SessionToken,
}
