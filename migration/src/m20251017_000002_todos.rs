use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251017_000001_users::Users;

static IDX_TODOS_USER_ID: &str = "idx-todos-user_id";
static FK_TODOS_USER_ID: &str = "fk-todos-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Todos::Table)
                    .if_not_exists()
                    .col(pk_auto(Todos::Id))
                    .col(integer(Todos::UserId))
                    .col(string(Todos::Title))
                    .col(boolean(Todos::Completed).default(false))
                    .col(timestamp(Todos::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TODOS_USER_ID)
                    .table(Todos::Table)
                    .col(Todos::UserId)
                    .to_owned(),
            )
            .await?;

        // Deleting an account takes its list with it
        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TODOS_USER_ID)
                    .from_tbl(Todos::Table)
                    .from_col(Todos::UserId)
                    .to_tbl(Users::Table)
                    .to_col(Users::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TODOS_USER_ID)
                    .table(Todos::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TODOS_USER_ID)
                    .table(Todos::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Todos::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Todos {
    Table,
    Id,
    UserId,
    Title,
    Completed,
    CreatedAt,
}
